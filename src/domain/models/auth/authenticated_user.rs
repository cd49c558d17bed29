use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;
use crate::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 인증 프로바이더
    pub auth_provider: AuthProvider,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }

    /// 토큰의 사용자 ID 를 ObjectId 로 변환
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.user_id)
            .map_err(|_| AppError::AuthenticationError("토큰의 사용자 ID 형식이 올바르지 않습니다".to_string()))
    }

    /// 리소스 소유자이거나 관리자인지 확인
    pub fn ensure_can_modify(&self, owner_id: &ObjectId) -> Result<(), AppError> {
        if self.user_id == owner_id.to_hex() || self.is_admin() {
            Ok(())
        } else {
            Err(AppError::AuthorizationError(
                "작성자만 수정하거나 삭제할 수 있습니다".to_string(),
            ))
        }
    }
}

/// 인증 미들웨어가 Request Extensions 에 넣어 둔 사용자를 꺼냅니다.
///
/// 미들웨어가 Optional 모드인 라우트에서 쓰기 핸들러가 이 추출자를 받으면
/// 토큰 없는 요청은 401 JSON 응답으로 거절됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "유효한 인증 토큰이 필요합니다".to_string(),
            )
            .into())),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: id.to_string(),
            auth_provider: AuthProvider::Local,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_owner_can_modify() {
        let owner = ObjectId::new();
        let actor = user(&owner.to_hex(), &["user"]);

        assert!(actor.ensure_can_modify(&owner).is_ok());
    }

    #[test]
    fn test_other_user_is_forbidden() {
        let owner = ObjectId::new();
        let actor = user(&ObjectId::new().to_hex(), &["user"]);

        assert!(matches!(
            actor.ensure_can_modify(&owner),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_admin_can_modify_anything() {
        let actor = user(&ObjectId::new().to_hex(), &["user", "admin"]);

        assert!(actor.is_admin());
        assert!(actor.ensure_can_modify(&ObjectId::new()).is_ok());
    }

    #[test]
    fn test_object_id_rejects_garbage() {
        assert!(user("not-an-id", &[]).object_id().is_err());
    }
}
