//! # 사용자 관리 서비스 구현
//!
//! 로컬(이메일/비밀번호) 가입과 로그인, 사용자 조회를 담당합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost (`BCRYPT_COST`, 개발 4 / 운영 12)
//! - **계정 열거 방지**: 존재하지 않는 이메일, 틀린 비밀번호, 비밀번호가 없는
//!   OAuth 계정은 모두 같은 `invalid_credentials` 응답을 받습니다.
//! - **타이밍 균일화**: 이메일이 없을 때도 더미 해시로 bcrypt 검증을 한 번 수행합니다.

use std::sync::Arc;

use bcrypt::{hash, verify};

use crate::domain::dto::users::request::{LocalLoginRequest, SignupRequest};
use crate::domain::entities::users::{normalize_email, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
    /// 없는 계정으로 로그인할 때 검증에 쓰는 해시
    dummy_hash: String,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> AppResult<Self> {
        let dummy_hash = hash("dummy-password-for-timing", bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        Ok(Self {
            users,
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// 로컬 가입. 이미 쓰이는 이메일이면 400.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<User> {
        let start_time = std::time::Instant::now();
        let email = normalize_email(&request.email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::ValidationError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let display_name = request
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or(&email).to_string());

        let user = User::new_local(email, display_name, password_hash);

        // 중복 확인과 삽입 사이에 같은 이메일이 들어오면 유니크 인덱스가 막는다
        let created = self.users.create(user).await.map_err(|e| match e {
            AppError::ConflictError(msg) => AppError::ValidationError(msg),
            other => other,
        })?;

        log::info!(
            "로컬 사용자 가입: {} ({:?})",
            created.email,
            start_time.elapsed()
        );

        Ok(created)
    }

    /// 이메일/비밀번호 로그인
    pub async fn authenticate(&self, request: LocalLoginRequest) -> AppResult<User> {
        let email = normalize_email(&request.email);
        let user = self.users.find_by_email(&email).await?;

        let stored_hash = user
            .as_ref()
            .and_then(|u| u.password_hash.as_deref())
            .unwrap_or(&self.dummy_hash);

        let password_ok = verify(&request.password, stored_hash).unwrap_or(false);

        let user = match user {
            Some(user) if password_ok && user.can_authenticate_with_password() => user,
            _ => {
                log::warn!("로그인 실패: {}", email);
                return Err(AppError::InvalidCredentials);
            }
        };

        if !user.is_active {
            log::warn!("비활성 계정 로그인 시도: {}", email);
            return Err(AppError::InvalidCredentials);
        }

        self.users.record_login(&user).await?;
        log::info!("로컬 로그인 성공: {}", email);

        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 토큰 갱신용 조회. 삭제되었거나 비활성화된 계정은 401.
    pub async fn get_active_user(&self, id: &str) -> AppResult<User> {
        match self.users.find_by_id(id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(AppError::AuthenticationError(
                "사용할 수 없는 계정입니다".to_string(),
            )),
        }
    }
}
