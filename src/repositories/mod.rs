//! # Repository Layer
//!
//! MongoDB/Redis 데이터 액세스 계층입니다.
//!
//! - [`users`] - 사용자 저장소 ([`users::UserStore`] trait + MongoDB 구현)
//! - [`oauth`] - OAuth state 저장소 ([`oauth::StateStore`] trait + Redis/메모리 구현)
//! - [`community`] - 게시글, 댓글, 카테고리, 식재료 MongoDB 리포지토리
//!
//! OAuth 플로우가 의존하는 저장소는 trait 로 분리되어 있어
//! 테스트에서 메모리 구현으로 교체할 수 있습니다.

use mongodb::bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};

use crate::errors::AppError;

pub mod community;
pub mod oauth;
pub mod users;

/// 경로 파라미터의 ID 문자열을 ObjectId 로 변환 (실패 시 400)
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

/// 유니크 인덱스 위반 (E11000) 여부
pub fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

pub(crate) fn database_error(error: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(
            parse_object_id("123"),
            Err(AppError::ValidationError(_))
        ));
    }
}
