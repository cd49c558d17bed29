//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 주 저장소로 사용하고,
//! 이메일 조회 결과를 Redis 에 10분간 캐싱합니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::caching::redis::RedisClient;
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::{database_error, is_duplicate_key_error, parse_object_id};

const COLLECTION: &str = "users";
const EMAIL_CACHE_TTL_SECS: u64 = 600;

/// 인증 계층이 사용하는 사용자 저장소
///
/// 이메일은 정규화된(소문자) 값으로 전달됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID 가 채워진 사용자를 반환합니다.
    ///
    /// 같은 이메일이 이미 있으면 `AppError::ConflictError` 입니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 마지막 로그인 시각 갱신
    async fn record_login(&self, user: &User) -> AppResult<()>;
}

/// MongoDB + Redis 사용자 리포지토리
///
/// ## 캐싱 전략
///
/// - **키 패턴**: `user:email:{email}`
/// - **TTL**: 600초
/// - 로그인 기록 등 사용자 문서가 바뀌면 해당 키를 삭제합니다.
/// - Redis 에러는 캐시 미스로 취급하고 MongoDB 결과를 그대로 씁니다.
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
    redis: RedisClient,
}

impl UserRepository {
    pub fn new(db: Database, redis: RedisClient) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION)
    }

    fn email_cache_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 1. `email` 유니크: 동시에 같은 이메일로 가입/첫 로그인이 일어나도 계정은 하나만 생긴다.
    /// 2. `created_at` 내림차순
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(database_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let cache_key = Self::email_cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(database_error)?;

        if let Some(ref user) = user {
            if let Err(e) = self
                .redis
                .set_with_expiry(&cache_key, user, EMAIL_CACHE_TTL_SECS)
                .await
            {
                log::warn!("사용자 캐시 저장 실패: {}", e);
            }
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(database_error)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
            } else {
                database_error(e)
            }
        })?;

        let id: ObjectId = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID 를 확인할 수 없습니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn record_login(&self, user: &User) -> AppResult<()> {
        let Some(id) = user.id else {
            return Err(AppError::InternalError("사용자 ID가 없습니다".to_string()));
        };
        let now = DateTime::now();

        self.collection()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "last_login_at": now, "updated_at": now } },
            )
            .await
            .map_err(database_error)?;

        let _ = self.redis.del(&Self::email_cache_key(&user.email)).await;

        Ok(())
    }
}
