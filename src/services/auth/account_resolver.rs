//! 프로바이더 프로필 → 애플리케이션 계정 연결
//!
//! 이메일(정규화된 값)이 유일한 연결 키입니다. 같은 이메일로 다시 로그인하면
//! 어느 프로바이더를 거쳤든 기존 계정으로 연결되고, 계정이 하나만 존재합니다.

use std::sync::Arc;

use crate::config::AuthProvider;
use crate::domain::entities::users::{normalize_email, OAuthData, User};
use crate::domain::models::oauth::ProviderProfile;
use crate::errors::{AppError, AppResult, OAuthError};
use crate::repositories::users::UserStore;

#[derive(Clone)]
pub struct AccountResolver {
    users: Arc<dyn UserStore>,
}

impl AccountResolver {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 이메일로 계정을 찾고, 없으면 만든다.
    ///
    /// 동시에 들어온 첫 로그인 두 건이 모두 생성을 시도하면 유니크 인덱스가
    /// 한 건을 막고, 진 쪽은 이긴 쪽이 만든 계정을 다시 읽어 쓴다.
    pub async fn resolve(&self, provider: AuthProvider, profile: &ProviderProfile) -> AppResult<User> {
        let email = normalize_email(&profile.email);

        if let Some(user) = self.users.find_by_email(&email).await? {
            return self.sign_in(user).await;
        }

        let user = User::new_oauth(
            email.clone(),
            display_name(profile, &email),
            provider,
            OAuthData {
                provider_user_id: profile.provider_user_id.clone(),
                profile_image_url: profile.picture.clone(),
            },
        );

        match self.users.create(user).await {
            Ok(created) => {
                log::info!("새 {} 사용자 등록: {}", provider, email);
                Ok(created)
            }
            Err(AppError::ConflictError(_)) => {
                log::info!("동시 가입 감지, 기존 계정 재조회: {}", email);
                match self.users.find_by_email(&email).await? {
                    Some(user) => self.sign_in(user).await,
                    None => Err(OAuthError::IdentityResolutionFailure(format!(
                        "계정을 만들거나 찾을 수 없습니다: {}",
                        email
                    ))
                    .into()),
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_in(&self, user: User) -> AppResult<User> {
        if !user.is_active {
            log::warn!("비활성 계정 OAuth 로그인 시도: {}", user.email);
            return Err(OAuthError::IdentityResolutionFailure(
                "비활성화된 계정입니다".to_string(),
            )
            .into());
        }

        self.users.record_login(&user).await?;
        Ok(user)
    }
}

/// 프로필 이름이 없으면 이메일의 로컬 파트를 표시 이름으로 쓴다
fn display_name(profile: &ProviderProfile, email: &str) -> String {
    profile
        .name
        .clone()
        .unwrap_or_else(|| email.split('@').next().unwrap_or(email).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::memory::InMemoryUserStore;

    fn profile(email: &str, name: Option<&str>) -> ProviderProfile {
        ProviderProfile {
            email: email.to_string(),
            name: name.map(str::to_string),
            provider_user_id: Some("p-1".to_string()),
            picture: None,
        }
    }

    #[actix_web::test]
    async fn test_first_login_creates_account() {
        let store = Arc::new(InMemoryUserStore::default());
        let resolver = AccountResolver::new(store.clone());

        let user = resolver
            .resolve(AuthProvider::Google, &profile("x@y.com", Some("X")))
            .await
            .unwrap();

        assert_eq!(user.email, "x@y.com");
        assert_eq!(user.display_name, "X");
        assert_eq!(user.auth_provider, AuthProvider::Google);
        assert!(user.is_email_verified);
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_repeated_logins_resolve_to_one_account() {
        let store = Arc::new(InMemoryUserStore::default());
        let resolver = AccountResolver::new(store.clone());

        let first = resolver
            .resolve(AuthProvider::Google, &profile("x@y.com", None))
            .await
            .unwrap();
        let second = resolver
            .resolve(AuthProvider::Naver, &profile("X@Y.com ", None))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_missing_name_falls_back_to_local_part() {
        let resolver = AccountResolver::new(Arc::new(InMemoryUserStore::default()));

        let user = resolver
            .resolve(AuthProvider::Naver, &profile("cook@example.com", None))
            .await
            .unwrap();

        assert_eq!(user.display_name, "cook");
    }

    #[actix_web::test]
    async fn test_inactive_account_is_rejected() {
        let store = Arc::new(InMemoryUserStore::default());
        store.insert(User::new_local(
            "x@y.com".to_string(),
            "X".to_string(),
            "hash".to_string(),
        ));
        store.deactivate("x@y.com");

        let result = AccountResolver::new(store)
            .resolve(AuthProvider::Google, &profile("x@y.com", None))
            .await;

        assert!(matches!(
            result,
            Err(AppError::OAuth(OAuthError::IdentityResolutionFailure(_)))
        ));
    }

    #[actix_web::test]
    async fn test_existing_local_account_is_reused() {
        let store = Arc::new(InMemoryUserStore::default());
        let local = store.insert(User::new_local(
            "x@y.com".to_string(),
            "X".to_string(),
            "hash".to_string(),
        ));

        let user = AccountResolver::new(store.clone())
            .resolve(AuthProvider::Google, &profile("x@y.com", None))
            .await
            .unwrap();

        assert_eq!(user.id, local.id);
        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert_eq!(store.len(), 1);
    }
}
