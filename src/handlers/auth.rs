//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 계정과 애플리케이션 토큰을 다루는 엔드포인트입니다.
//!
//! - `POST /api/signup` - 로컬 가입 (201)
//! - `POST /api/login` - 로컬 로그인, 토큰 쌍 발급
//! - `GET /api/me` - 현재 사용자 (Bearer 토큰 필요)
//! - `POST /api/token/refresh` - 리프레시 토큰으로 새 토큰 쌍 발급
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::{LocalLoginRequest, RefreshTokenRequest, SignupRequest};
use crate::domain::dto::users::response::{LoginResponse, SignupResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 로컬 가입 핸들러
///
/// # Endpoint
/// `POST /api/signup`
#[post("/signup")]
pub async fn signup(
    users: web::Data<UserService>,
    payload: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = users.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(SignupResponse {
        message: "Signup successful".to_string(),
        user: UserResponse::from(user),
    }))
}

/// 로컬 로그인 핸들러
///
/// 없는 이메일, 틀린 비밀번호, 비밀번호가 없는 소셜 계정 모두 같은 401 을 받는다.
///
/// # Endpoint
/// `POST /api/login`
#[post("/login")]
pub async fn login(
    users: web::Data<UserService>,
    tokens: web::Data<TokenService>,
    payload: web::Json<LocalLoginRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = users.authenticate(payload.into_inner()).await?;
    let token_pair = tokens.generate_token_pair(&user)?;

    log::info!("로컬 로그인 성공: {}", user.email);

    Ok(HttpResponse::Ok().json(LoginResponse::new(UserResponse::from(user), token_pair)))
}

/// # Endpoint
/// `GET /api/me`
#[get("/me")]
pub async fn me(
    users: web::Data<UserService>,
    current: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let user = users.get_user(&current.user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 리프레시 토큰으로 새 토큰 쌍 발급
///
/// 액세스 토큰을 넣으면 거절되며, 비활성화된 계정은 갱신할 수 없다.
///
/// # Endpoint
/// `POST /api/token/refresh`
#[post("/token/refresh")]
pub async fn refresh_token(
    users: web::Data<UserService>,
    tokens: web::Data<TokenService>,
    payload: web::Json<RefreshTokenRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let claims = tokens.verify_refresh_token(&payload.refresh_token)?;
    let user = users.get_active_user(&claims.sub).await?;
    let token_pair = tokens.generate_token_pair(&user)?;

    log::debug!("토큰 갱신: 사용자 ID {}", claims.sub);

    Ok(HttpResponse::Ok().json(token_pair))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::config::JwtConfig;
    use crate::repositories::users::memory::InMemoryUserStore;
    use crate::routes::configure_account_routes;

    fn services() -> (UserService, TokenService, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::default());
        let users = UserService::new(store.clone(), 4).unwrap();
        let tokens = TokenService::new(JwtConfig {
            secret: "auth-handler-test".to_string(),
            expiration_hours: 1,
            refresh_expiration_days: 7,
        });
        (users, tokens, store)
    }

    macro_rules! app {
        ($users:expr, $tokens:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($users.clone()))
                    .app_data(web::Data::new($tokens.clone()))
                    .configure(configure_account_routes),
            )
            .await
        };
    }

    fn post_json(uri: &str, body: Value) -> actix_web::test::TestRequest {
        test::TestRequest::post().uri(uri).set_json(body)
    }

    #[actix_web::test]
    async fn test_signup_then_login() {
        let (users, tokens, store) = services();
        let app = app!(users, tokens);

        let resp = test::call_service(
            &app,
            post_json(
                "/api/signup",
                json!({"email": "Cook@Example.com", "password": "password123", "name": "Cook"}),
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["email"], "cook@example.com");
        assert!(body["user"].get("password_hash").is_none());

        let resp = test::call_service(
            &app,
            post_json("/api/login", json!({"email": "cook@example.com", "password": "password123"})).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["token_type"], "Bearer");
        assert!(body["refresh_token"].as_str().is_some());
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_signup_validation_and_duplicates() {
        let (users, tokens, _) = services();
        let app = app!(users, tokens);

        let resp = test::call_service(
            &app,
            post_json("/api/signup", json!({"email": "cook@example.com", "password": "short"})).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let signup_body = json!({"email": "cook@example.com", "password": "password123"});
        let first = test::call_service(&app, post_json("/api/signup", signup_body.clone()).to_request()).await;
        let second = test::call_service(&app, post_json("/api/signup", signup_body).to_request()).await;
        assert_eq!(first.status(), 201);
        assert_eq!(second.status(), 400);
    }

    #[actix_web::test]
    async fn test_login_failures_are_uniform() {
        let (users, tokens, _) = services();
        let app = app!(users, tokens);

        test::call_service(
            &app,
            post_json("/api/signup", json!({"email": "cook@example.com", "password": "password123"})).to_request(),
        )
        .await;

        let wrong_password = test::call_service(
            &app,
            post_json("/api/login", json!({"email": "cook@example.com", "password": "wrong-password"})).to_request(),
        )
        .await;
        let unknown_email = test::call_service(
            &app,
            post_json("/api/login", json!({"email": "nobody@example.com", "password": "password123"})).to_request(),
        )
        .await;

        assert_eq!(wrong_password.status(), 401);
        assert_eq!(unknown_email.status(), 401);

        let a: Value = test::read_body_json(wrong_password).await;
        let b: Value = test::read_body_json(unknown_email).await;
        assert_eq!(a, b);
        assert_eq!(a["error"], "invalid_credentials");
    }

    #[actix_web::test]
    async fn test_login_rejects_malformed_body() {
        let (users, tokens, _) = services();
        let app = app!(users, tokens);

        let resp = test::call_service(
            &app,
            post_json("/api/login", json!({"email": "not-an-email", "password": "x"})).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let resp = test::call_service(
            &app,
            post_json("/api/login", json!({"email": "cook@example.com"})).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_me_and_refresh() {
        let (users, tokens, _) = services();
        let app = app!(users, tokens);

        test::call_service(
            &app,
            post_json("/api/signup", json!({"email": "cook@example.com", "password": "password123"})).to_request(),
        )
        .await;
        let resp = test::call_service(
            &app,
            post_json("/api/login", json!({"email": "cook@example.com", "password": "password123"})).to_request(),
        )
        .await;
        let login_body: Value = test::read_body_json(resp).await;
        let access = login_body["access_token"].as_str().unwrap().to_string();
        let refresh = login_body["refresh_token"].as_str().unwrap().to_string();

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/me").to_request()).await;
        assert_eq!(resp.status(), 401);

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let me_body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me_body["email"], "cook@example.com");

        let resp = test::call_service(
            &app,
            post_json("/api/token/refresh", json!({"refresh_token": access})).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 401);

        let resp = test::call_service(
            &app,
            post_json("/api/token/refresh", json!({"refresh_token": refresh})).to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let pair: Value = test::read_body_json(resp).await;
        assert!(pair["access_token"].as_str().is_some());
        assert_eq!(pair["token_type"], "Bearer");
    }
}
