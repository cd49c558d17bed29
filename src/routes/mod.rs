//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 묶어 등록합니다. `main.rs` 에서 `NormalizePath::trim` 을
//! 감싸므로 모든 경로는 끝의 `/` 유무와 상관없이 접근됩니다.
//!
//! # Auth Middleware Usage
//!
//! ## 읽기 공개, 쓰기 인증 (게시글, 댓글, 카테고리)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/posts")
//!         .wrap(AuthMiddleware::optional())   // 토큰이 있으면 검증해서 사용자 주입
//!         .service(handlers::posts::list_posts)   // 익명 허용
//!         .service(handlers::posts::create_post)  // AuthenticatedUser 추출자가 401 처리
//! );
//! ```
//!
//! ## 전체 인증 필요 (식재료, 업로드)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/ingredients")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::ingredients::list_ingredients)
//! );
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 본문/쿼리 역직렬화 실패도 `{error, message}` 형태로 응답
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    cfg.service(health_check);

    configure_oauth_routes(cfg);
    configure_account_routes(cfg);
    configure_community_routes(cfg);
}

/// 소셜 로그인 라우트
///
/// 프로바이더에 등록된 콜백 주소와 같아야 하므로 경로가 고정되어 있습니다.
///
/// - `GET /google/login`, `GET /google/callback`
/// - `GET /accounts/naver/login`, `GET /accounts/naver/login/callback`
pub fn configure_oauth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::oauth::google_login)
        .service(handlers::oauth::google_callback)
        .service(handlers::oauth::naver_login)
        .service(handlers::oauth::naver_callback);
}

/// 로컬 계정과 토큰 라우트 (`/api`)
///
/// ```bash
/// curl -X POST http://localhost:8000/api/login/ \
///   -H "Content-Type: application/json" \
///   -d '{"email":"cook@example.com","password":"password123"}'
/// ```
pub fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            .service(handlers::auth::me)
            .service(handlers::auth::refresh_token),
    );
}

/// 레시피 커뮤니티 라우트
fn configure_community_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .wrap(AuthMiddleware::optional())
            .service(handlers::categories::list_categories)
            .service(handlers::categories::create_category),
    );

    cfg.service(
        web::scope("/posts")
            .wrap(AuthMiddleware::optional())
            .service(handlers::posts::list_posts)
            .service(handlers::posts::create_post)
            .service(handlers::comments::list_post_comments)
            .service(handlers::comments::create_comment)
            .service(handlers::posts::get_post)
            .service(handlers::posts::update_post)
            .service(handlers::posts::delete_post),
    );

    cfg.service(
        web::scope("/comments")
            .wrap(AuthMiddleware::optional())
            .service(handlers::comments::get_comment)
            .service(handlers::comments::update_comment)
            .service(handlers::comments::delete_comment),
    );

    cfg.service(
        web::scope("/ingredients")
            .wrap(AuthMiddleware::required())
            .service(handlers::ingredients::list_ingredients)
            .service(handlers::ingredients::create_ingredient)
            .service(handlers::ingredients::get_ingredient)
            .service(handlers::ingredients::update_ingredient)
            .service(handlers::ingredients::delete_ingredient),
    );

    cfg.service(
        web::scope("/upload")
            .wrap(AuthMiddleware::required())
            .service(handlers::upload::upload_image),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {"status": "healthy", "service": "recipe_community_backend", "version": "0.1.0", "timestamp": "..."}
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::config::{JwtConfig, MediaConfig};
    use crate::db::Database;
    use crate::repositories::community::{
        CategoryRepository, CommentRepository, IngredientRepository, PostRepository,
    };
    use crate::repositories::users::memory::InMemoryUserStore;
    use crate::services::auth::TokenService;
    use crate::services::community::{
        CategoryService, CommentService, IngredientService, PostService, UploadService,
    };
    use crate::services::users::UserService;

    /// 데이터베이스에 닿기 전에 끝나는 요청만 보낸다
    macro_rules! community_app {
        () => {{
            let db = Database::unverified("mongodb://127.0.0.1:1", "routes_test").await;
            let posts = PostRepository::new(db.clone());
            let comments = CommentRepository::new(db.clone());
            let categories = CategoryRepository::new(db.clone());

            test::init_service(
                App::new()
                    .app_data(web::Data::new(TokenService::new(JwtConfig {
                        secret: "routes-test".to_string(),
                        expiration_hours: 1,
                        refresh_expiration_days: 1,
                    })))
                    .app_data(web::Data::new(
                        UserService::new(Arc::new(InMemoryUserStore::default()), 4).unwrap(),
                    ))
                    .app_data(web::Data::new(PostService::new(
                        posts.clone(),
                        comments.clone(),
                        categories.clone(),
                    )))
                    .app_data(web::Data::new(CommentService::new(comments, posts)))
                    .app_data(web::Data::new(CategoryService::new(categories)))
                    .app_data(web::Data::new(IngredientService::new(IngredientRepository::new(db))))
                    .app_data(web::Data::new(UploadService::new(MediaConfig {
                        root: std::env::temp_dir(),
                        public_url: "/media".to_string(),
                        max_upload_bytes: 16,
                    })))
                    .configure(configure_all_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_anonymous_writes_are_rejected() {
        let app = community_app!();

        for (uri, body) in [
            ("/posts", r#"{"title":"김치찌개","content":"..."}"#),
            ("/categories", r#"{"name":"한식"}"#),
            ("/ingredients", r#"{"name":"두부"}"#),
        ] {
            let req = test::TestRequest::post()
                .uri(uri)
                .insert_header(("content-type", "application/json"))
                .set_payload(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401, "{}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "authentication_required");
        }
    }

    #[actix_web::test]
    async fn test_reads_on_required_scopes_need_token() {
        let app = community_app!();

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ingredients").to_request()).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_malformed_object_id_is_bad_request() {
        let app = community_app!();

        for uri in ["/posts/not-an-id", "/comments/123", "/posts/zzz/comments"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), 400, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_body_uses_error_shape() {
        let app = community_app!();

        let req = test::TestRequest::post()
            .uri("/api/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }
}
