//! 미들웨어 모듈
//!
//! # 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer` 액세스 토큰 검증
//! - 검증된 사용자 정보를 request extension 에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! `TokenService` 는 `App::app_data(web::Data<TokenService>)` 로 등록되어 있어야 합니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(web::Data::new(token_service))
//!     .service(
//!         web::scope("/ingredients")
//!             .wrap(AuthMiddleware::required()) // 로그인 필수
//!             .service(ingredients::list_ingredients)
//!     )
//!     .service(
//!         web::scope("/posts")
//!             .wrap(AuthMiddleware::optional()) // 읽기는 익명 허용
//!             .service(posts::list_posts)
//!     )
//! ```

mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
