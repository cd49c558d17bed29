//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고 JSON 응답을 만드는 핸들러입니다.
//! 서비스는 `main.rs` 에서 `web::Data` 로 등록된 인스턴스를 주입받습니다.
//!
//! ```text
//! Client ──► Routes/Middleware ──► Handlers (이 모듈) ──► Services ──► Repositories
//! ```
//!
//! ## 핸들러 작성 규칙
//!
//! 1. 요청 DTO 는 `validate()` 후 `AppError::ValidationError` 로 변환
//! 2. 반환 타입은 `AppResult<HttpResponse>`, 에러 응답은 [`AppError`](crate::errors::AppError) 가 만든다
//! 3. 인증이 필요한 핸들러는 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 를 인자로 받는다
//!
//! ## 모듈
//!
//! - [`oauth`] - Google/Naver 소셜 로그인 시작과 콜백
//! - [`auth`] - 로컬 가입/로그인, 현재 사용자, 토큰 갱신
//! - [`posts`], [`comments`], [`categories`] - 레시피 커뮤니티
//! - [`ingredients`] - 내 식재료 관리
//! - [`upload`] - 이미지 업로드

pub mod auth;
pub mod categories;
pub mod comments;
pub mod ingredients;
pub mod oauth;
pub mod posts;
pub mod upload;
