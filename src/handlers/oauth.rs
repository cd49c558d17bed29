//! OAuth 로그인 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/google/login` | Google 동의 화면으로 302 |
//! | `GET` | `/google/callback` | 인증 결과 JSON |
//! | `GET` | `/accounts/naver/login` | Naver 동의 화면으로 302 |
//! | `GET` | `/accounts/naver/login/callback` | 인증 결과 JSON |
//!
//! 로그인 시작 시 `oauth_session` 쿠키로 세션 ID 를 내려주고,
//! 콜백에서는 같은 쿠키로 저장된 state 를 찾습니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::domain::dto::users::request::OAuthCallbackQuery;
use crate::errors::AppResult;
use crate::services::auth::{OAuthContext, OAuthFlow, SessionCookiePolicy};

pub const SESSION_COOKIE: &str = "oauth_session";

#[get("/google/login")]
pub async fn google_login(
    req: HttpRequest,
    context: web::Data<OAuthContext>,
) -> AppResult<HttpResponse> {
    start_login(&req, &context.google, context.cookie).await
}

#[get("/google/callback")]
pub async fn google_callback(
    req: HttpRequest,
    context: web::Data<OAuthContext>,
    query: web::Query<OAuthCallbackQuery>,
) -> AppResult<HttpResponse> {
    finish_login(&req, &context.google, &query).await
}

#[get("/accounts/naver/login")]
pub async fn naver_login(
    req: HttpRequest,
    context: web::Data<OAuthContext>,
) -> AppResult<HttpResponse> {
    start_login(&req, &context.naver, context.cookie).await
}

#[get("/accounts/naver/login/callback")]
pub async fn naver_callback(
    req: HttpRequest,
    context: web::Data<OAuthContext>,
    query: web::Query<OAuthCallbackQuery>,
) -> AppResult<HttpResponse> {
    finish_login(&req, &context.naver, &query).await
}

async fn start_login(
    req: &HttpRequest,
    flow: &OAuthFlow,
    policy: SessionCookiePolicy,
) -> AppResult<HttpResponse> {
    let session_id = session_id(req).unwrap_or_else(|| Uuid::new_v4().to_string());
    let location = flow.begin(&session_id).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(session_cookie(&session_id, policy))
        .finish())
}

async fn finish_login(
    req: &HttpRequest,
    flow: &OAuthFlow,
    query: &OAuthCallbackQuery,
) -> AppResult<HttpResponse> {
    let session_id = session_id(req);
    let result = flow.complete(session_id.as_deref(), query).await?;

    let mut expired = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    expired.make_removal();

    Ok(HttpResponse::Ok().cookie(expired).json(result))
}

/// 형식이 올바른 세션 쿠키만 받아들인다
fn session_id(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
        .map(|id| id.to_string())
}

fn session_cookie(session_id: &str, policy: SessionCookiePolicy) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(policy.secure)
        .max_age(Duration::seconds(policy.max_age_secs as i64))
        .finish()
}
