//! 이미지 업로드 핸들러 (`POST /upload`)
//!
//! 요청 본문이 곧 이미지 파일입니다. `Content-Type` 으로 형식을 판별하고,
//! 본문을 읽는 도중 `MAX_UPLOAD_BYTES` 를 넘으면 바로 413 으로 끝냅니다.
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{post, web, HttpRequest, HttpResponse};
use futures_util::StreamExt;

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::community::UploadService;

#[post("")]
pub async fn upload_image(
    uploads: web::Data<UploadService>,
    user: AuthenticatedUser,
    req: HttpRequest,
    mut payload: web::Payload,
) -> AppResult<HttpResponse> {
    let limit = uploads.max_upload_bytes();
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|e| AppError::ValidationError(format!("요청 본문을 읽을 수 없습니다: {}", e)))?;

        if body.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "파일 크기는 {} 바이트 이하여야 합니다",
                limit
            )));
        }
        body.extend_from_slice(&chunk);
    }

    let content_type = req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let uploaded = uploads.store(content_type, body.freeze()).await?;

    log::debug!("업로드 사용자: {}", user.user_id);

    Ok(HttpResponse::Created().json(uploaded))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use actix_web::{test, App};
    use mongodb::bson::oid::ObjectId;
    use serde_json::Value;
    use uuid::Uuid;

    use super::*;
    use crate::config::{JwtConfig, MediaConfig};
    use crate::domain::entities::users::User;
    use crate::middlewares::AuthMiddleware;
    use crate::services::auth::TokenService;

    fn tokens() -> TokenService {
        TokenService::new(JwtConfig {
            secret: "upload-test".to_string(),
            expiration_hours: 1,
            refresh_expiration_days: 1,
        })
    }

    fn bearer(tokens: &TokenService) -> String {
        let mut user = User::new_local("cook@example.com".to_string(), "Cook".to_string(), "hash".to_string());
        user.id = Some(ObjectId::new());
        format!("Bearer {}", tokens.generate_access_token(&user).unwrap())
    }

    fn uploads(root: PathBuf) -> UploadService {
        UploadService::new(MediaConfig {
            root,
            public_url: "/media".to_string(),
            max_upload_bytes: 8,
        })
    }

    macro_rules! app {
        ($tokens:expr, $root:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($tokens.clone()))
                    .app_data(web::Data::new(uploads($root.clone())))
                    .service(web::scope("/upload").wrap(AuthMiddleware::required()).service(upload_image)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_upload_stores_image() {
        let root = std::env::temp_dir().join(format!("recipe-upload-handler-{}", Uuid::new_v4()));
        let tokens = tokens();
        let app = app!(tokens, root);

        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(("Authorization", bearer(&tokens)))
            .insert_header((CONTENT_TYPE, "image/webp"))
            .set_payload("RIFF")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: Value = test::read_body_json(resp).await;
        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("/media/uploads/") && url.ends_with(".webp"));

        std::fs::remove_dir_all(root).ok();
    }

    #[actix_web::test]
    async fn test_upload_limits() {
        let root = std::env::temp_dir().join(format!("recipe-upload-handler-{}", Uuid::new_v4()));
        let tokens = tokens();
        let app = app!(tokens, root);

        let anonymous = test::TestRequest::post()
            .uri("/upload")
            .insert_header((CONTENT_TYPE, "image/png"))
            .set_payload("png")
            .to_request();
        assert_eq!(test::call_service(&app, anonymous).await.status(), 401);

        let too_large = test::TestRequest::post()
            .uri("/upload")
            .insert_header(("Authorization", bearer(&tokens)))
            .insert_header((CONTENT_TYPE, "image/png"))
            .set_payload("0123456789")
            .to_request();
        assert_eq!(test::call_service(&app, too_large).await.status(), 413);

        let wrong_type = test::TestRequest::post()
            .uri("/upload")
            .insert_header(("Authorization", bearer(&tokens)))
            .insert_header((CONTENT_TYPE, "text/plain"))
            .set_payload("hi")
            .to_request();
        assert_eq!(test::call_service(&app, wrong_type).await.status(), 415);

        std::fs::remove_dir_all(root).ok();
    }
}
