//! 이미지 업로드 서비스
//!
//! 요청 본문 그대로를 `{MEDIA_ROOT}/uploads/{uuid}.{ext}` 에 저장합니다.
//! 허용 형식: JPEG, PNG, GIF, WebP

use std::path::PathBuf;

use actix_web::web;
use uuid::Uuid;

use crate::config::MediaConfig;
use crate::domain::dto::community::UploadResponse;
use crate::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct UploadService {
    media: MediaConfig,
}

impl UploadService {
    pub fn new(media: MediaConfig) -> Self {
        Self { media }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.media.max_upload_bytes
    }

    pub async fn store(&self, content_type: Option<&str>, bytes: web::Bytes) -> AppResult<UploadResponse> {
        let content_type = content_type.unwrap_or_default();
        let extension = image_extension(content_type).ok_or_else(|| {
            AppError::UnsupportedMediaType(format!(
                "지원하지 않는 이미지 형식입니다: {}",
                content_type
            ))
        })?;

        if bytes.is_empty() {
            return Err(AppError::ValidationError("업로드할 파일이 비어 있습니다".to_string()));
        }
        if bytes.len() > self.media.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "파일 크기는 {} 바이트 이하여야 합니다",
                self.media.max_upload_bytes
            )));
        }

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let dir = self.media.upload_dir();
        let path: PathBuf = dir.join(&file_name);
        let size = bytes.len();

        web::block(move || {
            std::fs::create_dir_all(&dir)?;
            std::fs::write(&path, &bytes)
        })
        .await
        .map_err(|e| AppError::InternalError(format!("업로드 작업 실행 실패: {}", e)))?
        .map_err(|e| AppError::InternalError(format!("파일 저장 실패: {}", e)))?;

        log::info!("이미지 업로드: {} ({} bytes)", file_name, size);

        Ok(UploadResponse {
            url: self.media.public_path(&file_name),
            content_type: content_type.to_string(),
            size,
        })
    }
}

/// `Content-Type` 에서 파일 확장자 결정 (파라미터는 무시)
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}
