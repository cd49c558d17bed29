use serde::Serialize;

/// `POST /upload` 응답
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// 게시글 `image_url` 에 그대로 넣을 수 있는 공개 경로
    pub url: String,
    pub content_type: String,
    pub size: usize,
}
