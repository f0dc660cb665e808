//! File upload handler.

use crate::types::{AppError, Result, UploadForm};
use axum::extract::Multipart;

/// Report the uploaded file's name and content type.
///
/// Only the metadata is read; the file bytes are discarded without
/// processing.
#[utoipa::path(
    post,
    path = "/api/MyBestApp/FileUploadExample",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload metadata echoed back", body = String),
        (status = 400, description = "Missing or malformed file field")
    ),
    tag = "mybestapp"
)]
pub async fn file_upload_example(mut multipart: Multipart) -> Result<String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::InvalidInput(format!("Malformed multipart request: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        tracing::info!(
            file = %file_name,
            content_type = %content_type,
            "File upload received"
        );

        return Ok(format!("Received: {}, {}", file_name, content_type));
    }

    Err(AppError::InvalidInput("File field required".to_string()))
}
