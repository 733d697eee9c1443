//! Handler for reference file uploads.

use axum::extract::{Multipart, State};
use axum::Json;
use printspec_core::upload::DEFAULT_UPLOAD_NAME;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// Response body for `POST /api/upload`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/upload
///
/// Accepts a multipart form with a `file` file part (one carrying a
/// `filename`). Other fields, including text parts named `file`, are ignored.
/// The bytes are stored verbatim and the URL they are served from is
/// returned.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // A plain text part named `file` is not a file.
        let Some(filename) = field.file_name() else {
            continue;
        };
        let filename = if filename.is_empty() {
            DEFAULT_UPLOAD_NAME.to_string()
        } else {
            filename.to_string()
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file_data = Some((filename, data.to_vec()));
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    let stored = state.uploads.store(&data, &filename).await?;
    tracing::info!(
        original = %filename,
        stored = %stored.filename,
        size_bytes = stored.size_bytes,
        "Upload stored"
    );

    Ok(Json(UploadResponse { url: stored.url }))
}
