//! BECE result upload handlers.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::PathRejection,
        DefaultBodyLimit, Multipart, Path, State,
    },
    http::StatusCode,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::config::{MAX_UPLOAD_SIZE_BYTES, MULTIPART_OVERHEAD_BYTES, UPLOAD_FIELD_NAME};
use crate::domain::UploadedDocument;
use crate::errors::{AppError, AppResult};
use crate::types::Success;

/// Multipart form accepted by the upload endpoint
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UploadForm {
    /// PDF, PNG or JPEG, at most 3 MB
    #[schema(value_type = String, format = Binary)]
    pub bece_result: Vec<u8>,
}

/// Upload response body (wrapped in the success envelope)
#[derive(Debug, Serialize, ToSchema)]
pub struct Uploaded {
    /// Stored filename of the document
    #[schema(example = "1718000000123-550e8400-e29b-41d4-a716-446655440000.pdf")]
    pub filename: String,
}

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload/:student_id", post(upload_bece_result))
        .layer(DefaultBodyLimit::max(
            MAX_UPLOAD_SIZE_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
}

/// Upload the BECE result document for a student (once)
#[utoipa::path(
    post,
    path = "/api/upload/{student_id}",
    tag = "Uploads",
    params(("student_id" = Uuid, Path, description = "Student identifier")),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document stored and attached", body = Uploaded),
        (status = 400, description = "Missing file, invalid type or file too large"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "A document was already uploaded")
    )
)]
pub async fn upload_bece_result(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Success<Uploaded>> {
    // A segment that is not a UUID cannot name a student
    let Path(student_id) = path.map_err(|_| AppError::not_found("Student"))?;

    // Reject before reading any of the body
    state.upload_service.ensure_accepting(student_id).await?;

    let mut multipart = multipart.map_err(|e| AppError::validation(e.body_text()))?;
    let document = read_document(&mut multipart).await?;

    let student = state.upload_service.upload(student_id, document).await?;
    let filename = student
        .bece_result_file
        .ok_or_else(|| AppError::internal("document filename missing after upload"))?;

    Ok(Success::of(Uploaded { filename }))
}

/// Read the document field chunk by chunk, aborting once it exceeds the limit.
async fn read_document(multipart: &mut Multipart) -> AppResult<UploadedDocument> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            tracing::debug!("Ignoring multipart field: {:?}", field.name());
            continue;
        }

        let original_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            if bytes.len() + chunk.len() > MAX_UPLOAD_SIZE_BYTES {
                return Err(AppError::FileTooLarge {
                    limit: MAX_UPLOAD_SIZE_BYTES,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        // Browsers send an empty part when no file was chosen
        if bytes.is_empty() && original_name.is_none() {
            continue;
        }

        return Ok(UploadedDocument {
            original_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::validation(format!(
        "No file uploaded: expected a file in the '{}' field",
        UPLOAD_FIELD_NAME
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge {
            limit: MAX_UPLOAD_SIZE_BYTES,
        }
    } else {
        AppError::BadRequest(err.body_text())
    }
}
