//! Admission document (BECE result slip) rules.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::{CONTENT_TYPE_JPEG, CONTENT_TYPE_PDF, CONTENT_TYPE_PNG, MAX_UPLOAD_SIZE_BYTES};
use crate::errors::{AppError, AppResult};

/// Accepted document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Png,
    Jpeg,
}

impl DocumentKind {
    /// Resolve a declared content type, ignoring parameters such as `charset`.
    pub fn from_content_type(content_type: &str) -> AppResult<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            CONTENT_TYPE_PDF => Ok(DocumentKind::Pdf),
            CONTENT_TYPE_PNG => Ok(DocumentKind::Png),
            CONTENT_TYPE_JPEG => Ok(DocumentKind::Jpeg),
            _ => Err(AppError::InvalidFileType(content_type.to_string())),
        }
    }

    /// Canonical file extension
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Png => "png",
            DocumentKind::Jpeg => "jpg",
        }
    }

    /// Whether a lowercase extension names this format
    pub fn accepts_extension(&self, extension: &str) -> bool {
        match self {
            DocumentKind::Pdf => extension == "pdf",
            DocumentKind::Png => extension == "png",
            DocumentKind::Jpeg => matches!(extension, "jpg" | "jpeg"),
        }
    }
}

/// A document received from the client, not yet validated
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Filename as sent by the client, if any
    pub original_name: Option<String>,
    /// Declared content type, if any
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    /// Check size, then type, and return the resolved kind.
    pub fn validate(&self) -> AppResult<DocumentKind> {
        if self.bytes.len() > MAX_UPLOAD_SIZE_BYTES {
            return Err(AppError::FileTooLarge {
                limit: MAX_UPLOAD_SIZE_BYTES,
            });
        }

        let content_type = self
            .content_type
            .as_deref()
            .ok_or_else(|| AppError::InvalidFileType("unknown".to_string()))?;
        DocumentKind::from_content_type(content_type)
    }
}

/// Name under which a student's document is stored: `{unix-millis}-{id}.{ext}`.
///
/// The client's extension is kept only when it names the validated format
/// (`.jpeg` stays `.jpeg`); anything else gets the canonical extension. The
/// student id makes the name unique since a student holds at most one document.
pub fn stored_filename(
    uploaded_at: DateTime<Utc>,
    student_id: Uuid,
    original_name: Option<&str>,
    kind: DocumentKind,
) -> String {
    let extension = original_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| kind.accepts_extension(ext))
        .unwrap_or_else(|| kind.extension().to_string());

    format!(
        "{}-{}.{}",
        uploaded_at.timestamp_millis(),
        student_id,
        extension
    )
}
