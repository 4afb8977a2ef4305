//! Multipart upload handling shared by the file-based endpoints.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Form field every upload endpoint reads.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    /// PDF by extension, declared content type, or `%PDF` magic bytes.
    pub fn is_pdf(&self) -> bool {
        self.filename.to_lowercase().ends_with(".pdf")
            || self.content_type.as_deref() == Some("application/pdf")
            || self.data.starts_with(b"%PDF")
    }

    /// Decodes the upload to text. PDFs go through `pdf-extract` on the
    /// blocking pool; anything else is read as lossy UTF-8.
    pub async fn text(&self) -> Result<String, AppError> {
        if !self.is_pdf() {
            return Ok(String::from_utf8_lossy(&self.data).into_owned());
        }

        let data = self.data.clone();
        let filename = self.filename.clone();
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed documents
            if e.is_panic() {
                AppError::UnprocessableEntity(format!("Could not read PDF '{filename}'"))
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF '{filename}': {e}")))
    }
}

/// Pulls the first `file` field out of a multipart body.
pub async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::from)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(AppError::from)?;

        debug!(%filename, bytes = data.len(), "Received upload");
        return Ok(UploadedFile {
            filename,
            content_type,
            data,
        });
    }

    Err(AppError::Upload(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str, content_type: Option<&str>, data: &'static [u8]) -> UploadedFile {
        UploadedFile {
            filename: filename.to_string(),
            content_type: content_type.map(String::from),
            data: Bytes::from_static(data),
        }
    }

    #[test]
    fn test_pdf_detection() {
        assert!(upload("cv.PDF", None, b"").is_pdf());
        assert!(upload("cv", Some("application/pdf"), b"").is_pdf());
        assert!(upload("cv.bin", None, b"%PDF-1.7 ...").is_pdf());
        assert!(!upload("cv.txt", Some("text/plain"), b"React, SQL").is_pdf());
    }

    #[tokio::test]
    async fn test_plain_text_decoded_lossily() {
        let file = upload("cv.txt", None, b"Python \xff SQL");
        let text = file.text().await.unwrap();
        assert!(text.starts_with("Python "));
        assert!(text.ends_with(" SQL"));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unprocessable() {
        let file = upload("broken.pdf", None, b"not really a pdf");
        let err = file.text().await.unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)), "{err:?}");
    }
}
