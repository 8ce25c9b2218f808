use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;

const PDF_SIGNATURE: &[u8] = b"%PDF";

/// Extracts plain text from an uploaded PDF.
/// Runs on the blocking pool; pdf-extract is CPU bound and synchronous.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    if !data.starts_with(PDF_SIGNATURE) {
        return Err(AppError::Validation(
            "Uploaded file is not a PDF document".to_string(),
        ));
    }

    let size = data.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed inputs
            if e.is_panic() {
                warn!("PDF extractor panicked");
                AppError::PdfExtraction("Document could not be read".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| {
            warn!("PDF extraction failed: {e}");
            AppError::PdfExtraction(e.to_string())
        })?;

    let text = text.trim().to_string();
    info!(bytes = size, chars = text.len(), "PDF text extracted");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_pdf_bytes() {
        let err = extract_pdf_text(Bytes::from_static(b"hello world"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_rejects_empty_upload() {
        let err = extract_pdf_text(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_truncated_pdf_is_unprocessable() {
        let err = extract_pdf_text(Bytes::from_static(b"%PDF-1.4\n%garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PdfExtraction(_)));
    }
}
