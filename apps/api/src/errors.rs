use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only boundary failures live here. Section- and field-level extraction
/// never errors: the heuristic extractors default to empty values instead,
/// so everything downstream of "we have raw text" always produces a record.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Could not extract usable text from the file")]
    InsufficientText,

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("OCR produced insufficient text")]
    OcrInsufficientText,

    #[error("OCR is not available")]
    OcrUnavailable,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFileType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FILE_TYPE",
                format!("{msg} Please upload a PDF, DOCX, or TXT file."),
            ),
            AppError::InsufficientText => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_TEXT",
                "Could not extract text from the file. Try a text-based PDF (not a scanned \
                 image) or a TXT export, or re-submit with ocr_confirmed=true to run OCR."
                    .to_string(),
            ),
            AppError::ExtractionFailed(msg) => {
                tracing::warn!("Extraction failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    msg.clone(),
                )
            }
            AppError::OcrInsufficientText => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "OCR_INSUFFICIENT_TEXT",
                "OCR could not recover enough text. Try a clearer scan or convert the resume \
                 to PDF, DOCX, or TXT."
                    .to_string(),
            ),
            AppError::OcrUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "OCR_UNAVAILABLE",
                "OCR is not enabled on this server.".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_maps_to_415() {
        let response = AppError::UnsupportedFileType("Legacy .doc is not supported.".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_insufficient_text_maps_to_422() {
        let response = AppError::InsufficientText.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_ocr_unavailable_maps_to_503() {
        let response = AppError::OcrUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("missing field".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
