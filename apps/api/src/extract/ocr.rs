//! OCR capability boundary.
//!
//! OCR is expensive and runs only after an explicit caller confirmation,
//! so the engine is injected rather than wired in. The default engine is
//! disabled and reports itself unavailable; deployments with an OCR
//! sidecar provide their own implementation.

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    fn is_enabled(&self) -> bool;

    /// Recognizes text in an image blob. `language` is a recognition
    /// model code such as "eng".
    async fn recognize(&self, image: &[u8], language: &str) -> Result<String, AppError>;
}

/// Placeholder engine for deployments without an OCR backend.
pub struct DisabledOcr;

#[async_trait]
impl OcrEngine for DisabledOcr {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn recognize(&self, _image: &[u8], _language: &str) -> Result<String, AppError> {
        Err(AppError::OcrUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_engine_reports_unavailable() {
        let engine = DisabledOcr;
        assert!(!engine.is_enabled());
        let result = engine.recognize(&[1, 2, 3], "eng").await;
        assert!(matches!(result, Err(AppError::OcrUnavailable)));
    }
}
