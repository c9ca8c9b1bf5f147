use std::sync::Arc;

use crate::config::Config;
use crate::extract::ocr::OcrEngine;
use crate::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extraction capability. Default: the in-process
    /// PDF/DOCX/TXT cascade.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable OCR capability, consulted only behind the explicit
    /// caller confirmation gate. Default: disabled.
    pub ocr: Arc<dyn OcrEngine>,
}
