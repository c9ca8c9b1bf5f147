//! Axum route handlers for the Parsing API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{DeclaredType, MIN_USABLE_TEXT_CHARS};
use crate::models::resume::NormalizedResume;
use crate::parser::parse_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub raw_text: String,
}

/// POST /api/v1/resumes/parse
///
/// Multipart upload: `file` (required), `declared_type` (optional
/// override: pdf|docx|doc|txt), `ocr_confirmed` ("true" to run OCR on a
/// scanned PDF after the first attempt came back empty), `ocr_language`
/// (recognition model code, default "eng").
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<NormalizedResume>, AppError> {
    let mut file_bytes: Option<Bytes> = None;
    let mut file_name = String::new();
    let mut content_type: Option<String> = None;
    let mut declared_override: Option<String> = None;
    let mut ocr_confirmed = false;
    let mut ocr_language = "eng".to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                file_name = field.file_name().unwrap_or_default().to_string();
                content_type = field.content_type().map(str::to_string);
                file_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?);
            }
            "declared_type" => declared_override = Some(read_text_field(field).await?),
            "ocr_confirmed" => ocr_confirmed = read_text_field(field).await? == "true",
            "ocr_language" => ocr_language = read_text_field(field).await?,
            _ => {}
        }
    }

    let bytes = file_bytes.ok_or_else(|| {
        AppError::Validation("Multipart upload must include a 'file' field".to_string())
    })?;

    let declared = match declared_override {
        Some(value) => DeclaredType::parse(&value).ok_or_else(|| {
            AppError::UnsupportedFileType(format!("Unknown declared_type '{value}'."))
        })?,
        None => DeclaredType::from_name_and_mime(&file_name, content_type.as_deref()).ok_or_else(
            || AppError::UnsupportedFileType(format!("Unrecognized file type for '{file_name}'.")),
        )?,
    };

    let raw_text = extract_with_ocr_gate(&state, &bytes, declared, ocr_confirmed, &ocr_language).await?;
    let resume = parse_resume(&raw_text);
    info!(
        "Parsed upload '{}': {} experience, {} projects, {} skills",
        file_name,
        resume.experience.len(),
        resume.projects.len(),
        resume.skills.len()
    );
    Ok(Json(resume))
}

/// POST /api/v1/resumes/parse-text
///
/// Parses already-extracted raw text, skipping the file boundary.
pub async fn handle_parse_text(
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<NormalizedResume>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }
    if request.raw_text.trim().chars().count() < MIN_USABLE_TEXT_CHARS {
        return Err(AppError::InsufficientText);
    }
    Ok(Json(parse_resume(&request.raw_text)))
}

/// Extraction cascade with the OCR confirmation gate.
///
/// The primary extractor runs first. When it yields too little text (or
/// signals a scanned PDF) the caller is offered OCR: without
/// `ocr_confirmed` the insufficient-text failure surfaces as-is, with it
/// the injected engine runs on the uploaded blob. The two boundary calls
/// are strictly sequential and nothing is retried automatically.
async fn extract_with_ocr_gate(
    state: &AppState,
    bytes: &[u8],
    declared: DeclaredType,
    ocr_confirmed: bool,
    ocr_language: &str,
) -> Result<String, AppError> {
    let attempt = state.extractor.extract(bytes, declared).await;
    let too_short = match &attempt {
        Ok(text) => text.trim().chars().count() < MIN_USABLE_TEXT_CHARS,
        Err(AppError::InsufficientText) => true,
        Err(_) => false,
    };
    if !too_short {
        return attempt;
    }

    if declared != DeclaredType::Pdf {
        // OCR only helps scanned PDFs; for anything else short text is
        // final.
        return match attempt {
            Ok(_) => Err(AppError::InsufficientText),
            Err(e) => Err(e),
        };
    }
    if !ocr_confirmed {
        return Err(AppError::InsufficientText);
    }
    if !state.ocr.is_enabled() {
        return Err(AppError::OcrUnavailable);
    }

    let recovered = state.ocr.recognize(bytes, ocr_language).await?;
    if recovered.trim().chars().count() < MIN_USABLE_TEXT_CHARS {
        return Err(AppError::OcrInsufficientText);
    }
    Ok(recovered)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map(|s| s.trim().to_string())
        .map_err(|e| AppError::Validation(format!("Malformed multipart field: {e}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::extract::ocr::{DisabledOcr, OcrEngine};
    use crate::extract::{DocumentTextExtractor, TextExtractor};

    struct FixedOcr(&'static str);

    #[async_trait::async_trait]
    impl OcrEngine for FixedOcr {
        fn is_enabled(&self) -> bool {
            true
        }
        async fn recognize(&self, _image: &[u8], _language: &str) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }
    }

    struct ShortTextExtractor;

    #[async_trait::async_trait]
    impl TextExtractor for ShortTextExtractor {
        async fn extract(&self, _bytes: &[u8], _declared: DeclaredType) -> Result<String, AppError> {
            Ok("   ".to_string())
        }
    }

    fn state_with(extractor: Arc<dyn TextExtractor>, ocr: Arc<dyn OcrEngine>) -> AppState {
        AppState {
            config: Config {
                port: 8080,
                rust_log: "info".to_string(),
                max_upload_bytes: 10 * 1024 * 1024,
            },
            extractor,
            ocr,
        }
    }

    #[tokio::test]
    async fn test_gate_passes_through_good_text() {
        let state = state_with(Arc::new(DocumentTextExtractor), Arc::new(DisabledOcr));
        let text = extract_with_ocr_gate(
            &state,
            "Jane Doe, engineer with plenty of text here".as_bytes(),
            DeclaredType::Txt,
            false,
            "eng",
        )
        .await
        .unwrap();
        assert!(text.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_short_txt_is_insufficient_without_ocr_offer() {
        let state = state_with(Arc::new(DocumentTextExtractor), Arc::new(DisabledOcr));
        let result =
            extract_with_ocr_gate(&state, b"hi", DeclaredType::Txt, true, "eng").await;
        assert!(matches!(result, Err(AppError::InsufficientText)));
    }

    #[tokio::test]
    async fn test_short_pdf_without_confirmation_offers_ocr() {
        let state = state_with(Arc::new(ShortTextExtractor), Arc::new(DisabledOcr));
        let result =
            extract_with_ocr_gate(&state, b"%PDF-", DeclaredType::Pdf, false, "eng").await;
        assert!(matches!(result, Err(AppError::InsufficientText)));
    }

    #[tokio::test]
    async fn test_confirmed_ocr_recovers_text() {
        let state = state_with(
            Arc::new(ShortTextExtractor),
            Arc::new(FixedOcr("Jane Doe recovered by optical recognition")),
        );
        let text = extract_with_ocr_gate(&state, b"%PDF-", DeclaredType::Pdf, true, "eng")
            .await
            .unwrap();
        assert!(text.contains("recovered"));
    }

    #[tokio::test]
    async fn test_confirmed_ocr_still_short_is_fatal() {
        let state = state_with(Arc::new(ShortTextExtractor), Arc::new(FixedOcr("blur")));
        let result =
            extract_with_ocr_gate(&state, b"%PDF-", DeclaredType::Pdf, true, "eng").await;
        assert!(matches!(result, Err(AppError::OcrInsufficientText)));
    }

    #[tokio::test]
    async fn test_confirmed_ocr_with_disabled_engine_is_unavailable() {
        let state = state_with(Arc::new(ShortTextExtractor), Arc::new(DisabledOcr));
        let result =
            extract_with_ocr_gate(&state, b"%PDF-", DeclaredType::Pdf, true, "eng").await;
        assert!(matches!(result, Err(AppError::OcrUnavailable)));
    }

    #[tokio::test]
    async fn test_parse_text_endpoint_rejects_empty() {
        let result = handle_parse_text(Json(ParseTextRequest {
            raw_text: "  ".to_string(),
        }))
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_parse_text_endpoint_rejects_too_short() {
        let result = handle_parse_text(Json(ParseTextRequest {
            raw_text: "too short".to_string(),
        }))
        .await;
        assert!(matches!(result, Err(AppError::InsufficientText)));
    }

    #[tokio::test]
    async fn test_parse_text_endpoint_parses() {
        let Json(resume) = handle_parse_text(Json(ParseTextRequest {
            raw_text: "Jane Doe\njane@x.com\n\nSKILLS\nRust, SQL".to_string(),
        }))
        .await
        .unwrap();
        assert_eq!(resume.personal.email, "jane@x.com");
        assert_eq!(resume.skills, vec!["Rust", "SQL"]);
    }
}
