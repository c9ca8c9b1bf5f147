//! Text extraction boundary: file bytes in, raw text out.
//!
//! The rest of the pipeline treats extraction as an injected capability
//! behind the `TextExtractor` trait; `DocumentTextExtractor` is the
//! default implementation, an ordered cascade of format strategies. All
//! failures here are boundary failures; nothing downstream ever raises.

pub mod ocr;

use std::io::{Cursor, Read};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

/// Extracted text shorter than this is unusable: either the file was
/// empty or it is a scanned image with no text layer.
pub const MIN_USABLE_TEXT_CHARS: usize = 20;

/// File type declared by the caller (extension and/or MIME type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    Pdf,
    Docx,
    /// Legacy binary `.doc`. Recognized so the user gets a conversion
    /// hint instead of a generic failure; never decoded.
    LegacyDoc,
    Txt,
}

impl DeclaredType {
    pub fn from_name_and_mime(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let extension = file_name.rsplit('.').next().unwrap_or("").to_lowercase();
        match extension.as_str() {
            "pdf" => return Some(DeclaredType::Pdf),
            "docx" => return Some(DeclaredType::Docx),
            "doc" => return Some(DeclaredType::LegacyDoc),
            "txt" | "text" | "md" => return Some(DeclaredType::Txt),
            _ => {}
        }
        match content_type.unwrap_or("") {
            "application/pdf" => Some(DeclaredType::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DeclaredType::Docx)
            }
            "application/msword" => Some(DeclaredType::LegacyDoc),
            t if t.starts_with("text/") => Some(DeclaredType::Txt),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pdf" => Some(DeclaredType::Pdf),
            "docx" => Some(DeclaredType::Docx),
            "doc" | "legacy-doc" => Some(DeclaredType::LegacyDoc),
            "txt" | "text" => Some(DeclaredType::Txt),
            _ => None,
        }
    }
}

/// The injected extraction capability.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>` so tests and future
/// backends can swap the implementation without touching handler code.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: &[u8], declared: DeclaredType) -> Result<String, AppError>;
}

/// Default extractor: per-type strategy cascade over in-memory bytes.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, bytes: &[u8], declared: DeclaredType) -> Result<String, AppError> {
        let text = match declared {
            DeclaredType::LegacyDoc => {
                return Err(AppError::UnsupportedFileType(
                    "Legacy .doc files are not supported; convert the document first.".to_string(),
                ))
            }
            DeclaredType::Pdf => extract_pdf(bytes)?,
            DeclaredType::Docx => extract_docx(bytes)?,
            DeclaredType::Txt => String::from_utf8_lossy(bytes).into_owned(),
        };
        Ok(normalize_extracted_text(&text))
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            let message = e.to_string();
            if is_likely_scanned(&message) {
                // Scanned-document signature: route to the OCR offer
                // instead of a hard failure.
                Err(AppError::InsufficientText)
            } else {
                Err(AppError::ExtractionFailed(format!(
                    "PDF text extraction failed: {message}"
                )))
            }
        }
    }
}

/// Failure signatures that mean "image-only PDF" rather than "broken PDF".
pub fn is_likely_scanned(error_message: &str) -> bool {
    let lower = error_message.to_lowercase();
    lower.contains("no selectable text") || lower.contains("scanned")
}

/// DOCX cascade: OOXML unzip first, one plain-text fallback, then fail.
fn extract_docx(bytes: &[u8]) -> Result<String, AppError> {
    match docx_document_text(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!("DOCX container parse failed, trying plain-text fallback: {err}");
            let fallback = String::from_utf8_lossy(bytes).into_owned();
            if fallback.trim().chars().count() >= MIN_USABLE_TEXT_CHARS {
                Ok(fallback)
            } else {
                Err(AppError::ExtractionFailed(format!(
                    "DOCX extraction failed: {err}"
                )))
            }
        }
    }
}

fn docx_document_text(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut file = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(document_xml_to_text(&xml))
}

static XML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Flattens WordprocessingML to plain text. Paragraph and line-break
/// elements become newlines before the tags are dropped, so the section
/// splitter still sees one logical line per paragraph.
fn document_xml_to_text(xml: &str) -> String {
    let with_breaks = xml
        .replace("</w:p>", "\n")
        .replace("<w:br/>", "\n")
        .replace("<w:tab/>", " ");
    let text = XML_TAG_RE.replace_all(&with_breaks, "");
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

/// Fixes the Unicode artifacts PDF text layers are full of: ligatures,
/// smart quotes, and non-breaking spaces. Dashes are left alone; the
/// parser relies on them as separators.
pub fn normalize_extracted_text(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace('\u{2018}', "'")
        .replace('\u{2019}', "'")
        .replace('\u{201C}', "\"")
        .replace('\u{201D}', "\"")
        .replace('\u{00A0}', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_from_extension() {
        assert_eq!(
            DeclaredType::from_name_and_mime("resume.pdf", None),
            Some(DeclaredType::Pdf)
        );
        assert_eq!(
            DeclaredType::from_name_and_mime("resume.DOCX", None),
            Some(DeclaredType::Docx)
        );
        assert_eq!(
            DeclaredType::from_name_and_mime("resume.doc", None),
            Some(DeclaredType::LegacyDoc)
        );
        assert_eq!(
            DeclaredType::from_name_and_mime("resume.txt", None),
            Some(DeclaredType::Txt)
        );
    }

    #[test]
    fn test_declared_type_from_mime_when_extension_unknown() {
        assert_eq!(
            DeclaredType::from_name_and_mime("resume", Some("application/pdf")),
            Some(DeclaredType::Pdf)
        );
        assert_eq!(
            DeclaredType::from_name_and_mime("resume.bin", Some("text/plain")),
            Some(DeclaredType::Txt)
        );
    }

    #[test]
    fn test_unknown_type_is_none() {
        assert_eq!(DeclaredType::from_name_and_mime("resume.png", None), None);
    }

    #[tokio::test]
    async fn test_legacy_doc_is_rejected_up_front() {
        let result = DocumentTextExtractor
            .extract(b"\xd0\xcf\x11\xe0", DeclaredType::LegacyDoc)
            .await;
        assert!(matches!(result, Err(AppError::UnsupportedFileType(_))));
    }

    #[tokio::test]
    async fn test_txt_bytes_pass_through() {
        let text = DocumentTextExtractor
            .extract("Jane Doe\njane@x.com".as_bytes(), DeclaredType::Txt)
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe\njane@x.com");
    }

    #[tokio::test]
    async fn test_docx_falls_back_to_plain_text() {
        // Not a zip archive, but long enough to survive as plain text.
        let bytes = "Jane Doe, engineer, twenty years of experience.".as_bytes();
        let text = DocumentTextExtractor
            .extract(bytes, DeclaredType::Docx)
            .await
            .unwrap();
        assert!(text.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_docx_garbage_fails_extraction() {
        let result = DocumentTextExtractor
            .extract(&[0u8, 1, 2, 3], DeclaredType::Docx)
            .await;
        assert!(matches!(result, Err(AppError::ExtractionFailed(_))));
    }

    #[test]
    fn test_document_xml_paragraphs_become_lines() {
        let xml = r#"<w:document><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p><w:r><w:t>Engineer &amp; Writer</w:t></w:r></w:p></w:document>"#;
        let text = document_xml_to_text(xml);
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines, vec!["Jane Doe", "Engineer & Writer"]);
    }

    #[test]
    fn test_scanned_signature_detection() {
        assert!(is_likely_scanned("page contains no selectable text"));
        assert!(is_likely_scanned("document appears to be SCANNED"));
        assert!(!is_likely_scanned("invalid xref table"));
    }

    #[test]
    fn test_ligatures_and_nbsp_normalized() {
        assert_eq!(normalize_extracted_text("e\u{FB03}cient\u{00A0}work"), "efficient work");
    }

    #[test]
    fn test_dashes_survive_normalization() {
        assert_eq!(normalize_extracted_text("2021 – 2023 — Acme"), "2021 – 2023 — Acme");
    }
}
