//! Document text source: turns statement PDF bytes into the flattened text
//! stream the extraction engine consumes.
//!
//! Page text is concatenated in page order, which preserves left-to-right,
//! top-to-bottom reading order closely enough for the adjacent-token
//! patterns. Multi-column layouts are not handled here.

use lopdf::Document;
use statement_core::AnalysisError;
use tracing::{info, warn};

/// Result of attempting to extract text from a PDF.
#[derive(Debug)]
pub enum PdfContent {
    /// The PDF contains extractable text.
    Text(String),
    /// The PDF appears to be scanned / image-only.
    ScannedImage,
    /// Something went wrong during extraction.
    Error(String),
}

/// Minimum number of non-whitespace characters we expect from a
/// "real" text PDF. Below this threshold we treat it as scanned.
const MIN_TEXT_CHARS: usize = 30;

/// Extract raw text from PDF bytes, classifying unusable documents.
pub fn extract_text(pdf_bytes: &[u8]) -> PdfContent {
    let doc = match Document::load_mem(pdf_bytes) {
        Ok(d) => d,
        Err(e) => return PdfContent::Error(format!("Failed to parse PDF: {e}")),
    };

    if looks_like_scanned(&doc) {
        info!("PDF structural check: likely scanned / image-only");
        return PdfContent::ScannedImage;
    }

    match pdf_extract::extract_text_from_mem(pdf_bytes) {
        Ok(text) => {
            let meaningful: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            if meaningful.len() < MIN_TEXT_CHARS {
                info!(
                    chars = meaningful.len(),
                    "Extracted text too short; treating as scanned"
                );
                PdfContent::ScannedImage
            } else {
                info!(chars = meaningful.len(), "Text extracted successfully");
                PdfContent::Text(text)
            }
        }
        Err(e) => {
            warn!(error = %e, "pdf-extract failed; may be scanned or corrupted");
            PdfContent::ScannedImage
        }
    }
}

/// Convenience wrapper for the analysis pipeline: text, or the one failure
/// the pipeline surfaces distinctly. A document that cannot produce text is
/// a `DocumentRead` error, never an all-absent extraction.
pub fn document_text(pdf_bytes: &[u8]) -> Result<String, AnalysisError> {
    match extract_text(pdf_bytes) {
        PdfContent::Text(text) => Ok(text),
        PdfContent::ScannedImage => Err(AnalysisError::DocumentRead(
            "document is scanned or image-only; no extractable text".to_string(),
        )),
        PdfContent::Error(e) => Err(AnalysisError::DocumentRead(e)),
    }
}

/// Heuristic: inspect the PDF object tree for signs that every page is just
/// a single image with no text operators.
///
/// A page with XObject images but no Font resources is almost certainly a
/// scanned page; if at least 80% of pages look like that, the whole
/// document is treated as scanned.
fn looks_like_scanned(doc: &Document) -> bool {
    let pages = doc.get_pages();
    if pages.is_empty() {
        return false; // Can't tell; let text extraction try
    }

    let mut image_only_pages = 0;

    for (_page_num, object_id) in &pages {
        let Ok(page_obj) = doc.get_object(*object_id) else {
            continue;
        };
        let Ok(page_dict) = page_obj.as_dict() else {
            continue;
        };

        let has_fonts = page_dict
            .get(b"Resources")
            .ok()
            .and_then(|r| doc.dereference(r).ok())
            .and_then(|(_, resolved)| resolved.as_dict().ok())
            .and_then(|res| res.get(b"Font").ok())
            .and_then(|f| doc.dereference(f).ok())
            .and_then(|(_, resolved)| resolved.as_dict().ok())
            .is_some_and(|fonts| !fonts.is_empty());

        let has_images = page_dict
            .get(b"Resources")
            .ok()
            .and_then(|r| doc.dereference(r).ok())
            .and_then(|(_, resolved)| resolved.as_dict().ok())
            .and_then(|res| res.get(b"XObject").ok())
            .and_then(|x| doc.dereference(x).ok())
            .and_then(|(_, resolved)| resolved.as_dict().ok())
            .is_some_and(|xobjs| !xobjs.is_empty());

        if has_images && !has_fonts {
            image_only_pages += 1;
        }
    }

    let total = pages.len();
    let ratio = image_only_pages as f64 / total as f64;
    info!(
        total_pages = total,
        image_only = image_only_pages,
        "Scanned-page analysis"
    );

    ratio >= 0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes() {
        let result = extract_text(b"this is not a pdf");
        assert!(matches!(result, PdfContent::Error(_)));
    }

    #[test]
    fn test_garbage_bytes_map_to_document_read_error() {
        let err = document_text(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, AnalysisError::DocumentRead(_)));
    }
}
