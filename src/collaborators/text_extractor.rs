// src/collaborators/text_extractor.rs
use thiserror::Error;
use tracing::info;

use crate::utils::get_file_extension;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("document is not valid UTF-8 text")]
    InvalidEncoding,
}

/// Turns binary document content into plain text the engine can score.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractError>;
}

/// Extractor for PDF uploads plus plain-text passthrough.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
        match get_file_extension(filename).as_deref() {
            Some("pdf") => {
                info!("Extracting text from PDF: {}", filename);
                pdf_extract::extract_text_from_mem(bytes)
                    .map_err(|e| ExtractError::Extraction(e.to_string()))
            }
            Some("txt") | Some("md") => String::from_utf8(bytes.to_vec())
                .map_err(|_| ExtractError::InvalidEncoding),
            other => Err(ExtractError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let extractor = PdfTextExtractor;
        let text = extractor
            .extract_text(b"Python developer", "resume.txt")
            .unwrap();
        assert_eq!(text, "Python developer");
    }

    #[test]
    fn unknown_format_is_rejected() {
        let extractor = PdfTextExtractor;
        let err = extractor.extract_text(b"...", "resume.docx").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_extension_is_rejected() {
        let extractor = PdfTextExtractor;
        assert!(extractor.extract_text(b"...", "resume").is_err());
    }

    #[test]
    fn broken_pdf_reports_extraction_error() {
        let extractor = PdfTextExtractor;
        let err = extractor.extract_text(b"not a pdf", "resume.pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Extraction(_)));
    }

    #[test]
    fn invalid_utf8_text_is_rejected() {
        let extractor = PdfTextExtractor;
        let err = extractor
            .extract_text(&[0xff, 0xfe, 0x00], "resume.txt")
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidEncoding));
    }
}
