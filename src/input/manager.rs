//! Input manager routing uploads to the matching extractor

use crate::error::{Result, AtsMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{TextExtractor, PdfExtractor, DocxExtractor};
use log::info;

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extract plain text from an uploaded document, routed by filename suffix.
    pub fn extract_text(&self, filename: &str, bytes: &[u8]) -> Result<String> {
        let text = match FileType::from_filename(filename) {
            FileType::Pdf => {
                info!("Extracting text from PDF upload: {}", filename);
                PdfExtractor.extract(bytes)?
            }
            FileType::Docx => {
                info!("Extracting text from docx upload: {}", filename);
                DocxExtractor.extract(bytes)?
            }
            FileType::Unknown => {
                return Err(AtsMatcherError::UnsupportedFormat(format!(
                    "Unsupported upload type for: {}",
                    filename
                )));
            }
        };

        if text.trim().is_empty() {
            return Err(AtsMatcherError::Extraction(format!(
                "Document contained no extractable text: {}",
                filename
            )));
        }

        Ok(text)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
