//! Document renderer: shared line classification feeding PDF and DOCX backends.

pub mod classify;
pub mod docx;
pub mod filename;
pub mod handlers;
pub mod metrics;
pub mod pdf;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::templates::ResumeTemplate;

/// Output format for the download endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// Renders `content` to the requested format using the template's styling.
///
/// Both backends consume the same classification pass, so a line styled as a
/// section header in the PDF is styled as a section header in the DOCX.
pub fn render_document(
    content: &str,
    template: &ResumeTemplate,
    format: DocumentFormat,
) -> Result<Vec<u8>, AppError> {
    let classified = classify::classify_document(content, template.style.strip_markdown);
    match format {
        DocumentFormat::Pdf => pdf::render_pdf(&classified, &template.style),
        DocumentFormat::Docx => docx::render_docx(&classified, &template.style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::default_template;

    const SAMPLE: &str = "JANE DOE\njane@doe.dev | +1 555 0100\n\nPROFESSIONAL SUMMARY\nEngineer with a decade of backend experience.\n- Led a team of five";

    #[test]
    fn test_render_pdf_produces_pdf_magic() {
        let bytes = render_document(SAMPLE, default_template(), DocumentFormat::Pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_docx_produces_zip_magic() {
        let bytes = render_document(SAMPLE, default_template(), DocumentFormat::Docx).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(DocumentFormat::Pdf.extension(), "pdf");
        assert_eq!(DocumentFormat::Docx.extension(), "docx");
        assert_eq!(DocumentFormat::Pdf.content_type(), "application/pdf");
        assert!(DocumentFormat::Docx.content_type().contains("wordprocessingml"));
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let f: DocumentFormat = serde_json::from_str("\"pdf\"").unwrap();
        assert_eq!(f, DocumentFormat::Pdf);
        let f: DocumentFormat = serde_json::from_str("\"docx\"").unwrap();
        assert_eq!(f, DocumentFormat::Docx);
    }
}
