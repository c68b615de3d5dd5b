//! Resume upload ingestion: PDF text extraction with plain-text passthrough.

use crate::errors::AppError;

/// Extracts text from an uploaded resume.
///
/// Bytes beginning with the `%PDF` magic go through `pdf-extract`; anything
/// else must already be UTF-8 text. Both paths reject an effectively empty
/// result rather than storing a blank base resume.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = if bytes.starts_with(b"%PDF") {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Validation(format!("Could not extract text from PDF: {e}")))?
    } else {
        String::from_utf8(bytes.to_vec())
            .map_err(|_| AppError::Validation("Upload is neither a PDF nor UTF-8 text".to_string()))?
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Uploaded resume contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract_resume_text("JANE DOE\nEXPERIENCE\n- Things".as_bytes()).unwrap();
        assert!(text.starts_with("JANE DOE"));
    }

    #[test]
    fn test_empty_upload_rejected() {
        assert!(matches!(
            extract_resume_text(b"   \n "),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert!(matches!(
            extract_resume_text(&[0xff, 0xfe, 0x00, 0x01]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_garbage_pdf_rejected() {
        assert!(matches!(
            extract_resume_text(b"%PDF-1.7 not actually a pdf"),
            Err(AppError::Validation(_))
        ));
    }
}
