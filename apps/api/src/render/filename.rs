//! Deterministic download filenames: `Prefix_JobTitle_Company_YYYY-MM-DD.ext`.

use chrono::{NaiveDate, Utc};

use crate::render::DocumentFormat;

/// Which document a filename is being generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    InterviewPrep,
}

impl DocumentKind {
    pub fn filename_prefix(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "Cover_Letter",
            DocumentKind::InterviewPrep => "Interview_Prep",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover_letter",
            DocumentKind::InterviewPrep => "interview_prep",
        }
    }
}

/// Replaces non-alphanumeric runs with a single underscore and trims
/// underscores at both ends, so "Acme, Inc." becomes "Acme_Inc".
fn sanitize(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut last_was_separator = true;
    for c in part.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_was_separator = false;
        } else if !last_was_separator {
            out.push('_');
            last_was_separator = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

pub fn generate_filename(
    kind: DocumentKind,
    job_title: Option<&str>,
    company_name: Option<&str>,
    format: DocumentFormat,
) -> String {
    filename_for_date(kind, job_title, company_name, format, Utc::now().date_naive())
}

fn filename_for_date(
    kind: DocumentKind,
    job_title: Option<&str>,
    company_name: Option<&str>,
    format: DocumentFormat,
    date: NaiveDate,
) -> String {
    let mut parts: Vec<String> = vec![kind.filename_prefix().to_string()];

    for value in [job_title, company_name].into_iter().flatten() {
        let sanitized = sanitize(value);
        if !sanitized.is_empty() {
            parts.push(sanitized);
        }
    }

    parts.push(date.format("%Y-%m-%d").to_string());
    format!("{}.{}", parts.join("_"), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_full_resume_filename() {
        let name = filename_for_date(
            DocumentKind::Resume,
            Some("Backend Engineer"),
            Some("Acme Corp"),
            DocumentFormat::Pdf,
            date(),
        );
        assert_eq!(name, "Resume_Backend_Engineer_Acme_Corp_2025-03-14.pdf");
    }

    #[test]
    fn test_punctuation_collapses_to_single_underscore() {
        let name = filename_for_date(
            DocumentKind::Resume,
            Some("Sr. Engineer (L5)"),
            Some("Acme, Inc."),
            DocumentFormat::Docx,
            date(),
        );
        assert_eq!(name, "Resume_Sr_Engineer_L5_Acme_Inc_2025-03-14.docx");
    }

    #[test]
    fn test_missing_parts_are_skipped() {
        let name = filename_for_date(DocumentKind::Resume, None, None, DocumentFormat::Pdf, date());
        assert_eq!(name, "Resume_2025-03-14.pdf");

        let name = filename_for_date(
            DocumentKind::Resume,
            Some("!!!"),
            None,
            DocumentFormat::Pdf,
            date(),
        );
        assert_eq!(name, "Resume_2025-03-14.pdf");
    }

    #[test]
    fn test_cover_letter_prefix() {
        let name = filename_for_date(
            DocumentKind::CoverLetter,
            Some("PM"),
            None,
            DocumentFormat::Pdf,
            date(),
        );
        assert_eq!(name, "Cover_Letter_PM_2025-03-14.pdf");
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(DocumentKind::Resume.as_str(), "resume");
        assert_eq!(DocumentKind::CoverLetter.as_str(), "cover_letter");
        assert_eq!(DocumentKind::InterviewPrep.as_str(), "interview_prep");
    }
}
