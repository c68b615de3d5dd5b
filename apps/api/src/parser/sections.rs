//! Section Parser — splits raw resume text into named sections.
//!
//! A line is a header iff its trimmed form has no lowercase letters (equals
//! its own uppercase form), is 3–49 characters long, carries no bullet marker
//! (`•` or `-`) and does not start with a digit. Everything between two
//! headers belongs to the first one; lines before the first header belong to
//! no section and are dropped.
//!
//! The heuristic is intentionally permissive: a short all-caps content line
//! ("CEO") will be taken for a header. That is an accepted limitation of
//! header detection, surfaced only indirectly through section-lock
//! mismatches downstream.

use serde::{Deserialize, Serialize};

/// One parsed resume section. `start_line`/`end_line` are inclusive indices
/// into the original text's line sequence; `start_line` is the header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSection {
    pub title: String,
    pub content: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// Returns true if a trimmed line looks like a section header.
fn is_header_line(trimmed: &str) -> bool {
    let char_len = trimmed.chars().count();
    trimmed == trimmed.to_uppercase()
        && char_len > 2
        && char_len < 50
        && !trimmed.contains('•')
        && !trimmed.contains('-')
        && !trimmed.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Splits resume text into an ordered list of sections.
///
/// Sections partition `[first_header_line, last_line]` with no gaps or
/// overlaps. Empty input yields an empty list.
pub fn parse_resume_sections(resume_text: &str) -> Vec<ResumeSection> {
    let lines: Vec<&str> = resume_text.split('\n').collect();
    let mut sections: Vec<ResumeSection> = Vec::new();
    let mut current: Option<ResumeSection> = None;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if is_header_line(trimmed) {
            // Close the previous section at the line before this header.
            if let Some(mut section) = current.take() {
                section.end_line = index - 1;
                sections.push(section);
            }

            current = Some(ResumeSection {
                title: trimmed.to_string(),
                content: String::new(),
                start_line: index,
                end_line: index,
            });
        } else if let Some(section) = current.as_mut() {
            section.content.push_str(line);
            section.content.push('\n');
        }
        // No open section: pre-header line, dropped.
    }

    if let Some(mut section) = current.take() {
        section.end_line = lines.len() - 1;
        sections.push(section);
    }

    sections
}

/// Slices the original text by a section's line range (header line included).
pub fn get_section_content(resume_text: &str, section: &ResumeSection) -> String {
    let lines: Vec<&str> = resume_text.split('\n').collect();
    let end = (section.end_line + 1).min(lines.len());
    lines[section.start_line.min(end)..end].join("\n")
}
