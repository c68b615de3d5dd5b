//! Line classification for the document renderer.
//!
//! Classification is line-local plus two pieces of state: the line index and
//! whether the previous content line was a section header. The transition
//! function is pure so both rendering backends share it byte-for-byte — the
//! same input text classifies identically whether a PDF or a DOCX is
//! requested.

/// The styling class assigned to one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Blank line; contributes vertical space only.
    Blank,
    /// First content line when short — the candidate's name.
    Name,
    /// Second line containing a `|` field separator.
    Contact,
    /// All-caps short line: EXPERIENCE, TECHNICAL SKILLS, ...
    SectionHeader,
    /// Job-title or company line, or the first content line after a header.
    Subheader,
    /// `•`, `-`, or ordinal (`1.`) prefixed line.
    Bullet,
    Body,
}

/// Classifier state threaded through the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifierState {
    pub index: usize,
    pub first_content_seen: bool,
    pub prev_was_header: bool,
}

/// A classified line ready for layout. `text` is the trimmed content; bullets
/// keep their marker stripped so backends apply their own bullet glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLine {
    pub class: LineClass,
    pub text: String,
}

/// Pure transition function: (state, line) → (classification, next state).
pub fn classify_line(state: ClassifierState, line: &str) -> (LineClass, ClassifierState) {
    let trimmed = line.trim();
    let mut next = state;
    next.index += 1;

    // Blank lines contribute spacing and leave the header flag untouched.
    if trimmed.is_empty() {
        return (LineClass::Blank, next);
    }

    if !state.first_content_seen {
        next.first_content_seen = true;
        if trimmed.chars().count() < 50 {
            return (LineClass::Name, next);
        }
    }

    if state.index == 1 && trimmed.contains('|') {
        return (LineClass::Contact, next);
    }

    let char_len = trimmed.chars().count();
    let is_header = trimmed == trimmed.to_uppercase()
        && char_len > 2
        && char_len < 60
        && !trimmed.contains('•')
        && !trimmed.contains('-')
        && !trimmed.starts_with('(');

    if is_header {
        next.prev_was_header = true;
        return (LineClass::SectionHeader, next);
    }

    let is_bullet = is_bullet_line(trimmed);

    let is_subheader = (trimmed.contains('|') && !trimmed.contains('@'))
        || (trimmed.starts_with('(') && trimmed.contains(')'))
        || (state.prev_was_header && !is_bullet);

    next.prev_was_header = false;

    if is_subheader {
        return (LineClass::Subheader, next);
    }
    if is_bullet {
        return (LineClass::Bullet, next);
    }
    (LineClass::Body, next)
}

fn is_bullet_line(trimmed: &str) -> bool {
    if trimmed.starts_with('•') || trimmed.starts_with('-') {
        return true;
    }
    // Ordinal bullets: "1. ", "12. "
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    !digits.is_empty() && trimmed[digits.len()..].starts_with('.')
}

/// Strips the bullet marker (`•`, `-`, or `1.` style) and following spaces.
pub fn strip_bullet_marker(trimmed: &str) -> &str {
    let rest = if let Some(rest) = trimmed.strip_prefix('•') {
        rest
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        rest
    } else {
        let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
        match trimmed[digits..].strip_prefix('.') {
            Some(rest) if digits > 0 => rest,
            _ => trimmed,
        }
    };
    rest.trim_start()
}

/// Removes markdown emphasis markers and heading hashes so generation noise
/// does not escape into deliverable documents.
pub fn clean_markdown(text: &str) -> String {
    text.lines()
        .map(|line| {
            let line = line.trim_end();
            let stripped = line.trim_start_matches('#');
            // Only treat leading hashes as a heading marker when followed by a space.
            let line = if stripped.len() < line.len() && stripped.starts_with(' ') {
                stripped.trim_start()
            } else {
                line
            };
            line.replace("**", "").replace("__", "")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Classifies every line of a document, optionally cleaning markdown first.
pub fn classify_document(content: &str, strip_markdown: bool) -> Vec<ClassifiedLine> {
    let cleaned;
    let content = if strip_markdown {
        cleaned = clean_markdown(content);
        &cleaned
    } else {
        content
    };

    let mut state = ClassifierState::default();
    let mut out = Vec::new();
    for line in content.lines() {
        let (class, next) = classify_line(state, line);
        state = next;
        let trimmed = line.trim();
        let text = match class {
            LineClass::Bullet => strip_bullet_marker(trimmed).to_string(),
            _ => trimmed.to_string(),
        };
        out.push(ClassifiedLine { class, text });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(content: &str) -> Vec<LineClass> {
        classify_document(content, false)
            .into_iter()
            .map(|l| l.class)
            .collect()
    }

    #[test]
    fn test_canonical_resume_head_classification() {
        let content = "Jane Doe\nCity | 555-1234 | jane@x.com\nEXPERIENCE\nSenior Engineer | Acme | 2020-Present\n• Built a thing";
        assert_eq!(
            classes(content),
            vec![
                LineClass::Name,
                LineClass::Contact,
                LineClass::SectionHeader,
                LineClass::Subheader,
                LineClass::Bullet,
            ]
        );
    }

    #[test]
    fn test_long_first_line_is_not_name() {
        let long = "x".repeat(60);
        let got = classes(&long);
        assert_eq!(got, vec![LineClass::Body]);
    }

    #[test]
    fn test_contact_requires_second_line_with_separator() {
        // Separator on the third line is a subheader, not a contact line
        let content = "Jane Doe\n\nCity | 555-1234";
        assert_eq!(
            classes(content),
            vec![LineClass::Name, LineClass::Blank, LineClass::Subheader]
        );
    }

    #[test]
    fn test_header_exclusions() {
        let content = "Jane Doe\nintro\n- ALL CAPS BULLET\n(PARENTHESIZED)\nEXPERIENCE";
        let got = classes(content);
        assert_eq!(got[2], LineClass::Bullet);
        assert_eq!(got[3], LineClass::Subheader);
        assert_eq!(got[4], LineClass::SectionHeader);
    }

    #[test]
    fn test_first_line_after_header_is_subheader() {
        let content = "Jane Doe\nintro\nEDUCATION\nBSc Computer Science\nGraduated 2015";
        let got = classes(content);
        assert_eq!(got[3], LineClass::Subheader);
        assert_eq!(got[4], LineClass::Body);
    }

    #[test]
    fn test_bullet_after_header_stays_bullet() {
        let content = "Jane Doe\nintro\nSKILLS\n• Rust";
        let got = classes(content);
        assert_eq!(got[3], LineClass::Bullet);
    }

    #[test]
    fn test_blank_line_preserves_header_flag() {
        let content = "Jane Doe\nintro\nSKILLS\n\nCloud platforms";
        let got = classes(content);
        assert_eq!(got[3], LineClass::Blank);
        assert_eq!(got[4], LineClass::Subheader);
    }

    #[test]
    fn test_ordinal_bullets() {
        let content = "Jane Doe\nintro\n1. First point\n12. Twelfth point";
        let got = classes(content);
        assert_eq!(got[2], LineClass::Bullet);
        assert_eq!(got[3], LineClass::Bullet);
    }

    #[test]
    fn test_bullet_marker_stripping() {
        assert_eq!(strip_bullet_marker("• Built a thing"), "Built a thing");
        assert_eq!(strip_bullet_marker("- Dashed"), "Dashed");
        assert_eq!(strip_bullet_marker("12.  Spaced ordinal"), "Spaced ordinal");
        assert_eq!(strip_bullet_marker("no marker"), "no marker");
    }

    #[test]
    fn test_clean_markdown_strips_emphasis_and_headings() {
        let cleaned = clean_markdown("## EXPERIENCE\n**Senior** Engineer\n__quiet__ work\n#HashTag stays");
        assert_eq!(cleaned, "EXPERIENCE\nSenior Engineer\nquiet work\n#HashTag stays");
    }

    #[test]
    fn test_classify_document_strips_markdown_when_asked() {
        let lines = classify_document("Jane Doe\nintro\n**EXPERIENCE**", true);
        assert_eq!(lines[2].class, LineClass::SectionHeader);
        assert_eq!(lines[2].text, "EXPERIENCE");
    }

    #[test]
    fn test_email_line_with_separator_is_not_subheader_unless_contact() {
        // '@' suppresses the separator-based subheader rule
        let content = "Jane Doe\nintro\nwrite to jane@x.com | any time";
        let got = classes(content);
        assert_eq!(got[2], LineClass::Body);
    }
}
