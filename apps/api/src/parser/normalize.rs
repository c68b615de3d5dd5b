//! Section Normalizer — maps raw section-title variants onto a small
//! canonical vocabulary so locks and template headings agree regardless of
//! how the source resume spells its headings.

/// Canonicalizes a section title.
///
/// Uppercases and trims the input, then maps known synonyms onto the
/// canonical form. Unmapped titles pass through uppercased/trimmed, which
/// makes the function idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize_section_title(title: &str) -> String {
    let normalized = title.trim().to_uppercase();

    let canonical = match normalized.as_str() {
        "WORK EXPERIENCE" | "PROFESSIONAL EXPERIENCE" | "EMPLOYMENT HISTORY" | "WORK HISTORY" => {
            "EXPERIENCE"
        }
        "EDUCATIONAL BACKGROUND" | "ACADEMIC BACKGROUND" => "EDUCATION",
        "SKILLS & EXPERTISE" | "TECHNICAL SKILLS" | "CORE COMPETENCIES" => "SKILLS",
        _ => return normalized,
    };

    canonical.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_synonyms_collapse() {
        for raw in [
            "WORK EXPERIENCE",
            "Professional Experience",
            "employment history",
            "Work History",
        ] {
            assert_eq!(normalize_section_title(raw), "EXPERIENCE", "raw: {raw}");
        }
    }

    #[test]
    fn test_education_and_skills_synonyms_collapse() {
        assert_eq!(normalize_section_title("Academic Background"), "EDUCATION");
        assert_eq!(normalize_section_title("EDUCATIONAL BACKGROUND"), "EDUCATION");
        assert_eq!(normalize_section_title("Technical Skills"), "SKILLS");
        assert_eq!(normalize_section_title("Core Competencies"), "SKILLS");
        assert_eq!(normalize_section_title("Skills & Expertise"), "SKILLS");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(
            normalize_section_title(" work Experience "),
            normalize_section_title("WORK EXPERIENCE")
        );
    }

    #[test]
    fn test_unknown_titles_pass_through_uppercased() {
        assert_eq!(normalize_section_title("Volunteering"), "VOLUNTEERING");
        assert_eq!(normalize_section_title("  projects "), "PROJECTS");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["Work Experience", "Summary", "references", "EXPERIENCE"] {
            let once = normalize_section_title(raw);
            assert_eq!(normalize_section_title(&once), once);
        }
    }
}
