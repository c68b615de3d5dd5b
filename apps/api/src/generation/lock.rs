//! Locked-Section Contract — constrains what a generative rewrite may touch.
//!
//! The builder produces a natural-language instruction block injected into
//! the generation prompt. The generator cannot mechanically enforce the
//! constraint — "locked content preserved verbatim" is a best-effort
//! guarantee requested of the external collaborator, so a post-hoc
//! verification step diffs the locked sections of the base and generated
//! texts and reports mismatches as recoverable warnings, never as failures.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::parser::{normalize_section_title, parse_resume_sections};

/// A locked section the generated output failed to preserve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockViolation {
    /// Normalized title of the locked section.
    pub section: String,
    /// False when the section is missing from the output entirely.
    pub present_in_output: bool,
}

/// Builds the locked-sections instruction block for the generation prompt.
///
/// Pure formatting, no side effects. An empty locked set yields an empty
/// string and generation proceeds unconstrained.
pub fn build_locked_sections_instruction(locked_sections: &[String]) -> String {
    if locked_sections.is_empty() {
        return String::new();
    }

    let listing = locked_sections
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n\nCRITICAL - LOCKED SECTIONS:\n\
        The following sections are LOCKED and must NOT be modified:\n\
        {listing}\n\n\
        For locked sections:\n\
        - Reproduce the section text with zero modification\n\
        - Keep the exact wording — no rewording or rephrasing\n\
        - Keep the order of bullets within the section unchanged\n\
        - Keep all dates, names, companies, titles, and numbers exactly as written\n\
        - You MAY move an entire locked section to a different position relative to unlocked sections\n\n\
        For UNLOCKED sections only:\n\
        - Optimize wording, keyword density, and phrasing\n\
        - Rewrite for ATS compatibility\n\
        - Add emphasis and achievements\n\n\
        Before returning your output, re-read each locked section and verify it is \
        character-for-character identical to the input."
    )
}

/// Compares the locked sections of the base and generated texts.
///
/// Section bodies are matched by normalized title and compared trimmed, so
/// leading/trailing blank lines introduced by reordering do not count as
/// modifications. Returns one `LockViolation` per mismatch; an empty vec
/// means the contract held.
pub fn verify_locked_sections(
    base_resume: &str,
    generated: &str,
    locked_sections: &[String],
) -> Vec<LockViolation> {
    if locked_sections.is_empty() {
        return Vec::new();
    }

    let base_sections = parse_resume_sections(base_resume);
    let generated_sections = parse_resume_sections(generated);

    let mut violations = Vec::new();

    for locked in locked_sections {
        let locked_normalized = normalize_section_title(locked);

        let base_content = base_sections
            .iter()
            .find(|s| normalize_section_title(&s.title) == locked_normalized)
            .map(|s| s.content.trim());

        // A lock on a section the base resume never had is a no-op.
        let Some(base_content) = base_content else {
            continue;
        };

        let generated_content = generated_sections
            .iter()
            .find(|s| normalize_section_title(&s.title) == locked_normalized)
            .map(|s| s.content.trim());

        match generated_content {
            None => {
                warn!("Locked section '{locked_normalized}' missing from generated output");
                violations.push(LockViolation {
                    section: locked_normalized,
                    present_in_output: false,
                });
            }
            Some(generated_content) if generated_content != base_content => {
                warn!("Locked section '{locked_normalized}' was modified by generation");
                violations.push(LockViolation {
                    section: locked_normalized,
                    present_in_output: true,
                });
            }
            Some(_) => {}
        }
    }

    violations
}
