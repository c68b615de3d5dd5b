// Resume text parsing: section splitting + title normalization.

pub mod normalize;
pub mod sections;

pub use normalize::normalize_section_title;
pub use sections::{get_section_content, parse_resume_sections, ResumeSection};
