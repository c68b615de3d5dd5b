// Generation flows: resume rewrite, cover letter, interview prep.

pub mod cover_letter;
pub mod handlers;
pub mod interview;
pub mod lock;
pub mod prompts;
pub mod resume;
