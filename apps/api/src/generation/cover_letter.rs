//! Cover letter generation plus the personal-details scrape used to prefill
//! the prompt from the stored resume.

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::errors::AppError;
use crate::generation::prompts::{
    build_cover_letter_user_prompt, CoverLetterUserPromptParams, COVER_LETTER_SYSTEM,
};
use crate::llm::{GenerationOptions, TextGenerator};

const COVER_LETTER_OPTIONS: GenerationOptions = GenerationOptions::new(0.8, 1500);

pub struct GenerateCoverLetterParams<'a> {
    pub resume_content: &'a str,
    pub job_title: &'a str,
    pub company_name: &'a str,
    pub job_description: &'a str,
    pub applicant_name: &'a str,
    pub applicant_email: Option<&'a str>,
    pub applicant_phone: Option<&'a str>,
    pub applicant_address: Option<&'a str>,
    pub additional_highlights: Option<&'a str>,
    pub custom_requests: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCoverLetter {
    pub content: String,
    pub tone: String,
}

/// Contact details scraped from free-form resume text. Any field may be
/// empty when the corresponding pattern never occurs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").expect("email regex is valid"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:\+?1[-.]?)?\(?([0-9]{3})\)?[-.]?([0-9]{3})[-.]?([0-9]{4})")
            .expect("phone regex is valid")
    })
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Z][a-z]+(\s+[A-Z][a-z]+){1,3}$").expect("name regex is valid")
    })
}

fn address_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Z][a-z]+,?\s+[A-Z]{2}\s+\d{5}(-\d{4})?").expect("address regex is valid")
    })
}

/// Scrapes name, email, phone, and a city/state/zip address from resume text.
/// The name is only taken from the first non-blank line when it looks like
/// 2-4 capitalized words.
pub fn extract_personal_details(resume_text: &str) -> PersonalDetails {
    let mut details = PersonalDetails::default();

    if let Some(m) = email_regex().find(resume_text) {
        details.email = m.as_str().to_string();
    }
    if let Some(m) = phone_regex().find(resume_text) {
        details.phone = m.as_str().to_string();
    }
    if let Some(first_line) = resume_text.lines().map(str::trim).find(|l| !l.is_empty()) {
        if first_line.chars().count() < 50 && name_regex().is_match(first_line) {
            details.name = first_line.to_string();
        }
    }
    if let Some(m) = address_regex().find(resume_text) {
        details.address = m.as_str().to_string();
    }

    details
}

/// Formats a date the way the letter header expects: "March 14, 2025".
pub fn letter_date(date: NaiveDate) -> String {
    let month = match date.month() {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    };
    format!("{month} {}, {}", date.day(), date.year())
}

fn applicant_details_block(params: &GenerateCoverLetterParams) -> String {
    let mut block = format!("Name: {}", params.applicant_name);
    if let Some(email) = params.applicant_email.filter(|s| !s.is_empty()) {
        block.push_str(&format!("\nEmail: {email}"));
    }
    if let Some(phone) = params.applicant_phone.filter(|s| !s.is_empty()) {
        block.push_str(&format!("\nPhone: {phone}"));
    }
    if let Some(address) = params.applicant_address.filter(|s| !s.is_empty()) {
        block.push_str(&format!("\nAddress: {address}"));
    }
    block
}

pub async fn generate_cover_letter(
    generator: &dyn TextGenerator,
    params: GenerateCoverLetterParams<'_>,
) -> Result<GeneratedCoverLetter, AppError> {
    let date = letter_date(Utc::now().date_naive());
    let details = applicant_details_block(&params);
    let user = build_cover_letter_user_prompt(&CoverLetterUserPromptParams {
        job_title: params.job_title,
        company_name: params.company_name,
        job_description: params.job_description,
        resume_content: params.resume_content,
        applicant_details: &details,
        additional_highlights: params.additional_highlights,
        custom_requests: params.custom_requests,
        letter_date: &date,
    });

    let content = generator
        .generate(COVER_LETTER_SYSTEM, &user, COVER_LETTER_OPTIONS)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    Ok(GeneratedCoverLetter {
        content,
        tone: "professional-warm".to_string(),
    })
}
