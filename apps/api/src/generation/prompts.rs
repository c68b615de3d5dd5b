//! Prompt templates for the generation flows.
//!
//! Templates are consts with `{slot}` placeholders filled by `.replace()` in
//! the builders below. Builders stay pure so prompt assembly is testable
//! without a network.

use crate::templates::ResumeTemplate;

// ────────────────────────────────────────────────────────────────────────────
// Resume generation
// ────────────────────────────────────────────────────────────────────────────

const RESUME_SYSTEM_TEMPLATE: &str = r#"You are an expert resume writer specializing in ATS-optimized resumes.
Your PRIMARY GOAL is to maximize keyword matching while maintaining truthfulness.

TEMPLATE FORMAT - CRITICAL:
{template_skeleton}

FORMATTING RULES - VERY IMPORTANT:
- DO NOT use asterisks (*) for any formatting
- DO NOT use markdown bold (**text**)
- Use ALL CAPS for section headers exactly as shown in template
- Use plain text only
- Use bullet points with "•" character
- Keep exact section names from template
- Follow template structure precisely
- Use proper spacing between sections
{locked_sections_instruction}

KEYWORD OPTIMIZATION STRATEGY (for unlocked sections only):
- Incorporate ALL missing keywords naturally
- Reword achievements to include target keywords
- Use exact terminology from job description
- Include keyword variations
- Emphasize relevant experiences

FORBIDDEN:
- Do NOT deviate from template structure
- Do NOT add or remove sections from template
- Do NOT use asterisks, markdown, or special formatting
- Do NOT modify locked sections
- Do NOT fabricate information

TARGET: Achieve 80%+ keyword match while maintaining resume authenticity and following template structure exactly."#;

const RESUME_USER_TEMPLATE: &str = r#"BASE RESUME:
{base_resume}

JOB DESCRIPTION:
{job_description}

{custom_requests_block}
KEY REQUIREMENTS FROM JOB:
{keywords}

CURRENT KEYWORD MATCH: {original_score}% ({matched_count}/{keyword_count} keywords)
TARGET MATCH: 80%+

MISSING KEYWORDS TO INCORPORATE:
{missing_keywords}

OPTIMIZATION PRIORITY:
1. Include EVERY relevant keyword from the missing list above
2. Rewrite experience bullets to naturally include these terms
3. Update the professional summary to include key technical terms
4. Emphasize transferable skills that match the requirements
5. Use exact keyword phrases when possible (e.g., "IT Service Level Agreement" not "SLA")

Please generate a customized version of this resume that:
1. Emphasizes relevant experience for this specific role
2. Incorporates keywords from the job description naturally
3. Reorders sections to highlight most relevant qualifications first
4. Maintains all factual accuracy
5. Uses the {template_name} format

Return ONLY the customized resume text, no explanations or meta-commentary."#;

pub fn build_resume_system_prompt(
    template: &ResumeTemplate,
    locked_sections_instruction: &str,
) -> String {
    RESUME_SYSTEM_TEMPLATE
        .replace("{template_skeleton}", template.skeleton)
        .replace("{locked_sections_instruction}", locked_sections_instruction)
}

pub struct ResumeUserPromptParams<'a> {
    pub base_resume: &'a str,
    pub job_description: &'a str,
    pub custom_requests: Option<&'a str>,
    pub template_name: &'a str,
    pub keywords: &'a [String],
    pub original_matched: &'a [String],
    pub original_score: u32,
}

pub fn build_resume_user_prompt(params: &ResumeUserPromptParams) -> String {
    let custom_requests_block = match params.custom_requests {
        Some(requests) if !requests.trim().is_empty() => {
            format!("CUSTOM REQUESTS:\n{requests}\n\n")
        }
        _ => String::new(),
    };

    let missing: Vec<&str> = params
        .keywords
        .iter()
        .filter(|k| !params.original_matched.contains(k))
        .map(String::as_str)
        .collect();

    RESUME_USER_TEMPLATE
        .replace("{base_resume}", params.base_resume)
        .replace("{job_description}", params.job_description)
        .replace("{custom_requests_block}", &custom_requests_block)
        .replace("{keywords}", &params.keywords.join(", "))
        .replace("{original_score}", &params.original_score.to_string())
        .replace("{matched_count}", &params.original_matched.len().to_string())
        .replace("{keyword_count}", &params.keywords.len().to_string())
        .replace("{missing_keywords}", &missing.join(", "))
        .replace("{template_name}", params.template_name)
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter generation
// ────────────────────────────────────────────────────────────────────────────

pub const COVER_LETTER_SYSTEM: &str = r#"You are an expert cover letter writer specializing in professional, compelling cover letters that get interviews.

Your task is to write a personalized cover letter that:
1. Opens with a strong hook that shows genuine interest
2. Demonstrates understanding of the company and role
3. Highlights relevant achievements from the resume
4. Shows personality while maintaining professionalism
5. Creates a narrative connecting past experience to future contribution
6. Closes with a confident call to action

CRITICAL GUIDELINES:
- Keep it to 3-4 paragraphs maximum
- Use first person ("I", "my")
- Be specific - reference actual achievements and skills
- Show enthusiasm without being desperate
- Match the tone to the industry (professional but warm)
- Avoid clichés like "I am writing to express my interest"
- Include quantifiable achievements where possible
- Make it personal to this specific role and company

STRUCTURE:
Paragraph 1: Strong opening - Why this role excites you + brief intro
Paragraph 2-3: Your relevant experience and achievements (from resume)
Paragraph 4: Why you're a great fit + call to action

DO NOT:
- Repeat the resume word-for-word
- Use generic phrases
- Be overly formal or robotic
- Include lies or exaggerations
- Make it longer than one page"#;

const COVER_LETTER_USER_TEMPLATE: &str = r#"Write a compelling cover letter for this application:

ROLE: {job_title}
COMPANY: {company_name}

JOB DESCRIPTION:
{job_description}

APPLICANT RESUME:
{resume_content}

APPLICANT DETAILS:
{applicant_details}

{highlights_block}{custom_requests_block}Format the letter with proper spacing and paragraphs.
Include the applicant's contact details at the top in standard format.
Date the letter as: {letter_date}

EXAMPLE FORMAT:
[Applicant Name]
[Email] | [Phone]
[Address if provided]

{letter_date}

Dear Hiring Manager,

[Cover letter content...]

Sincerely,
[Applicant Name]

Return ONLY the cover letter following this format."#;

pub struct CoverLetterUserPromptParams<'a> {
    pub job_title: &'a str,
    pub company_name: &'a str,
    pub job_description: &'a str,
    pub resume_content: &'a str,
    pub applicant_details: &'a str,
    pub additional_highlights: Option<&'a str>,
    pub custom_requests: Option<&'a str>,
    /// Human-readable date, e.g. "March 14, 2025".
    pub letter_date: &'a str,
}

pub fn build_cover_letter_user_prompt(params: &CoverLetterUserPromptParams) -> String {
    let highlights_block = match params.additional_highlights {
        Some(h) if !h.trim().is_empty() => format!("ADDITIONAL HIGHLIGHTS TO INCLUDE:\n{h}\n\n"),
        _ => String::new(),
    };
    let custom_requests_block = match params.custom_requests {
        Some(r) if !r.trim().is_empty() => format!("CUSTOM REQUESTS:\n{r}\n\n"),
        _ => String::new(),
    };

    COVER_LETTER_USER_TEMPLATE
        .replace("{job_title}", params.job_title)
        .replace("{company_name}", params.company_name)
        .replace("{job_description}", params.job_description)
        .replace("{resume_content}", params.resume_content)
        .replace("{applicant_details}", params.applicant_details)
        .replace("{highlights_block}", &highlights_block)
        .replace("{custom_requests_block}", &custom_requests_block)
        .replace("{letter_date}", params.letter_date)
}

// ────────────────────────────────────────────────────────────────────────────
// Interview preparation
// ────────────────────────────────────────────────────────────────────────────

pub const INTERVIEW_SYSTEM: &str = r#"You are an expert interview coach and career advisor specializing in helping candidates prepare for job interviews.

Your task is to:
1. Analyze the job description, resume, and cover letter
2. Predict the most likely interview questions for this specific role
3. Provide strong, tailored answer frameworks for each question
4. Include a mix of behavioral, technical, and situational questions
5. Make answers specific to the candidate's experience

CRITICAL GUIDELINES:
- Generate 8-10 highly relevant questions
- Base answers on ACTUAL experiences from the resume
- Use the STAR method (Situation, Task, Action, Result) for behavioral questions
- Provide specific, actionable answer frameworks (not generic advice)
- Include questions about gaps, transitions, or unique aspects of their background
- Consider the company culture and role requirements
- Make answers authentic to the candidate's voice

QUESTION CATEGORIES:
- Behavioral (past experiences, soft skills)
- Technical (role-specific skills and knowledge)
- Situational (hypothetical scenarios)
- Company-specific (why this company, culture fit)

ANSWER FORMAT:
- Concise but complete (2-3 paragraphs)
- Specific examples from resume
- Quantifiable achievements where possible
- Show enthusiasm and cultural fit
- Address the core of what interviewer is looking for"#;

const INTERVIEW_USER_TEMPLATE: &str = r#"Generate interview preparation for this job application:

ROLE: {job_title}
COMPANY: {company_name}

JOB DESCRIPTION:
{job_description}

CANDIDATE'S RESUME:
{resume_content}

CANDIDATE'S COVER LETTER:
{cover_letter_content}

Generate 8-10 interview questions with detailed answer frameworks.

For each question, provide:
1. The exact question
2. A strong answer framework based on the candidate's actual experience
3. The category (behavioral/technical/situational/company-specific)
4. 2-3 tips for delivering the answer effectively

Also include 5 general interview tips specific to this role and company.

Return the response in this exact JSON format:
{
  "questions": [
    {
      "question": "Tell me about a time when...",
      "answer": "Detailed answer framework here using STAR method...",
      "category": "behavioral",
      "tips": ["Tip 1", "Tip 2", "Tip 3"]
    }
  ],
  "generalTips": [
    "Research the company's recent projects",
    "Prepare questions about team structure",
    "..."
  ]
}

Return ONLY valid JSON, no other text."#;

pub struct InterviewUserPromptParams<'a> {
    pub job_title: &'a str,
    pub company_name: &'a str,
    pub job_description: &'a str,
    pub resume_content: &'a str,
    pub cover_letter_content: &'a str,
}

pub fn build_interview_user_prompt(params: &InterviewUserPromptParams) -> String {
    INTERVIEW_USER_TEMPLATE
        .replace("{job_title}", params.job_title)
        .replace("{company_name}", params.company_name)
        .replace("{job_description}", params.job_description)
        .replace("{resume_content}", params.resume_content)
        .replace("{cover_letter_content}", params.cover_letter_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::default_template;

    #[test]
    fn test_resume_system_prompt_embeds_skeleton_and_locks() {
        let prompt = build_resume_system_prompt(default_template(), "\n\nLOCK BLOCK");
        assert!(prompt.contains("Clean Professional"));
        assert!(prompt.contains("LOCK BLOCK"));
        assert!(!prompt.contains("{template_skeleton}"));
        assert!(!prompt.contains("{locked_sections_instruction}"));
    }

    #[test]
    fn test_resume_user_prompt_reports_missing_keywords() {
        let keywords = vec!["Rust".to_string(), "Kafka".to_string(), "SQL".to_string()];
        let matched = vec!["Rust".to_string()];
        let prompt = build_resume_user_prompt(&ResumeUserPromptParams {
            base_resume: "BASE",
            job_description: "JD",
            custom_requests: None,
            template_name: "Clean Professional",
            keywords: &keywords,
            original_matched: &matched,
            original_score: 33,
        });
        assert!(prompt.contains("CURRENT KEYWORD MATCH: 33% (1/3 keywords)"));
        assert!(prompt.contains("MISSING KEYWORDS TO INCORPORATE:\nKafka, SQL"));
        assert!(!prompt.contains("CUSTOM REQUESTS"));
    }

    #[test]
    fn test_resume_user_prompt_includes_custom_requests_when_present() {
        let prompt = build_resume_user_prompt(&ResumeUserPromptParams {
            base_resume: "BASE",
            job_description: "JD",
            custom_requests: Some("Emphasize leadership"),
            template_name: "Clean Professional",
            keywords: &[],
            original_matched: &[],
            original_score: 0,
        });
        assert!(prompt.contains("CUSTOM REQUESTS:\nEmphasize leadership"));
    }

    #[test]
    fn test_cover_letter_prompt_fills_all_slots() {
        let prompt = build_cover_letter_user_prompt(&CoverLetterUserPromptParams {
            job_title: "Backend Engineer",
            company_name: "Acme",
            job_description: "JD",
            resume_content: "RESUME",
            applicant_details: "Name: Jane Doe",
            additional_highlights: Some("Speaks three languages"),
            custom_requests: None,
            letter_date: "March 14, 2025",
        });
        assert!(prompt.contains("ROLE: Backend Engineer"));
        assert!(prompt.contains("Speaks three languages"));
        assert!(prompt.contains("March 14, 2025"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_interview_prompt_keeps_json_braces() {
        let prompt = build_interview_user_prompt(&InterviewUserPromptParams {
            job_title: "PM",
            company_name: "Acme",
            job_description: "JD",
            resume_content: "RESUME",
            cover_letter_content: "LETTER",
        });
        // The embedded JSON example must survive slot replacement.
        assert!(prompt.contains("\"generalTips\""));
        assert!(prompt.contains("ROLE: PM"));
    }
}
