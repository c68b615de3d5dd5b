//! Static resume template registry.
//!
//! Templates are versioned layout descriptors: human-readable metadata for
//! the UI, a structural skeleton that steers generation (section order and
//! heading vocabulary are followed exactly), and styling parameters consumed
//! by the document renderer.

use crate::render::metrics::FontFamily;

/// Styling parameters applied by the renderer backends.
#[derive(Debug, Clone, Copy)]
pub struct TemplateStyle {
    pub font: FontFamily,
    /// Accent color for headers and rules, as 0.0–1.0 RGB.
    pub accent_rgb: (f32, f32, f32),
    /// Strip markdown emphasis/heading markers before classification.
    pub strip_markdown: bool,
}

/// A static, versioned layout descriptor.
#[derive(Debug, Clone)]
pub struct ResumeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub best_for: &'static [&'static str],
    /// Structural outline injected into the generation system prompt.
    pub skeleton: &'static str,
    pub style: TemplateStyle,
}

const TEMPLATE_1_SKELETON: &str = r#"Use this exact structure (Template 1 - Clean Professional):

FIRST NAME LAST NAME
City, State | Phone: +XX XXXX XXX XXX | Email: email@email.com | LinkedIn: linkedin.com/in/username

PROFESSIONAL SUMMARY
[2-3 sentences targeting the specific role and key achievements]

EDUCATION
[Degree] - [Field]
University Name | Start Year - End Year
- Key achievements or projects

PROFESSIONAL EXPERIENCE
Job Title
Company Name | Location | MM/YYYY - Present/End Date
- Key responsibility or achievement (start with action verb)
- Another key accomplishment (quantify when possible)
- Example of impact or improvement
- Additional relevant task or role

TECHNICAL SKILLS
- Category: [Specific skills and tools]
- Category: [Specific skills and tools]

VOLUNTEERING & MEMBERSHIPS
- Role - Organization Name | Year
"#;

const TEMPLATE_2_SKELETON: &str = r#"Use this exact structure (Template 2 - Modern Executive):

FIRST NAME LAST NAME
City, State | Phone: +XX XXXX XXX XXX | Email: email@email.com | LinkedIn: linkedin.com/in/username

PROFESSIONAL PROFILE
[2-3 sentences showing dedication and key strengths relevant to target role]

KEY CAPABILITIES
- Skill or area of expertise: Brief explanation of strength or capability
- Another skill: Brief explanation of proficiency
- Problem-solving area: Summary of excellence area
- Customer/stakeholder focus: Approach to outcomes

CAREER SUMMARY
(Job Title) - Company Name | Location | Year - Year

QUALIFICATION
- Bachelor Degree (or Certification)

PROFESSIONAL DEVELOPMENT
- [Certification / Training] | Issuing Organization | Year

RECENT PROFESSIONAL EXPERIENCE
(Job Title)
Company Name | Location | Month YYYY - Present
- Key responsibility: Primary duty description
- Special achievement: Highlighting example of success or impact
- Problem solving: Resolving issue or implementing improvement
- Process improvement: Success in efficiency or procedure
- Clear & effective communication: Interacting with clients or colleagues
- Technical expertise: Demonstrating specific skills relevant to role

REFERENCES
Available upon request
"#;

static TEMPLATES: &[ResumeTemplate] = &[
    ResumeTemplate {
        id: "template_1",
        name: "Clean Professional",
        description: "Classic, ATS-friendly format perfect for corporate roles",
        features: &[
            "Single-column layout",
            "Clean typography",
            "Maximum ATS compatibility",
            "Professional appearance",
        ],
        best_for: &[
            "Entry to mid-level positions",
            "Corporate environments",
            "ATS-heavy companies",
        ],
        skeleton: TEMPLATE_1_SKELETON,
        style: TemplateStyle {
            font: FontFamily::Helvetica,
            accent_rgb: (0.0, 0.0, 0.0),
            strip_markdown: true,
        },
    },
    ResumeTemplate {
        id: "template_2",
        name: "Modern Executive",
        description: "Bold, modern design for senior positions",
        features: &[
            "Capability-led layout",
            "Professional color accents",
            "Career summary view",
            "Modern typography",
        ],
        best_for: &[
            "Senior positions",
            "Creative industries",
            "Stand-out applications",
        ],
        skeleton: TEMPLATE_2_SKELETON,
        style: TemplateStyle {
            font: FontFamily::TimesRoman,
            accent_rgb: (0.12, 0.16, 0.35),
            strip_markdown: true,
        },
    },
];

pub fn all_templates() -> &'static [ResumeTemplate] {
    TEMPLATES
}

pub fn get_template_by_id(id: &str) -> Option<&'static ResumeTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn default_template() -> &'static ResumeTemplate {
    &TEMPLATES[0]
}
