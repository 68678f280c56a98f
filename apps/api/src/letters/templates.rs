//! Template registry: three fixed letter styles, dispatched by [`TemplateId`].
//!
//! The opening (header, date, recipient block, salutation) and the signature are
//! shared; each style contributes its body paragraphs plus a [`TemplateStyle`]
//! record holding its defaults. Absent optional paragraphs are skipped rather
//! than left as blank lines.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::letters::formatting::{bullet_list, join_skills, letter_opening};
use crate::models::details::{present, UserDetails};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Formal,
    Casual,
    Technical,
}

/// Per-style defaults. Differences between styles live here, not in branches.
#[derive(Clone, Copy)]
pub struct TemplateStyle {
    pub default_salutation: &'static str,
    pub fallback_recipient: &'static str,
    /// Address the recipient by first name only.
    pub first_name_only: bool,
    pub default_signature: &'static str,
    /// When set, the signature stands alone and this word carries the comma.
    pub sign_off: Option<&'static str>,
    pub achievements_heading: &'static str,
    /// Text used in place of the achievement bullets when none are filled in.
    pub achievement_fallback: Option<fn(&[&str]) -> String>,
}

/// Display metadata for the template picker.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub preview: &'static str,
}

static FORMAL_STYLE: TemplateStyle = TemplateStyle {
    default_salutation: "Dear",
    fallback_recipient: "Hiring Manager",
    first_name_only: false,
    default_signature: "Best regards",
    sign_off: None,
    achievements_heading: "Key achievements include:",
    achievement_fallback: None,
};

static CASUAL_STYLE: TemplateStyle = TemplateStyle {
    default_salutation: "Hi",
    fallback_recipient: "there",
    first_name_only: true,
    default_signature: "Looking forward to connecting!",
    sign_off: Some("Cheers"),
    achievements_heading: "Some highlights of what I've accomplished:",
    achievement_fallback: None,
};

static TECHNICAL_STYLE: TemplateStyle = TemplateStyle {
    default_salutation: "Dear",
    fallback_recipient: "Hiring Team",
    first_name_only: false,
    default_signature: "Technical regards",
    sign_off: None,
    achievements_heading: "Key Technical Achievements:",
    achievement_fallback: Some(synthesize_technical_achievements),
};

/// Registry in display order.
pub static TEMPLATES: &[Template] = &[
    Template {
        id: TemplateId::Formal,
        name: "Formal & Professional",
        description: "Perfect for corporate roles and traditional industries",
        icon: "Briefcase",
        preview: "[Your Name] | [Email] | [Phone] | [LinkedIn]

[Recipient Name]
[Job Title]
[Company]
[Address]

Dear [Recipient Name],

I am writing to express my strong interest in the [Position] at [Company]...

Throughout my career, I have developed expertise in [Skills], which aligns perfectly with the requirements of this role...

Best regards,
[Your Name]",
    },
    Template {
        id: TemplateId::Casual,
        name: "Casual & Creative",
        description: "Great for startups and creative industries",
        icon: "Palette",
        preview: "[Your Name] | [Contact Details] | [Portfolio]

Hi [Name],

I'm [Your Name], and I'm excited about the [Position] role at [Company]!

What draws me to [Company] is your innovative approach...

Looking forward to connecting!",
    },
    Template {
        id: TemplateId::Technical,
        name: "Technical & Data-Driven",
        description: "Ideal for engineering and analytical roles",
        icon: "Code2",
        preview: "[Professional Header with Contact Details]

Technical Profile:
- Core Competencies: [Skills]
- Position of Interest: [Position]
- Target Organization: [Company]

I am a results-driven professional...",
    },
];

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Formal, TemplateId::Casual, TemplateId::Technical];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Formal => "formal",
            TemplateId::Casual => "casual",
            TemplateId::Technical => "technical",
        }
    }

    pub fn style(self) -> &'static TemplateStyle {
        match self {
            TemplateId::Formal => &FORMAL_STYLE,
            TemplateId::Casual => &CASUAL_STYLE,
            TemplateId::Technical => &TECHNICAL_STYLE,
        }
    }

    pub fn template(self) -> &'static Template {
        match self {
            TemplateId::Formal => &TEMPLATES[0],
            TemplateId::Casual => &TEMPLATES[1],
            TemplateId::Technical => &TEMPLATES[2],
        }
    }

    /// Renders the letter. Pure: the same record and date always yield the same text.
    ///
    /// Assumes `details` already passed validation; an unvalidated record still
    /// renders, with blank clauses where values are missing.
    pub fn generate(self, details: &UserDetails, date: NaiveDate) -> String {
        let style = self.style();
        let body = match self {
            TemplateId::Formal => formal_body(details, style),
            TemplateId::Casual => casual_body(details, style),
            TemplateId::Technical => technical_body(details, style),
        };
        format!(
            "{}\n\n{}\n\n{}",
            letter_opening(details, date, &salutation(details, style)),
            body.join("\n\n"),
            signature(details, style)
        )
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn salutation(details: &UserDetails, style: &TemplateStyle) -> String {
    let greeting = present(&details.salutation).unwrap_or(style.default_salutation);
    let recipient = match present(&details.recipient_name) {
        Some(name) if style.first_name_only => name.split_whitespace().next().unwrap_or(name),
        Some(name) => name,
        None => style.fallback_recipient,
    };
    format!("{greeting} {recipient},")
}

fn signature(details: &UserDetails, style: &TemplateStyle) -> String {
    let closing = present(&details.custom_signature).unwrap_or(style.default_signature);
    match style.sign_off {
        Some(sign_off) => format!("{closing}\n\n{sign_off},\n{}", details.full_name),
        None => format!("{closing},\n{}", details.full_name),
    }
}

fn achievements(details: &UserDetails, style: &TemplateStyle) -> Option<String> {
    let filled = details.filled_achievements();
    let content = if filled.is_empty() {
        let fallback = style.achievement_fallback?;
        fallback(&details.filled_skills())
    } else {
        bullet_list(&filled)
    };
    Some(format!("{}\n{content}", style.achievements_heading))
}

fn synthesize_technical_achievements(skills: &[&str]) -> String {
    match skills {
        [] => "Demonstrated proficiency across the competencies listed above.".to_string(),
        [only] => format!("Demonstrated proficiency in {only}."),
        [first, second] => format!("Demonstrated proficiency in {first} and {second}."),
        [first, second, rest @ ..] => format!(
            "Demonstrated proficiency in {first} and {second}, and successfully implemented solutions using {}.",
            join_skills(rest)
        ),
    }
}

fn formal_body(details: &UserDetails, style: &TemplateStyle) -> Vec<String> {
    let skills = details.filled_skills();
    let company = &details.company_name;
    let lead_skills = skills.iter().take(2).copied().collect::<Vec<_>>().join(" and ");

    let mut paragraphs = vec![format!(
        "I am writing to express my strong interest in the {} position at {company}. \
         With my background in {}, I am confident in my ability to contribute meaningfully to your team.",
        details.job_title,
        join_skills(&skills)
    )];
    paragraphs.extend(present(&details.experience).map(str::to_string));
    paragraphs.push(format!(
        "Throughout my career, I have developed expertise in {lead_skills}, which aligns perfectly \
         with the requirements of this role. I am particularly drawn to {company}'s reputation for \
         excellence and innovation in the industry."
    ));
    paragraphs.extend(achievements(details, style));
    paragraphs.extend(present(&details.education).map(str::to_string));
    paragraphs.push(format!(
        "I would welcome the opportunity to discuss how my skills and experience could benefit \
         {company}. Thank you for considering my application."
    ));
    paragraphs
}

fn casual_body(details: &UserDetails, style: &TemplateStyle) -> Vec<String> {
    let skills = details.filled_skills();
    let company = &details.company_name;

    let mut paragraphs = vec![
        format!(
            "I'm {}, and I'm excited about the {} role at {company}!",
            details.full_name, details.job_title
        ),
        format!(
            "What draws me to {company} is your innovative approach to solving real problems. \
             My experience with {} has prepared me to jump right in and make an impact.",
            join_skills(&skills)
        ),
    ];
    paragraphs.extend(present(&details.experience).map(str::to_string));
    paragraphs.extend(achievements(details, style));
    paragraphs.extend(present(&details.education).map(|education| {
        format!(
            "My educational background in {education} has given me a solid foundation in this field."
        )
    }));
    paragraphs.extend(
        present(&details.portfolio)
            .map(|url| format!("You can check out more of my work at my portfolio: {url}")),
    );
    paragraphs.push(format!(
        "I'd love to chat about how my background in {} could help drive {company}'s mission forward.",
        skills.first().copied().unwrap_or_default()
    ));
    paragraphs
}

fn technical_body(details: &UserDetails, style: &TemplateStyle) -> Vec<String> {
    let skills = join_skills(&details.filled_skills());
    let company = &details.company_name;

    let mut profile = vec![
        "Technical Profile:".to_string(),
        format!("- Core Competencies: {skills}"),
        format!("- Position of Interest: {}", details.job_title),
        format!("- Target Organization: {company}"),
    ];
    profile.extend(present(&details.education).map(|v| format!("- Education: {v}")));
    profile.extend(present(&details.portfolio).map(|v| format!("- Portfolio: {v}")));
    profile.extend(present(&details.linked_in).map(|v| format!("- LinkedIn: {v}")));

    let mut paragraphs = vec![
        format!("RE: Application for {} Position", details.job_title),
        profile.join("\n"),
        format!(
            "I am a results-driven professional with demonstrated expertise in {skills}. \
             My technical background and problem-solving approach align with {company}'s \
             technical requirements."
        ),
    ];
    paragraphs.extend(present(&details.experience).map(str::to_string));
    paragraphs.extend(achievements(details, style));
    paragraphs.push(format!(
        "I welcome the opportunity to discuss how my technical proficiency can contribute to \
         {company}'s objectives."
    ));
    paragraphs
}
