//! Validation gate in front of the template registry.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use crate::letters::stats::{letter_stats, LetterStats};
use crate::letters::templates::TemplateId;
use crate::letters::validation::{validate, ValidationErrors};
use crate::models::details::UserDetails;

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLetter {
    pub template: TemplateId,
    pub letter_date: NaiveDate,
    pub letter: String,
    pub stats: LetterStats,
}

/// The date printed on letters generated now.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders without validating. Used for speculative previews.
pub fn render(template: TemplateId, details: &UserDetails, date: NaiveDate) -> GeneratedLetter {
    let letter = template.generate(details, date);
    GeneratedLetter {
        template,
        letter_date: date,
        stats: letter_stats(&letter),
        letter,
    }
}

/// Validates `details` and renders only when every field passes.
pub fn generate_letter(
    template: TemplateId,
    details: &UserDetails,
    date: NaiveDate,
) -> Result<GeneratedLetter, ValidationErrors> {
    let errors = validate(details);
    if !errors.is_empty() {
        warn!(
            "Rejected {template} letter: {} invalid field(s)",
            errors.fields.len()
        );
        return Err(errors);
    }

    let generated = render(template, details, date);
    info!(
        "Generated {template} letter ({} characters)",
        generated.stats.characters
    );
    Ok(generated)
}
