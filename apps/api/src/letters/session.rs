//! The editing session: live form record, selected style, displayed letter
//! and version history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::letters::generator::{generate_letter, render, GeneratedLetter};
use crate::letters::templates::TemplateId;
use crate::letters::validation::ValidationErrors;
use crate::letters::versioning::{VersionError, VersionStore};
use crate::models::details::UserDetails;
use crate::models::version::LetterVersion;

/// Outcome of a successful submit.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub version_index: usize,
    pub version_id: Uuid,
    #[serde(flatten)]
    pub generated: GeneratedLetter,
}

#[derive(Debug)]
pub struct Session {
    details: UserDetails,
    template: TemplateId,
    letter: Option<String>,
    versions: VersionStore,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            details: UserDetails::blank(),
            template: TemplateId::Formal,
            letter: None,
            versions: VersionStore::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn letter(&self) -> Option<&str> {
        self.letter.as_deref()
    }

    pub fn versions(&self) -> &VersionStore {
        &self.versions
    }

    pub fn update_details(&mut self, details: UserDetails) {
        self.details = details.normalize();
    }

    /// Applies an in-place edit to the live record, keeping its invariants.
    pub fn edit_details(&mut self, edit: impl FnOnce(&mut UserDetails)) {
        edit(&mut self.details);
        if self.details.skills.is_empty() {
            self.details.skills.push(String::new());
        }
    }

    pub fn select_template(&mut self, template: TemplateId) {
        self.template = template;
    }

    /// Renders the live record with `template` without recording anything.
    pub fn preview(&self, template: TemplateId, date: NaiveDate) -> GeneratedLetter {
        render(template, &self.details, date)
    }

    /// Validates and renders the live record with the selected template, then
    /// records the result as a new version.
    pub fn submit(
        &mut self,
        now: DateTime<Utc>,
        date: NaiveDate,
    ) -> Result<Submission, ValidationErrors> {
        let generated = generate_letter(self.template, &self.details, date)?;
        let version = LetterVersion::new(
            self.template,
            &self.details,
            generated.letter.clone(),
            now,
            date,
        );
        let version_id = version.id;
        let version_index = self.versions.append(version);
        self.letter = Some(generated.letter.clone());
        Ok(Submission {
            version_index,
            version_id,
            generated,
        })
    }

    /// Makes version `index` the live state: its record, template and letter.
    pub fn restore(&mut self, index: i64) -> Result<&LetterVersion, VersionError> {
        let version = self.versions.restore(index)?;
        self.details = version.details.clone();
        self.template = version.template;
        self.letter = Some(version.letter.clone());
        info!("Restored letter version {index} ({})", version.template);
        Ok(version)
    }
}
