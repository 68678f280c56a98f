use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::letters::templates::TemplateId;
use crate::models::details::UserDetails;

/// One successful generation. Never mutated once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterVersion {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// The date printed in the letter; regenerating with it reproduces `letter`.
    pub letter_date: NaiveDate,
    pub template: TemplateId,
    pub letter: String,
    /// Owned snapshot, independent of the live record.
    pub details: UserDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionSummary {
    pub index: usize,
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub template: TemplateId,
}

impl LetterVersion {
    pub fn new(
        template: TemplateId,
        details: &UserDetails,
        letter: String,
        timestamp: DateTime<Utc>,
        letter_date: NaiveDate,
    ) -> Self {
        LetterVersion {
            id: Uuid::new_v4(),
            timestamp,
            letter_date,
            template,
            letter,
            details: details.clone(),
        }
    }

    pub fn summary(&self, index: usize) -> VersionSummary {
        VersionSummary {
            index,
            id: self.id,
            timestamp: self.timestamp,
            template: self.template,
        }
    }
}
