use serde::{Deserialize, Serialize};

/// The applicant and target-job record a letter is generated from.
///
/// Every field defaults to empty so a partially filled form deserializes.
/// Optional text fields count as "not set" when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub company_name: String,
    /// Never empty; a single `""` is the placeholder for an untouched form.
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub experience: String,
    pub education: String,
    #[serde(rename = "linkedIn")]
    pub linked_in: String,
    pub portfolio: String,
    pub custom_signature: String,
    pub salutation: String,
    pub recipient_name: String,
    pub recipient_title: String,
    pub company_address: String,
}

/// Form field a validation message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    JobTitle,
    CompanyName,
    Skills,
    #[serde(rename = "linkedIn")]
    LinkedIn,
    Portfolio,
}

/// Returns the value when it holds anything other than whitespace.
pub fn present(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl UserDetails {
    /// An empty form: one blank skill slot and one blank achievement slot.
    pub fn blank() -> Self {
        UserDetails {
            skills: vec![String::new()],
            achievements: vec![String::new()],
            ..Default::default()
        }
    }

    /// Restores the non-empty `skills` invariant on records from outside.
    pub fn normalize(mut self) -> Self {
        if self.skills.is_empty() {
            self.skills.push(String::new());
        }
        self
    }

    /// Skills that hold text, in encounter order.
    pub fn filled_skills(&self) -> Vec<&str> {
        self.skills.iter().filter_map(|s| present(s)).collect()
    }

    /// Achievements that hold text, in encounter order.
    pub fn filled_achievements(&self) -> Vec<&str> {
        self.achievements.iter().filter_map(|a| present(a)).collect()
    }

    pub fn add_skill(&mut self) {
        self.skills.push(String::new());
    }

    /// Removes a skill slot. Removing the last slot leaves a blank placeholder.
    pub fn remove_skill(&mut self, index: usize) {
        if index < self.skills.len() {
            self.skills.remove(index);
        }
        if self.skills.is_empty() {
            self.skills.push(String::new());
        }
    }

    pub fn add_achievement(&mut self) {
        self.achievements.push(String::new());
    }

    pub fn remove_achievement(&mut self, index: usize) {
        if index < self.achievements.len() {
            self.achievements.remove(index);
        }
        if self.achievements.is_empty() {
            self.achievements.push(String::new());
        }
    }
}
