//! Form validation. One message per failing field; an empty map means valid.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::models::details::{Field, UserDetails};

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Field-level failures for a record. Generation is blocked while non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .fields.len())]
pub struct ValidationErrors {
    pub fields: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    fn add(&mut self, field: Field, message: &str) {
        self.fields.insert(field, message.to_string());
    }
}

/// Checks every field rule against `details`. Pure; never short-circuits.
pub fn validate(details: &UserDetails) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if details.full_name.trim().is_empty() {
        errors.add(Field::FullName, "Name is required");
    }

    if details.email.trim().is_empty() {
        errors.add(Field::Email, "Email is required");
    } else if !EMAIL_SHAPE.is_match(&details.email) {
        errors.add(Field::Email, "Invalid email format");
    }

    if details.phone.trim().is_empty() {
        errors.add(Field::Phone, "Phone is required");
    }
    if details.job_title.trim().is_empty() {
        errors.add(Field::JobTitle, "Job title is required");
    }
    if details.company_name.trim().is_empty() {
        errors.add(Field::CompanyName, "Company name is required");
    }

    // Only the first slot is required; later blank slots are ignored.
    let first_skill = details.skills.first().map(|s| s.trim()).unwrap_or("");
    if first_skill.is_empty() {
        errors.add(Field::Skills, "At least one skill is required");
    }

    if !details.linked_in.is_empty() && !details.linked_in.contains("linkedin.com") {
        errors.add(Field::LinkedIn, "Please enter a valid LinkedIn URL");
    }
    if !details.portfolio.is_empty() && !details.portfolio.starts_with("http") {
        errors.add(Field::Portfolio, "Please enter a valid portfolio URL");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> UserDetails {
        UserDetails {
            full_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "555-1234".into(),
            job_title: "Engineer".into(),
            company_name: "Acme".into(),
            skills: vec!["Go".into(), "Rust".into()],
            ..UserDetails::blank()
        }
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        assert!(validate(&valid_details()).is_empty());
    }

    #[test]
    fn test_blank_form_reports_every_required_field() {
        let errors = validate(&UserDetails::blank());
        for field in [
            Field::FullName,
            Field::Email,
            Field::Phone,
            Field::JobTitle,
            Field::CompanyName,
            Field::Skills,
        ] {
            assert!(errors.get(field).is_some(), "missing error for {field:?}");
        }
        assert_eq!(errors.fields.len(), 6);
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let mut details = valid_details();
        details.full_name = "   ".into();
        assert_eq!(validate(&details).get(Field::FullName), Some("Name is required"));
    }

    #[test]
    fn test_malformed_email() {
        let mut details = valid_details();
        for bad in ["jane", "jane@x", "jane @x.com", "@x.com", "jane@@x.com"] {
            details.email = bad.into();
            assert_eq!(
                validate(&details).get(Field::Email),
                Some("Invalid email format"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_only_first_skill_is_required() {
        let mut details = valid_details();
        details.skills = vec!["Go".into(), "".into()];
        assert!(validate(&details).is_empty());

        details.skills = vec![" ".into(), "Go".into()];
        assert_eq!(
            validate(&details).get(Field::Skills),
            Some("At least one skill is required")
        );
    }

    #[test]
    fn test_empty_skill_list_is_rejected() {
        let mut details = valid_details();
        details.skills.clear();
        assert!(validate(&details).get(Field::Skills).is_some());
    }

    #[test]
    fn test_linkedin_must_mention_domain() {
        let mut details = valid_details();
        details.linked_in = "https://example.com/jane".into();
        assert!(validate(&details).get(Field::LinkedIn).is_some());
        details.linked_in = "https://www.linkedin.com/in/jane".into();
        assert!(validate(&details).is_empty());
    }

    #[test]
    fn test_portfolio_must_start_with_http() {
        let mut details = valid_details();
        details.portfolio = "jane.dev".into();
        assert!(validate(&details).get(Field::Portfolio).is_some());
        details.portfolio = "https://jane.dev".into();
        assert!(validate(&details).is_empty());
    }
}
