//! Formatting rules shared by every template.

use chrono::NaiveDate;

use crate::models::details::{present, UserDetails};

/// Contact line: name, then whichever of email, phone, LinkedIn and portfolio are set.
pub fn format_header(details: &UserDetails) -> String {
    let mut parts = vec![details.full_name.clone()];
    if let Some(email) = present(&details.email) {
        parts.push(email.to_string());
    }
    if let Some(phone) = present(&details.phone) {
        parts.push(phone.to_string());
    }
    if let Some(url) = present(&details.linked_in) {
        parts.push(format!("LinkedIn: {url}"));
    }
    if let Some(url) = present(&details.portfolio) {
        parts.push(format!("Portfolio: {url}"));
    }
    parts.join(" | ")
}

/// `October 17, 2026`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Recipient address block, wrapped in newlines, or `""` when no recipient field is set.
pub fn format_recipient(details: &UserDetails) -> String {
    let name = present(&details.recipient_name);
    let title = present(&details.recipient_title);
    let address = present(&details.company_address);

    if name.is_none() && title.is_none() && address.is_none() {
        return String::new();
    }

    let mut block = String::new();
    if name.is_some() || title.is_some() {
        block.push_str(name.unwrap_or(""));
        if let Some(title) = title {
            block.push('\n');
            block.push_str(title);
        }
        block.push('\n');
    }
    if let Some(address) = address {
        block.push_str(&details.company_name);
        block.push('\n');
        block.push_str(address);
        block.push('\n');
    }
    format!("\n{block}\n")
}

pub fn join_skills(skills: &[&str]) -> String {
    skills.join(", ")
}

/// One `• ` line per item.
pub fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Opening shared by every template: `{header}\n\n{date}{recipient}\n\n{salutation}`.
pub fn letter_opening(details: &UserDetails, date: NaiveDate, salutation: &str) -> String {
    format!(
        "{}\n\n{}{}\n\n{}",
        format_header(details),
        format_date(date),
        format_recipient(details),
        salutation
    )
}
