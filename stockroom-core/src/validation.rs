//! Input checks shared by the HTTP layer and the stores.
//!
//! The server validates request bodies before calling a store; the stores
//! run the same checks again so that no caller can persist a bad record.
//! Every failing field contributes one message.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::StoreError;
use crate::models::{NewFeedbackItem, NewInventoryItem};

/// Trimmed, checked inventory fields
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryFields {
    pub name: String,
    pub description: String,
    pub quantity: u64,
    pub price: f64,
}

/// Trimmed, checked feedback fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackFields {
    pub date: String,
    pub title: String,
    pub email: String,
    pub description: String,
}

pub fn inventory(input: &NewInventoryItem) -> Result<InventoryFields, StoreError> {
    let mut problems = Vec::new();

    let name = required(&mut problems, "name", &input.name);
    let description = required(&mut problems, "description", &input.description);

    let quantity = u64::try_from(input.quantity).unwrap_or_else(|_| {
        problems.push("quantity must not be less than 0".to_string());
        0
    });

    if !input.price.is_finite() {
        problems.push("price must be a finite number".to_string());
    } else if input.price < 0.0 {
        problems.push("price must not be less than 0".to_string());
    }

    finish(problems)?;
    Ok(InventoryFields {
        name,
        description,
        quantity,
        price: input.price,
    })
}

pub fn feedback(input: &NewFeedbackItem) -> Result<FeedbackFields, StoreError> {
    let mut problems = Vec::new();

    if !is_iso_date(&input.date) {
        problems.push("date must be a valid ISO 8601 date string".to_string());
    }
    let title = required(&mut problems, "title", &input.title);
    let email = input.email.trim().to_string();
    if !is_email(&email) {
        problems.push("email must be an email".to_string());
    }
    let description = required(&mut problems, "description", &input.description);

    finish(problems)?;
    Ok(FeedbackFields {
        date: input.date.clone(),
        title,
        email,
        description,
    })
}

fn required(problems: &mut Vec<String>, field: &str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        problems.push(format!("{field} should not be empty"));
    }
    trimmed.to_string()
}

fn finish(problems: Vec<String>) -> Result<(), StoreError> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(StoreError::InvalidInput(problems))
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and zone-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps
pub fn is_iso_date(value: &str) -> bool {
    if !has_calendar_prefix(value) {
        return false;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

// chrono accepts unpadded fields, ISO 8601 does not
fn has_calendar_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 10
        && bytes.iter().take(10).enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Structural email check: `local@domain.tld`
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    is_email_local_part(local) && is_email_domain(domain)
}

fn is_email_local_part(local: &str) -> bool {
    const SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-.";

    !local.is_empty()
        && local.len() <= 64
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
}

fn is_email_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || domain.len() > 253 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}
