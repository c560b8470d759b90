//! Form handling: one explicit form struct per entity, each with a
//! `validate()` that either yields a typed draft or reports every problem at
//! once. Create and edit run through the same validation.

mod artist;
mod show;
mod venue;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

use thiserror::Error;

/// Aggregated validation failures for one submission.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", .messages.join("; "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

/// Collects field problems while the form is checked field by field.
#[derive(Default)]
struct Issues {
    messages: Vec<String>,
}

impl Issues {
    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationError> {
        if self.messages.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                messages: self.messages,
            })
        }
    }
}

const MAX_FIELD_LEN: usize = 120;
const MAX_LINK_LEN: usize = 500;

fn required(value: &str, label: &str, issues: &mut Issues) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        issues.push(format!("{} is required", label));
    }
    bounded(trimmed, label, MAX_FIELD_LEN, issues)
}

fn optional(value: &str, label: &str, issues: &mut Issues) -> String {
    bounded(value.trim(), label, MAX_FIELD_LEN, issues)
}

fn link(value: &str, label: &str, issues: &mut Issues) -> String {
    bounded(value.trim(), label, MAX_LINK_LEN, issues)
}

fn bounded(trimmed: &str, label: &str, max: usize, issues: &mut Issues) -> String {
    if trimmed.chars().count() > max {
        issues.push(format!("{} must be at most {} characters", label, max));
    }
    trimmed.to_owned()
}

/// Phone numbers are free-form but limited to dialable characters.
fn phone(value: &str, issues: &mut Issues) -> String {
    let trimmed = value.trim();
    if !trimmed.is_empty()
        && !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')' | '.'))
    {
        issues.push("phone may only contain digits, spaces and + - ( ) .");
    }
    bounded(trimmed, "phone", MAX_FIELD_LEN, issues)
}

/// HTML checkboxes submit a value only when ticked.
fn checkbox(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "on" | "true" | "1"
    )
}

fn entity_id(value: &str, label: &str, issues: &mut Issues) -> i64 {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => id,
        _ => {
            issues.push(format!("{} must be a positive integer id", label));
            0
        }
    }
}
