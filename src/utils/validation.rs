//! Request payload validation

use crate::core::models::{FieldViolation, ItemPayload, NewItem};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// Email pattern: local@domain.tld
pub static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9-]+\.[A-Za-z]{2,}$")
        .map_err(|e| tracing::error!("Failed to compile email regex: {}", e))
        .ok()
});

/// Validates item payloads received over HTTP
pub struct ItemValidator;

impl ItemValidator {
    /// Check every rule and return all violations, or the validated fields.
    pub fn validate(payload: &ItemPayload) -> Result<NewItem, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let name = required(&payload.name, "name", "Name can't be blank", &mut violations);
        if let Some(name) = &payload.name {
            if name.chars().count() > NAME_MAX_CHARS {
                violations.push(FieldViolation::new(
                    "name",
                    "Name can't have more than 100 characters",
                ));
            }
        }

        let description = required(
            &payload.description,
            "description",
            "Description can't be blank",
            &mut violations,
        );
        if let Some(description) = &payload.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                violations.push(FieldViolation::new(
                    "description",
                    "Description can't have more than 255 characters",
                ));
            }
        }

        let status = required(
            &payload.status,
            "status",
            "Status can't be blank",
            &mut violations,
        );

        let email = required(&payload.email, "email", "Email can't be blank", &mut violations);
        if let Some(email) = &payload.email {
            if !is_valid_email(email) {
                violations.push(FieldViolation::new("email", "Invalid email format"));
            }
        }

        match (name, description, status, email) {
            (Some(name), Some(description), Some(status), Some(email))
                if violations.is_empty() =>
            {
                Ok(NewItem {
                    name,
                    description,
                    status,
                    email,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Check if a string matches the accepted email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

fn required(
    value: &Option<String>,
    field: &'static str,
    message: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.clone()),
        _ => {
            violations.push(FieldViolation::new(field, message));
            None
        }
    }
}
