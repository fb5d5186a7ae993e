// src/application/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::news::value_objects::is_two_letter_code;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const MAX_TEXT_LENGTH: usize = 255;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    pub field: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub invalid_value: Value,
}

/// Collects every violation for a request before failing, so callers see all
/// problems at once.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn push(&mut self, field: &str, message: impl Into<String>, invalid_value: impl Into<Value>) {
        self.0.push(Violation {
            field: field.to_string(),
            message: message.into(),
            invalid_value: invalid_value.into(),
        });
    }

    pub fn check_max_length(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            if value.chars().count() > MAX_TEXT_LENGTH {
                self.push(
                    field,
                    format!("This value is too long. It should have {MAX_TEXT_LENGTH} characters or less."),
                    value,
                );
            }
        }
    }

    pub fn check_code(&mut self, field: &str, label: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !is_two_letter_code(value) {
                self.push(field, format!("{label} must be a 2-letter code"), value);
            }
        }
    }

    pub fn parse_date(&mut self, field: &str, value: Option<&str>) -> Option<NaiveDate> {
        let value = value?;
        match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.push(field, format!("Invalid {field} date format"), value);
                None
            }
        }
    }

    pub fn check_range(&mut self, field: &str, label: &str, value: u32, min: u32, max: u32) {
        if !(min..=max).contains(&value) {
            self.push(
                field,
                format!("{label} must be between {min} and {max}"),
                value,
            );
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected violations.
    pub fn finish<T>(self, value: T) -> ApplicationResult<T> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(ApplicationError::InvalidRequest(self.0))
        }
    }
}
