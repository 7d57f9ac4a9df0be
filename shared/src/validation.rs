//! Validation utilities for farm plot input

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Boundary validation failures, each naming the offending field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be a date in YYYY-MM-DD format")]
    InvalidDate { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} is required")]
    Required { field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidDate { field }
            | ValidationError::NotPositive { field }
            | ValidationError::Required { field } => field,
        }
    }
}

/// Parse a calendar date in strict `YYYY-MM-DD` form
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    // chrono accepts unpadded fields; the boundary format does not
    if value.len() != 10 {
        return Err(ValidationError::InvalidDate { field });
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate { field })
}

pub fn parse_sowing_date(value: &str) -> Result<NaiveDate, ValidationError> {
    parse_iso_date("sowingDate", value)
}

pub fn validate_positive(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(())
}

/// Plot area must be strictly positive
pub fn validate_area(area: Decimal) -> Result<(), ValidationError> {
    validate_positive("area", area)
}

/// Crop and soil names may be anything except blank
pub fn validate_label(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}
