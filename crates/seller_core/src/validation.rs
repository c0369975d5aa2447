//! Field-level and record-level lead validation rules.
//!
//! # Responsibility
//! - Decide whether candidate lead data may enter the lead store.
//! - Return a pass/fail result with a human-readable reason.
//!
//! # Invariants
//! - Rules never mutate state; callers decide whether to proceed.
//! - The add flow checks required fields before email format.
//! - The edit flow checks email format on its own (name/company are read-only
//!   there).

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Highest accepted lead score.
pub const MAX_LEAD_SCORE: u8 = 100;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Lead fields that are mandatory in the add flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Company,
    Email,
}

impl LeadField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Email => "email",
        }
    }
}

impl Display for LeadField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Rejection reason returned by validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    MissingField(LeadField),
    /// Email does not match `local@domain.tld`.
    InvalidEmail(String),
    /// Score lies outside `[0, 100]`.
    ScoreOutOfRange(u8),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::InvalidEmail(value) => {
                write!(f, "please enter a valid email address (got `{value}`)")
            }
            Self::ScoreOutOfRange(score) => {
                write!(f, "score must be between 0 and {MAX_LEAD_SCORE}, got {score}")
            }
        }
    }
}

impl ValidationError {
    /// Stable, data-free reason code for log lines.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::MissingField(LeadField::Name) => "missing_name",
            Self::MissingField(LeadField::Company) => "missing_company",
            Self::MissingField(LeadField::Email) => "missing_email",
            Self::InvalidEmail(_) => "invalid_email",
            Self::ScoreOutOfRange(_) => "score_out_of_range",
        }
    }
}

impl Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

/// Returns whether `email` has the basic `local@domain.tld` shape.
///
/// The empty string is not a valid email.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns whether name, company and email are all non-empty after trimming.
pub fn is_required_fields_present(name: &str, company: &str, email: &str) -> bool {
    check_required_fields(name, company, email).is_ok()
}

/// Checks required fields in form order and reports the first missing one.
pub fn check_required_fields(name: &str, company: &str, email: &str) -> ValidationResult {
    let fields = [
        (LeadField::Name, name),
        (LeadField::Company, company),
        (LeadField::Email, email),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

/// Checks email format independently of presence.
pub fn check_email(email: &str) -> ValidationResult {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

pub fn check_score(score: u8) -> ValidationResult {
    if score > MAX_LEAD_SCORE {
        return Err(ValidationError::ScoreOutOfRange(score));
    }
    Ok(())
}
