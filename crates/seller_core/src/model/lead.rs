//! Lead domain model.
//!
//! # Responsibility
//! - Define the canonical lead record and its status progression.
//! - Provide the add-form draft shape (`NewLead`) with console defaults.
//!
//! # Invariants
//! - `id` is stable for the record lifetime and never reused.
//! - `score` is always within `[0, 100]`; deserialization rejects other values.

use crate::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque lead identifier.
///
/// Loaded data carries its own ids, so the value is kept as text. Fresh ids
/// use the `lead-{uuid}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh id that does not collide with earlier generated ids.
    pub fn generate() -> Self {
        Self(format!("lead-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LeadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for LeadId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Lead status progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Lost,
}

impl LeadStatus {
    /// All statuses in form option order.
    pub const ALL: [LeadStatus; 4] = [Self::New, Self::Contacted, Self::Qualified, Self::Lost];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::Lost => "Lost",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Canonical lead record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LeadWire")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub company: String,
    pub email: String,
    /// Free-text origin label, e.g. `Website` or `Referral`.
    pub source: String,
    /// Quality ranking in `[0, 100]`; primary display sort key.
    pub score: u8,
    pub status: LeadStatus,
}

impl Lead {
    /// Builds a lead from add-form data and a caller-provided id.
    pub fn from_draft(id: LeadId, draft: NewLead) -> Self {
        Self {
            id,
            name: draft.name,
            company: draft.company,
            email: draft.email,
            source: draft.source,
            score: draft.score,
            status: draft.status,
        }
    }

    /// Validates record-level invariants held by the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::check_score(self.score)
    }
}

/// Lead fields minus `id`, as collected by the add form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub company: String,
    pub email: String,
    pub source: String,
    pub score: u8,
    pub status: LeadStatus,
}

impl Default for NewLead {
    fn default() -> Self {
        Self {
            name: String::new(),
            company: String::new(),
            email: String::new(),
            source: "Website".to_string(),
            score: 50,
            status: LeadStatus::New,
        }
    }
}

impl NewLead {
    /// Runs the add-flow rules: required fields, then email shape, then score.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::check_required_fields(&self.name, &self.company, &self.email)?;
        validation::check_email(&self.email)?;
        validation::check_score(self.score)
    }
}

#[derive(Deserialize)]
struct LeadWire {
    id: LeadId,
    name: String,
    company: String,
    email: String,
    #[serde(default)]
    source: String,
    score: u8,
    status: LeadStatus,
}

impl TryFrom<LeadWire> for Lead {
    type Error = ValidationError;

    fn try_from(value: LeadWire) -> Result<Self, Self::Error> {
        let lead = Lead {
            id: value.id,
            name: value.name,
            company: value.company,
            email: value.email,
            source: value.source,
            score: value.score,
            status: value.status,
        };
        lead.validate()?;
        Ok(lead)
    }
}

#[cfg(test)]
mod tests {
    use super::{LeadId, LeadStatus, NewLead};

    #[test]
    fn generated_ids_are_distinct() {
        let a = LeadId::generate();
        let b = LeadId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("lead-"));
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(LeadStatus::parse("qualified"), Some(LeadStatus::Qualified));
        assert_eq!(LeadStatus::parse(" Lost "), Some(LeadStatus::Lost));
        assert_eq!(LeadStatus::parse("Won"), None);
    }

    #[test]
    fn new_lead_defaults_match_add_form() {
        let draft = NewLead::default();
        assert_eq!(draft.source, "Website");
        assert_eq!(draft.score, 50);
        assert_eq!(draft.status, LeadStatus::New);
        assert!(draft.name.is_empty());
    }
}
