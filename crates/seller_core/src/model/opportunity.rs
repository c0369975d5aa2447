//! Opportunity domain model.
//!
//! # Invariants
//! - Opportunities are created only by lead conversion and start at
//!   `Prospecting` with no amount.
//! - Records are never mutated or deleted once created.

use crate::model::lead::Lead;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque opportunity identifier (`opp-{uuid}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityId(String);

impl OpportunityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn generate() -> Self {
        Self(format!("opp-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OpportunityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Position of an opportunity in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpportunityStage {
    Prospecting,
    Proposal,
    #[serde(rename = "Closed-Won")]
    ClosedWon,
    #[serde(rename = "Closed-Lost")]
    ClosedLost,
}

impl OpportunityStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prospecting => "Prospecting",
            Self::Proposal => "Proposal",
            Self::ClosedWon => "Closed-Won",
            Self::ClosedLost => "Closed-Lost",
        }
    }
}

impl Display for OpportunityStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Sales deal created from a converted lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: OpportunityId,
    pub name: String,
    pub stage: OpportunityStage,
    /// No console path sets this yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Copied from the source lead's `company`.
    pub account_name: String,
}

impl Opportunity {
    /// Snapshots a lead into a fresh `Prospecting` opportunity.
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            id: OpportunityId::generate(),
            name: format!("{}'s Opportunity", lead.name),
            stage: OpportunityStage::Prospecting,
            amount: None,
            account_name: lead.company.clone(),
        }
    }
}
