//! Opportunity store contract and in-memory implementation.
//!
//! # Invariants
//! - Append-only; insertion order is preserved.
//! - Ids are pre-populated by the caller (lead conversion).

use crate::model::opportunity::{Opportunity, OpportunityId};

/// Store interface for opportunity records.
pub trait OpportunityRepository {
    /// Appends one opportunity and returns its id.
    fn add_opportunity(&mut self, opportunity: Opportunity) -> OpportunityId;
    fn list_opportunities(&self) -> &[Opportunity];
}

/// Vec-backed opportunity store living for one console session.
#[derive(Debug, Default)]
pub struct InMemoryOpportunityRepository {
    opportunities: Vec<Opportunity>,
}

impl InMemoryOpportunityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OpportunityRepository for InMemoryOpportunityRepository {
    fn add_opportunity(&mut self, opportunity: Opportunity) -> OpportunityId {
        let id = opportunity.id.clone();
        self.opportunities.push(opportunity);
        id
    }

    fn list_opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }
}
