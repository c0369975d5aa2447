//! Console use-case service.
//!
//! # Responsibility
//! - Own the lead and opportunity stores for one console session.
//! - Provide the startup load, add, edit-save and conversion use-cases.
//! - Expose the derived lead view for the presentation layer.
//!
//! # Invariants
//! - Failed loads leave an empty, usable lead store plus a displayable message.
//! - Validation failures never mutate a store.
//! - Conversion either moves a lead into the opportunity store or changes
//!   nothing; no caller can observe the lead in both stores or in neither.

use crate::model::lead::{Lead, LeadId, NewLead};
use crate::model::opportunity::Opportunity;
use crate::repo::lead_repo::{InMemoryLeadRepository, LeadRepository, LoadError};
use crate::repo::opportunity_repo::{InMemoryOpportunityRepository, OpportunityRepository};
use crate::seed;
use crate::validation::{self, ValidationError};
use crate::view::filter::{filter_and_sort_leads, StatusFilter};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Conversion was requested for a lead that is not in the lead store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    LeadNotFound(LeadId),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadNotFound(id) => write!(f, "lead not found: {id}"),
        }
    }
}

impl Error for ConvertError {}

/// Service facade over the two stores.
pub struct ConsoleService<L: LeadRepository, O: OpportunityRepository> {
    leads: L,
    opportunities: O,
    load_error: Option<String>,
}

/// Service backed by the session-scoped in-memory stores.
pub type InMemoryConsoleService =
    ConsoleService<InMemoryLeadRepository, InMemoryOpportunityRepository>;

impl Default for InMemoryConsoleService {
    fn default() -> Self {
        Self::new(
            InMemoryLeadRepository::new(),
            InMemoryOpportunityRepository::new(),
        )
    }
}

impl<L: LeadRepository, O: OpportunityRepository> ConsoleService<L, O> {
    pub fn new(leads: L, opportunities: O) -> Self {
        Self {
            leads,
            opportunities,
            load_error: None,
        }
    }

    /// Replaces the lead store with `leads`.
    ///
    /// On failure the store is empty and `load_error()` holds the message.
    pub fn load_leads(&mut self, leads: Vec<Lead>) -> Result<usize, LoadError> {
        self.finish_load(Ok(leads))
    }

    /// Loads the bundled data set.
    pub fn load_bundled(&mut self) -> Result<usize, LoadError> {
        self.finish_load(seed::bundled_leads())
    }

    /// Loads a JSON lead array.
    pub fn load_leads_json(&mut self, json: &str) -> Result<usize, LoadError> {
        self.finish_load(seed::decode_leads(json))
    }

    /// Loads a JSON lead array from disk.
    pub fn load_leads_file(&mut self, path: &Path) -> Result<usize, LoadError> {
        self.finish_load(seed::read_leads_file(path))
    }

    /// User-visible message from the last failed load, if any.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Validates and adds a lead; the new lead is first in store order.
    pub fn add_lead(&mut self, draft: NewLead) -> Result<Lead, ValidationError> {
        match self.leads.add_lead(draft) {
            Ok(lead) => {
                info!(
                    "event=lead_add module=console status=ok lead_id={} total={}",
                    lead.id,
                    self.leads.list_leads().len()
                );
                Ok(lead)
            }
            Err(err) => {
                warn!(
                    "event=lead_add module=console status=rejected reason={}",
                    err.reason_code()
                );
                Err(err)
            }
        }
    }

    /// Saves the detail-panel edit of a lead.
    ///
    /// Only `email` and `status` are taken from `edited`; every other field
    /// keeps its stored value. Email format is checked on its own here.
    /// Returns `Ok(false)` when the id is unknown; the store is left
    /// untouched in that case.
    pub fn save_lead_edit(&mut self, edited: Lead) -> Result<bool, ValidationError> {
        if let Err(err) = validation::check_email(&edited.email) {
            warn!(
                "event=lead_update module=console status=rejected lead_id={} reason=invalid_email",
                edited.id
            );
            return Err(err);
        }

        let Some(stored) = self.leads.get_lead(&edited.id) else {
            warn!(
                "event=lead_update module=console status=noop lead_id={}",
                edited.id
            );
            return Ok(false);
        };
        let merged = Lead {
            email: edited.email,
            status: edited.status,
            ..stored.clone()
        };

        let lead_id = merged.id.clone();
        let matched = self.leads.update_lead(merged).map_err(|err| {
            warn!(
                "event=lead_update module=console status=rejected lead_id={lead_id} reason={}",
                err.reason_code()
            );
            err
        })?;
        if matched {
            info!("event=lead_update module=console status=ok lead_id={lead_id}");
        } else {
            warn!("event=lead_update module=console status=noop lead_id={lead_id}");
        }
        Ok(matched)
    }

    /// Removes a lead by id; `false` when it was not present.
    pub fn remove_lead(&mut self, id: &LeadId) -> bool {
        self.leads.remove_lead(id)
    }

    /// Converts a live lead into a `Prospecting` opportunity.
    ///
    /// The opportunity snapshot is taken from `lead` as passed in. The lead
    /// must still be in the store, otherwise `ConvertError::LeadNotFound` is
    /// returned and neither store changes.
    pub fn convert_lead(&mut self, lead: &Lead) -> Result<Opportunity, ConvertError> {
        if self.leads.get_lead(&lead.id).is_none() {
            warn!(
                "event=lead_convert module=console status=rejected lead_id={} reason=not_found",
                lead.id
            );
            return Err(ConvertError::LeadNotFound(lead.id.clone()));
        }

        let opportunity = Opportunity::from_lead(lead);
        self.opportunities.add_opportunity(opportunity.clone());
        self.leads.remove_lead(&lead.id);

        info!(
            "event=lead_convert module=console status=ok lead_id={} opportunity_id={}",
            lead.id, opportunity.id
        );
        Ok(opportunity)
    }

    pub fn get_lead(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.get_lead(id)
    }

    /// Leads in store order.
    pub fn leads(&self) -> &[Lead] {
        self.leads.list_leads()
    }

    /// Opportunities in creation order.
    pub fn opportunities(&self) -> &[Opportunity] {
        self.opportunities.list_opportunities()
    }

    /// Filtered and score-sorted leads for display.
    pub fn displayed_leads(&self, search_term: &str, status_filter: StatusFilter) -> Vec<&Lead> {
        filter_and_sort_leads(self.leads.list_leads(), search_term, status_filter)
    }

    fn finish_load(&mut self, source: Result<Vec<Lead>, LoadError>) -> Result<usize, LoadError> {
        let result = source.and_then(|leads| self.leads.load_leads(leads));
        match &result {
            Ok(count) => {
                self.load_error = None;
                info!("event=leads_load module=console status=ok count={count}");
            }
            Err(err) => {
                // A decode failure never reached the store, so clear it here.
                self.leads.clear_leads();
                self.load_error = Some(format!("Failed to load leads data: {err}"));
                error!(
                    "event=leads_load module=console status=error error_code=leads_load_failed error={err}"
                );
            }
        }
        result
    }
}
