//! Lead store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold leads in insertion/load order (not display order).
//! - Provide load/add/update/remove with validation at the write boundary.
//!
//! # Invariants
//! - Ids are unique within the store.
//! - A failed load leaves the store empty and usable.
//! - `add_lead` prepends, so the newest lead comes first before any sort.

use crate::model::lead::{Lead, LeadId, NewLead};
use crate::validation::ValidationError;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Initial data could not be read, decoded or accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Source file could not be read.
    Io { path: String, message: String },
    /// Payload is not a well-formed lead list.
    Malformed(String),
    /// Two records share one id.
    DuplicateId(LeadId),
    /// A record breaks a store invariant.
    Validation(ValidationError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "failed to read `{path}`: {message}"),
            Self::Malformed(message) => write!(f, "malformed lead data: {message}"),
            Self::DuplicateId(id) => write!(f, "duplicate lead id `{id}`"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for LoadError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for lead records.
pub trait LeadRepository {
    /// Replaces the whole collection. On error the store is left empty.
    fn load_leads(&mut self, leads: Vec<Lead>) -> Result<usize, LoadError>;
    /// Drops every record.
    fn clear_leads(&mut self);
    /// Validates the draft, assigns a fresh id and prepends the new lead.
    fn add_lead(&mut self, draft: NewLead) -> Result<Lead, ValidationError>;
    /// Replaces the record with a matching id. Returns `false` when no
    /// record matched and nothing changed.
    fn update_lead(&mut self, lead: Lead) -> Result<bool, ValidationError>;
    /// Removes the record with this id. Returns `false` when absent.
    fn remove_lead(&mut self, id: &LeadId) -> bool;
    fn get_lead(&self, id: &LeadId) -> Option<&Lead>;
    fn list_leads(&self) -> &[Lead];
}

/// Vec-backed lead store living for one console session.
#[derive(Debug, Default)]
pub struct InMemoryLeadRepository {
    leads: Vec<Lead>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &LeadId) -> Option<usize> {
        self.leads.iter().position(|lead| &lead.id == id)
    }
}

impl LeadRepository for InMemoryLeadRepository {
    fn load_leads(&mut self, leads: Vec<Lead>) -> Result<usize, LoadError> {
        self.clear_leads();

        for lead in &leads {
            lead.validate()?;
        }
        if let Some(id) = first_duplicate_id(&leads) {
            return Err(LoadError::DuplicateId(id.clone()));
        }

        let count = leads.len();
        self.leads = leads;
        Ok(count)
    }

    fn clear_leads(&mut self) {
        self.leads.clear();
    }

    fn add_lead(&mut self, draft: NewLead) -> Result<Lead, ValidationError> {
        draft.validate()?;

        let mut id = LeadId::generate();
        while self.position(&id).is_some() {
            id = LeadId::generate();
        }

        let lead = Lead::from_draft(id, draft);
        self.leads.insert(0, lead.clone());
        Ok(lead)
    }

    fn update_lead(&mut self, lead: Lead) -> Result<bool, ValidationError> {
        lead.validate()?;

        match self.position(&lead.id) {
            Some(index) => {
                self.leads[index] = lead;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_lead(&mut self, id: &LeadId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.leads.remove(index);
                true
            }
            None => false,
        }
    }

    fn get_lead(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| &lead.id == id)
    }

    fn list_leads(&self) -> &[Lead] {
        &self.leads
    }
}

fn first_duplicate_id(leads: &[Lead]) -> Option<&LeadId> {
    let mut seen = HashSet::with_capacity(leads.len());
    leads
        .iter()
        .map(|lead| &lead.id)
        .find(|id| !seen.insert(*id))
}
