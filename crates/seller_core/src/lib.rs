//! Core state and derived-view logic for the seller console.
//! This crate is the single source of truth for lead/opportunity invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod session;
pub mod validation;
pub mod view;

pub use config::{ConfigError, ConsoleConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::lead::{Lead, LeadId, LeadStatus, NewLead};
pub use model::opportunity::{Opportunity, OpportunityId, OpportunityStage};
pub use repo::lead_repo::{InMemoryLeadRepository, LeadRepository, LoadError};
pub use repo::opportunity_repo::{InMemoryOpportunityRepository, OpportunityRepository};
pub use service::console_service::{ConsoleService, ConvertError, InMemoryConsoleService};
pub use session::ConsoleSession;
pub use validation::{
    check_email, check_required_fields, is_required_fields_present, is_valid_email, LeadField,
    ValidationError,
};
pub use view::filter::{filter_and_sort_leads, StatusFilter};
pub use view::pagination::{paginate, total_pages, Page, PageSummary, DEFAULT_ITEMS_PER_PAGE};

/// Minimal health-check API for smoke wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
