//! Lead filter/sort pipeline.
//!
//! Applied in a fixed order: status filter, then text filter, then a stable
//! sort by score descending. Equal scores keep their store order.

use crate::model::lead::{Lead, LeadStatus};
use std::fmt::{Display, Formatter};

/// Status selector; `All` passes every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    /// Parses `All` or a lead status label.
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        LeadStatus::parse(value).map(Self::Only)
    }

    pub fn matches(self, status: LeadStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl From<LeadStatus> for StatusFilter {
    fn from(value: LeadStatus) -> Self {
        Self::Only(value)
    }
}

/// Returns whether the already-lowercased `needle` occurs in the lead name or
/// company. An empty needle matches everything.
fn matches_search(lead: &Lead, needle: &str) -> bool {
    needle.is_empty()
        || lead.name.to_lowercase().contains(needle)
        || lead.company.to_lowercase().contains(needle)
}

/// Derives the display sequence for the leads table.
pub fn filter_and_sort_leads<'a>(
    leads: &'a [Lead],
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<&'a Lead> {
    let needle = search_term.to_lowercase();
    let mut displayed: Vec<&Lead> = leads
        .iter()
        .filter(|lead| status_filter.matches(lead.status))
        .filter(|lead| matches_search(lead, &needle))
        .collect();

    // `sort_by` is stable, which keeps store order among equal scores.
    displayed.sort_by(|a, b| b.score.cmp(&a.score));
    displayed
}
