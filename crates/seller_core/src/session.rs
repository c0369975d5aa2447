//! Presentation-side console state.
//!
//! # Responsibility
//! - Hold what the UI keeps between events: search text, status filter,
//!   selected lead and the current page of each table.
//! - Apply the caller obligations around store mutations in one place.
//!
//! # Invariants
//! - The leads page returns to 1 whenever the filtered set can change
//!   (search text, status filter, add, edit-save, conversion).
//! - The opportunities page returns to 1 after a conversion.
//! - Edit-save and conversion clear the selection in the same user action.
//! - Nothing here is read by the pipeline implicitly; values are passed to
//!   `filter_and_sort_leads` and `Page::new` on every call.

use crate::model::lead::{Lead, NewLead};
use crate::model::opportunity::Opportunity;
use crate::repo::lead_repo::LeadRepository;
use crate::repo::opportunity_repo::OpportunityRepository;
use crate::service::console_service::{ConsoleService, ConvertError};
use crate::validation::ValidationError;
use crate::view::filter::StatusFilter;
use crate::view::pagination::{total_pages, Page, DEFAULT_ITEMS_PER_PAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSession {
    search_term: String,
    status_filter: StatusFilter,
    selected: Option<Lead>,
    leads_page: usize,
    opportunities_page: usize,
    items_per_page: usize,
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl ConsoleSession {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            selected: None,
            leads_page: 1,
            opportunities_page: 1,
            items_per_page,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn selected(&self) -> Option<&Lead> {
        self.selected.as_ref()
    }

    pub fn leads_page(&self) -> usize {
        self.leads_page
    }

    pub fn opportunities_page(&self) -> usize {
        self.opportunities_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        let search_term = search_term.into();
        if search_term != self.search_term {
            self.search_term = search_term;
            self.leads_page = 1;
        }
    }

    pub fn set_status_filter(&mut self, status_filter: StatusFilter) {
        if status_filter != self.status_filter {
            self.status_filter = status_filter;
            self.leads_page = 1;
        }
    }

    /// Moves to `page` when it lies within `[1, total_pages]`.
    ///
    /// Returns `false` and stays put otherwise, mirroring disabled
    /// previous/next controls at the boundaries.
    pub fn go_to_leads_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages {
            return false;
        }
        self.leads_page = page;
        true
    }

    pub fn go_to_opportunities_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages {
            return false;
        }
        self.opportunities_page = page;
        true
    }

    pub fn select(&mut self, lead: Lead) {
        self.selected = Some(lead);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Rows on the current page of the filtered, sorted leads table.
    pub fn visible_leads<'a, L, O>(&self, service: &'a ConsoleService<L, O>) -> Vec<&'a Lead>
    where
        L: LeadRepository,
        O: OpportunityRepository,
    {
        let displayed = service.displayed_leads(&self.search_term, self.status_filter);
        Page::new(&displayed, self.leads_page, self.items_per_page)
            .items
            .to_vec()
    }

    /// Total pages of the filtered leads table for the current inputs.
    pub fn leads_total_pages<L, O>(&self, service: &ConsoleService<L, O>) -> usize
    where
        L: LeadRepository,
        O: OpportunityRepository,
    {
        let displayed = service.displayed_leads(&self.search_term, self.status_filter);
        total_pages(displayed.len(), self.items_per_page)
    }

    /// Current page of the opportunities table.
    pub fn opportunities_view<'a, L, O>(
        &self,
        service: &'a ConsoleService<L, O>,
    ) -> Page<'a, Opportunity>
    where
        L: LeadRepository,
        O: OpportunityRepository,
    {
        Page::new(
            service.opportunities(),
            self.opportunities_page,
            self.items_per_page,
        )
    }

    /// Submits the add-lead form.
    pub fn add_lead<L, O>(
        &mut self,
        service: &mut ConsoleService<L, O>,
        draft: NewLead,
    ) -> Result<Lead, ValidationError>
    where
        L: LeadRepository,
        O: OpportunityRepository,
    {
        let lead = service.add_lead(draft)?;
        self.leads_page = 1;
        Ok(lead)
    }

    /// Saves the detail-panel edit and closes the panel.
    ///
    /// A rejected edit keeps the panel open with the selection intact.
    pub fn save_edit<L, O>(
        &mut self,
        service: &mut ConsoleService<L, O>,
        edited: Lead,
    ) -> Result<bool, ValidationError>
    where
        L: LeadRepository,
        O: OpportunityRepository,
    {
        let matched = service.save_lead_edit(edited)?;
        self.selected = None;
        self.leads_page = 1;
        Ok(matched)
    }

    /// Converts the selected lead and closes the panel.
    ///
    /// Returns `Ok(None)` when nothing is selected. The selection is cleared
    /// even when the lead is no longer in the store.
    pub fn convert_selected<L, O>(
        &mut self,
        service: &mut ConsoleService<L, O>,
    ) -> Result<Option<Opportunity>, ConvertError>
    where
        L: LeadRepository,
        O: OpportunityRepository,
    {
        let Some(lead) = self.selected.take() else {
            return Ok(None);
        };
        let opportunity = service.convert_lead(&lead)?;
        self.leads_page = 1;
        self.opportunities_page = 1;
        Ok(Some(opportunity))
    }
}
