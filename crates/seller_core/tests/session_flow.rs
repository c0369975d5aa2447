use seller_core::{
    ConsoleSession, ConvertError, InMemoryConsoleService, Lead, LeadId, LeadStatus, NewLead,
    StatusFilter, ValidationError,
};

fn lead(index: usize, status: LeadStatus) -> Lead {
    Lead {
        id: LeadId::new(format!("{index}")),
        name: format!("Lead {index:02}"),
        company: if index % 2 == 0 { "Acme" } else { "Globex" }.to_string(),
        email: format!("lead{index}@example.com"),
        source: "Website".to_string(),
        score: (index * 4) as u8,
        status,
    }
}

fn service_with(count: usize) -> InMemoryConsoleService {
    let mut service = InMemoryConsoleService::default();
    let leads = (1..=count).map(|i| lead(i, LeadStatus::New)).collect();
    service.load_leads(leads).unwrap();
    service
}

#[test]
fn changing_filters_resets_leads_page() {
    let service = service_with(23);
    let mut session = ConsoleSession::default();

    assert!(session.go_to_leads_page(3, session.leads_total_pages(&service)));
    assert_eq!(session.visible_leads(&service).len(), 3);

    session.set_search_term("lead");
    assert_eq!(session.leads_page(), 1);
    assert_eq!(session.visible_leads(&service).len(), 10);

    assert!(session.go_to_leads_page(2, session.leads_total_pages(&service)));
    session.set_status_filter(StatusFilter::Only(LeadStatus::New));
    assert_eq!(session.leads_page(), 1);
}

#[test]
fn unchanged_filter_value_keeps_page() {
    let service = service_with(23);
    let mut session = ConsoleSession::default();
    session.go_to_leads_page(2, session.leads_total_pages(&service));

    session.set_search_term("");
    session.set_status_filter(StatusFilter::All);
    assert_eq!(session.leads_page(), 2);
}

#[test]
fn navigation_outside_bounds_is_refused() {
    let service = service_with(23);
    let mut session = ConsoleSession::default();
    let total = session.leads_total_pages(&service);

    assert_eq!(total, 3);
    assert!(!session.go_to_leads_page(0, total));
    assert!(!session.go_to_leads_page(4, total));
    assert_eq!(session.leads_page(), 1);
}

#[test]
fn convert_selected_clears_selection_and_resets_pages() {
    let mut service = service_with(23);
    let mut session = ConsoleSession::default();
    session.go_to_leads_page(2, session.leads_total_pages(&service));

    let picked = session.visible_leads(&service)[0].clone();
    session.select(picked.clone());

    let opportunity = session.convert_selected(&mut service).unwrap().unwrap();

    assert_eq!(opportunity.name, format!("{}'s Opportunity", picked.name));
    assert!(session.selected().is_none());
    assert_eq!(session.leads_page(), 1);
    assert_eq!(session.opportunities_page(), 1);
    assert!(service.get_lead(&picked.id).is_none());
    assert_eq!(session.opportunities_view(&service).items.len(), 1);
}

#[test]
fn convert_of_removed_selection_fails_and_clears_selection() {
    let mut service = service_with(3);
    let mut session = ConsoleSession::default();
    let picked = service.leads()[0].clone();
    session.select(picked.clone());
    assert!(service.remove_lead(&picked.id));

    let err = session.convert_selected(&mut service).unwrap_err();

    assert_eq!(err, ConvertError::LeadNotFound(picked.id));
    assert!(session.selected().is_none());
    assert!(service.opportunities().is_empty());
    assert_eq!(service.leads().len(), 2);
}

#[test]
fn convert_without_selection_is_a_noop() {
    let mut service = service_with(3);
    let mut session = ConsoleSession::default();

    assert_eq!(session.convert_selected(&mut service).unwrap(), None);
    assert_eq!(service.leads().len(), 3);
}

#[test]
fn rejected_edit_keeps_panel_open() {
    let mut service = service_with(3);
    let mut session = ConsoleSession::default();
    let original = service.leads()[0].clone();
    session.select(original.clone());

    let mut edited = original.clone();
    edited.email = "broken".to_string();
    let err = session.save_edit(&mut service, edited).unwrap_err();

    assert_eq!(err, ValidationError::InvalidEmail("broken".to_string()));
    assert_eq!(session.selected(), Some(&original));
    assert_eq!(service.leads()[0], original);
}

#[test]
fn accepted_edit_updates_store_and_closes_panel() {
    let mut service = service_with(3);
    let mut session = ConsoleSession::default();
    let mut edited = service.leads()[1].clone();
    session.select(edited.clone());

    edited.email = "new.address@example.org".to_string();
    edited.status = LeadStatus::Qualified;
    assert!(session.save_edit(&mut service, edited.clone()).unwrap());

    assert!(session.selected().is_none());
    assert_eq!(service.leads()[1], edited);
}

#[test]
fn edit_ignores_fields_outside_email_and_status() {
    let mut service = service_with(3);
    let mut session = ConsoleSession::default();
    let original = service.leads()[0].clone();
    session.select(original.clone());

    let mut edited = original.clone();
    edited.name = String::new();
    edited.company = "   ".to_string();
    edited.source = String::new();
    edited.score = 3;
    edited.email = "fresh@example.org".to_string();
    edited.status = LeadStatus::Contacted;
    assert!(session.save_edit(&mut service, edited).unwrap());

    let stored = service.get_lead(&original.id).unwrap();
    assert_eq!(stored.name, original.name);
    assert_eq!(stored.company, original.company);
    assert_eq!(stored.source, original.source);
    assert_eq!(stored.score, original.score);
    assert_eq!(stored.email, "fresh@example.org");
    assert_eq!(stored.status, LeadStatus::Contacted);
}

#[test]
fn added_lead_appears_before_sorting_and_resets_page() {
    let mut service = service_with(23);
    let mut session = ConsoleSession::default();
    session.go_to_leads_page(3, session.leads_total_pages(&service));

    let added = session
        .add_lead(
            &mut service,
            NewLead {
                name: "Zed".to_string(),
                company: "Initech".to_string(),
                email: "zed@initech.com".to_string(),
                score: 100,
                ..NewLead::default()
            },
        )
        .unwrap();

    assert_eq!(service.leads()[0].id, added.id);
    assert_eq!(session.leads_page(), 1);
    assert_eq!(session.visible_leads(&service)[0].id, added.id);
}

#[test]
fn opportunities_paginate_with_session_page_size() {
    let mut service = service_with(12);
    let mut session = ConsoleSession::new(5);
    let leads = service.leads().to_vec();
    for lead in &leads {
        service.convert_lead(lead).unwrap();
    }

    let first = session.opportunities_view(&service);
    assert_eq!(first.total_pages, 3);
    assert!(first.needs_controls());

    assert!(session.go_to_opportunities_page(3, first.total_pages));
    assert_eq!(session.opportunities_view(&service).items.len(), 2);
}
