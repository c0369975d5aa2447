//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire config, logging, the startup lead load and the view pipeline.
//! - Print one page of the leads table for quick local sanity checks.
//!
//! Usage: `seller_cli [search-term] [All|New|Contacted|Qualified|Lost] [page]`

use log::info;
use seller_core::{
    init_logging_from_config, ConsoleConfig, ConsoleSession, InMemoryConsoleService, StatusFilter,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    let mut args = std::env::args().skip(1);
    let search_term = args.next().unwrap_or_default();
    let status_filter = match args.next() {
        Some(value) => match StatusFilter::parse(&value) {
            Some(filter) => filter,
            None => {
                eprintln!("unknown status filter `{value}`");
                return ExitCode::FAILURE;
            }
        },
        None => StatusFilter::All,
    };
    let requested_page = args
        .next()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(1);

    let mut service = InMemoryConsoleService::default();
    let loaded = match &config.leads_path {
        Some(path) => service.load_leads_file(path),
        None => service.load_bundled(),
    };
    if let Err(err) = loaded {
        eprintln!("Failed to load leads data: {err}");
    }

    let mut session = ConsoleSession::new(config.items_per_page);
    session.set_search_term(search_term);
    session.set_status_filter(status_filter);
    let total_pages = session.leads_total_pages(&service);
    if requested_page != 1 && !session.go_to_leads_page(requested_page, total_pages) {
        eprintln!("page {requested_page} is outside 1..={total_pages}");
    }

    let rows = session.visible_leads(&service);
    if rows.is_empty() {
        println!("No leads found.");
        return ExitCode::SUCCESS;
    }

    println!("{:<24} {:<24} {:<10} {:>5}", "NAME", "COMPANY", "STATUS", "SCORE");
    for lead in &rows {
        println!(
            "{:<24} {:<24} {:<10} {:>5}",
            lead.name, lead.company, lead.status, lead.score
        );
    }
    if total_pages > 1 {
        println!("page {} of {}", session.leads_page(), total_pages);
    }

    info!(
        "event=cli_render module=cli status=ok rows={} page={}",
        rows.len(),
        session.leads_page()
    );
    ExitCode::SUCCESS
}
