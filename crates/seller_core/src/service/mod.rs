//! Console use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep the presentation layer decoupled from store details.

pub mod console_service;
