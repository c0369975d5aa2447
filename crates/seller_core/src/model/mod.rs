//! Domain model for the seller console.
//!
//! # Responsibility
//! - Define the lead and opportunity records shared by stores and views.
//!
//! # Invariants
//! - Every record is identified by an id that is unique within its store.
//! - An opportunity keeps no live reference back to the lead it came from.

pub mod lead;
pub mod opportunity;
