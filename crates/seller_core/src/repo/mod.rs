//! Store layer contracts and in-memory implementations.
//!
//! # Responsibility
//! - Own the canonical lead and opportunity collections.
//! - Keep mutation paths narrow so view code only ever reads.
//!
//! # Invariants
//! - Lead writes must pass `Lead::validate()` (or `NewLead::validate()`)
//!   before the collection changes.
//! - Operations on unknown ids are reported no-ops, never errors.
//! - Every operation completes synchronously before the caller proceeds, so a
//!   persistent backend would plug in behind the same traits.

pub mod lead_repo;
pub mod opportunity_repo;
