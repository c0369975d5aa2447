//! Derived views over store contents.
//!
//! # Responsibility
//! - Derive the display-ordered lead list from search text and status filter.
//! - Slice ordered sequences into fixed-size pages.
//!
//! # Invariants
//! - Every function here is pure: same inputs give the same output, and
//!   inputs are never mutated.
//! - Current filter and page are passed in by the caller on every call; no
//!   view state is held here.

pub mod filter;
pub mod pagination;
