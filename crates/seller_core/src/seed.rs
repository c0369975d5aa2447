//! Initial lead data sources.
//!
//! # Responsibility
//! - Decode lead lists from JSON (bundled data set or an external file).
//! - Map read/decode failures into `LoadError` for display.
//!
//! # Invariants
//! - Decoding never touches a store; callers hand the result to `load_leads`.

use crate::model::lead::Lead;
use crate::repo::lead_repo::LoadError;
use std::path::Path;

const BUNDLED_LEADS_JSON: &str = include_str!("../data/leads.json");

/// Decodes the lead data set compiled into this crate.
pub fn bundled_leads() -> Result<Vec<Lead>, LoadError> {
    decode_leads(BUNDLED_LEADS_JSON)
}

/// Decodes a JSON array of lead records.
pub fn decode_leads(json: &str) -> Result<Vec<Lead>, LoadError> {
    serde_json::from_str(json).map_err(|err| LoadError::Malformed(err.to_string()))
}

/// Reads and decodes a lead data file.
pub fn read_leads_file(path: &Path) -> Result<Vec<Lead>, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|err| LoadError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    decode_leads(&json)
}
