//! Types for responses from the backend to the frontend.

use serde::{Deserialize, Serialize};
pub use swjz_core::{Character as CharacterDetails, CharacterSummary, DuanNote, Variant};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub characters: Vec<CharacterSummary>,
    /// Number of matches on all pages.
    pub total: i64,
    pub page: u64,
}
