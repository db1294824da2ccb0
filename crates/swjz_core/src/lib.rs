//! SWJZ core types and functions.

pub mod character;
pub mod display;
pub mod search;

pub use character::{Character, CharacterSummary, DuanNote, Variant};
pub use search::{SearchAction, SearchQuery, PAGE_SIZE};
