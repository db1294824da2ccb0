//! HTTP handlers for the API.

pub mod characters;
pub mod prelude;
