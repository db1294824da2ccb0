//! Functions and types dealing with data specific to SWJZ's problem domain.

pub mod characters;
