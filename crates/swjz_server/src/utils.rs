//! Various utilities.

pub mod diesel;
