//! Frequently used imports for handlers.

pub use crate::{
    domain,
    error::{ServerError, ServerResult},
    SwjzState,
};
pub use axum::{
    extract::{Path, Query, State},
    Json,
};
pub use swjz_api::{request as req, response as res};
pub use tracing::instrument;
