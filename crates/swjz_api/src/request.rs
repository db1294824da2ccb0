//! Types for requests from the frontend to the backend.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use swjz_core::SearchQuery;

/// Query parameters of `GET /api/characters`.
///
/// The page is kept as a string so that a non-numeric page falls back to the first one
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Search<'a> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<Cow<'a, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Cow<'a, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<Cow<'a, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Cow<'a, str>>,
}

impl Search<'_> {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::from_params(
            self.w.as_deref(),
            self.p.as_deref(),
            self.r.as_deref(),
            self.page.as_deref(),
        )
    }
}
