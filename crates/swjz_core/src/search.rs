//! Search parameters, pagination and the decisions made on search results.

use crate::character::CharacterSummary;
use std::num::IntErrorKind;
use url::form_urlencoded;

/// Number of characters per listing page.
pub const PAGE_SIZE: i64 = 10;

/// A search as given in the URL: `w`, `p`, `r` and `page`.
///
/// Blank filters are treated as missing and the page is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    /// Substring of the headword, matched case-insensitively.
    pub wordhead: Option<String>,
    /// Substring of the pinyin, matched case-insensitively.
    pub pinyin: Option<String>,
    /// Exact radical.
    pub radical: Option<String>,
    /// 1-based.
    pub page: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            wordhead: None,
            pinyin: None,
            radical: None,
            page: 1,
        }
    }
}

impl SearchQuery {
    pub fn from_params(
        wordhead: Option<&str>,
        pinyin: Option<&str>,
        radical: Option<&str>,
        page: Option<&str>,
    ) -> Self {
        Self {
            wordhead: filter(wordhead),
            pinyin: filter(pinyin),
            radical: filter(radical),
            page: parse_page(page),
        }
    }

    /// Whether any filter is active, as opposed to browsing the whole dictionary.
    pub fn is_searching(&self) -> bool {
        self.wordhead.is_some() || self.pinyin.is_some() || self.radical.is_some()
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    /// Saturates for pages too large to address, which can only ever be empty.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.page.saturating_sub(1))
            .unwrap_or(i64::MAX)
            .saturating_mul(PAGE_SIZE)
    }

    /// The same search on another page.
    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Encodes the search as URL query parameters.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(w) = &self.wordhead {
            serializer.append_pair("w", w);
        }
        if let Some(p) = &self.pinyin {
            serializer.append_pair("p", p);
        }
        if let Some(r) = &self.radical {
            serializer.append_pair("r", r);
        }
        serializer.append_pair("page", &self.page.to_string());
        serializer.finish()
    }

    /// Link to the search page for this search.
    pub fn href(&self) -> String {
        format!("/?{}", self.to_query_string())
    }
}

fn filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// numbers past u64::MAX are still numbers, they just point past the end
fn parse_page(page: Option<&str>) -> u64 {
    page.and_then(|p| match p.trim().parse::<u64>() {
        Ok(p) => Some(p),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    })
    .filter(|p| *p >= 1)
    .unwrap_or(1)
}

/// Number of pages needed for `total` results.
pub fn total_pages(total: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + PAGE_SIZE - 1) / PAGE_SIZE
    }
}

/// What to do with a fetched page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Go straight to the character's detail page.
    Redirect(i32),
    /// Show the results as a list.
    List,
}

/// Decides whether a search result should skip the listing.
///
/// Only an active search with exactly one match redirects. Browsing never does.
pub fn decide(query: &SearchQuery, total: i64, rows: &[CharacterSummary]) -> SearchAction {
    match rows.first() {
        Some(only) if query.is_searching() && total == 1 => SearchAction::Redirect(only.id),
        _ => SearchAction::List,
    }
}

/// Which body the listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    /// A search matched nothing.
    NoResults,
    /// Browsing, but the dictionary has no entries.
    EmptyDatabase,
    /// There are results, just not on the requested page.
    PageOutOfRange,
    Rows,
}

pub fn listing_state(query: &SearchQuery, total: i64, row_count: usize) -> ListingState {
    match (row_count, total, query.is_searching()) {
        (0, t, true) if t <= 0 => ListingState::NoResults,
        (0, t, false) if t <= 0 => ListingState::EmptyDatabase,
        (0, _, _) => ListingState::PageOutOfRange,
        _ => ListingState::Rows,
    }
}

/// Previous and next links for a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub total_pages: i64,
    /// `None` on the first page.
    pub previous: Option<SearchQuery>,
    /// `None` on or past the last page.
    pub next: Option<SearchQuery>,
}

/// Builds the pagination control, or `None` if it shouldn't be shown.
pub fn pagination(query: &SearchQuery, total: i64) -> Option<Pagination> {
    let pages = total_pages(total);
    if total <= 0 || pages <= 1 {
        return None;
    }
    let current = query.page;
    let previous = (current > 1).then(|| query.with_page(current - 1));
    let next = u64::try_from(pages)
        .is_ok_and(|pages| current < pages)
        .then(|| query.with_page(current + 1));
    Some(Pagination {
        total_pages: pages,
        previous,
        next,
    })
}

/// The "page k / n" text, which reflects the requested page even past the end.
pub fn page_status(query: &SearchQuery, total: i64) -> String {
    format!("Trang {} / {}", query.page, total_pages(total).max(1))
}

#[cfg(test)]
mod test {
    use super::*;

    fn summary(id: i32, wordhead: &str) -> CharacterSummary {
        CharacterSummary {
            id,
            wordhead: wordhead.to_string(),
            pinyin: None,
            radical: None,
            explanation: None,
            hanviet: None,
        }
    }

    fn searching(w: &str) -> SearchQuery {
        SearchQuery::from_params(Some(w), None, None, None)
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(SearchQuery::from_params(None, None, None, None).page, 1);
        assert_eq!(SearchQuery::from_params(None, None, None, Some("abc")).page, 1);
        assert_eq!(SearchQuery::from_params(None, None, None, Some("0")).page, 1);
        assert_eq!(SearchQuery::from_params(None, None, None, Some("-2")).page, 1);
        assert_eq!(SearchQuery::from_params(None, None, None, Some("3")).page, 3);
    }

    #[test]
    fn huge_pages_are_kept() {
        let query = SearchQuery::from_params(None, None, None, Some("5000000000"));
        assert_eq!(query.page, 5_000_000_000);
        assert_eq!(query.offset(), 49_999_999_990);
        assert_eq!(page_status(&query, 25), "Trang 5000000000 / 3");

        let query = SearchQuery::from_params(None, None, None, Some("99999999999999999999999"));
        assert_eq!(query.page, u64::MAX);
        assert_eq!(query.offset(), i64::MAX);
        assert_eq!(listing_state(&query, 25, 0), ListingState::PageOutOfRange);
        assert!(pagination(&query, 25).unwrap().next.is_none());
    }

    #[test]
    fn blank_filters_are_missing() {
        let query = SearchQuery::from_params(Some(""), Some("  "), None, None);
        assert!(!query.is_searching());
        let query = SearchQuery::from_params(None, None, Some(" 一 "), None);
        assert!(query.is_searching());
        assert_eq!(query.radical.as_deref(), Some("一"));
    }

    #[test]
    fn offsets_by_page() {
        let query = SearchQuery::default();
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.with_page(3).offset(), 20);
    }

    #[test]
    fn counts_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(9353), 936);
    }

    #[test]
    fn redirects_on_single_search_match() {
        let rows = vec![summary(42, "天")];
        assert_eq!(decide(&searching("天"), 1, &rows), SearchAction::Redirect(42));
    }

    #[test]
    fn browsing_never_redirects() {
        let rows = vec![summary(42, "天")];
        assert_eq!(decide(&SearchQuery::default(), 1, &rows), SearchAction::List);
    }

    #[test]
    fn multiple_or_no_matches_list() {
        let rows = vec![summary(1, "天"), summary(2, "吞")];
        assert_eq!(decide(&searching("天"), 2, &rows), SearchAction::List);
        assert_eq!(decide(&searching("天"), 0, &[]), SearchAction::List);
        // a single match that isn't on the requested page
        assert_eq!(decide(&searching("天").with_page(2), 1, &[]), SearchAction::List);
    }

    #[test]
    fn distinguishes_empty_listings() {
        assert_eq!(listing_state(&searching("天"), 0, 0), ListingState::NoResults);
        assert_eq!(
            listing_state(&SearchQuery::default(), 0, 0),
            ListingState::EmptyDatabase
        );
        assert_eq!(
            listing_state(&SearchQuery::default().with_page(99), 25, 0),
            ListingState::PageOutOfRange
        );
        assert_eq!(listing_state(&searching("天"), 3, 3), ListingState::Rows);
    }

    #[test]
    fn pagination_keeps_filters() {
        let query = SearchQuery::from_params(Some("天"), Some("tian"), Some("一"), Some("2"));
        let pagination = pagination(&query, 35).unwrap();
        assert_eq!(pagination.total_pages, 4);
        assert_eq!(
            pagination.previous.unwrap().to_query_string(),
            "w=%E5%A4%A9&p=tian&r=%E4%B8%80&page=1"
        );
        assert_eq!(
            pagination.next.unwrap().href(),
            "/?w=%E5%A4%A9&p=tian&r=%E4%B8%80&page=3"
        );
    }

    #[test]
    fn pagination_stops_at_the_edges() {
        let first = pagination(&SearchQuery::default(), 25).unwrap();
        assert!(first.previous.is_none());
        assert!(first.next.is_some());

        let last = pagination(&SearchQuery::default().with_page(3), 25).unwrap();
        assert!(last.previous.is_some());
        assert!(last.next.is_none());

        let past = pagination(&SearchQuery::default().with_page(9), 25).unwrap();
        assert!(past.next.is_none());
    }

    #[test]
    fn pagination_hidden_for_single_page() {
        assert!(pagination(&SearchQuery::default(), 0).is_none());
        assert!(pagination(&SearchQuery::default(), 10).is_none());
        assert!(pagination(&SearchQuery::default(), 11).is_some());
    }

    #[test]
    fn page_status_shows_requested_page() {
        assert_eq!(page_status(&SearchQuery::default().with_page(7), 25), "Trang 7 / 3");
        assert_eq!(page_status(&SearchQuery::default(), 0), "Trang 1 / 1");
    }
}
