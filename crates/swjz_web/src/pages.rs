//! Top level pages.

use crate::{
    components::{character::*, *},
    context::get_client,
    error::WebResult,
    utils,
};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_query_map, params::Params};
use swjz_api::response as res;
use swjz_core::{
    display,
    search::{self, SearchAction},
    SearchQuery,
};

#[derive(Debug, Clone, PartialEq)]
enum SearchState {
    Loading,
    /// A search matched exactly one character.
    Redirecting(i32),
    Listing {
        query: SearchQuery,
        page: res::CharacterPage,
    },
}

// results fetched for anything but the current search are never shown
fn search_state(
    current: &SearchQuery,
    fetched: Option<(SearchQuery, res::CharacterPage)>,
) -> SearchState {
    match fetched {
        Some((query, page)) if query == *current => {
            match search::decide(&query, page.total, &page.characters) {
                SearchAction::Redirect(id) => SearchState::Redirecting(id),
                SearchAction::List => SearchState::Listing { query, page },
            }
        }
        Some((stale, _)) => {
            tracing::debug!("Discarding stale results for {stale:?}");
            SearchState::Loading
        }
        None => SearchState::Loading,
    }
}

#[component]
pub fn Search() -> impl IntoView {
    tracing::info!("Rendering Search");

    let query_map = use_query_map();
    let query = Memo::new(move |_| {
        query_map.with(|params| {
            SearchQuery::from_params(
                params.get("w").as_deref(),
                params.get("p").as_deref(),
                params.get("r").as_deref(),
                params.get("page").as_deref(),
            )
        })
    });

    // resources
    let search_res = LocalResource::new(move || {
        let query = query.get();
        let client = get_client();
        async move {
            let page = match client.search(&query).await {
                Ok(page) => page,
                Err(err) => {
                    tracing::error!("Failed to search characters: {err}");
                    res::CharacterPage {
                        characters: Vec::new(),
                        total: 0,
                        page: query.page,
                    }
                }
            };
            WebResult::Ok((query, page))
        }
    });

    let search_view = move |fetched: Option<_>| match search_state(&query.get(), fetched) {
        SearchState::Loading => utils::loading_fallback(display::LOADING).into_any(),
        SearchState::Redirecting(id) => {
            tracing::info!("Single match, redirecting to {id}");
            view! { <Redirect path=format!("/word/{id}") /> }.into_any()
        }
        SearchState::Listing { query, page } => {
            view! { <CharacterListing query page/> }.into_any()
        }
    };

    view! {
        <div class="columns">
            <div class="column is-one-quarter">
                <SearchSidebar/>
            </div>
            <div class="column">
                <ResourceView resource=search_res view=search_view/>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Params)]
pub struct WordParams {
    id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
enum WordState {
    Loading,
    NotFound,
    Found(Box<res::CharacterDetails>),
}

fn word_state(
    current: Option<i32>,
    fetched: Option<(Option<i32>, Option<res::CharacterDetails>)>,
) -> WordState {
    match fetched {
        Some((id, character)) if id == current => match character {
            Some(character) => WordState::Found(Box::new(character)),
            None => WordState::NotFound,
        },
        Some((stale, _)) => {
            tracing::debug!("Discarding stale character {stale:?}");
            WordState::Loading
        }
        None => WordState::Loading,
    }
}

#[component]
pub fn Word() -> impl IntoView {
    let params = leptos_router::hooks::use_params::<WordParams>();
    let id = Memo::new(move |_| params.get().ok().and_then(|p| p.id));

    // resources
    let character_res = LocalResource::new(move || {
        let id = id.get();
        let client = get_client();
        async move {
            let Some(id) = id else {
                tracing::info!("Invalid character id");
                return WebResult::Ok((None, None));
            };
            tracing::info!("Rendering Word {id}");
            let character = match client.get_character(id).await {
                Ok(character) => character,
                Err(err) => {
                    tracing::error!("Failed to fetch character {id}: {err}");
                    None
                }
            };
            WebResult::Ok((Some(id), character))
        }
    });

    let character_view = move |fetched: Option<_>| match word_state(id.get(), fetched) {
        WordState::Loading => utils::loading_fallback(display::LOADING).into_any(),
        WordState::NotFound => view! {
            <div class="block has-text-centered">
                <p class="block">{display::NOT_FOUND}</p>
                <A href="/">"← Quay lại tra cứu"</A>
            </div>
        }
        .into_any(),
        WordState::Found(character) => {
            let title = format!("{} · Thuyết Văn Giải Tự", character.wordhead);
            view! {
                <Title text=title/>
                <CharacterView character=*character/>
                <div class="block mt-6">
                    <A href="/">"← Quay lại trang chủ"</A>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="columns">
            <div class="column is-one-quarter is-hidden-mobile">
                <SearchSidebar/>
            </div>
            <div class="column">
                <ResourceView resource=character_res view=character_view/>
            </div>
        </div>
    }
}
