//! Custom components.

pub mod character;

use crate::{error::WebResult, utils};
use leptos::{html::Input, prelude::*};
use leptos_router::{components::*, hooks::use_query_map};
use swjz_api::response as res;
use swjz_core::{
    display,
    search::{self, ListingState, Pagination},
    SearchQuery,
};

/// Search form. Submitting it starts a new search from the first page.
#[component]
pub fn SearchSidebar() -> impl IntoView {
    let current = use_query_map().get_untracked();
    let initial = move |key: &str| current.get(key).unwrap_or_default();

    let wordhead_ref = NodeRef::<Input>::new();
    let pinyin_ref = NodeRef::<Input>::new();
    let radical_ref = NodeRef::<Input>::new();
    let navigate = leptos_router::hooks::use_navigate();
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = |node_ref: NodeRef<Input>| node_ref.get().map(|i| i.value());
        let query = SearchQuery::from_params(
            value(wordhead_ref).as_deref(),
            value(pinyin_ref).as_deref(),
            value(radical_ref).as_deref(),
            None,
        );
        tracing::info!("Submitting search {query:?}");
        navigate(&query.href(), Default::default());
    };

    view! {
        <div class="box">
            <h2 class="subtitle has-text-weight-bold">"Tra cứu"</h2>
            <form on:submit=submit>
                <label class="label">
                    "Hán tự (Phồn thể)"
                    <input class="input" type="text" placeholder="Ví dụ: 天" value=initial("w") node_ref=wordhead_ref/>
                </label>
                <label class="label">
                    "Pinyin"
                    <input class="input" type="text" placeholder="Ví dụ: tian" value=initial("p") node_ref=pinyin_ref/>
                </label>
                <label class="label">
                    "Bộ thủ"
                    <input class="input" type="text" placeholder="Ví dụ: 一" value=initial("r") node_ref=radical_ref/>
                </label>
                <button class="button is-link is-fullwidth" type="submit">"Tra cứu"</button>
            </form>
        </div>
    }
}

/// A fetched page of search results.
#[component]
pub fn CharacterListing(query: SearchQuery, page: res::CharacterPage) -> impl IntoView {
    let status = format!(
        "{} · {} kết quả",
        search::page_status(&query, page.total),
        page.total
    );
    let body = match search::listing_state(&query, page.total, page.characters.len()) {
        ListingState::NoResults => {
            view! { <p class="has-text-grey is-italic">{display::NO_RESULTS}</p> }.into_any()
        }
        ListingState::EmptyDatabase => {
            view! { <p class="has-text-grey is-italic">{display::EMPTY_DATABASE}</p> }.into_any()
        }
        ListingState::PageOutOfRange => {
            view! { <p class="has-text-grey is-italic">{display::PAGE_OUT_OF_RANGE}</p> }.into_any()
        }
        ListingState::Rows => view! { <CharacterTable characters=page.characters/> }.into_any(),
    };
    let pagination = search::pagination(&query, page.total)
        .map(|pagination| view! { <PaginationControl pagination/> });

    view! {
        <div class="block">
            <p class="has-text-grey">{status}</p>
        </div>
        <div class="block">
            {body}
        </div>
        {pagination}
    }
}

#[component]
pub fn CharacterTable(characters: Vec<res::CharacterSummary>) -> impl IntoView {
    let rows = characters
        .into_iter()
        .map(|character| {
            let href = format!("/word/{}", character.id);
            let radical =
                display::or_placeholder(character.radical.as_deref(), display::DASH_PLACEHOLDER)
                    .to_string();
            let pinyin =
                display::or_placeholder(character.pinyin.as_deref(), display::DASH_PLACEHOLDER)
                    .to_string();
            let hanviet =
                display::or_placeholder(character.hanviet.as_deref(), display::HANVIET_PLACEHOLDER)
                    .to_string();
            let excerpt = display::excerpt(character.explanation.as_deref(), display::EXCERPT_CHARS);
            view! {
                <tr>
                    <td class="has-text-grey">{character.id}</td>
                    <td class="is-size-4 has-text-weight-bold">
                        <A href>{character.wordhead}</A>
                    </td>
                    <td>{radical}</td>
                    <td>{pinyin}</td>
                    <td>{hanviet}</td>
                    <td class="excerpt">{excerpt}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table is-fullwidth is-hoverable">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Hán tự"</th>
                    <th>"Bộ"</th>
                    <th>"Pinyin"</th>
                    <th>"Hán Việt"</th>
                    <th>"Thuyết Văn Nguyên Văn"</th>
                </tr>
            </thead>
            <tbody>
                {rows}
            </tbody>
        </table>
    }
}

/// Previous and next links that keep the active filters.
#[component]
pub fn PaginationControl(pagination: Pagination) -> impl IntoView {
    let link = |target: Option<SearchQuery>, label: &'static str| match target {
        Some(target) => view! {
            <span class="button">
                <A href=target.href()>{label}</A>
            </span>
        }
        .into_any(),
        None => view! {
            <span class="button is-static" aria-disabled="true">{label}</span>
        }
        .into_any(),
    };
    let previous = link(pagination.previous, "« Trước");
    let next = link(pagination.next, "Sau »");

    view! {
        <nav class="buttons is-centered mt-5" aria-label="pagination">
            {previous}
            {next}
        </nav>
    }
}

/// Renders a resource with `view`, which gets `None` while the resource is loading.
#[component]
pub fn ResourceView<T, F, V>(resource: LocalResource<WebResult<T>>, view: F) -> impl IntoView
where
    T: Clone + 'static + Send + Sync,
    F: Fn(Option<T>) -> V + Copy + 'static + Send + Sync,
    V: IntoView + 'static,
{
    let resource_view = move || match resource.get() {
        Some(Ok(res)) => Ok(view(Some(res)).into_view()),
        Some(Err(err)) => Err(err),
        None => Ok(view(None).into_view()),
    };
    view! {
        <Suspense fallback={move || view(None)}>
            <ErrorBoundary fallback={utils::errors_fallback}>
                {resource_view}
            </ErrorBoundary>
        </Suspense>
    }
}
