#![allow(clippy::unit_arg)]

pub mod components;
pub mod context;
pub mod error;
pub mod pages;
pub mod utils;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, ParamSegment, StaticSegment};
use pages::*;

/// Wraps the content in a basic layout and a final fallback error boundary which should never actually trigger
#[component]
pub fn App() -> impl IntoView {
    tracing::info!("Rendering app");

    context::initialise_context();

    view! {
            <Stylesheet id="swjz" href="/pkg/swjz.css"/>
            <Meta name="description" content="Tra cứu Thuyết Văn Giải Tự phiên bản Tiếng Việt"/>
            <Title text="Thuyết Văn Giải Tự"/>
            <div class="is-flex is-flex-direction-column" style="min-height: 100vh">
                <div class="section is-flex is-flex-grow-1">
                    <div class="container">
                        <ErrorBoundary fallback={utils::errors_fallback}>
                            <Content/>
                        </ErrorBoundary>
                    </div>
                </div>
                <footer class="footer">
                    <div class="container">
                        "Hệ thống tra cứu Thuyết Văn Giải Tự phiên bản Tiếng Việt."
                    </div>
                </footer>
            </div>
    }
}

/// Contains the header and router
#[component]
pub fn Content() -> impl IntoView {
    view! {
        <Router>
            <nav class="navbar is-flex is-vcentered">
                <A exact=true href="/">"Thuyết Văn Giải Tự"</A>
            </nav>
            <main>
                <FlatRoutes fallback=|| "Không tìm thấy trang.">
                    <Route
                        path=StaticSegment("/")
                        view=Search
                    />
                    <Route
                        path=(StaticSegment("word"), ParamSegment("id"))
                        view=Word
                    />
                </FlatRoutes>
            </main>
        </Router>
    }
}
