//! Web backend for SWJZ.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod schema;
pub mod utils;

use crate::handlers::characters;
use axum::{extract::FromRef, http::Method, routing::get, Router};
use config::Config;
use diesel::{
    prelude::*,
    r2d2::{ConnectionManager, Pool},
};
use eyre::WrapErr;
use leptos::prelude::*;
use leptos_axum::LeptosRoutes;
use leptos_meta::*;
use std::{fmt::Debug, ops::Deref, sync::Arc, time::Duration};
use swjz_web::App;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub type SwjzPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct SwjzState(Arc<SwjzStateCore>);

impl Deref for SwjzState {
    type Target = SwjzStateCore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for SwjzState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Swjz")
    }
}

pub struct SwjzStateCore {
    pub pool: SwjzPool,
    pub leptos_options: LeptosOptions,
}

impl FromRef<SwjzState> for LeptosOptions {
    fn from_ref(input: &SwjzState) -> Self {
        input.leptos_options.clone()
    }
}

pub fn router(state: SwjzState) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/characters",
                    Router::new()
                        .route("/", get(characters::search))
                        .route("/{id}", get(characters::get_one))
                        .route("/by-wordhead/{wordhead}", get(characters::get_by_wordhead)),
                )
                .layer(cors),
        )
        .leptos_routes(
            &state,
            leptos_axum::generate_route_list(|| {
                tracing::info!("Generating route list");
                view! { <App/> }
            }),
            {
                let leptos_options = state.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler::<SwjzState, _>(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="vi">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

pub fn router_from_config(config: &Config) -> eyre::Result<Router<()>> {
    // conservative pool config aimed at not using the database too much
    // the url holds the access key so it's kept out of the error
    let pool = Pool::builder()
        .min_idle(Some(0))
        .idle_timeout(Some(Duration::from_secs(30)))
        .build(ConnectionManager::new(config.database_url.as_str()))
        .wrap_err("Failed to set up the database connection pool")?;
    let leptos_options = leptos::prelude::get_configuration(None)
        .wrap_err("Failed to read leptos configuration")?
        .leptos_options;

    let state = SwjzState(Arc::new(SwjzStateCore {
        pool,
        leptos_options,
    }));
    Ok(self::router(state))
}
