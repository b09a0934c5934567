//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: the `/api/{service}` forwarding
//! endpoint used by the browser, the Leptos SSR pages, and the compiled
//! client assets under `/pkg`.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::Json;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes: remote function forwarding plus health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/api/{service}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR + static client assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS bundles.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    /// Number of services with a resolved upstream.
    pub services: usize,
}

async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", services: state.config.endpoints.len() })
}
