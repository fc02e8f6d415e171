//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos app with SSR at `/`, the compiled client bundle under
//! `/pkg`, and a liveness probe. There are no API routes; all application
//! state lives in the browser session.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use ecolearn_client::app::{App, shell};
use leptos::config::LeptosOptions;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Probe routes, independent of Leptos configuration.
fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR routes plus static assets.
fn leptos_routes(leptos_options: &LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .leptos_routes(leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone())
        .nest_service("/pkg", ServeDir::new(site_root_path.join(leptos_options.site_pkg_dir.as_ref())))
}

/// Full application router with request tracing and optional compression.
pub fn app(config: &ServerConfig) -> Router {
    let router = health_routes().merge(leptos_routes(&config.leptos_options)).layer(TraceLayer::new_for_http());
    if config.compression { router.layer(CompressionLayer::new()) } else { router }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
