//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the UI. Every lead, category, and worker request goes
//! from the browser straight to the REST backend, so the router holds the
//! Leptos SSR routes, the compiled `/pkg` bundle, and a health check.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

/// Leptos SSR app plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &HostConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg = pkg_dir(Path::new(leptos_options.site_root.as_ref()), config.site_root.as_deref());
    tracing::debug!(pkg = %pkg.display(), "serving static bundle");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// `pkg/` under the configured site root, preferring the env override.
fn pkg_dir(site_root: &Path, override_root: Option<&Path>) -> PathBuf {
    override_root.unwrap_or(site_root).join("pkg")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
