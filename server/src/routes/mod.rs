//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the small JSON API and stitches it with Leptos SSR
//! rendering under a single Axum router. Built WASM/CSS assets are served
//! from `/pkg`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::Json;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub const SERVICE_NAME: &str = "teachdesk";

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
    status: &'static str,
}

/// API routes shared by the SSR app and external probes.
pub fn api_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/health", get(health))
        .route("/api", get(service_info))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend: API routes + Leptos SSR routes + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "healthy", message: "TeachDesk server is running" })
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo { name: SERVICE_NAME, version: env!("CARGO_PKG_VERSION"), status: "ok" })
}
