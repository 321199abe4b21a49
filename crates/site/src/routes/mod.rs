//! Site routes

pub mod events;
pub mod health;
pub mod pages;
pub mod seo;

use axum::{middleware, routing::get, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::{routing::resolve_tenant, security::security_headers_middleware, state::AppState};

/// Create all site routes
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // Crawler files resolve the host themselves and degrade gracefully
    let seo_routes = Router::new()
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap));

    // Tenant routes: every request is classified by host first. Unmatched
    // paths fall through to static files, which the interceptor lets pass.
    let tenant_routes = Router::new()
        .route("/", get(pages::home))
        .route("/events", get(pages::events))
        .route("/about", get(pages::about))
        .route("/api/public/events", get(events::list_public_events))
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(middleware::from_fn_with_state(state.clone(), resolve_tenant));

    Router::new()
        .merge(health_routes)
        .merge(seo_routes)
        .merge(tenant_routes)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
