//! Tenant interceptor
//!
//! Runs ahead of every content route. A request either resolves to a tenant
//! and is forwarded with a [`TenantContext`], or is rejected with a 404.
//! There is no default tenant.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{request_host, TenantContext, TENANT_ID_HEADER, TENANT_SLUG_HEADER};
use crate::{error::SiteError, state::AppState};

/// Path prefixes served as static files, never classified
const STATIC_PREFIXES: &[&str] = &[
    "/static/",
    "/assets/",
    "/_next/static/",
    "/_next/image",
    "/favicon.ico",
];

/// Image extensions served as static files, never classified
const STATIC_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif", "webp", "ico"];

/// Middleware resolving the tenant for each request from its Host header
pub async fn resolve_tenant(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if is_static_asset(request.uri().path()) {
        return next.run(request).await;
    }

    tracing::debug!(
        host = request_host(request.headers(), request.uri()).unwrap_or_default(),
        path = %request.uri().path(),
        "Classifying request"
    );

    let resolver = state.host_resolver();
    let context = match resolver.resolve_request(request.headers(), request.uri()) {
        Ok(tenant) => TenantContext::from(tenant),
        Err(err) => {
            tracing::info!(host = %err.host(), "Tenant not found");
            return SiteError::TenantNotFound(err.host().to_string()).into_response();
        }
    };

    tracing::debug!(tenant = %context.tenant_slug, "Tenant resolved");

    // Client-supplied values never reach handlers, even when ours cannot be encoded
    let headers = request.headers_mut();
    headers.remove(TENANT_ID_HEADER);
    headers.remove(TENANT_SLUG_HEADER);
    if let Ok(value) = HeaderValue::from_str(&context.tenant_id) {
        headers.insert(TENANT_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&context.tenant_slug) {
        headers.insert(TENANT_SLUG_HEADER, value);
    }

    request.extensions_mut().insert(context);
    next.run(request).await
}

/// Whether a path is a static asset that bypasses tenant classification
pub fn is_static_asset(path: &str) -> bool {
    if STATIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return true;
    }

    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => STATIC_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        middleware,
        routing::get,
        Extension, Router,
    };
    use steeple_shared::{
        builtin_tenants, DuplicateHostPolicy, EventCatalog, TenantRecord, TenantRegistry,
    };
    use tower::ServiceExt;

    use crate::config::Config;

    async fn echo_context(
        context: Option<Extension<TenantContext>>,
        headers: axum::http::HeaderMap,
    ) -> String {
        let header_id = headers
            .get(TENANT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        match context {
            Some(Extension(ctx)) => format!("{}|{}|{}", ctx.tenant_slug, ctx.tenant_id, header_id),
            None => format!("none|{}", header_id),
        }
    }

    fn app() -> Router {
        app_with(builtin_tenants())
    }

    fn app_with(tenants: Vec<TenantRecord>) -> Router {
        let registry = TenantRegistry::build(tenants, DuplicateHostPolicy::Reject).unwrap();
        let state = AppState::new(Config::default(), registry, EventCatalog::builtin());

        Router::new()
            .route("/", get(echo_context))
            .route("/logos/a.svg", get(echo_context))
            .layer(middleware::from_fn_with_state(state, resolve_tenant))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_known_host_is_forwarded_with_context() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "Igreja-A.LVH.me:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "igreja-a|ch_01|ch_01");
    }

    #[tokio::test]
    async fn test_unknown_host_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "unknown.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_string(response).await,
            "Tenant not found for host: unknown.example.com"
        );
    }

    #[tokio::test]
    async fn test_spoofed_tenant_header_is_overwritten() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "vida.lvh.me")
                    .header(TENANT_ID_HEADER, "ch_01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "vida|ch_99|ch_99");
    }

    #[tokio::test]
    async fn test_unencodable_tenant_id_drops_client_header() {
        let mut tenant = builtin_tenants().remove(0);
        tenant.church_id = "ch_01\u{7}".to_string();

        let response = app_with(vec![tenant])
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "igreja-a.lvh.me")
                    .header(TENANT_ID_HEADER, "ch_99")
                    .header(TENANT_SLUG_HEADER, "vida")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "igreja-a|ch_01\u{7}|-");
    }

    #[tokio::test]
    async fn test_static_assets_bypass_classification() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/logos/a.svg")
                    .header(header::HOST, "unknown.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "none|-");
    }

    #[test]
    fn test_is_static_asset() {
        assert!(is_static_asset("/static/app.css"));
        assert!(is_static_asset("/assets/fonts/geist.woff2"));
        assert!(is_static_asset("/_next/static/chunk.js"));
        assert!(is_static_asset("/_next/image"));
        assert!(is_static_asset("/favicon.ico"));
        assert!(is_static_asset("/logos/vida.svg"));
        assert!(is_static_asset("/og/igreja-a.JPG"));

        assert!(!is_static_asset("/"));
        assert!(!is_static_asset("/events"));
        assert!(!is_static_asset("/about"));
        assert!(!is_static_asset("/api/public/events"));
        assert!(!is_static_asset("/images.png/events"));
        assert!(!is_static_asset("/.png"));
    }
}
