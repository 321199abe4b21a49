//! robots.txt and sitemap.xml
//!
//! These routes sit outside the tenant interceptor: an unknown host gets a
//! crawl-nothing robots.txt and an empty sitemap instead of a 404. The tenant
//! is still resolved through the shared [`HostResolver`](crate::routing::HostResolver).

use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};

use steeple_shared::TenantRecord;

use crate::state::AppState;

/// Public routes listed in the sitemap: (path, change frequency, priority)
const SITEMAP_ROUTES: &[(&str, &str, &str)] = &[
    ("", "weekly", "1.0"),
    ("/events", "daily", "0.8"),
    ("/about", "weekly", "0.8"),
];

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let resolver = state.host_resolver();
    let body = match resolver.resolve_request(&headers, &uri) {
        Ok(tenant) => tenant_robots(tenant, &state.config.public_scheme),
        Err(err) => {
            tracing::debug!(host = %err.host(), "robots.txt for unknown host");
            "User-agent: *\nDisallow: /\n".to_string()
        }
    };

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::VARY, "Host"),
        ],
        body,
    )
        .into_response()
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let resolver = state.host_resolver();
    let entries = match resolver.resolve_request(&headers, &uri) {
        Ok(tenant) => tenant_sitemap_entries(tenant, &state.config.public_scheme),
        Err(err) => {
            tracing::debug!(host = %err.host(), "sitemap.xml for unknown host");
            String::new()
        }
    };

    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{entries}</urlset>\n"
    );

    (
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
            (header::VARY, "Host"),
        ],
        body,
    )
        .into_response()
}

fn base_url(tenant: &TenantRecord, scheme: &str) -> String {
    // Registry construction guarantees at least one host
    format!("{}://{}", scheme, tenant.primary_host().unwrap_or_default())
}

fn tenant_robots(tenant: &TenantRecord, scheme: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\nDisallow: /admin/\n\nSitemap: {}/sitemap.xml\n",
        base_url(tenant, scheme)
    )
}

fn tenant_sitemap_entries(tenant: &TenantRecord, scheme: &str) -> String {
    let base = base_url(tenant, scheme);
    let last_modified = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    SITEMAP_ROUTES
        .iter()
        .map(|(path, frequency, priority)| {
            let loc = xml_escape(&format!("{base}{path}"));
            format!(
                "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{last_modified}</lastmod>\n    \
                 <changefreq>{frequency}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
            )
        })
        .collect()
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use steeple_shared::builtin_tenants;

    #[test]
    fn test_tenant_robots_points_to_primary_host() {
        let tenant = &builtin_tenants()[0];
        let robots = tenant_robots(tenant, "https");

        assert!(robots.contains("Allow: /\n"));
        assert!(robots.contains("Disallow: /api/\n"));
        assert!(robots.contains("Disallow: /admin/\n"));
        assert!(robots.ends_with("Sitemap: https://igreja-a.sua-plataforma.com/sitemap.xml\n"));
    }

    #[test]
    fn test_sitemap_entries() {
        let tenant = &builtin_tenants()[2];
        let entries = tenant_sitemap_entries(tenant, "http");

        assert_eq!(entries.matches("<url>").count(), 3);
        assert!(entries.contains("<loc>http://www.igreja-vida.com.br</loc>"));
        assert!(entries.contains(
            "<loc>http://www.igreja-vida.com.br/events</loc>"
        ));
        assert!(entries.contains("<changefreq>daily</changefreq>"));
        assert!(entries.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_sitemap_escapes_host() {
        let mut tenant = builtin_tenants().remove(0);
        tenant.hosts = vec!["a&b.example.com".to_string()];
        let entries = tenant_sitemap_entries(&tenant, "https");

        assert!(entries.contains("<loc>https://a&amp;b.example.com/about</loc>"));
        assert!(!entries.contains("a&b"));
    }
}
