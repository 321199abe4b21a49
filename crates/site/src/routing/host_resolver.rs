//! Host-to-Tenant Resolution
//!
//! Resolves incoming Host headers to tenant records. Every host-based lookup
//! in the site goes through here so that normalization stays consistent:
//! - Interceptor: igreja-a.lvh.me:3000 -> tenant `igreja-a`
//! - Sitemap/robots: resolved directly from the Host header

use axum::http::{header, HeaderMap, Uri};
use std::sync::Arc;

use steeple_shared::{normalize_host, TenantRecord, TenantRegistry};

/// Host resolver over the immutable tenant registry
#[derive(Clone)]
pub struct HostResolver {
    registry: Arc<TenantRegistry>,
}

impl HostResolver {
    pub fn new(registry: Arc<TenantRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve a raw host value (any case, optional port) to a tenant
    pub fn resolve(&self, host: &str) -> Result<&TenantRecord, HostResolveError> {
        let host = normalize_host(host);
        if host.is_empty() {
            return Err(HostResolveError::MissingHost);
        }

        self.registry
            .by_host(&host)
            .ok_or(HostResolveError::NotFound(host))
    }

    /// Resolve the tenant for a request from its headers and URI
    pub fn resolve_request(
        &self,
        headers: &HeaderMap,
        uri: &Uri,
    ) -> Result<&TenantRecord, HostResolveError> {
        let host = request_host(headers, uri).ok_or(HostResolveError::MissingHost)?;
        self.resolve(host)
    }
}

/// Raw host of a request.
///
/// The transport `Host` header wins over the URI authority: proxies and local
/// dev servers may rewrite the latter.
pub fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> Option<&'a str> {
    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .filter(|h| !h.trim().is_empty())
        .or_else(|| uri.host())
}

/// Errors that can occur during host resolution
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostResolveError {
    #[error("Tenant not found for host: {0}")]
    NotFound(String),

    #[error("Request has no host")]
    MissingHost,
}

impl HostResolveError {
    /// Normalized host that failed to resolve (empty when none was sent)
    pub fn host(&self) -> &str {
        match self {
            HostResolveError::NotFound(host) => host,
            HostResolveError::MissingHost => "",
        }
    }
}
