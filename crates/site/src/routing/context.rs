//! Request-scoped tenant context
//!
//! The interceptor attaches a [`TenantContext`] to each request it accepts.
//! Handlers read it through the [`RequestTenant`] extractor, which never
//! rejects: a missing context is a normal state that handlers must render.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use std::sync::Arc;

use steeple_shared::{TenantRecord, TenantRegistry};

use crate::state::AppState;

/// Header carrying the resolved church id on forwarded requests
pub const TENANT_ID_HEADER: &str = "X-Tenant-Id";
/// Header carrying the resolved tenant slug on forwarded requests
pub const TENANT_SLUG_HEADER: &str = "X-Tenant-Slug";

/// Tenant identity propagated from the interceptor to handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub tenant_id: String,
    pub tenant_slug: String,
}

impl From<&TenantRecord> for TenantContext {
    fn from(tenant: &TenantRecord) -> Self {
        Self {
            tenant_id: tenant.church_id.clone(),
            tenant_slug: tenant.slug.clone(),
        }
    }
}

/// Read-only view of the tenant resolved for the current request
#[derive(Clone)]
pub struct RequestTenant {
    context: Option<TenantContext>,
    registry: Arc<TenantRegistry>,
}

impl RequestTenant {
    pub fn new(context: Option<TenantContext>, registry: Arc<TenantRegistry>) -> Self {
        Self { context, registry }
    }

    /// Full tenant record, re-derived from the propagated slug.
    /// `None` if no context was attached or the slug is unknown.
    pub fn current_tenant(&self) -> Option<&TenantRecord> {
        self.current_tenant_slug()
            .and_then(|slug| self.registry.by_slug(slug))
    }

    /// Propagated church id, verbatim
    pub fn current_tenant_id(&self) -> Option<&str> {
        self.context.as_ref().map(|c| c.tenant_id.as_str())
    }

    /// Propagated tenant slug, verbatim
    pub fn current_tenant_slug(&self) -> Option<&str> {
        self.context.as_ref().map(|c| c.tenant_slug.as_str())
    }
}

#[async_trait]
impl FromRequestParts<AppState> for RequestTenant {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::new(
            parts.extensions.get::<TenantContext>().cloned(),
            Arc::clone(&state.registry),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steeple_shared::{builtin_tenants, DuplicateHostPolicy};

    fn registry() -> Arc<TenantRegistry> {
        Arc::new(TenantRegistry::build(builtin_tenants(), DuplicateHostPolicy::Reject).unwrap())
    }

    #[test]
    fn test_accessors_return_propagated_values() {
        let registry = registry();
        let tenant = registry.by_host("igreja-b.lvh.me").unwrap();
        let accessor = RequestTenant::new(Some(TenantContext::from(tenant)), Arc::clone(&registry));

        assert_eq!(accessor.current_tenant_id(), Some("ch_02"));
        assert_eq!(accessor.current_tenant_slug(), Some("igreja-b"));
        assert_eq!(accessor.current_tenant(), Some(tenant));
    }

    #[test]
    fn test_slug_round_trip() {
        let registry = registry();
        for tenant in registry.tenants() {
            let accessor =
                RequestTenant::new(Some(TenantContext::from(tenant)), Arc::clone(&registry));
            let slug = accessor.current_tenant_slug().unwrap();
            assert_eq!(registry.by_slug(slug).unwrap().slug, slug);
        }
    }

    #[test]
    fn test_missing_context() {
        let accessor = RequestTenant::new(None, registry());
        assert!(accessor.current_tenant().is_none());
        assert!(accessor.current_tenant_id().is_none());
        assert!(accessor.current_tenant_slug().is_none());
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let context = TenantContext {
            tenant_id: "ch_77".to_string(),
            tenant_slug: "ghost".to_string(),
        };
        let accessor = RequestTenant::new(Some(context), registry());

        assert!(accessor.current_tenant().is_none());
        // Raw fields are still reported as propagated
        assert_eq!(accessor.current_tenant_id(), Some("ch_77"));
        assert_eq!(accessor.current_tenant_slug(), Some("ghost"));
    }
}
