//! Host-based tenant routing
//!
//! Every content request is classified by its Host header before any page
//! handler runs:
//! - `interceptor`: resolves the tenant or rejects the request with a 404
//! - `context`: per-request accessor handlers use to read the resolved tenant
//! - `host_resolver`: normalization + registry lookup shared by both

mod context;
mod host_resolver;
mod interceptor;

pub use context::{RequestTenant, TenantContext, TENANT_ID_HEADER, TENANT_SLUG_HEADER};
pub use host_resolver::{request_host, HostResolveError, HostResolver};
pub use interceptor::{is_static_asset, resolve_tenant};
