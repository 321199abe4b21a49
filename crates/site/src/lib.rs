//! Steeple Site Library
//!
//! Multi-tenant church site: one deployment serving each church its own
//! pages, theme and SEO metadata, selected by the request's Host header.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod security;
pub mod state;

pub use config::Config;
pub use error::{SiteError, SiteResult};
pub use routes::create_router;
pub use routing::{HostResolver, RequestTenant, TenantContext};
pub use state::AppState;

use steeple_shared::{builtin_tenants, load_tenants_file, RegistryError, TenantRegistry};

/// Build the tenant registry from the configured source
pub fn load_registry(config: &Config) -> Result<TenantRegistry, RegistryError> {
    let tenants = match &config.tenants_file {
        Some(path) => load_tenants_file(path)?,
        None => builtin_tenants(),
    };
    TenantRegistry::build(tenants, config.duplicate_host_policy())
}
