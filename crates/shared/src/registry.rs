//! Tenant registry
//!
//! Immutable lookup tables built once from the tenant list at startup:
//! - normalized host -> tenant
//! - slug -> tenant
//! - church id -> tenant
//!
//! The registry is never mutated after construction, so it can be shared
//! across request handlers behind an `Arc` without locking.

use std::collections::HashMap;

use crate::{RegistryError, TenantRecord};

/// What to do when two tenants claim the same host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateHostPolicy {
    /// The tenant registered later takes the host; the collision is logged
    #[default]
    LastWriteWins,
    /// Fail the build
    Reject,
}

#[derive(Debug, Clone)]
pub struct TenantRegistry {
    tenants: Vec<TenantRecord>,
    by_host: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
    by_church_id: HashMap<String, usize>,
}

impl TenantRegistry {
    /// Build the registry, validating slug and church id uniqueness
    pub fn build(
        tenants: Vec<TenantRecord>,
        policy: DuplicateHostPolicy,
    ) -> Result<Self, RegistryError> {
        let mut by_host: HashMap<String, usize> = HashMap::new();
        let mut by_slug = HashMap::with_capacity(tenants.len());
        let mut by_church_id = HashMap::with_capacity(tenants.len());

        for (idx, tenant) in tenants.iter().enumerate() {
            if tenant.hosts.is_empty() {
                return Err(RegistryError::EmptyHosts(tenant.slug.clone()));
            }
            if by_slug.insert(tenant.slug.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateSlug(tenant.slug.clone()));
            }
            if by_church_id.insert(tenant.church_id.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateChurchId(tenant.church_id.clone()));
            }

            for host in &tenant.hosts {
                let key = normalize_host(host);
                if let Some(previous) = by_host.insert(key.clone(), idx) {
                    // A tenant listing the same host twice is harmless
                    if previous == idx {
                        continue;
                    }
                    let previous_slug = &tenants[previous].slug;
                    match policy {
                        DuplicateHostPolicy::Reject => {
                            return Err(RegistryError::DuplicateHost {
                                host: key,
                                previous: previous_slug.clone(),
                                current: tenant.slug.clone(),
                            });
                        }
                        DuplicateHostPolicy::LastWriteWins => {
                            tracing::warn!(
                                host = %key,
                                previous = %previous_slug,
                                current = %tenant.slug,
                                "Host claimed by more than one tenant; later registration wins"
                            );
                        }
                    }
                }
            }
        }

        tracing::debug!(
            tenants = tenants.len(),
            hosts = by_host.len(),
            "Tenant registry built"
        );

        Ok(Self {
            tenants,
            by_host,
            by_slug,
            by_church_id,
        })
    }

    /// Look up a tenant by host. The host is normalized first, so raw
    /// `Host` header values (mixed case, with port) are accepted.
    pub fn by_host(&self, host: &str) -> Option<&TenantRecord> {
        self.by_host
            .get(&normalize_host(host))
            .map(|&idx| &self.tenants[idx])
    }

    pub fn by_slug(&self, slug: &str) -> Option<&TenantRecord> {
        self.by_slug.get(slug).map(|&idx| &self.tenants[idx])
    }

    pub fn by_church_id(&self, church_id: &str) -> Option<&TenantRecord> {
        self.by_church_id
            .get(church_id)
            .map(|&idx| &self.tenants[idx])
    }

    /// Tenants in registration order
    pub fn tenants(&self) -> &[TenantRecord] {
        &self.tenants
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    /// Number of distinct normalized hosts routed to some tenant
    pub fn host_count(&self) -> usize {
        self.by_host.len()
    }
}

/// Normalize a host header value: lowercase, then drop everything from the
/// first `:` (the port).
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().to_lowercase();
    match host.split_once(':') {
        Some((name, _port)) => name.to_string(),
        None => host,
    }
}
