//! Shared application state

use std::sync::Arc;

use steeple_shared::{EventCatalog, TenantRegistry};

use crate::config::Config;
use crate::routing::HostResolver;

/// State shared by every handler. Built once at startup; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<TenantRegistry>,
    pub events: Arc<EventCatalog>,
}

impl AppState {
    pub fn new(config: Config, registry: TenantRegistry, events: EventCatalog) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            events: Arc::new(events),
        }
    }

    /// Host resolver over this state's registry
    pub fn host_resolver(&self) -> HostResolver {
        HostResolver::new(Arc::clone(&self.registry))
    }
}
