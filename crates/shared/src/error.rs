//! Error types for Steeple

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Tenant '{0}' has no hosts")]
    EmptyHosts(String),

    #[error("Duplicate tenant slug: {0}")]
    DuplicateSlug(String),

    #[error("Duplicate church id: {0}")]
    DuplicateChurchId(String),

    #[error("Host '{host}' is claimed by both '{previous}' and '{current}'")]
    DuplicateHost {
        host: String,
        previous: String,
        current: String,
    },

    #[error("Failed to read tenant file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse tenant file: {0}")]
    Parse(#[from] serde_json::Error),
}
