//! Application configuration

use std::env;
use std::path::PathBuf;

use steeple_shared::DuplicateHostPolicy;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub public_scheme: String, // scheme used for absolute URLs in sitemap/robots
    pub static_dir: PathBuf,

    // Tenants
    pub tenants_file: Option<PathBuf>,
    pub strict_tenant_hosts: bool,

    // Logging
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            public_scheme: {
                let scheme = env::var("PUBLIC_SCHEME").unwrap_or_else(|_| "https".to_string());
                match scheme.as_str() {
                    "http" | "https" => scheme,
                    _ => return Err(ConfigError::Invalid("PUBLIC_SCHEME must be 'http' or 'https'")),
                }
            },
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),

            // Tenants
            tenants_file: env::var("TENANTS_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            strict_tenant_hosts: env::var("STRICT_TENANT_HOSTS")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("STRICT_TENANT_HOSTS must be 'true' or 'false'"))?,

            // Logging
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::Invalid("LOG_FORMAT must be 'pretty' or 'json'")),
            },
        })
    }

    pub fn duplicate_host_policy(&self) -> DuplicateHostPolicy {
        if self.strict_tenant_hosts {
            DuplicateHostPolicy::Reject
        } else {
            DuplicateHostPolicy::LastWriteWins
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            public_scheme: "https".to_string(),
            static_dir: PathBuf::from("public"),
            tenants_file: None,
            strict_tenant_hosts: false,
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}
