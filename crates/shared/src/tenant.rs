//! Tenant records served by the site

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::RegistryError;

// =============================================================================
// Tenant Record
// =============================================================================

/// A church served by the platform, bound to one or more hostnames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRecord {
    /// Short unique identifier, propagated with each request
    pub slug: String,
    /// Unique external identifier (e.g. "ch_01")
    pub church_id: String,
    /// Display name
    pub name: String,
    /// Hostnames routed to this tenant, in priority order (first is canonical)
    pub hosts: Vec<String>,
    pub theme: TenantTheme,
    pub seo: TenantSeo,
}

impl TenantRecord {
    /// Canonical host, used when building absolute URLs
    pub fn primary_host(&self) -> Option<&str> {
        self.hosts.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantTheme {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub logo: String,
}

impl TenantTheme {
    /// Secondary color, falling back to the primary one
    pub fn secondary_or_primary(&self) -> &str {
        self.secondary.as_deref().unwrap_or(&self.primary)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSeo {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

// =============================================================================
// Tenant Sources
// =============================================================================

/// Load a tenant table from a JSON file (an array of tenant records)
pub fn load_tenants_file(path: &Path) -> Result<Vec<TenantRecord>, RegistryError> {
    let content = std::fs::read_to_string(path)?;
    let tenants: Vec<TenantRecord> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), count = tenants.len(), "Loaded tenant file");
    Ok(tenants)
}

/// The tenants shipped with the site
pub fn builtin_tenants() -> Vec<TenantRecord> {
    vec![
        TenantRecord {
            slug: "igreja-a".to_string(),
            church_id: "ch_01".to_string(),
            name: "Igreja A".to_string(),
            hosts: vec![
                "igreja-a.sua-plataforma.com".to_string(),
                "igreja-a.lvh.me".to_string(),
                // Default deployment domain
                "way-site-poc.vercel.app".to_string(),
            ],
            theme: TenantTheme {
                primary: "#2563eb".to_string(),
                secondary: None,
                logo: "/logos/a.svg".to_string(),
            },
            seo: TenantSeo {
                title: "Igreja A - Bem-vindo".to_string(),
                description: "Igreja A - Uma comunidade de fé e esperança".to_string(),
                og_image: Some("/og/igreja-a.jpg".to_string()),
            },
        },
        TenantRecord {
            slug: "igreja-b".to_string(),
            church_id: "ch_02".to_string(),
            name: "Igreja B".to_string(),
            hosts: vec![
                "igreja-b.sua-plataforma.com".to_string(),
                "igreja-b.lvh.me".to_string(),
            ],
            theme: TenantTheme {
                primary: "#16a34a".to_string(),
                secondary: None,
                logo: "/logos/b.svg".to_string(),
            },
            seo: TenantSeo {
                title: "Igreja B - Bem-vindo".to_string(),
                description: "Igreja B - Transformando vidas através do amor".to_string(),
                og_image: Some("/og/igreja-b.jpg".to_string()),
            },
        },
        TenantRecord {
            slug: "vida".to_string(),
            church_id: "ch_99".to_string(),
            name: "Igreja Vida".to_string(),
            hosts: vec![
                "www.igreja-vida.com.br".to_string(),
                "igreja-vida.com.br".to_string(),
                "vida.lvh.me".to_string(),
            ],
            theme: TenantTheme {
                primary: "#7c3aed".to_string(),
                secondary: None,
                logo: "/logos/vida.svg".to_string(),
            },
            seo: TenantSeo {
                title: "Igreja Vida - Comunidade de Vida".to_string(),
                description: "Igreja Vida - Vivendo o propósito de Deus".to_string(),
                og_image: Some("/og/vida.jpg".to_string()),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tenants_are_unique() {
        let tenants = builtin_tenants();
        assert_eq!(tenants.len(), 3);

        let mut slugs: Vec<_> = tenants.iter().map(|t| t.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), 3);

        assert!(tenants.iter().all(|t| !t.hosts.is_empty()));
    }

    #[test]
    fn test_secondary_falls_back_to_primary() {
        let mut theme = builtin_tenants()[0].theme.clone();
        assert_eq!(theme.secondary_or_primary(), "#2563eb");

        theme.secondary = Some("#111111".to_string());
        assert_eq!(theme.secondary_or_primary(), "#111111");
    }

    #[test]
    fn test_tenant_json_uses_camel_case() {
        let json = r##"[{
            "slug": "nova",
            "churchId": "ch_42",
            "name": "Igreja Nova",
            "hosts": ["nova.lvh.me"],
            "theme": { "primary": "#000000", "logo": "/logos/nova.svg" },
            "seo": { "title": "Nova", "description": "Igreja Nova" }
        }]"##;

        let tenants: Vec<TenantRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(tenants[0].church_id, "ch_42");
        assert_eq!(tenants[0].primary_host(), Some("nova.lvh.me"));
        assert!(tenants[0].seo.og_image.is_none());
        assert!(tenants[0].theme.secondary.is_none());
    }
}
