//! Catalog service configuration.

use std::env;

use common::{ListOptions, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_ADMIN_PASSWORD: &str = "12345678";

/// Catalog service configuration.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Page size when a listing asks for none
    pub default_page_size: u64,
    /// Upper bound for any requested page size, never above `MAX_PAGE_SIZE`
    pub max_page_size: u64,
    /// Email of the user created by `seed`
    pub seed_admin_email: String,
    /// Password of the user created by `seed`
    pub seed_admin_password: String,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_page_size: env::var("CATALOG_DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_page_size),
            max_page_size: env::var("CATALOG_MAX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map_or(defaults.max_page_size, |max| max.min(MAX_PAGE_SIZE)),
            seed_admin_email: env::var("SEED_ADMIN_EMAIL")
                .unwrap_or(defaults.seed_admin_email),
            seed_admin_password: env::var("SEED_ADMIN_PASSWORD")
                .unwrap_or(defaults.seed_admin_password),
        }
    }

    /// List options for `page`, falling back to the default page size and
    /// capped at the configured maximum. `MAX_PAGE_SIZE` stays the hard ceiling.
    pub fn list_options(&self, page: u64, limit: Option<u64>) -> ListOptions {
        ListOptions::new(page, limit.unwrap_or(self.default_page_size))
            .capped(self.max_page_size.min(MAX_PAGE_SIZE))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            seed_admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            seed_admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

// Don't expose the seed password in debug output
impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("default_page_size", &self.default_page_size)
            .field("max_page_size", &self.max_page_size)
            .field("seed_admin_email", &self.seed_admin_email)
            .field("seed_admin_password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 100);
        assert_eq!(config.seed_admin_email, "admin@example.com");
    }

    #[test]
    fn test_debug_redacts_password() {
        let output = format!("{:?}", CatalogConfig::default());
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("12345678"));
    }

    #[test]
    fn test_list_options() {
        let config = CatalogConfig {
            max_page_size: 20,
            ..CatalogConfig::default()
        };
        assert_eq!(config.list_options(2, None).limit, 10);
        assert_eq!(config.list_options(1, Some(50)).limit, 20);
    }

    #[test]
    fn test_max_page_size_never_exceeds_ceiling() {
        let config = CatalogConfig {
            max_page_size: 500,
            ..CatalogConfig::default()
        };
        let options = config.list_options(1, Some(300));
        assert_eq!(options.limit, MAX_PAGE_SIZE);
        assert_eq!(options.limit(), 100);
    }
}
