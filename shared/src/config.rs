//! Site configuration
//!
//! Everything the site reads from its environment. Values come from process
//! environment variables (a `.env` file is loaded by the binary before this
//! runs); command line flags override the base URL.
//!
//! ## Required
//! - `SITE_BASE_URL`: absolute http(s) origin used for sitemap `<loc>` and schema URLs
//!   (defaults to `http://localhost:8080`)
//!
//! ## Optional
//! - `SITE_CONTACT_EMAIL`, `SITE_SCHEDULING_URL`: outbound contact links
//! - `SITE_GTM_ID`, `SITE_GA_ID`, `SITE_META_PIXEL_ID`, `SITE_LINKEDIN_PARTNER_ID`,
//!   `SITE_HOTJAR_ID`: third-party integration identifiers
//! - `SITE_LOADING_VARIANT`: `spinner`, `skeleton`, `pulse` or `dots`

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{SharedError, SharedResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@northbeam.ai";
pub const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/northbeam-ai/strategy-call";

/// Raw identifiers for optional third-party integrations, as found in the environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationIds {
    pub tag_manager: Option<String>,
    pub analytics: Option<String>,
    pub pixel: Option<String>,
    pub linkedin_partner: Option<String>,
    pub heatmap: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    base_url: String,
    pub contact_email: String,
    pub scheduling_url: String,
    pub integrations: IntegrationIds,
    pub loading_variant: Option<String>,
}

impl SiteConfig {
    pub const BASE_URL_KEY: &'static str = "SITE_BASE_URL";

    /// Build a config with the given base URL and default contact links
    pub fn new(base_url: &str) -> SharedResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            scheduling_url: DEFAULT_SCHEDULING_URL.to_string(),
            integrations: IntegrationIds::default(),
            loading_variant: None,
        })
    }

    /// Read configuration from process environment variables
    pub fn from_env() -> SharedResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(Self::BASE_URL_KEY).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Some(email) = non_empty(lookup("SITE_CONTACT_EMAIL")) {
            config.contact_email = email;
        }
        if let Some(url) = non_empty(lookup("SITE_SCHEDULING_URL")) {
            config.scheduling_url = url;
        }

        config.integrations = IntegrationIds {
            tag_manager: non_empty(lookup("SITE_GTM_ID")),
            analytics: non_empty(lookup("SITE_GA_ID")),
            pixel: non_empty(lookup("SITE_META_PIXEL_ID")),
            linkedin_partner: non_empty(lookup("SITE_LINKEDIN_PARTNER_ID")),
            heatmap: non_empty(lookup("SITE_HOTJAR_ID")),
        };
        config.loading_variant = non_empty(lookup("SITE_LOADING_VARIANT"));

        Ok(config)
    }

    /// Replace the base URL, validating it
    pub fn with_base_url(mut self, base_url: &str) -> SharedResult<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Origin without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a site path onto the base URL
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> SharedResult<String> {
    let parsed = Url::parse(raw.trim()).map_err(|_| SharedError::config("base_url", raw))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(SharedError::config("base_url", raw));
    }
    // paths are appended verbatim, so the origin cannot carry a query or fragment
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(SharedError::config("base_url", raw));
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = SiteConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.contact_email, DEFAULT_CONTACT_EMAIL);
        assert_eq!(config.integrations, IntegrationIds::default());
        assert_eq!(config.loading_variant, None);
    }

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let config = SiteConfig::new("https://northbeam.ai/").unwrap();
        assert_eq!(config.base_url(), "https://northbeam.ai");
        assert_eq!(config.absolute("/about"), "https://northbeam.ai/about");
        assert_eq!(config.absolute("about"), "https://northbeam.ai/about");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        for bad in [
            "northbeam.ai",
            "ftp://northbeam.ai",
            "",
            "mailto:hello@northbeam.ai",
            "https://northbeam.ai/?ref=x",
            "https://northbeam.ai?",
            "https://northbeam.ai/#top",
        ] {
            assert!(
                matches!(SiteConfig::new(bad), Err(SharedError::InvalidConfig { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_integration_ids_blank_values_are_absent() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_GTM_ID", "GTM-ABC123"),
            ("SITE_GA_ID", "   "),
            ("SITE_HOTJAR_ID", "3456789"),
        ]))
        .unwrap();

        assert_eq!(config.integrations.tag_manager.as_deref(), Some("GTM-ABC123"));
        assert_eq!(config.integrations.analytics, None);
        assert_eq!(config.integrations.heatmap.as_deref(), Some("3456789"));
        assert_eq!(config.integrations.pixel, None);
    }

    #[test]
    fn test_with_base_url_override() {
        let config = SiteConfig::new(DEFAULT_BASE_URL)
            .unwrap()
            .with_base_url("https://staging.northbeam.ai")
            .unwrap();
        assert_eq!(config.base_url(), "https://staging.northbeam.ai");
    }
}
