//! Test fixtures for site server integration tests

use chrono::{DateTime, TimeZone, Utc};
use site_shared::{IntegrationIds, SiteConfig};

pub const TEST_BASE_URL: &str = "https://northbeam.ai";

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap()
}

/// `lastmod` text for `fixed_instant`
pub const FIXED_LASTMOD: &str = "2025-03-01T12:30:00.000Z";

pub fn test_config() -> SiteConfig {
    SiteConfig::new(TEST_BASE_URL).unwrap()
}

/// Config as read from an environment with every integration configured
pub fn config_with_integrations() -> SiteConfig {
    let mut config = test_config();
    config.integrations = IntegrationIds {
        tag_manager: Some("GTM-5XK2PQ".to_string()),
        analytics: Some("G-7H3L9M2Q".to_string()),
        pixel: Some("918273645".to_string()),
        linkedin_partner: Some("4412345".to_string()),
        heatmap: Some("3456789".to_string()),
    };
    config
}

/// Config whose integration ids are all present but malformed
pub fn config_with_malformed_integrations() -> SiteConfig {
    let mut config = test_config();
    config.integrations = IntegrationIds {
        tag_manager: Some("not-a-container".to_string()),
        analytics: Some("G-<script>".to_string()),
        pixel: Some("12ab".to_string()),
        linkedin_partner: Some("".to_string()),
        heatmap: Some("hj".to_string()),
    };
    config
}
