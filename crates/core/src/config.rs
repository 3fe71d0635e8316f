//! Runtime configuration for a scroll-spy instance.

use serde::{Deserialize, Serialize};

use crate::tracker::LOOKAHEAD_MARGIN;

/// Configuration for a scroll-spy instance.
///
/// The defaults reproduce the page conventions the library grew out of:
/// `.nav-link` anchors, a `.year` footer placeholder, an `active` marker
/// class, and a 120px lookahead. Any field can be overridden from the host
/// page, either through the builder methods or as a whole object across the
/// JS boundary (camelCase keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpyConfig {
    /// CSS selector matching the navigation links.
    pub nav_selector: String,
    /// CSS selector matching the footer year placeholder.
    pub year_selector: String,
    /// Class token applied to the active navigation link.
    pub active_class: String,
    /// Lookahead added to the scroll offset before comparison.
    pub margin: f64,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            nav_selector: ".nav-link".to_string(),
            year_selector: ".year".to_string(),
            active_class: "active".to_string(),
            margin: LOOKAHEAD_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_conventions() {
        let config = SpyConfig::default();
        assert_eq!(config.nav_selector, ".nav-link");
        assert_eq!(config.year_selector, ".year");
        assert_eq!(config.active_class, "active");
        assert_eq!(config.margin, 120.0);
    }

    #[test]
    fn test_deserialize_partial_object_uses_defaults() {
        let config: SpyConfig =
            serde_json::from_str(r#"{ "navSelector": "nav a", "margin": 64 }"#).unwrap();
        assert_eq!(config.nav_selector, "nav a");
        assert_eq!(config.margin, 64.0);
        assert_eq!(config.active_class, "active");
        assert_eq!(config.year_selector, ".year");
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = SpyConfig {
            nav_selector: "#menu a".to_string(),
            year_selector: "footer .year".to_string(),
            active_class: "current".to_string(),
            margin: 0.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SpyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
