//! Declarative routing/header configuration for the static hosting
//! provider.
//!
//! The publish directory is handed over together with this file; the
//! pipeline only emits it, it never interprets it.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HostingConfig {
    pub headers: Vec<HeaderRule>,
}

#[derive(Debug, Serialize)]
pub struct HeaderRule {
    pub source: String,
    pub headers: Vec<Header>,
}

#[derive(Debug, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl HostingConfig {
    /// Rules for the staged artifact set: correct MIME types for the
    /// binary and its glue, immutable long-lived caching for everything
    /// under `static/`.
    pub fn for_publish_tree() -> Self {
        Self {
            headers: vec![
                HeaderRule::new(
                    "/static/game.wasm",
                    &[("Content-Type", "application/wasm")],
                ),
                HeaderRule::new(
                    "/static/game.js",
                    &[("Content-Type", "application/javascript")],
                ),
                HeaderRule::new(
                    "/static/(.*)",
                    &[("Cache-Control", "public, max-age=31536000, immutable")],
                ),
            ],
        }
    }
}

impl HeaderRule {
    fn new(source: &str, headers: &[(&str, &str)]) -> Self {
        Self {
            source: source.to_string(),
            headers: headers
                .iter()
                .map(|(key, value)| Header {
                    key: (*key).to_string(),
                    value: (*value).to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serializes_to_valid_json() {
        let json = serde_json::to_string_pretty(&HostingConfig::for_publish_tree()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["headers"].is_array());
    }

    #[test]
    fn test_wasm_mime_and_immutable_caching_present() {
        let json = serde_json::to_string(&HostingConfig::for_publish_tree()).unwrap();
        assert!(json.contains("application/wasm"));
        assert!(json.contains("immutable"));
    }
}
