// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the PHP API (endpoint names are appended as path segments).
    pub api_base_url: String,
    /// Base URL for uploaded images (`service/`, `slider/`, `portfolio/`).
    pub asset_base_url: String,
    /// Per-request timeout for remote calls.
    pub request_timeout_secs: u64,
    /// Characters of a service description shown before "Read More".
    pub description_preview_chars: usize,
    /// Characters of a notification shown before it is expanded.
    pub notification_preview_chars: usize,
    /// Send what the user searched for to the server.
    pub search_telemetry: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://nvwebsoft.com/php_api/api.php".into(),
            asset_base_url: "https://nvwebsoft.com/php_api/assets/website_upload".into(),
            request_timeout_secs: 30,
            description_preview_chars: 100,
            notification_preview_chars: 30,
            search_telemetry: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "request_timeout_secs": 5 }"#).expect("parse");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.description_preview_chars, 100);
        assert!(config.search_telemetry);
    }
}
