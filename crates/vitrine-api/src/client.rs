// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared HTTP plumbing for the PHP API.
//
// The API lives behind a single script (`api.php`) with the operation name as
// a trailing path segment, e.g. `api.php/service_search`.  Replies are JSON
// with no envelope; failures are signalled either by HTTP status or by a
// field in the body, which the per-endpoint modules interpret.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use vitrine_core::AppConfig;
use vitrine_core::error::{Result, VitrineError};

const USER_AGENT: &str = concat!("Vitrine/", env!("CARGO_PKG_VERSION"));

/// Async client bound to one API deployment.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
    pub(crate) asset_base_url: String,
}

impl ApiClient {
    /// Build a client from the app configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| VitrineError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            asset_base_url: config.asset_base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Full URL of an API operation.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    pub(crate) fn get(&self, endpoint: &str) -> RequestBuilder {
        self.http.get(self.endpoint_url(endpoint))
    }

    pub(crate) fn post(&self, endpoint: &str) -> RequestBuilder {
        self.http.post(self.endpoint_url(endpoint))
    }

    /// Send a request and fail on transport errors or non-2xx status.
    pub(crate) async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(endpoint, &e))?;

        let status = response.status();
        if !status.is_success() {
            error!(endpoint, status = status.as_u16(), "API call failed");
            return Err(VitrineError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            });
        }
        Ok(response)
    }

    /// Send a request and decode the JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(endpoint, request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(endpoint, &e))?;

        debug!(endpoint, bytes = body.len(), "API response received");
        serde_json::from_str(&body)
            .map_err(|e| VitrineError::Parse(format!("{endpoint}: {e}")))
    }
}

fn transport_error(endpoint: &str, err: &reqwest::Error) -> VitrineError {
    if err.is_timeout() {
        VitrineError::Network(format!("{endpoint}: request timed out"))
    } else if err.is_decode() {
        VitrineError::Parse(format!("{endpoint}: {err}"))
    } else {
        VitrineError::Network(format!("{endpoint}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let config = AppConfig {
            api_base_url: "https://example.test/php_api/api.php/".into(),
            ..Default::default()
        };
        let client = ApiClient::new(&config).expect("client");
        assert_eq!(
            client.endpoint_url("service_search"),
            "https://example.test/php_api/api.php/service_search"
        );
    }
}
