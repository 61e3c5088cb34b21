// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Remote catalog operations: fetching the service list and logging searches.

use async_trait::async_trait;
use reqwest::multipart::Form;
use tracing::{debug, info, instrument};

use vitrine_core::error::Result;
use vitrine_core::types::{SearchContext, ServiceItem};

use crate::client::ApiClient;

const CATALOG_ENDPOINT: &str = "service_search";
const FEATURED_ENDPOINT: &str = "service";
const SEARCH_LOG_ENDPOINT: &str = "location_user_service";

/// The two network operations the search flow depends on.
///
/// Implemented by [`ApiClient`]; tests substitute in-memory fakes.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full service catalog in server order.  No retry.
    async fn fetch_catalog(&self) -> Result<Vec<ServiceItem>>;

    /// Record what the user searched for.  Best effort, at most once.
    async fn report_search(&self, context: &SearchContext) -> Result<()>;
}

#[async_trait]
impl CatalogApi for ApiClient {
    #[instrument(skip(self))]
    async fn fetch_catalog(&self) -> Result<Vec<ServiceItem>> {
        let items: Vec<ServiceItem> = self
            .send_json(CATALOG_ENDPOINT, self.get(CATALOG_ENDPOINT))
            .await?;
        info!(count = items.len(), "catalog fetched");
        Ok(items)
    }

    #[instrument(skip(self, context), fields(query = %context.query))]
    async fn report_search(&self, context: &SearchContext) -> Result<()> {
        // The server keys its log on `service_id`, which carries the raw query.
        let form = Form::new()
            .text("user_id", context.user_id.clone().unwrap_or_default())
            .text("location", context.location.clone().unwrap_or_default())
            .text("service_id", context.query.clone());

        self.send(SEARCH_LOG_ENDPOINT, self.post(SEARCH_LOG_ENDPOINT).multipart(form))
            .await?;
        debug!("search reported");
        Ok(())
    }
}

impl ApiClient {
    /// Services highlighted on the home screen grid.
    #[instrument(skip(self))]
    pub async fn fetch_featured_services(&self) -> Result<Vec<ServiceItem>> {
        self.send_json(FEATURED_ENDPOINT, self.get(FEATURED_ENDPOINT))
            .await
    }
}
