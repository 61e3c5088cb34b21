// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Read-only marketing content: home carousel, portfolio, notifications.

use tracing::{info, instrument};

use vitrine_core::error::Result;
use vitrine_core::types::{Notification, PortfolioEntry, Slide};

use crate::client::ApiClient;

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn fetch_slides(&self) -> Result<Vec<Slide>> {
        self.send_json("slider", self.get("slider")).await
    }

    /// Portfolio projects.  The endpoint only answers POST.
    #[instrument(skip(self))]
    pub async fn fetch_portfolio(&self) -> Result<Vec<PortfolioEntry>> {
        let entries: Vec<PortfolioEntry> =
            self.send_json("portfolio", self.post("portfolio")).await?;
        info!(count = entries.len(), "portfolio fetched");
        Ok(entries)
    }

    #[instrument(skip(self))]
    pub async fn fetch_notifications(&self) -> Result<Vec<Notification>> {
        self.send_json("notification", self.get("notification"))
            .await
    }
}
