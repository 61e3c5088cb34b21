// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared catalog store.
//
// Holds the single authoritative in-memory copy of the service catalog.  The
// store is injected into whatever needs it (no globals) and exposes an
// explicit subscribe/notify contract through a `tokio::sync::watch` channel.
//
// Updates replace the whole snapshot; readers hold an `Arc` to the snapshot
// they read, so they always see either the old or the new list, never a mix.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use vitrine_api::CatalogApi;
use vitrine_core::error::Result;
use vitrine_core::types::ServiceItem;

use crate::scope::ScreenScope;

/// Immutable snapshot of the service catalog.
///
/// Cloning is cheap: the item list and the items themselves are shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[Arc<ServiceItem>]>,
    revision: u64,
    fetched_at: Option<DateTime<Utc>>,
}

impl Catalog {
    /// Build a standalone snapshot (revision 0), e.g. for previews and tests.
    pub fn from_items(items: Vec<ServiceItem>) -> Self {
        Self::with_revision(items, 0, None)
    }

    fn with_revision(
        items: Vec<ServiceItem>,
        revision: u64,
        fetched_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            items: items.into_iter().map(Arc::new).collect(),
            revision,
            fetched_at,
        }
    }

    /// Items in server response order.
    pub fn items(&self) -> &[Arc<ServiceItem>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Increments on every replacement; 0 means "never loaded".
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// When this snapshot was stored, if it came from the server.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

/// Process-wide holder of the current [`Catalog`].
///
/// Cheap to clone; all clones share the same snapshot and subscribers.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    tx: Arc<watch::Sender<Catalog>>,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Catalog::default());
        Self { tx: Arc::new(tx) }
    }

    /// Replace the stored catalog wholesale and notify subscribers.
    ///
    /// Returns the snapshot that was stored.
    pub fn set_catalog(&self, items: Vec<ServiceItem>) -> Catalog {
        let now = Utc::now();
        self.tx.send_modify(|current| {
            *current = Catalog::with_revision(items, current.revision + 1, Some(now));
        });
        let snapshot = self.catalog();
        info!(
            count = snapshot.len(),
            revision = snapshot.revision(),
            "catalog replaced"
        );
        snapshot
    }

    /// Current snapshot; empty until the first successful load.  Never blocks.
    pub fn catalog(&self) -> Catalog {
        self.tx.borrow().clone()
    }

    /// Receiver that is woken on every [`set_catalog`](Self::set_catalog).
    pub fn subscribe(&self) -> watch::Receiver<Catalog> {
        self.tx.subscribe()
    }

    /// Fetch the catalog and store it.
    ///
    /// On failure the store keeps its last known value and the error is
    /// returned for display.  If `scope` was unmounted while the request was
    /// in flight the reply is discarded and `Ok(None)` is returned.
    #[instrument(skip_all)]
    pub async fn refresh(&self, api: &dyn CatalogApi, scope: &ScreenScope) -> Result<Option<Catalog>> {
        let fetched = api.fetch_catalog().await;

        if !scope.is_mounted() {
            info!("screen gone; discarding catalog reply");
            return Ok(None);
        }

        match fetched {
            Ok(items) => Ok(Some(self.set_catalog(items))),
            Err(e) => {
                warn!(error = %e, revision = self.catalog().revision(), "catalog refresh failed; keeping last snapshot");
                Err(e)
            }
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use vitrine_core::error::VitrineError;
    use vitrine_core::types::{SearchContext, ServiceId, ServiceStatus};

    pub(crate) fn item(id: &str, name: &str, description: &str) -> ServiceItem {
        ServiceItem {
            id: ServiceId::from(id),
            name: name.into(),
            description: description.into(),
            icon_path: format!("{id}.png"),
            status: ServiceStatus::Active,
        }
    }

    /// Scriptable stand-in for the remote API.
    #[derive(Default)]
    pub(crate) struct FakeApi {
        pub catalog: Mutex<Option<Vec<ServiceItem>>>,
        pub fail_reports: bool,
        pub reports: Mutex<Vec<SearchContext>>,
    }

    impl FakeApi {
        pub(crate) fn serving(items: Vec<ServiceItem>) -> Self {
            Self {
                catalog: Mutex::new(Some(items)),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl CatalogApi for FakeApi {
        async fn fetch_catalog(&self) -> Result<Vec<ServiceItem>> {
            self.catalog
                .lock()
                .expect("fake lock")
                .clone()
                .ok_or_else(|| VitrineError::Network("connection refused".into()))
        }

        async fn report_search(&self, context: &SearchContext) -> Result<()> {
            self.reports.lock().expect("fake lock").push(context.clone());
            if self.fail_reports {
                Err(VitrineError::Network("connection reset".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn empty_before_first_load() {
        let store = CatalogStore::new();
        let snapshot = store.catalog();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.revision(), 0);
        assert!(snapshot.fetched_at().is_none());
    }

    #[test]
    fn set_catalog_replaces_rather_than_merges() {
        let store = CatalogStore::new();
        store.set_catalog(vec![item("1", "Web", ""), item("2", "App", "")]);
        let old = store.catalog();

        store.set_catalog(vec![item("3", "SEO", "")]);
        let new = store.catalog();

        assert_eq!(new.len(), 1);
        assert_eq!(new.items()[0].id, ServiceId::from("3"));
        assert_eq!(new.revision(), 2);
        // Earlier readers keep their complete snapshot.
        assert_eq!(old.len(), 2);
    }

    #[test]
    fn subscribers_see_every_replacement() {
        let store = CatalogStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().expect("sender alive"));

        store.set_catalog(vec![item("1", "Web", "")]);
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_stale_catalog() {
        let store = CatalogStore::new();
        let scope = ScreenScope::new();
        let api = FakeApi::serving(vec![item("1", "Web", "")]);

        store.refresh(&api, &scope).await.expect("first load");
        *api.catalog.lock().expect("fake lock") = None;

        let err = store.refresh(&api, &scope).await.unwrap_err();
        assert!(matches!(err, VitrineError::Network(_)));
        assert_eq!(store.catalog().len(), 1);
        assert_eq!(store.catalog().revision(), 1);
    }

    #[tokio::test]
    async fn refresh_after_unmount_is_discarded() {
        let store = CatalogStore::new();
        let scope = ScreenScope::new();
        scope.unmount();
        let api = FakeApi::serving(vec![item("1", "Web", "")]);

        let outcome = store.refresh(&api, &scope).await.expect("no error");
        assert!(outcome.is_none());
        assert!(store.catalog().is_empty());
    }
}
