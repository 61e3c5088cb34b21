// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Search orchestration.
//
// A search has two independent effects:
//   1. filter the catalog snapshot and hand the result back immediately;
//   2. report the query to the server on a background task.
// The result never waits on the report, and the report's outcome never
// touches the result.  Report failures are logged and dropped.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use vitrine_api::CatalogApi;
use vitrine_core::types::SearchContext;

use crate::filter::{FilteredResult, filter};
use crate::store::{Catalog, CatalogStore};

/// Supplies the user id and location current at the moment of a search.
pub trait ContextSource: Send + Sync {
    fn search_context(&self, query: &str) -> SearchContext;
}

/// Outcome of one search invocation.
#[derive(Debug)]
pub struct SearchRun {
    /// Filtered catalog, available as soon as the search returns.
    pub result: FilteredResult,
    /// Background report task, if one was started.  Awaiting it is optional;
    /// dropping it does not cancel the report.
    pub telemetry: Option<JoinHandle<()>>,
}

/// Runs searches against a shared catalog store.
#[derive(Clone)]
pub struct SearchEngine {
    store: CatalogStore,
    api: Arc<dyn CatalogApi>,
    context: Arc<dyn ContextSource>,
    report_searches: bool,
}

impl SearchEngine {
    pub fn new(store: CatalogStore, api: Arc<dyn CatalogApi>, context: Arc<dyn ContextSource>) -> Self {
        Self {
            store,
            api,
            context,
            report_searches: true,
        }
    }

    /// Enable or disable the background search report.
    pub fn with_reporting(mut self, enabled: bool) -> Self {
        self.report_searches = enabled;
        self
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Build a context for `query` from the session values current right now.
    pub fn context_for(&self, query: &str) -> SearchContext {
        self.context.search_context(query)
    }

    /// Search the store's current snapshot with the current session context.
    pub fn search(&self, query: &str) -> SearchRun {
        let snapshot = self.store.catalog();
        let context = self.context_for(query);
        self.run_search(query, &snapshot, context)
    }

    /// Filter `snapshot` for `query` and report `context` in the background.
    ///
    /// An empty query yields the full snapshot.
    pub fn run_search(&self, query: &str, snapshot: &Catalog, context: SearchContext) -> SearchRun {
        let result = filter(snapshot, query);
        debug!(
            query,
            matched = result.len(),
            total = snapshot.len(),
            "search filtered"
        );

        let telemetry = if self.report_searches {
            spawn_report(Arc::clone(&self.api), context)
        } else {
            None
        };

        SearchRun { result, telemetry }
    }
}

fn spawn_report(api: Arc<dyn CatalogApi>, context: SearchContext) -> Option<JoinHandle<()>> {
    let Ok(handle) = Handle::try_current() else {
        warn!("no async runtime; search not reported");
        return None;
    };

    Some(handle.spawn(async move {
        if let Err(e) = api.report_search(&context).await {
            warn!(error = %e, query = %context.query, "search report failed");
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::store::tests::{FakeApi, item};

    fn engine_with(api: Arc<FakeApi>, session: Arc<SessionStore>) -> SearchEngine {
        let store = CatalogStore::new();
        store.set_catalog(vec![
            item("1", "Web Design", "We build sites"),
            item("2", "App Dev", "Mobile apps"),
        ]);
        SearchEngine::new(store, api, session)
    }

    #[tokio::test]
    async fn result_is_available_and_query_reported() {
        let api = Arc::new(FakeApi::default());
        let session = Arc::new(SessionStore::in_memory());
        session.set_user_id(Some("118".into())).expect("user id");
        session.set_location(Some("Pune".into())).expect("location");
        let engine = engine_with(Arc::clone(&api), session);

        let run = engine.search("app");
        assert_eq!(run.result.len(), 1);
        assert_eq!(run.result.query(), "app");

        run.telemetry.expect("report started").await.expect("report task");
        let reports = api.reports.lock().expect("fake lock");
        assert_eq!(
            reports.as_slice(),
            [SearchContext {
                query: "app".into(),
                user_id: Some("118".into()),
                location: Some("Pune".into()),
            }]
        );
    }

    #[tokio::test]
    async fn failed_report_leaves_result_untouched() {
        let api = Arc::new(FakeApi {
            fail_reports: true,
            ..Default::default()
        });
        let engine = engine_with(Arc::clone(&api), Arc::new(SessionStore::in_memory()));

        let run = engine.search("we");
        let ids: Vec<_> = run.result.items().iter().map(|i| i.id.to_string()).collect();

        // The failing report completes without panicking the task.
        run.telemetry.expect("report started").await.expect("report task");
        assert_eq!(api.reports.lock().expect("fake lock").len(), 1);

        let after: Vec<_> = run.result.items().iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, ["1"]);
        assert_eq!(after, ids);
    }

    #[tokio::test]
    async fn context_is_read_at_search_time() {
        let api = Arc::new(FakeApi::default());
        let session = Arc::new(SessionStore::in_memory());
        let engine = engine_with(Arc::clone(&api), Arc::clone(&session));

        engine.search("web").telemetry.expect("report").await.expect("task");
        session.set_location(Some("Mumbai".into())).expect("location");
        engine.search("web").telemetry.expect("report").await.expect("task");

        let reports = api.reports.lock().expect("fake lock");
        assert_eq!(reports[0].location, None);
        assert_eq!(reports[1].location.as_deref(), Some("Mumbai"));
    }

    #[tokio::test]
    async fn reporting_can_be_disabled() {
        let api = Arc::new(FakeApi::default());
        let engine = engine_with(Arc::clone(&api), Arc::new(SessionStore::in_memory()))
            .with_reporting(false);

        let run = engine.search("");
        assert!(run.telemetry.is_none());
        assert_eq!(run.result.len(), 2);
    }

    #[test]
    fn search_without_runtime_still_filters() {
        let api = Arc::new(FakeApi::default());
        let engine = engine_with(api, Arc::new(SessionStore::in_memory()));
        let run = engine.search("app");
        assert!(run.telemetry.is_none());
        assert_eq!(run.result.len(), 1);
    }
}
