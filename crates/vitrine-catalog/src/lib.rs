// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vitrine Catalog: the client-side data flow behind the Services screen.
//
// The full service list is fetched once into a `CatalogStore` shared by every
// screen.  A search filters a snapshot of it synchronously and, in parallel,
// reports the query to the server.  `ServiceListView` turns the filtered
// result into card view-models and owns per-visit expansion state.

pub mod filter;
pub mod scope;
pub mod search;
pub mod session;
pub mod store;
pub mod view;

pub use filter::{FilteredResult, filter};
pub use scope::ScreenScope;
pub use search::{ContextSource, SearchEngine, SearchRun};
pub use session::{Session, SessionStore};
pub use store::{Catalog, CatalogStore};
pub use view::{
    NotificationCard, NotificationView, PortfolioCard, PortfolioView, ServiceCard, ServiceListView,
    SingleExpansion, preview,
};
