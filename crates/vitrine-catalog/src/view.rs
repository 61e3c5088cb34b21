// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// View-models for the list screens.
//
// These hold the per-visit UI state (which descriptions are expanded, which
// filter is active) and produce plain card structs the UI renders as-is.
// A screen builds a fresh view on every mount, so state never leaks between
// visits.

use std::collections::HashMap;

use tokio::task::JoinHandle;

use vitrine_api::assets::{AssetKind, asset_url};
use vitrine_core::types::{Notification, PortfolioEntry, ServiceId};

use crate::filter::{FilteredResult, filter};
use crate::search::SearchEngine;
use crate::store::Catalog;

const READ_MORE: &str = "Read More";
const READ_LESS: &str = "Read Less";

/// `text` cut to at most `max_chars` characters, with "..." appended if
/// anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

fn is_truncated(text: &str, max_chars: usize) -> bool {
    text.chars().nth(max_chars).is_some()
}

// -- Services ----------------------------------------------------------------

/// One rendered service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub id: ServiceId,
    pub title: String,
    /// Full description when expanded, otherwise the preview.
    pub body: String,
    pub image_url: String,
    /// Whether the description is long enough to need a toggle.
    pub expandable: bool,
    pub expanded: bool,
}

impl ServiceCard {
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded { READ_LESS } else { READ_MORE }
    }
}

/// State behind the Services screen.
///
/// Expansion is keyed by service id, so items sharing an id also share
/// their expanded state.
#[derive(Debug, Clone)]
pub struct ServiceListView {
    catalog: Catalog,
    result: FilteredResult,
    expansion: HashMap<ServiceId, bool>,
    preview_chars: usize,
    asset_base_url: String,
}

impl ServiceListView {
    /// Start a visit showing the whole `catalog`.
    pub fn new(catalog: Catalog, preview_chars: usize, asset_base_url: impl Into<String>) -> Self {
        let result = filter(&catalog, "");
        Self {
            catalog,
            result,
            expansion: HashMap::new(),
            preview_chars,
            asset_base_url: asset_base_url.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn result(&self) -> &FilteredResult {
        &self.result
    }

    pub fn query(&self) -> &str {
        self.result.query()
    }

    /// Adopt a newer catalog snapshot, keeping the active query.
    ///
    /// Re-filters locally; no search report is sent.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.result = filter(&catalog, self.result.query());
        self.catalog = catalog;
    }

    /// Show a result produced elsewhere (e.g. by [`SearchEngine::search`]).
    pub fn apply(&mut self, result: FilteredResult) {
        self.result = result;
    }

    /// Run `query` against this view's catalog snapshot and show the result.
    pub fn search(&mut self, engine: &SearchEngine, query: &str) -> Option<JoinHandle<()>> {
        let run = engine.run_search(query, &self.catalog, engine.context_for(query));
        self.result = run.result;
        run.telemetry
    }

    /// Whether the "show more" control should be offered: a non-empty query
    /// narrowed the list.
    pub fn show_more_visible(&self) -> bool {
        !self.result.query().is_empty() && self.result.len() != self.catalog.len()
    }

    /// Reset to the full catalog.  Same as searching for "".
    pub fn show_more(&mut self, engine: &SearchEngine) -> Option<JoinHandle<()>> {
        self.search(engine, "")
    }

    pub fn toggle_expansion(&mut self, id: &ServiceId) {
        let entry = self.expansion.entry(id.clone()).or_insert(false);
        *entry = !*entry;
    }

    pub fn is_expanded(&self, id: &ServiceId) -> bool {
        self.expansion.get(id).copied().unwrap_or(false)
    }

    /// Cards for the active result, in result order.
    pub fn cards(&self) -> Vec<ServiceCard> {
        self.result
            .items()
            .iter()
            .map(|item| {
                let expanded = self.is_expanded(&item.id);
                let body = if expanded {
                    item.description.clone()
                } else {
                    preview(&item.description, self.preview_chars)
                };
                ServiceCard {
                    id: item.id.clone(),
                    title: item.name.clone(),
                    body,
                    image_url: asset_url(&self.asset_base_url, AssetKind::Service, &item.icon_path),
                    expandable: is_truncated(&item.description, self.preview_chars),
                    expanded,
                }
            })
            .collect()
    }
}

// -- Portfolio / notifications -----------------------------------------------

/// At most one expanded row, addressed by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleExpansion {
    expanded: Option<usize>,
}

impl SingleExpansion {
    /// Expand `index`, collapsing any other row; toggling the expanded row
    /// collapses it.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioCard {
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub link: String,
    pub expandable: bool,
    pub expanded: bool,
}

impl PortfolioCard {
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded { READ_LESS } else { READ_MORE }
    }
}

/// State behind the Portfolio screen.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    entries: Vec<PortfolioEntry>,
    expansion: SingleExpansion,
    preview_chars: usize,
    asset_base_url: String,
}

impl PortfolioView {
    pub fn new(entries: Vec<PortfolioEntry>, preview_chars: usize, asset_base_url: impl Into<String>) -> Self {
        Self {
            entries,
            expansion: SingleExpansion::default(),
            preview_chars,
            asset_base_url: asset_base_url.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn toggle(&mut self, index: usize) {
        self.expansion.toggle(index);
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion.is_expanded(index)
    }

    pub fn cards(&self) -> Vec<PortfolioCard> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let text = entry.plain_description();
                let expanded = self.expansion.is_expanded(index);
                let expandable = is_truncated(&text, self.preview_chars);
                let body = if expanded { text } else { preview(&text, self.preview_chars) };
                PortfolioCard {
                    title: entry.title.clone(),
                    body,
                    image_url: asset_url(&self.asset_base_url, AssetKind::Portfolio, &entry.image),
                    link: entry.link.clone(),
                    expandable,
                    expanded,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCard {
    pub title: String,
    pub body: String,
    /// Empty when the notification carries no image.
    pub image_url: String,
    pub date: String,
    pub expanded: bool,
}

/// State behind the Notifications screen.  Tapping a row toggles it.
#[derive(Debug, Clone)]
pub struct NotificationView {
    notifications: Vec<Notification>,
    expansion: SingleExpansion,
    preview_chars: usize,
}

impl NotificationView {
    pub fn new(notifications: Vec<Notification>, preview_chars: usize) -> Self {
        Self {
            notifications,
            expansion: SingleExpansion::default(),
            preview_chars,
        }
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn toggle(&mut self, index: usize) {
        self.expansion.toggle(index);
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion.is_expanded(index)
    }

    pub fn cards(&self) -> Vec<NotificationCard> {
        self.notifications
            .iter()
            .enumerate()
            .map(|(index, n)| {
                let expanded = self.expansion.is_expanded(index);
                NotificationCard {
                    title: n.title.clone(),
                    body: if expanded {
                        n.description.clone()
                    } else {
                        preview(&n.description, self.preview_chars)
                    },
                    image_url: n.image.clone(),
                    date: n.submitted.clone(),
                    expanded,
                }
            })
            .collect()
    }
}
