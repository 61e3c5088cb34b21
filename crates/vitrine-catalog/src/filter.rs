// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Catalog filtering.
//
// A query selects every item whose id, name, or description contains it as a
// case-insensitive substring.  The query is used literally: surrounding
// whitespace is part of the needle.  Matches keep catalog order and share the
// catalog's item allocations.

use std::sync::Arc;

use vitrine_core::types::ServiceItem;

use crate::store::Catalog;

/// Subset of a catalog snapshot matching one query.
#[derive(Debug, Clone)]
pub struct FilteredResult {
    items: Vec<Arc<ServiceItem>>,
    query: String,
    catalog_revision: u64,
}

impl FilteredResult {
    pub fn items(&self) -> &[Arc<ServiceItem>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The query this result was computed for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Revision of the catalog snapshot this result was derived from.
    pub fn catalog_revision(&self) -> u64 {
        self.catalog_revision
    }

    /// Whether `catalog` has been replaced since this result was computed.
    pub fn is_stale(&self, catalog: &Catalog) -> bool {
        self.catalog_revision != catalog.revision()
    }

    /// Filter this result again.
    pub fn refine(&self, query: &str) -> FilteredResult {
        FilteredResult {
            items: select(&self.items, query),
            query: query.to_owned(),
            catalog_revision: self.catalog_revision,
        }
    }
}

/// Filter a catalog snapshot.  Pure and synchronous.
///
/// An empty query returns the whole catalog in order.
pub fn filter(catalog: &Catalog, query: &str) -> FilteredResult {
    FilteredResult {
        items: select(catalog.items(), query),
        query: query.to_owned(),
        catalog_revision: catalog.revision(),
    }
}

fn select(items: &[Arc<ServiceItem>], query: &str) -> Vec<Arc<ServiceItem>> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, &needle))
        .cloned()
        .collect()
}

/// Whether `item` matches an already-lowercased needle.
pub fn matches(item: &ServiceItem, needle: &str) -> bool {
    [item.id.as_str(), item.name.as_str(), item.description.as_str()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::item;
    use vitrine_core::types::ServiceId;

    fn sample() -> Catalog {
        Catalog::from_items(vec![
            item("1", "Web Design", "We build sites"),
            item("2", "App Dev", "Mobile apps"),
        ])
    }

    fn ids(result: &FilteredResult) -> Vec<&str> {
        result.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let catalog = sample();
        let result = filter(&catalog, "");
        assert_eq!(ids(&result), ["1", "2"]);
        assert!(Arc::ptr_eq(&result.items()[0], &catalog.items()[0]));
    }

    #[test]
    fn matches_name_case_insensitively() {
        assert_eq!(ids(&filter(&sample(), "app")), ["2"]);
    }

    #[test]
    fn matches_description_case_insensitively() {
        assert_eq!(ids(&filter(&sample(), "we")), ["1"]);
        assert_eq!(ids(&filter(&sample(), "MOBILE")), ["2"]);
    }

    #[test]
    fn matches_stringified_id() {
        let catalog = Catalog::from_items(vec![item("12", "SEO", ""), item("3", "Hosting", "")]);
        assert_eq!(ids(&filter(&catalog, "2")), ["12"]);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let result = filter(&Catalog::default(), "anything");
        assert!(result.is_empty());
    }

    #[test]
    fn whitespace_query_is_literal() {
        let catalog = sample();
        // Both names contain a space.
        assert_eq!(ids(&filter(&catalog, " ")), ["1", "2"]);
        // No field contains a double space.
        assert!(filter(&catalog, "  ").is_empty());
        // Not trimmed: " app" only occurs inside "Mobile apps".
        assert_eq!(ids(&filter(&catalog, " app")), ["2"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample();
        for q in ["", "a", "we", "de", "zzz"] {
            let once = filter(&catalog, q);
            let twice = once.refine(q);
            assert_eq!(ids(&once), ids(&twice), "query {q:?}");
        }
    }

    #[test]
    fn results_are_ordered_subsets() {
        let catalog = Catalog::from_items(vec![
            item("5", "Logo design", "Branding"),
            item("1", "Hosting", "Fast servers"),
            item("9", "Web design", "Responsive"),
            item("4", "Design audit", "UX review"),
        ]);
        let result = filter(&catalog, "DESIGN");
        assert_eq!(ids(&result), ["5", "9", "4"]);

        let needle = "design";
        for matched in result.items() {
            assert!(matches(matched, needle));
            assert!(catalog.items().iter().any(|c| c.id == matched.id));
        }
    }

    #[test]
    fn stale_after_catalog_replacement() {
        let store = crate::store::CatalogStore::new();
        store.set_catalog(vec![item("1", "Web", "")]);
        let result = filter(&store.catalog(), "web");
        assert!(!result.is_stale(&store.catalog()));

        store.set_catalog(vec![item("2", "App", "")]);
        assert!(result.is_stale(&store.catalog()));
        assert_eq!(result.items()[0].id, ServiceId::from("1"));
    }
}
