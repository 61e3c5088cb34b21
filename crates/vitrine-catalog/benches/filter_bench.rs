// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for catalog filtering and card building in the
// vitrine-catalog crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vitrine_catalog::{Catalog, ServiceListView, filter};
use vitrine_core::types::{ServiceId, ServiceItem, ServiceStatus};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const NAMES: [&str; 6] = [
    "Web Design",
    "Android App Development",
    "Search Engine Optimisation",
    "Logo & Branding",
    "Hosting",
    "Digital Marketing",
];

fn catalog_of(size: usize) -> Catalog {
    let items = (0..size)
        .map(|i| ServiceItem {
            id: ServiceId(i.to_string()),
            name: format!("{} {i}", NAMES[i % NAMES.len()]),
            description: format!(
                "Package {i}: responsive layouts, secure checkout, analytics and monthly reports \
                 for small businesses across Maharashtra."
            ),
            icon_path: format!("serv_{i}.png"),
            status: ServiceStatus::Active,
        })
        .collect();
    Catalog::from_items(items)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Filter a 10k-item catalog with queries of varying selectivity.
fn bench_filter(c: &mut Criterion) {
    let catalog = catalog_of(10_000);
    let queries: &[(&str, &str)] = &[
        ("empty", ""),
        ("broad", "a"),
        ("name", "android"),
        ("id", "4242"),
        ("miss", "blockchain"),
    ];

    let mut group = c.benchmark_group("filter (10k items)");
    for &(label, query) in queries {
        group.bench_function(label, |b| {
            b.iter(|| black_box(filter(black_box(&catalog), black_box(query))));
        });
    }
    group.finish();
}

/// Build cards for a narrowed 1k-item result.
fn bench_cards(c: &mut Criterion) {
    let catalog = catalog_of(1_000);
    let mut view = ServiceListView::new(catalog, 100, "https://cdn.test/uploads");
    view.apply(filter(view.catalog(), "design"));

    c.bench_function("service cards (design, 1k catalog)", |b| {
        b.iter(|| black_box(view.cards()));
    });
}

criterion_group!(benches, bench_filter, bench_cards);
criterion_main!(benches);
