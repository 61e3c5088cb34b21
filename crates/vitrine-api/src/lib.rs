// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vitrine API: async client for the business's PHP backend.  Every remote
// call the app makes goes through `ApiClient`; the catalog operations are
// additionally exposed through the `CatalogApi` trait so the search flow can
// be exercised without a network.

pub mod account;
pub mod assets;
pub mod catalog;
pub mod client;
pub mod content;
pub mod forms;

pub use assets::AssetKind;
pub use catalog::CatalogApi;
pub use client::ApiClient;
