// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Portfolio page: showcased projects, one expanded at a time.

use dioxus::prelude::*;

use vitrine_catalog::PortfolioView;
use vitrine_core::human_errors::humanize_error;

use crate::ErrorBanner;
use crate::services::app_services::AppServices;

#[component]
pub fn Portfolio() -> Element {
    let svc = use_context::<AppServices>();
    let mut view = use_signal(|| Option::<PortfolioView>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            let config = svc.config();
            match svc.api().fetch_portfolio().await {
                Ok(entries) => {
                    tracing::info!(count = entries.len(), "portfolio loaded");
                    view.set(Some(PortfolioView::new(
                        entries,
                        config.description_preview_chars,
                        config.asset_base_url,
                    )));
                }
                Err(e) => {
                    tracing::error!(error = %e, "portfolio load failed");
                    error.set(Some(humanize_error(&e).message));
                }
            }
        }
    });

    let cards = view.read().as_ref().map(PortfolioView::cards);

    rsx! {
        div {
            h1 { "Portfolio" }

            if let Some(message) = error.read().clone() {
                ErrorBanner { message }
            }

            match cards {
                None if error.read().is_none() => rsx! {
                    p { style: "color: #888;", "Loading..." }
                },
                None => rsx! {},
                Some(cards) if cards.is_empty() => rsx! {
                    p { style: "text-align: center; color: #aaa; margin: 48px 0;", "No projects yet." }
                },
                Some(cards) => rsx! {
                    for (index, card) in cards.into_iter().enumerate() {
                        div { key: "{index}",
                            style: "margin: 12px 0; border: 1px solid #e0e0e0; border-radius: 12px; overflow: hidden;",
                            img { src: "{card.image_url}", style: "width: 100%; max-height: 200px; object-fit: cover;" }
                            div { style: "padding: 12px;",
                                h3 { style: "margin: 0 0 8px;", "{card.title}" }
                                p { style: "color: #444; font-size: 14px;", "{card.body}" }
                                if card.expandable {
                                    a {
                                        style: "color: #007aff; cursor: pointer; font-size: 14px;",
                                        onclick: move |_| {
                                            if let Some(v) = view.write().as_mut() {
                                                v.toggle(index);
                                            }
                                        },
                                        "{card.toggle_label()}"
                                    }
                                }
                                if !card.link.is_empty() {
                                    p { style: "margin-top: 8px;",
                                        a { href: "{card.link}", style: "color: #007aff; font-size: 13px;", "{card.link}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
