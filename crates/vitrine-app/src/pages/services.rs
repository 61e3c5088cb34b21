// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services page: searchable catalog with expandable descriptions.
//
// The page owns a fresh `ServiceListView` per visit.  It follows the shared
// catalog store, runs the navigation query on arrival, and re-runs searches
// from its own search box.  Late replies after the page is left are dropped
// via the page's `ScreenScope`.

use dioxus::prelude::*;

use vitrine_catalog::{ScreenScope, ServiceCard, ServiceListView};
use vitrine_core::human_errors::humanize_error;

use super::INPUT_STYLE;
use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::{ErrorBanner, Route};

#[component]
pub fn Services(query: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let scope = use_hook(ScreenScope::new);
    let scope_drop = scope.clone();
    use_drop(move || scope_drop.unmount());

    let mut view = use_signal({
        let svc = svc.clone();
        move || {
            let config = svc.config();
            ServiceListView::new(
                svc.catalog_store().catalog(),
                config.description_preview_chars,
                config.asset_base_url,
            )
        }
    });
    let mut search_text = use_signal(|| query.clone());
    let mut loading = use_signal(|| false);

    // Follow catalog replacements for as long as the page is mounted.
    let svc_watch = svc.clone();
    let scope_watch = scope.clone();
    use_future(move || {
        let mut rx = svc_watch.catalog_store().subscribe();
        let scope = scope_watch.clone();
        async move {
            while rx.changed().await.is_ok() {
                if !scope.is_mounted() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                view.write().set_catalog(snapshot);
            }
        }
    });

    // Search for the navigation query whenever it changes.
    let svc_nav = svc.clone();
    use_effect(use_reactive((&query,), move |(query,)| {
        search_text.set(query.clone());
        let engine = svc_nav.search_engine().clone();
        view.write().search(&engine, &query);
    }));

    let reload = {
        let svc = svc.clone();
        let scope = scope.clone();
        move || {
            let svc = svc.clone();
            let scope = scope.clone();
            loading.set(true);
            spawn(async move {
                match svc.refresh_catalog(&scope).await {
                    Ok(Some(_)) => state.write().catalog_error = None,
                    Ok(None) => {}
                    Err(e) => state.write().catalog_error = Some(humanize_error(&e).message),
                }
                if scope.is_mounted() {
                    loading.set(false);
                }
            });
        }
    };

    // Nothing loaded yet (start-up fetch failed or still running): try now.
    let mut reload_on_mount = reload.clone();
    use_hook(move || {
        if view.peek().catalog().is_empty() {
            reload_on_mount();
        }
    });

    let cards = view.read().cards();
    let show_more = view.read().show_more_visible();
    let catalog_empty = view.read().catalog().is_empty();
    let catalog_error = state.read().catalog_error.clone();

    rsx! {
        div {
            h1 { "Services" }

            form {
                style: "display: flex; gap: 8px;",
                onsubmit: {
                    let svc = svc.clone();
                    move |evt: FormEvent| {
                        evt.prevent_default();
                        let query = search_text.read().clone();
                        let engine = svc.search_engine().clone();
                        view.write().search(&engine, &query);
                    }
                },
                input {
                    r#type: "search",
                    placeholder: "Search services",
                    style: INPUT_STYLE,
                    value: "{search_text}",
                    oninput: move |evt| search_text.set(evt.value()),
                }
                button { r#type: "submit",
                    style: "padding: 10px 16px; margin: 4px 0 12px; border-radius: 6px; border: none; background: #007aff; color: white;",
                    "Search"
                }
            }

            if let Some(message) = catalog_error {
                ErrorBanner { message }
                button {
                    style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    disabled: *loading.read(),
                    onclick: {
                        let mut reload = reload.clone();
                        move |_| reload()
                    },
                    if *loading.read() { "Loading..." } else { "Try Again" }
                }
            }

            if *loading.read() && catalog_empty {
                p { style: "color: #888; text-align: center;", "Loading services..." }
            } else if cards.is_empty() && !catalog_empty {
                p { style: "color: #888; text-align: center; margin: 48px 0;",
                    "No matching services."
                }
            }

            for card in cards {
                ServiceCardView { key: "{card.id}", card: card.clone(), view }
            }

            if show_more {
                button {
                    style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white; margin-top: 8px;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            search_text.set(String::new());
                            let engine = svc.search_engine().clone();
                            view.write().show_more(&engine);
                        }
                    },
                    "Show More"
                }
            }
        }
    }
}

#[component]
fn ServiceCardView(card: ServiceCard, view: Signal<ServiceListView>) -> Element {
    let mut view = view;
    let id = card.id.clone();
    let subject = card.title.clone();

    rsx! {
        div { style: "margin: 12px 0; border: 1px solid #e0e0e0; border-radius: 12px; overflow: hidden;",
            img { src: "{card.image_url}", style: "width: 100%; max-height: 180px; object-fit: cover;" }
            div { style: "padding: 12px;",
                h3 { style: "margin: 0 0 8px;", "{card.title}" }
                p { style: "color: #444; font-size: 14px; white-space: pre-wrap;", "{card.body}" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding-top: 12px;",
                    if card.expandable {
                        a {
                            style: "color: #007aff; cursor: pointer; font-size: 14px;",
                            onclick: move |_| view.write().toggle_expansion(&id),
                            "{card.toggle_label()}"
                        }
                    } else {
                        span {}
                    }
                    button {
                        style: "padding: 6px 14px; border-radius: 6px; border: none; background: #007aff; color: white; font-size: 13px;",
                        onclick: move |_| {
                            navigator().push(Route::Contact { subject: subject.clone() });
                        },
                        "Enquire"
                    }
                }
            }
        }
    }
}
