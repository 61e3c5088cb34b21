// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Notifications page: announcements; tap a row to read it in full.

use dioxus::prelude::*;

use vitrine_catalog::NotificationView;
use vitrine_core::human_errors::humanize_error;

use crate::ErrorBanner;
use crate::services::app_services::AppServices;

#[component]
pub fn Notifications() -> Element {
    let svc = use_context::<AppServices>();
    let mut view = use_signal(|| Option::<NotificationView>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            let preview_chars = svc.config().notification_preview_chars;
            match svc.api().fetch_notifications().await {
                Ok(list) => view.set(Some(NotificationView::new(list, preview_chars))),
                Err(e) => {
                    tracing::error!(error = %e, "notifications load failed");
                    error.set(Some(humanize_error(&e).message));
                }
            }
        }
    });

    let cards = view.read().as_ref().map(NotificationView::cards);

    rsx! {
        div {
            h1 { "Notifications" }

            if let Some(message) = error.read().clone() {
                ErrorBanner { message }
            }

            match cards {
                None if error.read().is_none() => rsx! {
                    p { style: "color: #888;", "Loading..." }
                },
                None => rsx! {},
                Some(cards) if cards.is_empty() => rsx! {
                    p { style: "text-align: center; color: #aaa; margin: 48px 0;", "No notifications." }
                },
                Some(cards) => rsx! {
                    for (index, card) in cards.into_iter().enumerate() {
                        div { key: "{index}",
                            style: "display: flex; gap: 12px; padding: 12px 0; border-bottom: 1px solid #f0f0f0; cursor: pointer;",
                            onclick: move |_| {
                                if let Some(v) = view.write().as_mut() {
                                    v.toggle(index);
                                }
                            },
                            if !card.image_url.is_empty() {
                                img { src: "{card.image_url}", style: "width: 44px; height: 44px; border-radius: 22px; object-fit: cover;" }
                            }
                            div { style: "flex: 1;",
                                strong { "{card.title}" }
                                p { style: "color: #555; font-size: 14px; margin: 4px 0 0;", "{card.body}" }
                            }
                            span { style: "color: #999; font-size: 12px; white-space: nowrap;", "{card.date}" }
                        }
                    }
                },
            }
        }
    }
}
