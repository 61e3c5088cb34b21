// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page: banner slides, search box, featured services, quick actions.

use dioxus::prelude::*;

use vitrine_api::AssetKind;
use vitrine_core::human_errors::humanize_error;

use super::INPUT_STYLE;
use crate::services::app_services::AppServices;
use crate::{ErrorBanner, Route};

#[component]
pub fn Home() -> Element {
    let svc = use_context::<AppServices>();
    let mut search_text = use_signal(String::new);

    let svc_slides = svc.clone();
    let slides = use_resource(move || {
        let svc = svc_slides.clone();
        async move {
            let slides = svc.api().fetch_slides().await;
            if let Err(ref e) = slides {
                tracing::warn!(error = %e, "slides unavailable");
            }
            slides
        }
    });

    let svc_featured = svc.clone();
    let featured = use_resource(move || {
        let svc = svc_featured.clone();
        async move { svc.featured_services().await }
    });

    rsx! {
        div {
            h1 { "Vitrine" }

            // Banner
            match &*slides.read() {
                Some(Ok(slides)) => rsx! {
                    div { style: "display: flex; gap: 8px; overflow-x: auto; margin: 12px 0;",
                        for slide in slides.iter() {
                            img {
                                src: svc.asset_url(AssetKind::Slider, &slide.image),
                                alt: "{slide.title}",
                                style: "height: 160px; border-radius: 8px; flex-shrink: 0;",
                            }
                        }
                    }
                },
                _ => rsx! {},
            }

            // Search
            form {
                style: "display: flex; gap: 8px;",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let query = search_text.read().clone();
                    navigator().push(Route::Services { query });
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

            // Featured services
            h2 { "Our Services" }
            match &*featured.read() {
                Some(Ok(items)) if items.is_empty() => rsx! {
                    p { style: "color: #888;", "No services listed yet." }
                },
                Some(Ok(items)) => rsx! {
                    div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin: 12px 0;",
                        for item in items.iter() {
                            {
                                let query = item.name.clone();
                                rsx! {
                                    button {
                                        key: "{item.id}",
                                        style: "display: flex; flex-direction: column; align-items: center; padding: 16px; border-radius: 12px; border: 1px solid #e0e0e0; background: white;",
                                        onclick: move |_| {
                                            navigator().push(Route::Services { query: query.clone() });
                                        },
                                        img {
                                            src: svc.asset_url(AssetKind::Service, &item.icon_path),
                                            style: "width: 48px; height: 48px;",
                                        }
                                        span { style: "margin-top: 8px; font-size: 14px;", "{item.name}" }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    ErrorBanner { message: humanize_error(e).message }
                },
                None => rsx! {
                    p { style: "color: #888;", "Loading..." }
                },
            }

            // Quick actions
            div { style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 12px; margin: 24px 0;",
                QuickAction { to: Route::Contact { subject: String::new() }, label: "Contact Us" }
                QuickAction { to: Route::Quotation {}, label: "Get a Quote" }
                QuickAction { to: Route::Careers {}, label: "Careers" }
            }
            Link { to: Route::Settings {},
                style: "display: block; text-align: center; color: #888; font-size: 13px;",
                "Settings"
            }
        }
    }
}

#[component]
fn QuickAction(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: block; padding: 16px 8px; border-radius: 12px; background: #f0f4ff; color: #007aff; text-align: center; text-decoration: none; font-size: 14px;",
            "{label}"
        }
    }
}
