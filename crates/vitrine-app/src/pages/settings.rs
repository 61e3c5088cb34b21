// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page: persistent app configuration and the search location.

use dioxus::prelude::*;

use super::{INPUT_STYLE, PRIMARY_BUTTON_STYLE};
use crate::services::app_services::AppServices;
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<String>::None);
    let storage = svc
        .data_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "not available (settings last until exit)".into());

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Location" }
                p { style: "color: #666; font-size: 13px;", "Sent with your searches so we can suggest nearby offers." }
                input {
                    r#type: "text",
                    style: INPUT_STYLE,
                    placeholder: "City, State",
                    value: "{state.read().location}",
                    oninput: move |evt| state.write().location = evt.value(),
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Server" }
                label { style: "font-size: 14px; color: #555;", "API URL" }
                input {
                    r#type: "url",
                    style: INPUT_STYLE,
                    value: "{state.read().config.api_base_url}",
                    onchange: move |evt| state.write().config.api_base_url = evt.value(),
                }
                label { style: "font-size: 14px; color: #555;", "Image URL" }
                input {
                    r#type: "url",
                    style: INPUT_STYLE,
                    value: "{state.read().config.asset_base_url}",
                    onchange: move |evt| state.write().config.asset_base_url = evt.value(),
                }
                NumberRow {
                    label: "Request timeout (seconds)",
                    value: state.read().config.request_timeout_secs as usize,
                    on_change: move |v: usize| state.write().config.request_timeout_secs = v as u64,
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Display" }
                NumberRow {
                    label: "Service preview length",
                    value: state.read().config.description_preview_chars,
                    on_change: move |v: usize| state.write().config.description_preview_chars = v,
                }
                NumberRow {
                    label: "Notification preview length",
                    value: state.read().config.notification_preview_chars,
                    on_change: move |v: usize| state.write().config.notification_preview_chars = v,
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Privacy" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Share searches with us" }
                    input {
                        r#type: "checkbox",
                        checked: state.read().config.search_telemetry,
                        onchange: move |evt| state.write().config.search_telemetry = evt.checked(),
                    }
                }
            }

            button {
                style: PRIMARY_BUTTON_STYLE,
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        let location = state.read().location.clone();
                        let outcome = svc
                            .save_config(&config)
                            .and_then(|()| svc.session().set_location(Some(location)));
                        match outcome {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some("Settings saved. Server changes apply after restart.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Save failed: {e}")));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "Vitrine v{VERSION}"
                    br {}
                    "PMPL-1.0-or-later"
                    br {}
                    "Data: {storage}"
                }
            }
        }
    }
}

#[component]
fn NumberRow(label: &'static str, value: usize, on_change: EventHandler<usize>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "number",
                style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                value: "{value}",
                onchange: move |evt| {
                    if let Ok(v) = evt.value().parse::<usize>()
                        && v > 0
                    {
                        on_change.call(v);
                    }
                },
            }
        }
    }
}
