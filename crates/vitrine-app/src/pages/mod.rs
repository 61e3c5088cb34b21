// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dioxus::prelude::*;

pub mod careers;
pub mod contact;
pub mod home;
pub mod login;
pub mod notifications;
pub mod portfolio;
pub mod profile;
pub mod quotation;
pub mod services;
pub mod settings;

const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 10px; margin: 4px 0 12px; border: 1px solid #ccc; border-radius: 6px; font-size: 15px;";
const PRIMARY_BUTTON_STYLE: &str = "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;";

/// Labelled single-line input bound to a signal.
#[component]
fn TextField(
    label: &'static str,
    value: Signal<String>,
    #[props(default = "text")] kind: &'static str,
) -> Element {
    let mut value = value;
    rsx! {
        label { style: "font-size: 14px; color: #555;", "{label}" }
        input {
            r#type: kind,
            style: INPUT_STYLE,
            value: "{value}",
            oninput: move |evt| value.set(evt.value()),
        }
    }
}

/// Labelled multi-line input bound to a signal.
#[component]
fn TextArea(label: &'static str, value: Signal<String>) -> Element {
    let mut value = value;
    rsx! {
        label { style: "font-size: 14px; color: #555;", "{label}" }
        textarea {
            style: "{INPUT_STYLE} min-height: 80px;",
            value: "{value}",
            oninput: move |evt| value.set(evt.value()),
        }
    }
}
