// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Login page: passwordless login by email or mobile number.

use dioxus::prelude::*;

use vitrine_core::human_errors::humanize_error;

use super::{PRIMARY_BUTTON_STYLE, TextField};
use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::{ErrorBanner, Route};

#[component]
pub fn Login() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let identifier = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    rsx! {
        div {
            h1 { "Login" }
            p { style: "color: #666;", "Sign in with the email or mobile number you registered with." }

            TextField { label: "Email or mobile number", value: identifier }

            button {
                style: PRIMARY_BUTTON_STYLE,
                disabled: *busy.read(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let input = identifier.read().clone();
                        let svc = svc.clone();
                        busy.set(true);
                        error.set(None);
                        spawn(async move {
                            match svc.log_in(&input).await {
                                Ok(_) => {
                                    state.write().sync_session(&svc);
                                    navigator().replace(Route::Profile {});
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "login failed");
                                    error.set(Some(humanize_error(&e).message));
                                }
                            }
                            busy.set(false);
                        });
                    }
                },
                if *busy.read() { "Signing in..." } else { "Login" }
            }

            if let Some(message) = error.read().clone() {
                ErrorBanner { message }
            }
        }
    }
}
