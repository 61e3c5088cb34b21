// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Profile page: view and edit the logged-in user's details, log out.

use dioxus::prelude::*;

use vitrine_core::human_errors::humanize_error;
use vitrine_core::types::UserProfile;

use super::{PRIMARY_BUTTON_STYLE, TextArea, TextField};
use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::{ErrorBanner, Route, SuccessNote};

#[component]
pub fn Profile() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let initial = state.read().profile.clone().unwrap_or_default();
    let mut name = use_signal(|| initial.name.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut mobile = use_signal(|| initial.mobile_no.clone());
    let mut address = use_signal(|| initial.address.clone());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);

    // Pull the latest profile from the server on each visit.
    let svc_load = svc.clone();
    let _loader = use_resource(move || {
        let svc = svc_load.clone();
        async move {
            if svc.session().user_id().is_none() {
                return;
            }
            match svc.reload_profile().await {
                Ok(p) => {
                    name.set(p.name.clone());
                    email.set(p.email.clone());
                    mobile.set(p.mobile_no.clone());
                    address.set(p.address.clone());
                    state.write().profile = Some(p);
                }
                Err(e) => tracing::warn!(error = %e, "profile reload failed"),
            }
        }
    });

    let Some(user_id) = state.read().user_id.clone() else {
        return rsx! {
            div {
                h1 { "Profile" }
                p { style: "color: #888;", "You are not logged in." }
                Link { to: Route::Login {}, style: "color: #007aff;", "Login" }
            }
        };
    };

    rsx! {
        div {
            h1 { "Profile" }

            TextField { label: "Name", value: name }
            TextField { label: "Email", value: email, kind: "email" }
            TextField { label: "Mobile number", value: mobile, kind: "tel" }
            TextArea { label: "Address", value: address }

            button {
                style: PRIMARY_BUTTON_STYLE,
                disabled: *saving.read(),
                onclick: {
                    let svc = svc.clone();
                    let user_id = user_id.clone();
                    move |_| {
                        let profile = UserProfile {
                            registration_id: user_id.clone(),
                            name: name.read().clone(),
                            email: email.read().clone(),
                            mobile_no: mobile.read().clone(),
                            address: address.read().clone(),
                        };
                        let svc = svc.clone();
                        saving.set(true);
                        error.set(None);
                        saved.set(false);
                        spawn(async move {
                            match svc.update_profile(&profile).await {
                                Ok(()) => {
                                    state.write().profile = Some(profile);
                                    saved.set(true);
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "profile update failed");
                                    error.set(Some(humanize_error(&e).message));
                                }
                            }
                            saving.set(false);
                        });
                    }
                },
                if *saving.read() { "Saving..." } else { "Update Profile" }
            }

            if let Some(message) = error.read().clone() {
                ErrorBanner { message }
            }
            if *saved.read() {
                SuccessNote { message: "Profile updated." }
            }

            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #ff3b30; color: #ff3b30; background: white; font-size: 16px; margin-top: 24px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        if let Err(e) = svc.log_out() {
                            tracing::error!(error = %e, "failed to clear session");
                        }
                        state.write().sync_session(&svc);
                        navigator().replace(Route::Home {});
                    }
                },
                "Log Out"
            }
        }
    }
}
