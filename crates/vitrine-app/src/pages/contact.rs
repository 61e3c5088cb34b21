// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contact page: general enquiry form, optionally pre-filled with a service.

use dioxus::prelude::*;

use vitrine_core::human_errors::humanize_error;
use vitrine_core::types::EnquiryForm;

use super::{PRIMARY_BUTTON_STYLE, TextArea, TextField};
use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::{ErrorBanner, SuccessNote};

#[component]
pub fn Contact(subject: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let profile = state.read().profile.clone().unwrap_or_default();
    let mut name = use_signal(|| profile.name.clone());
    let mut email = use_signal(|| profile.email.clone());
    let mut mobile = use_signal(|| profile.mobile_no.clone());
    let mut subject_field = use_signal(|| subject.clone());
    let mut query = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);

    rsx! {
        div {
            h1 { "Contact Us" }
            p { style: "color: #666;", "Tell us what you need and we will get back to you." }

            TextField { label: "Name", value: name }
            TextField { label: "Email", value: email, kind: "email" }
            TextField { label: "Mobile number", value: mobile, kind: "tel" }
            TextField { label: "Subject", value: subject_field }
            TextArea { label: "Your query", value: query }

            button {
                style: PRIMARY_BUTTON_STYLE,
                disabled: *sending.read(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let form = EnquiryForm {
                            name: name.read().clone(),
                            email: email.read().clone(),
                            mobile_no: mobile.read().clone(),
                            subject: subject_field.read().clone(),
                            query: query.read().clone(),
                        };
                        let svc = svc.clone();
                        sending.set(true);
                        error.set(None);
                        sent.set(false);
                        spawn(async move {
                            match svc.api().submit_enquiry(&form).await {
                                Ok(()) => {
                                    tracing::info!("enquiry sent");
                                    sent.set(true);
                                    query.set(String::new());
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "enquiry failed");
                                    error.set(Some(humanize_error(&e).message));
                                }
                            }
                            sending.set(false);
                        });
                    }
                },
                if *sending.read() { "Sending..." } else { "Submit" }
            }

            if let Some(message) = error.read().clone() {
                ErrorBanner { message }
            }
            if *sent.read() {
                SuccessNote { message: "Thank you! Your enquiry has been sent." }
            }
        }
    }
}
