// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Quotation page: "who are you", products wanted, and a description.

use dioxus::prelude::*;

use vitrine_core::human_errors::humanize_error;
use vitrine_core::types::{ClientKind, QuotationProduct, QuotationRequest};

use super::{INPUT_STYLE, PRIMARY_BUTTON_STYLE, TextArea, TextField};
use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::{ErrorBanner, SuccessNote};

#[component]
pub fn Quotation() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut client_kind = use_signal(|| Option::<ClientKind>::None);
    let client_description = use_signal(String::new);
    let mut products = use_signal(Vec::<QuotationProduct>::new);
    let product_description = use_signal(String::new);
    let email = use_signal(|| {
        state
            .read()
            .profile
            .as_ref()
            .map(|p| p.email.clone())
            .unwrap_or_default()
    });
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);

    let selected_label = client_kind.read().map(|k| k.label()).unwrap_or("");

    rsx! {
        div {
            h1 { "Get a Quote" }

            label { style: "font-size: 14px; color: #555;", "Who are you?" }
            select {
                style: INPUT_STYLE,
                value: selected_label,
                onchange: move |evt| client_kind.set(ClientKind::from_label(&evt.value())),
                option { value: "", "Select..." }
                for kind in ClientKind::ALL {
                    option { value: kind.label(), "{kind.label()}" }
                }
            }
            TextArea { label: "Tell us about your organisation", value: client_description }

            label { style: "font-size: 14px; color: #555;", "What do you need?" }
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin: 4px 0 12px;",
                for product in QuotationProduct::ALL {
                    label { style: "display: flex; align-items: center; gap: 6px;",
                        input {
                            r#type: "checkbox",
                            checked: products.read().contains(&product),
                            onchange: move |evt| {
                                let mut list = products.write();
                                if evt.checked() {
                                    if !list.contains(&product) {
                                        list.push(product);
                                    }
                                } else {
                                    list.retain(|p| *p != product);
                                }
                            },
                        }
                        "{product.label()}"
                    }
                }
            }
            TextArea { label: "Describe the product", value: product_description }
            TextField { label: "Email", value: email, kind: "email" }

            button {
                style: PRIMARY_BUTTON_STYLE,
                disabled: *sending.read(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let request = QuotationRequest {
                            client_kind: *client_kind.read(),
                            client_description: client_description.read().clone(),
                            products: products.read().clone(),
                            product_description: product_description.read().clone(),
                            email: email.read().clone(),
                            user_id: state.read().user_id.clone().unwrap_or_default(),
                        };
                        let svc = svc.clone();
                        sending.set(true);
                        error.set(None);
                        sent.set(false);
                        spawn(async move {
                            match svc.api().submit_quotation(&request).await {
                                Ok(()) => {
                                    tracing::info!(products = %request.products_field(), "quotation requested");
                                    sent.set(true);
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "quotation failed");
                                    error.set(Some(humanize_error(&e).message));
                                }
                            }
                            sending.set(false);
                        });
                    }
                },
                if *sending.read() { "Sending..." } else { "Request Quote" }
            }

            if let Some(message) = error.read().clone() {
                ErrorBanner { message }
            }
            if *sent.read() {
                SuccessNote { message: "Thank you! We will send your quotation soon." }
            }
        }
    }
}
