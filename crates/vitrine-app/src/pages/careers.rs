// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Careers page: job application with résumé upload.

use dioxus::prelude::*;

use vitrine_core::human_errors::humanize_error;
use vitrine_core::types::{CareerApplication, Resume};

use super::{PRIMARY_BUTTON_STYLE, TextArea, TextField};
use crate::services::app_services::AppServices;
use crate::{ErrorBanner, SuccessNote};

#[component]
pub fn Careers() -> Element {
    let svc = use_context::<AppServices>();

    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let contact = use_signal(String::new);
    let address = use_signal(String::new);
    let experience = use_signal(String::new);
    let expected_salary = use_signal(String::new);
    let qualification = use_signal(String::new);
    let job_title = use_signal(String::new);
    let current_employer = use_signal(String::new);
    let mut resume = use_signal(|| Option::<Resume>::None);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);

    let resume_label = resume
        .read()
        .as_ref()
        .map(|r| format!("Resume: {}", r.file_name))
        .unwrap_or_else(|| "Attach Resume (PDF or Word, max 5MB)".into());

    rsx! {
        div {
            h1 { "Careers" }
            p { style: "color: #666;", "Join our team. Fill in the form and attach your résumé." }

            TextField { label: "Full name", value: name }
            TextField { label: "Email", value: email, kind: "email" }
            TextField { label: "Contact number", value: contact, kind: "tel" }
            TextArea { label: "Address", value: address }
            TextField { label: "Experience", value: experience }
            TextField { label: "Expected salary", value: expected_salary }
            TextField { label: "Qualification", value: qualification }
            TextField { label: "Job title", value: job_title }
            TextField { label: "Current employer", value: current_employer }

            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px dashed #007aff; color: #007aff; background: white; font-size: 15px; margin: 8px 0;",
                onclick: move |_| {
                    #[cfg(not(any(target_os = "ios", target_os = "android")))]
                    {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Résumé", &["pdf", "doc", "docx"])
                            .pick_file()
                        {
                            let file_name = path.file_name()
                                .map(|n| n.to_string_lossy().to_string())
                                .unwrap_or_else(|| "resume".into());
                            let ext = path.extension()
                                .map(|e| e.to_string_lossy().to_string())
                                .unwrap_or_default();

                            match std::fs::read(&path) {
                                Ok(bytes) => {
                                    let mime = Resume::mime_for_extension(&ext);
                                    match Resume::new(file_name.clone(), mime, bytes) {
                                        Ok(r) => {
                                            tracing::info!(file = %file_name, "résumé attached");
                                            error.set(None);
                                            resume.set(Some(r));
                                        }
                                        Err(e) => {
                                            resume.set(None);
                                            error.set(Some(humanize_error(&e).message));
                                        }
                                    }
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "failed to read résumé");
                                    error.set(Some(format!("Could not read that file. {e}")));
                                }
                            }
                        }
                    }
                    #[cfg(any(target_os = "ios", target_os = "android"))]
                    {
                        tracing::info!("file picker: use native bridge on mobile");
                        error.set(Some("File picker not yet wired on mobile".into()));
                    }
                },
                "{resume_label}"
            }

            button {
                style: PRIMARY_BUTTON_STYLE,
                disabled: *sending.read(),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let application = CareerApplication {
                            name: name.read().clone(),
                            email: email.read().clone(),
                            contact: contact.read().clone(),
                            address: address.read().clone(),
                            experience: experience.read().clone(),
                            expected_salary: expected_salary.read().clone(),
                            qualification: qualification.read().clone(),
                            job_title: job_title.read().clone(),
                            current_employer: current_employer.read().clone(),
                            resume: resume.read().clone(),
                        };
                        let svc = svc.clone();
                        sending.set(true);
                        error.set(None);
                        sent.set(false);
                        spawn(async move {
                            match svc.api().submit_career(&application).await {
                                Ok(()) => {
                                    tracing::info!("application submitted");
                                    sent.set(true);
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "application failed");
                                    error.set(Some(humanize_error(&e).message));
                                }
                            }
                            sending.set(false);
                        });
                    }
                },
                if *sending.read() { "Submitting..." } else { "Apply" }
            }

            if let Some(message) = error.read().clone() {
                ErrorBanner { message }
            }
            if *sent.read() {
                SuccessNote { message: "Application submitted successfully!" }
            }
        }
    }
}
