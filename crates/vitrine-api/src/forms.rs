// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lead-capture form submissions: contact enquiry, quotation request, and job
// application.  Each form is validated locally before anything is sent.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use vitrine_core::error::{Result, VitrineError};
use vitrine_core::types::{CareerApplication, EnquiryForm, QuotationRequest};

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct CareerReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    #[instrument(skip(self, form), fields(subject = %form.subject))]
    pub async fn submit_enquiry(&self, form: &EnquiryForm) -> Result<()> {
        form.validate()?;

        let body = Form::new()
            .text("name", form.name.clone())
            .text("email", form.email.clone())
            .text("mobile_no", form.mobile_no.clone())
            .text("subject", form.subject.clone())
            .text("query", form.query.clone());

        self.send("enquiry", self.post("enquiry").multipart(body))
            .await?;
        info!("enquiry submitted");
        Ok(())
    }

    /// Quotation requests go out url-encoded, unlike the other forms.
    #[instrument(skip(self, request))]
    pub async fn submit_quotation(&self, request: &QuotationRequest) -> Result<()> {
        request.validate()?;
        let who = request
            .client_kind
            .map(|k| k.label())
            .unwrap_or_default();
        let products = request.products_field();

        let fields = [
            ("who_you_are", who),
            ("products", products.as_str()),
            ("website_page", request.client_description.as_str()),
            ("descr", request.product_description.as_str()),
            ("email", request.email.as_str()),
            ("user_id", request.user_id.as_str()),
        ];

        self.send("quotation", self.post("quotation").form(&fields))
            .await?;
        info!(products = %products, "quotation requested");
        Ok(())
    }

    /// Submit a job application with its résumé attached.  The server
    /// confirms with `{"success": true}`.
    #[instrument(skip(self, application), fields(job = %application.job_title))]
    pub async fn submit_career(&self, application: &CareerApplication) -> Result<()> {
        application.validate()?;
        let resume = application
            .resume
            .as_ref()
            .ok_or_else(|| VitrineError::validation("Please complete: Resume"))?;

        let mut body = Form::new();
        for (key, value) in application.text_fields() {
            if !value.is_empty() {
                body = body.text(key, value.to_owned());
            }
        }

        let part = Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(&resume.mime_type)
            .map_err(|e| VitrineError::validation(format!("Unsupported résumé type: {e}")))?;
        body = body.part("resume", part);

        let reply: CareerReply = self
            .send_json(
                "career",
                self.post("career")
                    .header(reqwest::header::ACCEPT, "application/json")
                    .multipart(body),
            )
            .await?;

        if reply.success {
            info!("application submitted");
            Ok(())
        } else {
            let detail = reply.message.unwrap_or_default();
            warn!(detail = %detail, "application refused");
            Err(VitrineError::Rejected(detail))
        }
    }
}
