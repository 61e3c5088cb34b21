// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Account operations: passwordless login, profile fetch/update, and device
// token registration.
//
// Login is a two-step exchange: `log_in` maps an email or mobile number to a
// registration id, which then keys every other account call.

use reqwest::multipart::Form;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use vitrine_core::error::{Result, VitrineError};
use vitrine_core::types::{LoginIdentifier, UserProfile};

use crate::client::ApiClient;

/// Reply shape shared by `log_in` and `update_profile`.
#[derive(Debug, Deserialize)]
struct MessageReply {
    #[serde(default)]
    message: Value,
}

impl ApiClient {
    /// Exchange an identifier for the user's registration id.
    #[instrument(skip(self, identifier), fields(kind = identifier.field_name()))]
    pub async fn log_in(&self, identifier: &LoginIdentifier) -> Result<String> {
        let form = Form::new().text(identifier.field_name(), identifier.value().to_owned());
        let reply: MessageReply = self
            .send_json("log_in", self.post("log_in").multipart(form))
            .await?;

        let registration_id = match reply.message {
            Value::String(s) if !s.is_empty() => s,
            Value::Number(n) => n.to_string(),
            _ => return Err(VitrineError::Rejected("Login failed".into())),
        };
        info!("login accepted");
        Ok(registration_id)
    }

    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, registration_id: &str) -> Result<UserProfile> {
        let form = Form::new().text("registration_id", registration_id.to_owned());
        let mut profile: UserProfile = self
            .send_json("get_profile", self.post("get_profile").multipart(form))
            .await?;
        if profile.registration_id.is_empty() {
            profile.registration_id = registration_id.to_owned();
        }
        Ok(profile)
    }

    /// Associate this device with the account for push notifications.
    #[instrument(skip(self))]
    pub async fn register_device(&self, token_id: &str, registration_id: &str) -> Result<()> {
        let form = Form::new()
            .text("token_id", token_id.to_owned())
            .text("registration_id", registration_id.to_owned());
        self.send("token", self.post("token").multipart(form)).await?;
        Ok(())
    }

    /// Push edited profile fields.  Succeeds only when the server answers
    /// `{"message": true}`.
    #[instrument(skip(self, profile), fields(registration_id = %profile.registration_id))]
    pub async fn update_profile(&self, profile: &UserProfile) -> Result<()> {
        profile.validate_for_update()?;
        if profile.registration_id.is_empty() {
            return Err(VitrineError::NotLoggedIn);
        }

        let form = Form::new()
            .text("registration_id", profile.registration_id.clone())
            .text("name", profile.name.clone())
            .text("email", profile.email.clone())
            .text("mobile_no", profile.mobile_no.clone())
            .text("address", profile.address.clone());

        let reply: MessageReply = self
            .send_json("update_profile", self.post("update_profile").multipart(form))
            .await?;

        if reply.message == Value::Bool(true) {
            info!("profile updated");
            Ok(())
        } else {
            warn!(reply = %reply.message, "profile update refused");
            Err(VitrineError::Rejected("Failed to update profile".into()))
        }
    }
}
