// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: reactive signals for the Dioxus UI.

use vitrine_core::AppConfig;
use vitrine_core::types::UserProfile;

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Application settings being edited.
    pub config: AppConfig,
    /// Registration id of the logged-in user.
    pub user_id: Option<String>,
    pub profile: Option<UserProfile>,
    /// Free-text location sent with searches.
    pub location: String,
    /// Last catalog load failure, shown until the next successful load.
    pub catalog_error: Option<String>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        let mut state = Self {
            config: svc.config(),
            ..Default::default()
        };
        state.sync_session(svc);
        state
    }

    /// Re-read login and location from the session store.
    pub fn sync_session(&mut self, svc: &AppServices) {
        let session = svc.session().snapshot();
        self.user_id = session.user_id;
        self.profile = session.profile;
        self.location = session.location.unwrap_or_default();
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }
}
