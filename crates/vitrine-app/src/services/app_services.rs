// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: builds the API client, catalog store, session, and
// search engine once and hands them to every page.
//
// The API client and search engine are configured at start-up; edits to the
// API URLs in Settings are persisted and take effect on next launch.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use vitrine_api::{ApiClient, AssetKind};
use vitrine_catalog::session::SESSION_FILE;
use vitrine_catalog::{Catalog, CatalogStore, ScreenScope, SearchEngine, SessionStore};
use vitrine_core::AppConfig;
use vitrine_core::error::{Result, VitrineError};
use vitrine_core::types::{LoginIdentifier, ServiceItem, UserProfile};

use super::data_dir;

/// Push token supplied by the platform shell, if any.
const PUSH_TOKEN_ENV: &str = "VITRINE_PUSH_TOKEN";

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable so the struct can be moved into
/// closures and async blocks.
#[derive(Clone)]
pub struct AppServices {
    api: ApiClient,
    catalog: CatalogStore,
    session: Arc<SessionStore>,
    search: SearchEngine,
    data_dir: Option<PathBuf>,
    config: Arc<Mutex<AppConfig>>,
}

impl AppServices {
    /// Initialise all services.  Call once at app startup.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();
        let session = SessionStore::open(dir.join(SESSION_FILE));
        Self::build(config, session, Some(dir))
    }

    /// Services with default config and a session that is never written.
    pub fn fallback() -> Result<Self> {
        Self::build(AppConfig::default(), SessionStore::in_memory(), None)
    }

    fn build(config: AppConfig, session: SessionStore, data_dir: Option<PathBuf>) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        let session = Arc::new(session);
        let catalog = CatalogStore::new();
        let search = SearchEngine::new(catalog.clone(), Arc::new(api.clone()), session.clone())
            .with_reporting(config.search_telemetry);

        Ok(Self {
            api,
            catalog,
            session,
            search,
            data_dir,
            config: Arc::new(Mutex::new(config)),
        })
    }

    // -- Catalog -------------------------------------------------------------

    pub fn catalog_store(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn search_engine(&self) -> &SearchEngine {
        &self.search
    }

    /// Fetch the full catalog into the shared store.
    pub async fn refresh_catalog(&self, scope: &ScreenScope) -> Result<Option<Catalog>> {
        self.catalog.refresh(&self.api, scope).await
    }

    /// Home-screen grid; independent of the searchable catalog.
    pub async fn featured_services(&self) -> Result<Vec<ServiceItem>> {
        self.api.fetch_featured_services().await
    }

    pub fn asset_url(&self, kind: AssetKind, file: &str) -> String {
        self.api.asset_url(kind, file)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // -- Account -------------------------------------------------------------

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Log in with an email or mobile number.
    ///
    /// The profile fetch and device registration are best effort; the login
    /// stands even if they fail.
    pub async fn log_in(&self, input: &str) -> Result<String> {
        let identifier = LoginIdentifier::parse(input)?;
        let registration_id = self.api.log_in(&identifier).await?;

        let profile = match self.api.fetch_profile(&registration_id).await {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(error = %e, "profile fetch after login failed");
                None
            }
        };
        self.session.log_in(registration_id.clone(), profile)?;

        match std::env::var(PUSH_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => {
                if let Err(e) = self.api.register_device(&token, &registration_id).await {
                    warn!(error = %e, "device registration failed");
                }
            }
            _ => info!("no push token; skipping device registration"),
        }

        Ok(registration_id)
    }

    pub fn log_out(&self) -> Result<()> {
        self.session.clear()
    }

    /// Re-read the profile from the server into the session.
    pub async fn reload_profile(&self) -> Result<UserProfile> {
        let id = self.session.user_id().ok_or(VitrineError::NotLoggedIn)?;
        let profile = self.api.fetch_profile(&id).await?;
        self.session.set_profile(Some(profile.clone()))?;
        Ok(profile)
    }

    pub async fn update_profile(&self, profile: &UserProfile) -> Result<()> {
        self.api.update_profile(profile).await?;
        self.session.set_profile(Some(profile.clone()))
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        match &self.data_dir {
            Some(dir) => persist_config(dir, config),
            None => {
                warn!("no data directory; settings kept for this session only");
                Ok(())
            }
        }
    }

    /// Path to the data directory, if storage is available.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring corrupt config file");
            None
        }
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(dir.path()).is_none());

        let config = AppConfig {
            request_timeout_secs: 10,
            search_telemetry: false,
            ..Default::default()
        };
        persist_config(dir.path(), &config).expect("persist");
        assert_eq!(load_config(dir.path()), Some(config));
    }

    #[test]
    fn corrupt_config_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "not json").expect("write");
        assert!(load_config(dir.path()).is_none());
    }

    #[test]
    fn fallback_session_starts_logged_out() {
        let svc = AppServices::fallback().expect("fallback");
        assert!(svc.session().user_id().is_none());
        assert!(svc.catalog_store().catalog().is_empty());
        assert!(svc.data_dir().is_none());
    }
}
