// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Persisted per-device session: who is logged in and where they said they are.
//
// Stored as `session.json` next to `config.json`.  Every mutation is written
// through immediately so a crash never loses a login.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use vitrine_core::error::Result;
use vitrine_core::types::{SearchContext, UserProfile};

use crate::search::ContextSource;

pub const SESSION_FILE: &str = "session.json";

/// Values that survive an app restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub user_id: Option<String>,
    pub location: Option<String>,
    pub profile: Option<UserProfile>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Thread-safe session holder with optional on-disk backing.
#[derive(Debug)]
pub struct SessionStore {
    path: Option<PathBuf>,
    state: RwLock<Session>,
}

impl SessionStore {
    /// Load the session from `path`.
    ///
    /// A missing file starts a fresh session.  An unreadable or corrupt file
    /// is logged and replaced by a fresh session on the next write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let session = match std::fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "corrupt session file; starting fresh");
                Session::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Session::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read session file; starting fresh");
                Session::default()
            }
        };
        debug!(logged_in = session.is_logged_in(), "session loaded");

        Self {
            path: Some(path),
            state: RwLock::new(session),
        }
    }

    /// Session that is never written to disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: RwLock::new(Session::default()),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.state.read().expect("session lock poisoned").clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.read().expect("session lock poisoned").user_id.clone()
    }

    pub fn location(&self) -> Option<String> {
        self.state.read().expect("session lock poisoned").location.clone()
    }

    pub fn set_user_id(&self, user_id: Option<String>) -> Result<()> {
        self.update(|s| s.user_id = non_empty(user_id))
    }

    /// Store the free-text location string.  Empty clears it.
    pub fn set_location(&self, location: Option<String>) -> Result<()> {
        self.update(|s| s.location = non_empty(location))
    }

    pub fn set_profile(&self, profile: Option<UserProfile>) -> Result<()> {
        self.update(|s| s.profile = profile)
    }

    /// Record a successful login.
    pub fn log_in(&self, user_id: String, profile: Option<UserProfile>) -> Result<()> {
        self.update(|s| {
            s.user_id = non_empty(Some(user_id));
            s.profile = profile;
        })?;
        info!("user logged in");
        Ok(())
    }

    /// Log out.  The location is device-level and survives.
    pub fn clear(&self) -> Result<()> {
        self.update(|s| {
            s.user_id = None;
            s.profile = None;
        })?;
        info!("user logged out");
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut Session)) -> Result<()> {
        let snapshot = {
            let mut guard = self.state.write().expect("session lock poisoned");
            change(&mut guard);
            guard.clone()
        };
        self.persist(&snapshot)
    }

    fn persist(&self, session: &Session) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl ContextSource for SessionStore {
    fn search_context(&self, query: &str) -> SearchContext {
        let guard = self.state.read().expect("session lock poisoned");
        SearchContext {
            query: query.to_owned(),
            user_id: guard.user_id.clone(),
            location: guard.location.clone(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
