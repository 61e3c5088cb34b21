// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Vitrine.

use thiserror::Error;

/// Top-level error type for all Vitrine operations.
#[derive(Debug, Error)]
pub enum VitrineError {
    // -- Remote API errors --
    #[error("network request failed: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("{endpoint} returned HTTP {status}")]
    Http { status: u16, endpoint: String },

    #[error("server refused the request: {0}")]
    Rejected(String),

    // -- Local input errors --
    #[error("{0}")]
    Validation(String),

    #[error("file is too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("not logged in")]
    NotLoggedIn,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VitrineError {
    /// Shorthand for a local validation failure with a user-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, VitrineError>;
