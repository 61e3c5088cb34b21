// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::{Path, PathBuf};

/// Return the application data directory, creating it if needed.
///
/// On mobile the platform shell should point `XDG_DATA_HOME` at the app's
/// documents directory before launch.
pub fn data_dir() -> PathBuf {
    let dir = app_dir(&base_dir());
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn app_dir(base: &Path) -> PathBuf {
    base.join("vitrine")
}

fn base_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME")
        && !xdg.is_empty()
    {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    std::env::temp_dir()
}
