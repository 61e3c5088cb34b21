// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Screen liveness tracking for in-flight requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "is the screen still mounted" flag.
///
/// A screen creates one scope on mount, hands clones to the tasks it starts,
/// and calls [`ScreenScope::unmount`] when it goes away.  Tasks check the flag
/// before applying results so a late reply never mutates state on behalf of
/// a screen that no longer exists.
#[derive(Debug, Clone)]
pub struct ScreenScope {
    mounted: Arc<AtomicBool>,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}
