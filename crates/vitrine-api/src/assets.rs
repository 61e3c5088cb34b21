// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image URL resolution for uploaded website assets.

use crate::client::ApiClient;

/// Upload directory an image file name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Service,
    Slider,
    Portfolio,
}

impl AssetKind {
    fn dir(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Slider => "slider",
            Self::Portfolio => "portfolio",
        }
    }
}

impl ApiClient {
    /// Resolve an image reference from an API record to a loadable URL.
    ///
    /// Records carry either a bare file name or, for some content types, a
    /// full URL; full URLs pass through untouched.
    pub fn asset_url(&self, kind: AssetKind, file: &str) -> String {
        asset_url(&self.asset_base_url, kind, file)
    }
}

/// Free-standing form of [`ApiClient::asset_url`] for callers that only
/// hold the configured base URL.
pub fn asset_url(asset_base_url: &str, kind: AssetKind, file: &str) -> String {
    if file.starts_with("http://") || file.starts_with("https://") {
        return file.to_owned();
    }
    format!(
        "{}/{}/{}",
        asset_base_url.trim_end_matches('/'),
        kind.dir(),
        file.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_names_are_prefixed() {
        assert_eq!(
            asset_url("https://cdn.test/uploads/", AssetKind::Service, "web.png"),
            "https://cdn.test/uploads/service/web.png"
        );
        assert_eq!(
            asset_url("https://cdn.test/uploads", AssetKind::Slider, "/s1.jpg"),
            "https://cdn.test/uploads/slider/s1.jpg"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://other.test/p.png";
        assert_eq!(asset_url("https://cdn.test", AssetKind::Portfolio, url), url);
    }
}
