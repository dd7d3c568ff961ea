// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Canonical tag keys

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern is valid"));

/// Slugified form of a tag, used as the filtering key.
///
/// `"Oil Painting"`, `"oil-painting"` and `" OIL_painting! "` all map to the
/// same key `oil-painting`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TagKey(String);

impl TagKey {
    /// Normalize a raw tag. Returns `None` when nothing alphanumeric remains.
    pub fn new(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        let slug = SEPARATOR_RUN.replace_all(&lowered, "-");
        let slug = slug.trim_matches('-');
        if slug.is_empty() {
            None
        } else {
            Some(Self(slug.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TagKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
