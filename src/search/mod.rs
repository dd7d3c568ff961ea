// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Content search and tag filtering over a work catalog
//!
//! The index is built once per catalog snapshot and is read-only afterwards.
//! Text search and tag filtering are each an OR over their own dimension
//! (fields, tags); chaining [`SearchIndex::filter_by_tags`] into
//! [`SearchIndex::search_within_subset`] ANDs the two.

pub mod index;
pub mod tokenizer;

pub use index::SearchIndex;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Searchable text fields of a work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Description,
    Year,
}

impl SearchField {
    /// All fields, the default search scope
    pub const ALL: [SearchField; 3] = [
        SearchField::Title,
        SearchField::Description,
        SearchField::Year,
    ];

    fn slot(self) -> usize {
        match self {
            SearchField::Title => 0,
            SearchField::Description => 1,
            SearchField::Year => 2,
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Description => write!(f, "description"),
            SearchField::Year => write!(f, "year"),
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "description" => Ok(SearchField::Description),
            "year" => Ok(SearchField::Year),
            other => Err(format!(
                "unknown search field '{}' (expected title, description or year)",
                other
            )),
        }
    }
}
