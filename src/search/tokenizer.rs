// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Forward tokenization
//!
//! Text is split into lower-cased alphanumeric words. Every word is indexed
//! under each of its leading prefixes, so a query word matches any indexed
//! word it begins ("stud" finds "Study").

/// Split text into lower-cased alphanumeric tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Every non-empty leading prefix of `token`, shortest first
pub fn forward_prefixes(token: &str) -> impl Iterator<Item = &str> {
    token
        .char_indices()
        .skip(1)
        .map(|(end, _)| end)
        .chain(std::iter::once(token.len()))
        .filter(|&end| end > 0)
        .map(move |end| &token[..end])
}
