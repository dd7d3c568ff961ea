// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Subcommand implementations
//!
//! Each command prints plain text or, with `--format json`, pretty JSON.

pub mod quality;
pub mod search;
pub mod tags;
