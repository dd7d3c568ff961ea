// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Configuration module for folio
//!
//! Handles loading, saving, and validating user settings.

pub mod settings;

pub use settings::*;
