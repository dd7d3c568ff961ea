// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! CLI module for folio
//!
//! Handles command-line argument parsing and command dispatch.

pub mod args;

pub use args::*;
