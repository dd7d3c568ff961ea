// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! folio - content search and adaptive rendering quality for a portfolio site.
//!
//! This crate exposes the two engines used by the `folio` CLI
//! (`src/main.rs`) and by any presentation layer built on top:
//!
//! - `catalog`, `search`: a work catalog and the tag-aware search index over it
//! - `hardware`: capability probing behind an injectable `CapabilitySource`
//! - `quality`: tier resolution and the fixed per-tier rendering presets
//! - `config`: user settings (thresholds, pixel-ratio ceilings, search fields)
//!
//! The two pipelines share no state.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hardware;
pub mod quality;
pub mod search;

pub use error::{FolioError, Result};
