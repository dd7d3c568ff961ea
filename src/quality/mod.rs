// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Adaptive rendering quality
//!
//! A [`QualityResolver`] maps a [`CapabilitySnapshot`](crate::hardware::CapabilitySnapshot)
//! onto one of three fixed [`QualitySettings`] presets.

pub mod presets;
pub mod resolver;
pub mod tier;
pub mod viewer;

pub use presets::*;
pub use resolver::QualityResolver;
pub use tier::QualityTier;
pub use viewer::*;
