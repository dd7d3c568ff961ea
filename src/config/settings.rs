// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Settings management for folio
//!
//! Handles loading and saving settings from ~/.folio/settings.json

use serde::{Deserialize, Serialize};

use crate::quality::QualityTier;
use crate::search::SearchField;

mod io;
mod migration;
mod validation;

/// Main settings structure, stored in ~/.folio/settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Content search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Adaptive rendering quality settings
    #[serde(default)]
    pub quality: QualityConfig,
}

/// Content search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fields searched when a query names none
    #[serde(default = "default_search_fields")]
    pub default_fields: Vec<SearchField>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_fields: default_search_fields(),
        }
    }
}

/// Quality resolution thresholds and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Sampled fps below this forces the low tier
    #[serde(default = "default_low_fps_threshold")]
    pub low_fps_threshold: f64,

    /// High-tier GPUs must exceed this fps to get the high tier
    #[serde(default = "default_high_fps_threshold")]
    pub high_fps_threshold: f64,

    /// Frame sampling window in milliseconds
    #[serde(default = "default_sample_window_ms")]
    pub sample_window_ms: u64,

    /// Upper bound on the sampled frame rate
    #[serde(default = "default_fps_cap")]
    pub fps_cap: f64,

    /// Maximum renderer pixel ratio per tier
    #[serde(default)]
    pub pixel_ratio_ceiling: PixelRatioCeilings,

    /// Force a tier instead of resolving one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_override: Option<QualityTier>,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            low_fps_threshold: default_low_fps_threshold(),
            high_fps_threshold: default_high_fps_threshold(),
            sample_window_ms: default_sample_window_ms(),
            fps_cap: default_fps_cap(),
            pixel_ratio_ceiling: PixelRatioCeilings::default(),
            tier_override: None,
        }
    }
}

/// Per-tier pixel ratio ceilings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRatioCeilings {
    #[serde(default = "default_low_ceiling")]
    pub low: f64,

    #[serde(default = "default_default_ceiling")]
    pub default: f64,

    #[serde(default = "default_high_ceiling")]
    pub high: f64,
}

impl Default for PixelRatioCeilings {
    fn default() -> Self {
        Self {
            low: default_low_ceiling(),
            default: default_default_ceiling(),
            high: default_high_ceiling(),
        }
    }
}

impl PixelRatioCeilings {
    pub fn for_tier(&self, tier: QualityTier) -> f64 {
        match tier {
            QualityTier::Low => self.low,
            QualityTier::Default => self.default,
            QualityTier::High => self.high,
        }
    }
}

fn default_search_fields() -> Vec<SearchField> {
    SearchField::ALL.to_vec()
}

fn default_low_fps_threshold() -> f64 {
    30.0
}

fn default_high_fps_threshold() -> f64 {
    45.0
}

fn default_sample_window_ms() -> u64 {
    crate::hardware::DEFAULT_SAMPLE_WINDOW_MS
}

fn default_fps_cap() -> f64 {
    crate::hardware::DEFAULT_FPS_CAP
}

fn default_low_ceiling() -> f64 {
    0.75
}

fn default_default_ceiling() -> f64 {
    1.5
}

fn default_high_ceiling() -> f64 {
    2.0
}
