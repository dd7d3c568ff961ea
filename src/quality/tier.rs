// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Quality tier classification

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rendering quality tier, ordered by visual and computational cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Phones, software rasterizers, struggling frame rates
    Low,
    /// Integrated desktop GPUs, or discrete GPUs that cannot hold 45fps
    Default,
    /// Discrete GPUs running smoothly
    High,
}

impl QualityTier {
    pub const ALL: [QualityTier; 3] = [QualityTier::Low, QualityTier::Default, QualityTier::High];

    /// Get a human-readable description of this tier
    pub fn description(&self) -> &'static str {
        match self {
            QualityTier::Low => "Low (no shadows or post-processing)",
            QualityTier::Default => "Default (soft shadows, light bloom)",
            QualityTier::High => "High (large shadow maps, full bloom, 8x samples)",
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityTier::Low => write!(f, "low"),
            QualityTier::Default => write!(f, "default"),
            QualityTier::High => write!(f, "high"),
        }
    }
}

impl FromStr for QualityTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(QualityTier::Low),
            "default" | "medium" => Ok(QualityTier::Default),
            "high" => Ok(QualityTier::High),
            other => Err(format!(
                "unknown quality tier '{}' (expected low, default or high)",
                other
            )),
        }
    }
}
