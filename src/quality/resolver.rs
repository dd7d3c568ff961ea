// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Capability snapshot to quality tier, tier to settings

use crate::config::QualityConfig;
use crate::hardware::{CapabilitySnapshot, GraphicsTier};

use super::presets::QualitySettings;
use super::tier::QualityTier;

/// Maps capability snapshots onto quality presets.
///
/// Tier selection is a strict decision table over the snapshot; the only
/// runtime input to the settings themselves is the device pixel ratio.
#[derive(Debug, Clone, Default)]
pub struct QualityResolver {
    config: QualityConfig,
}

impl QualityResolver {
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Pick a tier for `snapshot`. First matching rule wins:
    ///
    /// 1. mobile: `Low`
    /// 2. fps below the low threshold: `Low`
    /// 3. low graphics tier: `Low`
    /// 4. medium graphics tier: `Default`
    /// 5. high graphics tier: `High` above the high threshold, else `Default`
    pub fn resolve_tier(&self, snapshot: &CapabilitySnapshot) -> QualityTier {
        let (tier, reason) = if snapshot.is_mobile {
            (QualityTier::Low, "mobile platform")
        } else if snapshot.sampled_fps < self.config.low_fps_threshold {
            (QualityTier::Low, "frame rate below low threshold")
        } else {
            match snapshot.graphics_tier {
                GraphicsTier::Low => (QualityTier::Low, "low graphics tier"),
                GraphicsTier::Medium => (QualityTier::Default, "medium graphics tier"),
                GraphicsTier::High if snapshot.sampled_fps > self.config.high_fps_threshold => {
                    (QualityTier::High, "high graphics tier at full frame rate")
                }
                GraphicsTier::High => (QualityTier::Default, "high graphics tier, frame rate limited"),
            }
        };

        tracing::debug!(%tier, reason, "quality tier resolved");
        tier
    }

    /// Preset for `tier`, with the pixel ratio clamped to the tier's ceiling
    pub fn settings_for(&self, tier: QualityTier, device_pixel_ratio: f64) -> QualitySettings {
        let ceiling = self.config.pixel_ratio_ceiling.for_tier(tier);
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(ceiling)
        } else {
            ceiling.min(1.0)
        };
        QualitySettings::for_tier(tier, pixel_ratio)
    }

    pub fn resolve(&self, snapshot: &CapabilitySnapshot) -> QualitySettings {
        self.settings_for(self.resolve_tier(snapshot), snapshot.pixel_ratio)
    }
}
