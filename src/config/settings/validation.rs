// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

use crate::error::{FolioError, Result};
use crate::quality::QualityTier;

use super::Settings;

impl Settings {
    /// Reject values the resolver and sampler cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.search.default_fields.is_empty() {
            return Err(FolioError::Config(
                "search.default_fields must name at least one field".to_string(),
            ));
        }

        let quality = &self.quality;

        for tier in QualityTier::ALL {
            let ceiling = quality.pixel_ratio_ceiling.for_tier(tier);
            if !(ceiling.is_finite() && ceiling > 0.0) {
                return Err(FolioError::Config(format!(
                    "quality.pixel_ratio_ceiling.{} must be a positive number, got {}",
                    tier, ceiling
                )));
            }
        }

        if quality.sample_window_ms == 0 {
            return Err(FolioError::Config(
                "quality.sample_window_ms must be greater than zero".to_string(),
            ));
        }

        if !(quality.fps_cap.is_finite() && quality.fps_cap > 0.0) {
            return Err(FolioError::Config(format!(
                "quality.fps_cap must be a positive number, got {}",
                quality.fps_cap
            )));
        }

        if quality.low_fps_threshold > quality.high_fps_threshold {
            return Err(FolioError::Config(format!(
                "quality.low_fps_threshold ({}) exceeds quality.high_fps_threshold ({})",
                quality.low_fps_threshold, quality.high_fps_threshold
            )));
        }

        Ok(())
    }

    /// The tier to render at: the user override if set, else `resolved`.
    pub fn effective_quality_tier(&self, resolved: QualityTier) -> QualityTier {
        self.quality.tier_override.unwrap_or(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_default_fields() {
        let mut settings = Settings::default();
        settings.search.default_fields.clear();
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(err.to_string().contains("search.default_fields"));
    }

    #[test]
    fn test_rejects_non_positive_ceiling() {
        let mut settings = Settings::default();
        settings.quality.pixel_ratio_ceiling.default = 0.0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("pixel_ratio_ceiling.default"));

        let mut settings = Settings::default();
        settings.quality.pixel_ratio_ceiling.high = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_window() {
        let mut settings = Settings::default();
        settings.quality.sample_window_ms = 0;
        assert!(matches!(settings.validate(), Err(FolioError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_fps_cap() {
        let mut settings = Settings::default();
        settings.quality.fps_cap = -1.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let mut settings = Settings::default();
        settings.quality.low_fps_threshold = 50.0;
        settings.quality.high_fps_threshold = 40.0;
        assert!(settings.validate().is_err());

        settings.quality.high_fps_threshold = 50.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_effective_quality_tier() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.effective_quality_tier(QualityTier::High),
            QualityTier::High
        );

        settings.quality.tier_override = Some(QualityTier::Low);
        assert_eq!(
            settings.effective_quality_tier(QualityTier::High),
            QualityTier::Low
        );
    }
}
