// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Capability snapshot and the string heuristics behind it

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static MOBILE_PLATFORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile platform pattern is valid")
});

/// Software rasterizers and mobile GPUs
const LOW_TIER_RENDERERS: &[&str] = &[
    "swiftshader",
    "llvmpipe",
    "softpipe",
    "software",
    "microsoft basic render",
    "mali",
    "adreno",
    "powervr",
    "videocore",
    "tegra",
    "intel gma",
];

/// Discrete GPUs
const HIGH_TIER_RENDERERS: &[&str] = &[
    "nvidia",
    "geforce",
    "quadro",
    "radeon rx",
    "radeon pro",
    "radeon vii",
    "intel arc",
    "arc(tm)",
];

/// Integrated desktop GPUs
const MEDIUM_TIER_RENDERERS: &[&str] = &[
    "intel",
    "iris",
    "uhd graphics",
    "hd graphics",
    "radeon graphics",
    "radeon vega",
    "apple m",
    "apple gpu",
];

/// Coarse graphics capability estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsTier {
    Low,
    Medium,
    High,
}

impl GraphicsTier {
    /// Classify a renderer description.
    ///
    /// Unknown hardware is assumed capable but not flagship.
    pub fn from_renderer(renderer: &str) -> Self {
        let renderer = renderer.to_lowercase();
        let matches_any = |patterns: &[&str]| patterns.iter().any(|p| renderer.contains(p));

        if matches_any(LOW_TIER_RENDERERS) {
            GraphicsTier::Low
        } else if matches_any(HIGH_TIER_RENDERERS) {
            GraphicsTier::High
        } else {
            if !matches_any(MEDIUM_TIER_RENDERERS) {
                tracing::debug!(%renderer, "unrecognized renderer, assuming medium tier");
            }
            GraphicsTier::Medium
        }
    }
}

impl std::fmt::Display for GraphicsTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphicsTier::Low => write!(f, "low"),
            GraphicsTier::Medium => write!(f, "medium"),
            GraphicsTier::High => write!(f, "high"),
        }
    }
}

/// Whether a platform string names a known mobile platform
pub fn is_mobile_platform(platform: &str) -> bool {
    MOBILE_PLATFORM.is_match(platform)
}

/// Point-in-time reading of the runtime's rendering capability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySnapshot {
    pub is_mobile: bool,
    pub graphics_tier: GraphicsTier,
    /// Always positive
    pub pixel_ratio: f64,
    /// Never negative
    pub sampled_fps: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_platforms() {
        assert!(is_mobile_platform(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_platform("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile_platform("opera mini/8.0"));
        assert!(is_mobile_platform("Android"));
    }

    #[test]
    fn test_desktop_platforms() {
        assert!(!is_mobile_platform(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
        ));
        assert!(!is_mobile_platform("Linux 6.8 (Ubuntu 24.04)"));
        assert!(!is_mobile_platform(""));
    }

    #[test]
    fn test_low_tier_renderers() {
        assert_eq!(
            GraphicsTier::from_renderer("ANGLE (Google, Vulkan 1.3.0 (SwiftShader Device))"),
            GraphicsTier::Low
        );
        assert_eq!(GraphicsTier::from_renderer("Mali-G78 MP20"), GraphicsTier::Low);
        assert_eq!(GraphicsTier::from_renderer("Adreno (TM) 740"), GraphicsTier::Low);
        assert_eq!(
            GraphicsTier::from_renderer("llvmpipe (LLVM 15.0.7, 256 bits)"),
            GraphicsTier::Low
        );
    }

    #[test]
    fn test_high_tier_renderers() {
        assert_eq!(
            GraphicsTier::from_renderer("ANGLE (NVIDIA, NVIDIA GeForce RTX 3080 Direct3D11)"),
            GraphicsTier::High
        );
        assert_eq!(
            GraphicsTier::from_renderer("AMD Radeon RX 6800 XT"),
            GraphicsTier::High
        );
        assert_eq!(
            GraphicsTier::from_renderer("Intel(R) Arc(TM) A770 Graphics"),
            GraphicsTier::High
        );
        assert_eq!(GraphicsTier::from_renderer("Intel Arc A770"), GraphicsTier::High);
    }

    #[test]
    fn test_medium_tier_renderers() {
        assert_eq!(
            GraphicsTier::from_renderer("ANGLE (Intel, Intel(R) UHD Graphics 620)"),
            GraphicsTier::Medium
        );
        assert_eq!(GraphicsTier::from_renderer("Apple M2"), GraphicsTier::Medium);
        assert_eq!(
            GraphicsTier::from_renderer("AMD Radeon(TM) Graphics"),
            GraphicsTier::Medium
        );
    }

    #[test]
    fn test_unknown_renderer_is_medium() {
        assert_eq!(GraphicsTier::from_renderer("Acme Pixel Pusher 9000"), GraphicsTier::Medium);
        assert_eq!(GraphicsTier::from_renderer(""), GraphicsTier::Medium);
    }

    #[test]
    fn test_graphics_tier_ordering() {
        assert!(GraphicsTier::Low < GraphicsTier::Medium);
        assert!(GraphicsTier::Medium < GraphicsTier::High);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = CapabilitySnapshot {
            is_mobile: false,
            graphics_tier: GraphicsTier::High,
            pixel_ratio: 2.0,
            sampled_fps: 60.0,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"isMobile\":false"));
        assert!(json.contains("\"graphicsTier\":\"high\""));
        assert!(json.contains("\"sampledFps\":60.0"));

        let parsed: CapabilitySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
