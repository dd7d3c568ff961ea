// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Best-effort capability probe

use super::frame::{sample_frame_rate, DEFAULT_FPS_CAP, DEFAULT_SAMPLE_WINDOW_MS};
use super::snapshot::{is_mobile_platform, CapabilitySnapshot, GraphicsTier};
use super::source::CapabilitySource;

/// Reads a [`CapabilitySource`] into a [`CapabilitySnapshot`].
///
/// Every signal degrades to a defined fallback; probing never fails.
pub struct CapabilityProbe {
    source: Box<dyn CapabilitySource>,
}

impl CapabilityProbe {
    pub fn new(source: impl CapabilitySource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Whether the platform string names a mobile platform; `false` without one
    pub fn is_mobile(&self) -> bool {
        self.source
            .platform()
            .is_some_and(|platform| is_mobile_platform(&platform))
    }

    /// Graphics tier from the renderer description.
    ///
    /// No context means `Low`; a context hiding its renderer means `Medium`.
    pub fn graphics_tier(&self) -> GraphicsTier {
        let Some(context) = self.source.graphics_context() else {
            return GraphicsTier::Low;
        };
        match context.renderer() {
            Some(renderer) => GraphicsTier::from_renderer(&renderer),
            None => GraphicsTier::Medium,
        }
    }

    /// Source pixel ratio, or 1.0 when it is not a positive number
    pub fn pixel_ratio(&self) -> f64 {
        let ratio = self.source.pixel_ratio();
        if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        }
    }

    /// See [`sample_frame_rate`]
    pub async fn sample_frame_rate(&self, window_ms: u64, cap: f64) -> f64 {
        sample_frame_rate(self.source.frame_clock(), window_ms, cap).await
    }

    /// Capture a snapshot with the default 500ms window and 60fps cap
    pub async fn capture(&self) -> CapabilitySnapshot {
        self.capture_with(DEFAULT_SAMPLE_WINDOW_MS, DEFAULT_FPS_CAP)
            .await
    }

    pub async fn capture_with(&self, window_ms: u64, cap: f64) -> CapabilitySnapshot {
        let is_mobile = self.is_mobile();
        let graphics_tier = self.graphics_tier();
        let pixel_ratio = self.pixel_ratio();
        let sampled_fps = self.sample_frame_rate(window_ms, cap).await.max(0.0);

        let snapshot = CapabilitySnapshot {
            is_mobile,
            graphics_tier,
            pixel_ratio,
            sampled_fps,
        };
        tracing::info!(
            is_mobile,
            %graphics_tier,
            pixel_ratio,
            sampled_fps,
            "capability snapshot captured"
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::source::{GraphicsContext, MockGraphicsContext, StaticSource};
    use crate::hardware::FrameClock;

    /// Source handing out a mocked graphics context
    struct MockedSource;

    impl CapabilitySource for MockedSource {
        fn platform(&self) -> Option<String> {
            None
        }

        fn graphics_context(&self) -> Option<Box<dyn GraphicsContext>> {
            let mut context = MockGraphicsContext::new();
            context
                .expect_renderer()
                .times(1)
                .returning(|| Some("AMD Radeon RX 7900 XTX".to_string()));
            Some(Box::new(context))
        }

        fn frame_clock(&self) -> Option<Box<dyn FrameClock>> {
            None
        }
    }

    #[test]
    fn test_is_mobile() {
        let probe = CapabilityProbe::new(StaticSource::new().with_platform("iPad; CPU OS 17_0"));
        assert!(probe.is_mobile());

        let probe = CapabilityProbe::new(StaticSource::new().with_platform("Windows NT 10.0"));
        assert!(!probe.is_mobile());
    }

    #[test]
    fn test_no_platform_is_not_mobile() {
        let probe = CapabilityProbe::new(StaticSource::new());
        assert!(!probe.is_mobile());
    }

    #[test]
    fn test_graphics_tier_without_context_is_low() {
        let probe = CapabilityProbe::new(StaticSource::new());
        assert_eq!(probe.graphics_tier(), GraphicsTier::Low);
    }

    #[test]
    fn test_graphics_tier_unreadable_renderer_is_medium() {
        let probe = CapabilityProbe::new(StaticSource::new().with_unreadable_renderer());
        assert_eq!(probe.graphics_tier(), GraphicsTier::Medium);
    }

    #[test]
    fn test_graphics_tier_from_mocked_context() {
        let probe = CapabilityProbe::new(MockedSource);
        assert_eq!(probe.graphics_tier(), GraphicsTier::High);
    }

    #[test]
    fn test_pixel_ratio_fallback() {
        let probe = CapabilityProbe::new(StaticSource::new().with_pixel_ratio(2.5));
        assert!((probe.pixel_ratio() - 2.5).abs() < f64::EPSILON);

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let probe = CapabilityProbe::new(StaticSource::new().with_pixel_ratio(bad));
            assert!((probe.pixel_ratio() - 1.0).abs() < f64::EPSILON);
        }
    }

    #[tokio::test]
    async fn test_capture_headless() {
        let snapshot = CapabilityProbe::new(StaticSource::new()).capture().await;
        assert_eq!(
            snapshot,
            CapabilitySnapshot {
                is_mobile: false,
                graphics_tier: GraphicsTier::Low,
                pixel_ratio: 1.0,
                sampled_fps: 60.0,
            }
        );
    }

    #[tokio::test]
    async fn test_capture_with_clock() {
        let source = StaticSource::new()
            .with_platform("Linux x86_64")
            .with_renderer("NVIDIA GeForce GTX 1080")
            .with_pixel_ratio(2.0)
            .with_refresh_rate(50.0);
        let snapshot = CapabilityProbe::new(source).capture().await;

        assert!(!snapshot.is_mobile);
        assert_eq!(snapshot.graphics_tier, GraphicsTier::High);
        assert!((snapshot.pixel_ratio - 2.0).abs() < f64::EPSILON);
        assert!((snapshot.sampled_fps - 50.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_capture_with_custom_cap() {
        let source = StaticSource::new().with_refresh_rate(50.0);
        let snapshot = CapabilityProbe::new(source).capture_with(500, 30.0).await;
        assert!((snapshot.sampled_fps - 30.0).abs() < f64::EPSILON);
    }
}
