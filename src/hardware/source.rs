// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Capability sources
//!
//! A source hands the probe the raw runtime signals. The host environment
//! owns them; the probe only reads.

use super::frame::{FixedRateClock, FrameClock};

/// Raw runtime signals consumed by [`CapabilityProbe`](super::CapabilityProbe)
pub trait CapabilitySource: Send + Sync {
    /// Platform identification string (user agent, OS name); `None` when the
    /// runtime reports nothing, e.g. a server-side render
    fn platform(&self) -> Option<String>;

    /// A usable graphics context, if one can be acquired
    fn graphics_context(&self) -> Option<Box<dyn GraphicsContext>>;

    /// Device pixels per layout pixel
    fn pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Per-frame clock; `None` in non-interactive contexts
    fn frame_clock(&self) -> Option<Box<dyn FrameClock>>;
}

/// An acquired graphics context
#[cfg_attr(test, mockall::automock)]
pub trait GraphicsContext: Send {
    /// Hardware renderer description, when the context exposes it
    fn renderer(&self) -> Option<String>;
}

/// What a [`StaticSource`] reports about graphics
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RendererInfo {
    /// No graphics context can be acquired
    #[default]
    NoContext,
    /// A context exists but hides its renderer string
    Unreadable,
    /// A context reporting this renderer string
    Reported(String),
}

struct FixedContext(Option<String>);

impl GraphicsContext for FixedContext {
    fn renderer(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Deterministic source with fixed signals.
///
/// The default value models a headless context: no platform string, no
/// graphics context, pixel ratio 1 and no frame clock.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSource {
    pub platform: Option<String>,
    pub renderer: RendererInfo,
    pub pixel_ratio: f64,
    /// Simulated display refresh rate driving a [`FixedRateClock`]
    pub refresh_hz: Option<f64>,
}

impl Default for StaticSource {
    fn default() -> Self {
        Self {
            platform: None,
            renderer: RendererInfo::NoContext,
            pixel_ratio: 1.0,
            refresh_hz: None,
        }
    }
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = RendererInfo::Reported(renderer.into());
        self
    }

    pub fn with_unreadable_renderer(mut self) -> Self {
        self.renderer = RendererInfo::Unreadable;
        self
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn with_refresh_rate(mut self, hz: f64) -> Self {
        self.refresh_hz = Some(hz);
        self
    }
}

impl CapabilitySource for StaticSource {
    fn platform(&self) -> Option<String> {
        self.platform.clone()
    }

    fn graphics_context(&self) -> Option<Box<dyn GraphicsContext>> {
        match &self.renderer {
            RendererInfo::NoContext => None,
            RendererInfo::Unreadable => Some(Box::new(FixedContext(None))),
            RendererInfo::Reported(renderer) => Some(Box::new(FixedContext(Some(renderer.clone())))),
        }
    }

    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn frame_clock(&self) -> Option<Box<dyn FrameClock>> {
        let hz = self.refresh_hz?;
        FixedRateClock::from_refresh_rate(hz).map(|clock| Box::new(clock) as Box<dyn FrameClock>)
    }
}
