// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Host machine capability detection

use sysinfo::System;

use super::frame::FrameClock;
use super::source::{CapabilitySource, GraphicsContext};

/// Graphics context found on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGraphics {
    renderer: Option<String>,
}

impl GraphicsContext for HostGraphics {
    fn renderer(&self) -> Option<String> {
        self.renderer.clone()
    }
}

/// Signals read from the machine folio runs on.
///
/// A terminal has no per-frame clock, so sampling always falls back to the
/// frame-rate cap.
#[derive(Debug, Clone, PartialEq)]
pub struct HostSource {
    platform: Option<String>,
    graphics: Option<HostGraphics>,
}

impl HostSource {
    /// Detect the current host's platform and GPU
    pub fn detect() -> Self {
        let platform = Self::detect_platform();
        let graphics = Self::detect_graphics();

        tracing::debug!(?platform, ?graphics, "host capabilities detected");
        Self { platform, graphics }
    }

    fn detect_platform() -> Option<String> {
        let name = System::name()?;
        let version = System::long_os_version().or_else(System::os_version);
        Some(match version {
            Some(version) if version.contains(&name) => {
                format!("{} ({})", version, std::env::consts::ARCH)
            }
            Some(version) => format!("{} {} ({})", name, version, std::env::consts::ARCH),
            None => format!("{} ({})", name, std::env::consts::ARCH),
        })
    }

    fn detect_graphics() -> Option<HostGraphics> {
        #[cfg(target_os = "linux")]
        {
            return Self::detect_linux_graphics();
        }

        #[cfg(target_os = "macos")]
        {
            return Self::detect_macos_graphics();
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            tracing::warn!("GPU detection is not supported on this platform");
            None
        }
    }

    /// Walk `/sys/class/drm` for a card and name it by PCI vendor id
    #[cfg(target_os = "linux")]
    fn detect_linux_graphics() -> Option<HostGraphics> {
        let entries = std::fs::read_dir("/sys/class/drm").ok()?;

        let mut cards: Vec<_> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy())
                    .is_some_and(|name| name.starts_with("card") && !name.contains('-'))
            })
            .collect();
        cards.sort();

        let card = cards.first()?;
        let vendor = std::fs::read_to_string(card.join("device/vendor")).ok();
        let renderer = vendor.as_deref().and_then(vendor_renderer).map(str::to_string);
        Some(HostGraphics { renderer })
    }

    /// Read the chipset model reported by `system_profiler`
    #[cfg(target_os = "macos")]
    fn detect_macos_graphics() -> Option<HostGraphics> {
        use std::process::Command;

        let output = Command::new("system_profiler")
            .arg("SPDisplaysDataType")
            .output()
            .ok()?;
        if !output.status.success() {
            tracing::warn!("system_profiler failed, assuming no GPU");
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Some(HostGraphics {
            renderer: parse_chipset_model(&stdout),
        })
    }
}

impl CapabilitySource for HostSource {
    fn platform(&self) -> Option<String> {
        self.platform.clone()
    }

    fn graphics_context(&self) -> Option<Box<dyn GraphicsContext>> {
        self.graphics
            .clone()
            .map(|graphics| Box::new(graphics) as Box<dyn GraphicsContext>)
    }

    fn frame_clock(&self) -> Option<Box<dyn FrameClock>> {
        None
    }
}

/// Map a PCI vendor id (`0x10de`) to a renderer description
#[cfg_attr(not(any(test, target_os = "linux")), allow(dead_code))]
fn vendor_renderer(vendor: &str) -> Option<&'static str> {
    match vendor.trim().to_lowercase().as_str() {
        "0x10de" => Some("NVIDIA"),
        "0x1002" => Some("AMD Radeon"),
        "0x8086" => Some("Intel"),
        "0x13b5" => Some("ARM Mali"),
        "0x5143" => Some("Qualcomm Adreno"),
        "0x14e4" => Some("Broadcom VideoCore"),
        _ => None,
    }
}

#[cfg_attr(not(any(test, target_os = "macos")), allow(dead_code))]
fn parse_chipset_model(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim() != "Chipset Model" {
            return None;
        }
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::GraphicsTier;

    #[test]
    fn test_detect_does_not_panic() {
        let source = HostSource::detect();
        assert!(source.frame_clock().is_none());
    }

    #[test]
    fn test_vendor_renderer() {
        assert_eq!(vendor_renderer("0x10de\n"), Some("NVIDIA"));
        assert_eq!(vendor_renderer("0x8086"), Some("Intel"));
        assert_eq!(vendor_renderer("0X1002"), Some("AMD Radeon"));
        assert_eq!(vendor_renderer("0xffff"), None);
    }

    #[test]
    fn test_vendor_renderers_classify() {
        assert_eq!(
            GraphicsTier::from_renderer(vendor_renderer("0x10de").unwrap()),
            GraphicsTier::High
        );
        assert_eq!(
            GraphicsTier::from_renderer(vendor_renderer("0x8086").unwrap()),
            GraphicsTier::Medium
        );
        assert_eq!(
            GraphicsTier::from_renderer(vendor_renderer("0x14e4").unwrap()),
            GraphicsTier::Low
        );
    }

    #[test]
    fn test_parse_chipset_model() {
        let output = r#"
Graphics/Displays:

    Apple M2 Pro:

      Chipset Model: Apple M2 Pro
      Type: GPU
      Bus: Built-In
"#;
        assert_eq!(parse_chipset_model(output).as_deref(), Some("Apple M2 Pro"));
        assert_eq!(parse_chipset_model("Type: GPU"), None);
    }

    #[test]
    fn test_host_graphics_context() {
        let source = HostSource {
            platform: Some("Linux 6.8 (x86_64)".to_string()),
            graphics: Some(HostGraphics {
                renderer: Some("NVIDIA".to_string()),
            }),
        };
        let context = source.graphics_context().unwrap();
        assert_eq!(context.renderer().as_deref(), Some("NVIDIA"));
        assert_eq!(source.platform().as_deref(), Some("Linux 6.8 (x86_64)"));
    }
}
