// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Rendering quality command

use serde::Serialize;

use crate::cli::args::{OutputFormat, QualityArgs};
use crate::config::Settings;
use crate::error::{FolioError, Result};
use crate::hardware::{CapabilityProbe, CapabilitySnapshot, HostSource, StaticSource};
use crate::quality::{QualityResolver, QualitySettings, QualityTier, ViewerSettings};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QualityReport {
    captured_at: String,
    simulated: bool,
    snapshot: CapabilitySnapshot,
    resolved_tier: QualityTier,
    tier: QualityTier,
    tier_description: String,
    overridden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<QualitySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    viewer: Option<ViewerSettings>,
}

/// Execute the quality command
pub async fn execute(args: &QualityArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    check_args(args)?;

    let probe = if args.is_simulated() {
        CapabilityProbe::new(simulated_source(args))
    } else {
        CapabilityProbe::new(HostSource::detect())
    };

    let snapshot = probe
        .capture_with(settings.quality.sample_window_ms, settings.quality.fps_cap)
        .await;
    let report = build_report(snapshot, args, settings);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_text(&report));
    Ok(())
}

fn check_args(args: &QualityArgs) -> Result<()> {
    for (flag, value) in [("--pixel-ratio", args.pixel_ratio), ("--refresh-hz", args.refresh_hz)] {
        if let Some(value) = value {
            if !(value.is_finite() && value > 0.0) {
                return Err(FolioError::InvalidInput(format!(
                    "{} must be a positive number, got {}",
                    flag, value
                )));
            }
        }
    }
    Ok(())
}

/// A device described purely by flags.
///
/// Without `--renderer` or `--no-gpu` the device has a graphics context
/// that does not reveal its renderer.
fn simulated_source(args: &QualityArgs) -> StaticSource {
    let mut source = StaticSource::new();
    if let Some(platform) = &args.platform {
        source = source.with_platform(platform.as_str());
    }
    source = match (&args.renderer, args.no_gpu) {
        (Some(renderer), _) => source.with_renderer(renderer.as_str()),
        (None, true) => source,
        (None, false) => source.with_unreadable_renderer(),
    };
    if let Some(ratio) = args.pixel_ratio {
        source = source.with_pixel_ratio(ratio);
    }
    if let Some(hz) = args.refresh_hz {
        source = source.with_refresh_rate(hz);
    }
    source
}

fn build_report(snapshot: CapabilitySnapshot, args: &QualityArgs, settings: &Settings) -> QualityReport {
    let resolver = QualityResolver::new(settings.quality.clone());
    let resolved_tier = resolver.resolve_tier(&snapshot);
    let tier = settings.effective_quality_tier(resolved_tier);

    let (quality, viewer) = if args.detailed {
        let quality = resolver.settings_for(tier, snapshot.pixel_ratio);
        let viewer = ViewerSettings::initial(tier, &quality);
        (Some(quality), Some(viewer))
    } else {
        (None, None)
    };

    QualityReport {
        captured_at: chrono::Utc::now().to_rfc3339(),
        simulated: args.is_simulated(),
        snapshot,
        resolved_tier,
        tier,
        tier_description: tier.description().to_string(),
        overridden: settings.quality.tier_override.is_some(),
        settings: quality,
        viewer,
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn render_text(report: &QualityReport) -> String {
    let snapshot = &report.snapshot;
    let mut out = String::new();

    out.push_str("\n=== Capability Snapshot ===\n\n");
    if report.simulated {
        out.push_str("Device: simulated\n");
    }
    out.push_str(&format!("Mobile: {}\n", yes_no(snapshot.is_mobile)));
    out.push_str(&format!("Graphics Tier: {}\n", snapshot.graphics_tier));
    out.push_str(&format!("Pixel Ratio: {:.2}\n", snapshot.pixel_ratio));
    out.push_str(&format!("Sampled FPS: {:.1}\n", snapshot.sampled_fps));

    out.push_str("\n=== Quality ===\n\n");
    out.push_str(&format!("Tier: {} ({})\n", report.tier, report.tier_description));
    if report.overridden && report.tier != report.resolved_tier {
        out.push_str(&format!(
            "Resolved Tier: {} (overridden in settings)\n",
            report.resolved_tier
        ));
    }

    if let Some(settings) = &report.settings {
        let renderer = &settings.renderer;
        out.push_str("\n=== Renderer ===\n\n");
        out.push_str(&format!("Antialias: {}\n", yes_no(renderer.antialias)));
        out.push_str(&format!("Pixel Ratio: {:.2}\n", renderer.pixel_ratio));
        out.push_str(&format!(
            "Shadows: {}\n",
            if renderer.shadow_map.enabled {
                format!("{}px", renderer.shadow_map.map_size)
            } else {
                "off".to_string()
            }
        ));
        out.push_str(&format!(
            "Post-processing: {}\n",
            if settings.post_processing.enabled {
                format!("{} samples", settings.post_processing.samples)
            } else {
                "off".to_string()
            }
        ));
        out.push_str(&format!("Anisotropy: {}x\n", settings.meshes.anisotropy));
        out.push_str(&format!("Max Lights: {}\n", settings.lights.max_lights));
    }

    if let Some(viewer) = &report.viewer {
        out.push_str("\n=== Viewer Lights ===\n\n");
        for (name, light) in [
            ("Key", &viewer.lights.key),
            ("Fill", &viewer.lights.fill),
            ("Rim", &viewer.lights.rim),
        ] {
            out.push_str(&format!(
                "{}: {:.1} at ({}, {}, {})\n",
                name, light.intensity, light.position.x, light.position.y, light.position.z
            ));
        }
    }

    out.push('\n');
    out
}
