// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Initial 3D viewer state derived from a quality preset

use serde::{Deserialize, Serialize};

use super::presets::{MaterialPreset, QualitySettings, Vec3};
use super::tier::QualityTier;

const KEY_BASE_INTENSITY: f32 = 50.0;
const FILL_BASE_INTENSITY: f32 = 25.0;
const RIM_BASE_INTENSITY: f32 = 15.0;
const LIGHT_COLOR: &str = "#ffffff";
const LIGHT_DISTANCE: f32 = 15.0;
const CENTER_DISTANCE: f32 = 5.0;

/// One light of the three-point rig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerLight {
    pub color: String,
    pub intensity: f32,
    pub distance: f32,
    pub position: Vec3,
}

impl ViewerLight {
    fn new(intensity: f32, position: Vec3) -> Self {
        Self {
            color: LIGHT_COLOR.to_string(),
            intensity,
            distance: LIGHT_DISTANCE,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerLights {
    pub key: ViewerLight,
    pub fill: ViewerLight,
    pub rim: ViewerLight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub center_distance: f32,
    pub bloom: bool,
    pub show_helpers: bool,
    pub light_intensity: f32,
    pub shadows: bool,
    pub quality_preset: QualityTier,
    pub material_preset: MaterialPreset,
}

/// User-adjustable viewer state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSettings {
    pub visible: bool,
    pub lights: ViewerLights,
    pub global: GlobalSettings,
}

impl ViewerSettings {
    /// Starting state for a viewer running at `tier` with `settings`.
    ///
    /// Base light intensities are scaled by the preset's global multiplier.
    /// Bloom starts off regardless of tier; the user opts in.
    pub fn initial(tier: QualityTier, settings: &QualitySettings) -> Self {
        let scale = settings.lights.intensity;
        let positions = settings.lights.positions;

        Self {
            visible: false,
            lights: ViewerLights {
                key: ViewerLight::new(KEY_BASE_INTENSITY * scale, positions.key),
                fill: ViewerLight::new(FILL_BASE_INTENSITY * scale, positions.fill),
                rim: ViewerLight::new(RIM_BASE_INTENSITY * scale, positions.rim),
            },
            global: GlobalSettings {
                center_distance: CENTER_DISTANCE,
                bloom: false,
                show_helpers: false,
                light_intensity: scale,
                shadows: settings.features.shadows,
                quality_preset: tier,
                material_preset: settings.meshes.material_preset,
            },
        }
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self::initial(
            QualityTier::Default,
            &QualitySettings::for_tier(QualityTier::Default, 1.0),
        )
    }
}
