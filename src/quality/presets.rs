// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Fixed rendering presets, one per quality tier
//!
//! Every field is populated on every tier so the renderer never has to
//! default anything itself. Only the pixel ratio varies at runtime.

use serde::{Deserialize, Serialize};

use super::tier::QualityTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Lowp,
    Mediump,
    Highp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerPreference {
    Default,
    LowPower,
    HighPerformance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadowMapType {
    Basic,
    Pcf,
    PcfSoft,
    Vsm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToneMapping {
    None,
    Linear,
    Reinhard,
    AcesFilmic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextureFilter {
    Nearest,
    Linear,
    LinearMipmapLinear,
}

/// Surface material presets for loaded models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialPreset {
    Default,
    Metal,
    Plastic,
    Glass,
    Ceramic,
}

/// PBR parameters of a [`MaterialPreset`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialParams {
    pub roughness: f32,
    pub metalness: f32,
    pub env_map_intensity: f32,
    pub transparent: bool,
    pub opacity: f32,
}

impl MaterialPreset {
    pub const ALL: [MaterialPreset; 5] = [
        MaterialPreset::Default,
        MaterialPreset::Metal,
        MaterialPreset::Plastic,
        MaterialPreset::Glass,
        MaterialPreset::Ceramic,
    ];

    pub fn params(&self) -> MaterialParams {
        let opaque = |roughness, metalness, env_map_intensity| MaterialParams {
            roughness,
            metalness,
            env_map_intensity,
            transparent: false,
            opacity: 1.0,
        };

        match self {
            MaterialPreset::Default => opaque(0.5, 0.5, 1.0),
            MaterialPreset::Metal => opaque(0.2, 0.8, 1.2),
            MaterialPreset::Plastic => opaque(0.9, 0.1, 0.8),
            MaterialPreset::Glass => MaterialParams {
                roughness: 0.1,
                metalness: 0.9,
                env_map_intensity: 1.5,
                transparent: true,
                opacity: 0.8,
            },
            MaterialPreset::Ceramic => opaque(0.7, 0.2, 0.9),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowMapSettings {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: ShadowMapType,
    pub map_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererSettings {
    pub antialias: bool,
    pub precision: Precision,
    pub power_preference: PowerPreference,
    pub shadow_map: ShadowMapSettings,
    pub pixel_ratio: f64,
    pub tone_mapping: ToneMapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloomSettings {
    pub threshold: f32,
    pub strength: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostProcessingSettings {
    pub enabled: bool,
    pub samples: u32,
    /// Zeroed when post-processing is off
    pub bloom: BloomSettings,
}

/// Three-point light rig
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightPositions {
    pub key: Vec3,
    pub fill: Vec3,
    pub rim: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightSettings {
    pub shadow_bias: f32,
    pub shadow_radius: f32,
    pub max_lights: u32,
    /// Global intensity multiplier
    pub intensity: f32,
    pub positions: LightPositions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshSettings {
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub frustum_culled: bool,
    pub anisotropy: u32,
    pub mip_map_filter: TextureFilter,
    pub material_preset: MaterialPreset,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub bloom: bool,
    pub shadows: bool,
    pub anisotropy: bool,
    pub high_quality_shaders: bool,
}

/// Complete renderer configuration for one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitySettings {
    pub renderer: RendererSettings,
    pub post_processing: PostProcessingSettings,
    pub lights: LightSettings,
    pub meshes: MeshSettings,
    pub features: FeatureFlags,
}

const LIGHT_POSITIONS: LightPositions = LightPositions {
    key: Vec3::new(1.0, 1.5, 1.0),
    fill: Vec3::new(-1.5, 0.5, -1.5),
    rim: Vec3::new(0.0, 2.0, -1.5),
};

impl QualitySettings {
    /// The preset for `tier`, rendering at `pixel_ratio`
    pub fn for_tier(tier: QualityTier, pixel_ratio: f64) -> Self {
        match tier {
            QualityTier::Low => Self::low(pixel_ratio),
            QualityTier::Default => Self::default_tier(pixel_ratio),
            QualityTier::High => Self::high(pixel_ratio),
        }
    }

    fn low(pixel_ratio: f64) -> Self {
        Self {
            renderer: RendererSettings {
                antialias: false,
                precision: Precision::Lowp,
                power_preference: PowerPreference::LowPower,
                shadow_map: ShadowMapSettings {
                    enabled: false,
                    kind: ShadowMapType::Basic,
                    map_size: 256,
                },
                pixel_ratio,
                tone_mapping: ToneMapping::None,
            },
            post_processing: PostProcessingSettings {
                enabled: false,
                samples: 0,
                bloom: BloomSettings {
                    threshold: 0.0,
                    strength: 0.0,
                    radius: 0.0,
                },
            },
            lights: LightSettings {
                shadow_bias: -0.003,
                shadow_radius: 1.0,
                max_lights: 2,
                intensity: 1.5,
                positions: LIGHT_POSITIONS,
            },
            meshes: MeshSettings {
                cast_shadow: false,
                receive_shadow: false,
                frustum_culled: true,
                anisotropy: 1,
                mip_map_filter: TextureFilter::Nearest,
                material_preset: MaterialPreset::Default,
            },
            features: FeatureFlags {
                bloom: false,
                shadows: false,
                anisotropy: false,
                high_quality_shaders: false,
            },
        }
    }

    fn default_tier(pixel_ratio: f64) -> Self {
        Self {
            renderer: RendererSettings {
                antialias: true,
                precision: Precision::Highp,
                power_preference: PowerPreference::HighPerformance,
                shadow_map: ShadowMapSettings {
                    enabled: true,
                    kind: ShadowMapType::PcfSoft,
                    map_size: 512,
                },
                pixel_ratio,
                tone_mapping: ToneMapping::AcesFilmic,
            },
            post_processing: PostProcessingSettings {
                enabled: true,
                samples: 2,
                bloom: BloomSettings {
                    threshold: 0.75,
                    strength: 1.0,
                    radius: 0.5,
                },
            },
            lights: LightSettings {
                shadow_bias: -0.001,
                shadow_radius: 4.0,
                max_lights: 3,
                intensity: 1.0,
                positions: LIGHT_POSITIONS,
            },
            meshes: MeshSettings {
                cast_shadow: true,
                receive_shadow: true,
                frustum_culled: true,
                anisotropy: 4,
                mip_map_filter: TextureFilter::LinearMipmapLinear,
                material_preset: MaterialPreset::Default,
            },
            features: FeatureFlags {
                bloom: true,
                shadows: true,
                anisotropy: true,
                high_quality_shaders: true,
            },
        }
    }

    fn high(pixel_ratio: f64) -> Self {
        Self {
            renderer: RendererSettings {
                antialias: true,
                precision: Precision::Highp,
                power_preference: PowerPreference::HighPerformance,
                shadow_map: ShadowMapSettings {
                    enabled: true,
                    kind: ShadowMapType::PcfSoft,
                    map_size: 2048,
                },
                pixel_ratio,
                tone_mapping: ToneMapping::AcesFilmic,
            },
            post_processing: PostProcessingSettings {
                enabled: true,
                samples: 8,
                bloom: BloomSettings {
                    threshold: 0.85,
                    strength: 2.0,
                    radius: 1.0,
                },
            },
            lights: LightSettings {
                shadow_bias: -0.0003,
                shadow_radius: 12.0,
                max_lights: 3,
                intensity: 1.0,
                positions: LIGHT_POSITIONS,
            },
            meshes: MeshSettings {
                cast_shadow: true,
                receive_shadow: true,
                frustum_culled: true,
                anisotropy: 16,
                mip_map_filter: TextureFilter::LinearMipmapLinear,
                material_preset: MaterialPreset::Default,
            },
            features: FeatureFlags {
                bloom: true,
                shadows: true,
                anisotropy: true,
                high_quality_shaders: true,
            },
        }
    }
}
