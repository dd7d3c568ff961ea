// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! The work entry schema shared by every catalog snapshot

use serde::{Deserialize, Deserializer, Serialize};

/// File format of a work's 3D model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    Glb,
    Gltf,
    Splat,
    Ply,
}

impl std::fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelFormat::Glb => write!(f, "glb"),
            ModelFormat::Gltf => write!(f, "gltf"),
            ModelFormat::Splat => write!(f, "splat"),
            ModelFormat::Ply => write!(f, "ply"),
        }
    }
}

/// A single work in the portfolio catalog.
///
/// `id` is the entry's position in its catalog and is reassigned whenever a
/// [`Catalog`](super::Catalog) is built, so snapshot files may omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub id: usize,

    pub title: String,

    /// Front-matter often carries the year as a bare number
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,

    #[serde(default)]
    pub has_model: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format: Option<ModelFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_file: Option<String>,
}

impl WorkEntry {
    /// Create an entry with only the required fields set
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            year: year.into(),
            description: String::new(),
            tags: Vec::new(),
            image: String::new(),
            has_model: false,
            model_format: None,
            model_file: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Attach a 3D model to this work
    pub fn with_model(mut self, format: ModelFormat, file: impl Into<String>) -> Self {
        self.has_model = true;
        self.model_format = Some(format);
        self.model_file = Some(file.into());
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}
