// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Work catalog snapshots
//!
//! A catalog is the ordered list of works the site shows. Ingesting markdown
//! front-matter happens upstream; this module only accepts the resulting
//! snapshot (JSON, YAML or TOML) and fixes every entry's id to its position.

pub mod tag;
pub mod work;

pub use tag::TagKey;
pub use work::{ModelFormat, WorkEntry};

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FolioError, Result};

/// Ordered collection of works
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    works: Vec<WorkEntry>,
}

/// Accepted snapshot shapes: a bare list, or a table with a `works` list
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<WorkEntry>),
    Table { works: Vec<WorkEntry> },
}

impl From<CatalogFile> for Vec<WorkEntry> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::List(works) | CatalogFile::Table { works } => works,
        }
    }
}

impl Catalog {
    /// Build a catalog, assigning each entry its 0-based position as id
    pub fn new(works: Vec<WorkEntry>) -> Self {
        let works = works
            .into_iter()
            .enumerate()
            .map(|(id, mut work)| {
                work.id = id;
                work
            })
            .collect();
        Self { works }
    }

    /// Load a snapshot, picking the parser from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json(&content)?,
            "yaml" | "yml" => Self::from_yaml(&content)?,
            "toml" => Self::from_toml(&content)?,
            other => {
                return Err(FolioError::Catalog(format!(
                    "unsupported catalog format '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };

        tracing::info!(path = %path.display(), works = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::new(file.into()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Ok(Self::new(file.into()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.into()))
    }

    pub fn works(&self) -> &[WorkEntry] {
        &self.works
    }

    pub fn get(&self, id: usize) -> Option<&WorkEntry> {
        self.works.get(id)
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkEntry> {
        self.works.iter()
    }

    /// Distinct non-blank tags, most used first.
    ///
    /// Tags used equally often keep the order in which they first appear.
    pub fn tags(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for tag in self.works.iter().flat_map(|work| work.tags.iter()) {
            if tag.trim().is_empty() {
                continue;
            }
            let count = counts.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                order.push(tag.as_str());
            }
            *count += 1;
        }

        // Stable sort keeps first-seen order among ties
        order.sort_by(|a, b| counts[b].cmp(&counts[a]));
        order.into_iter().map(str::to_string).collect()
    }
}

impl From<Vec<WorkEntry>> for Catalog {
    fn from(works: Vec<WorkEntry>) -> Self {
        Self::new(works)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a WorkEntry;
    type IntoIter = std::slice::Iter<'a, WorkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.works.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Catalog {
        Catalog::new(vec![
            WorkEntry::new("Red Study", "2020").with_tags(["portrait", "oil"]),
            WorkEntry::new("Blue Study", "2021").with_tags(["oil"]),
            WorkEntry::new("Green Portrait", "2022").with_tags(["portrait", "oil", " "]),
            WorkEntry::new("Head", "2023").with_tags(["scan"]),
        ])
    }

    #[test]
    fn test_new_assigns_positions_as_ids() {
        let works = vec![
            WorkEntry {
                id: 42,
                ..WorkEntry::new("A", "2020")
            },
            WorkEntry {
                id: 7,
                ..WorkEntry::new("B", "2021")
            },
        ];
        let catalog = Catalog::new(works);
        assert_eq!(catalog.works()[0].id, 0);
        assert_eq!(catalog.works()[1].id, 1);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.tags().is_empty());
    }

    #[test]
    fn test_get() {
        let catalog = sample();
        assert_eq!(catalog.get(1).unwrap().title, "Blue Study");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_tags_sorted_by_frequency() {
        let catalog = sample();
        assert_eq!(catalog.tags(), vec!["oil", "portrait", "scan"]);
    }

    #[test]
    fn test_tags_ties_keep_first_seen_order() {
        let catalog = Catalog::new(vec![
            WorkEntry::new("A", "2020").with_tags(["zeta", "alpha"]),
            WorkEntry::new("B", "2020").with_tags(["alpha", "zeta", "mid"]),
        ]);
        assert_eq!(catalog.tags(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json_list() {
        let json = r#"[{"title": "A", "year": "2020"}, {"title": "B", "year": 2021}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.works()[1].year, "2021");
        assert_eq!(catalog.works()[1].id, 1);
    }

    #[test]
    fn test_from_json_table() {
        let json = r#"{"works": [{"title": "A", "year": "2020"}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "- title: A\n  year: 2020\n  tags: [portrait]\n- title: B\n  year: '2021'\n  tags:\n";
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.works()[0].tags, vec!["portrait"]);
        assert!(catalog.works()[1].tags.is_empty());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
[[works]]
title = "A"
year = "2020"
tags = ["portrait"]

[[works]]
title = "B"
year = 2021
"#;
        let catalog = Catalog::from_toml(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.works()[1].year, "2021");
    }

    #[test]
    fn test_load_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("works.json");
        std::fs::write(&path, r#"[{"title": "A", "year": "2020"}]"#).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("works.csv");
        std::fs::write(&path, "title,year").unwrap();

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, FolioError::Catalog(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/works.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_iteration() {
        let catalog = sample();
        let titles: Vec<&str> = catalog.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles.len(), 4);
        assert_eq!((&catalog).into_iter().count(), 4);
    }
}
