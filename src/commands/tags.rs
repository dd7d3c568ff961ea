// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Tag vocabulary command

use serde::Serialize;

use crate::catalog::{Catalog, TagKey};
use crate::cli::args::{OutputFormat, TagsArgs};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct TagInfo {
    tag: String,
    key: Option<TagKey>,
    works: usize,
}

/// Execute the tags command
pub fn execute(args: &TagsArgs, format: OutputFormat) -> Result<()> {
    let catalog = Catalog::load(&args.catalog)?;
    let tags = vocabulary(&catalog);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("No tags.");
        return Ok(());
    }

    for info in &tags {
        match &info.key {
            Some(key) => println!("{:<24} {:<24} {}", info.tag, key.as_str(), info.works),
            None => println!("{:<24} {:<24} {}", info.tag, "-", info.works),
        }
    }
    Ok(())
}

fn vocabulary(catalog: &Catalog) -> Vec<TagInfo> {
    catalog
        .tags()
        .into_iter()
        .map(|tag| {
            let works = catalog
                .iter()
                .filter(|work| work.tags.iter().any(|t| *t == tag))
                .count();
            TagInfo {
                key: TagKey::new(&tag),
                tag,
                works,
            }
        })
        .collect()
}
