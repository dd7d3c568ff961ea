// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! Catalog search command

use serde::Serialize;

use crate::catalog::{Catalog, WorkEntry};
use crate::cli::args::{OutputFormat, SearchArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::search::{SearchField, SearchIndex};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'a> {
    term: &'a str,
    fields: Vec<SearchField>,
    tags: &'a [String],
    catalog_size: usize,
    matches: Vec<&'a WorkEntry>,
}

/// Execute the search command
pub fn execute(args: &SearchArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let catalog = Catalog::load(&args.catalog)?;
    let report = run(&catalog, args, settings);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_text(&report));
    Ok(())
}

/// Tag filter first, then the text query within the filtered works
fn run<'a>(catalog: &'a Catalog, args: &'a SearchArgs, settings: &Settings) -> SearchReport<'a> {
    let fields = if args.fields.is_empty() {
        settings.search.default_fields.clone()
    } else {
        args.fields.clone()
    };
    let index = SearchIndex::new(catalog).with_default_fields(&fields);
    let term = args.term.as_deref().unwrap_or("");

    let tagged = index.filter_by_tags(&args.tags);
    let ids: Vec<usize> = index
        .search_within_subset(term, &tagged)
        .into_iter()
        .map(|work| work.id)
        .collect();

    // Re-borrow from the catalog so the report outlives the index
    let matches = ids.into_iter().filter_map(|id| catalog.get(id)).collect();

    SearchReport {
        term,
        fields: index.default_fields().to_vec(),
        tags: &args.tags,
        catalog_size: catalog.len(),
        matches,
    }
}

fn render_text(report: &SearchReport<'_>) -> String {
    let mut out = String::new();

    if report.matches.is_empty() {
        out.push_str("No matching works.\n");
        return out;
    }

    for work in &report.matches {
        out.push_str(&format!("{:>4}  {} ({})", work.id, work.title, work.year));
        if !work.tags.is_empty() {
            out.push_str(&format!("  [{}]", work.tags.join(", ")));
        }
        if let (true, Some(format)) = (work.has_model, work.model_format) {
            out.push_str(&format!("  <{} model>", format));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} of {} works\n",
        report.matches.len(),
        report.catalog_size
    ));
    out
}
