// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for folio.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::search::SearchField;

/// folio - portfolio search and rendering quality tools
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about = "Portfolio search and rendering quality tools")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a catalog, optionally narrowed by tags
    Search(SearchArgs),

    /// List the tag vocabulary of a catalog
    Tags(TagsArgs),

    /// Probe rendering capability and resolve a quality tier
    #[command(alias = "q")]
    Quality(QualityArgs),
}

/// Arguments for the search subcommand
#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Catalog file (.json, .yaml, .yml or .toml)
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Search term (omit to list everything)
    pub term: Option<String>,

    /// Field to search (repeatable; defaults to the configured fields)
    #[arg(short, long = "field")]
    pub fields: Vec<SearchField>,

    /// Only include works carrying one of these tags (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

/// Arguments for the tags subcommand
#[derive(clap::Args, Debug)]
pub struct TagsArgs {
    /// Catalog file (.json, .yaml, .yml or .toml)
    #[arg(short, long)]
    pub catalog: PathBuf,
}

/// Arguments for the quality subcommand.
///
/// With no signal flags the host machine is probed. Any flag switches to a
/// simulated device built from the flags alone.
#[derive(clap::Args, Debug, Default)]
pub struct QualityArgs {
    /// Platform string to classify (e.g. a user agent)
    #[arg(long)]
    pub platform: Option<String>,

    /// Renderer description reported by the graphics context
    #[arg(long, conflicts_with = "no_gpu")]
    pub renderer: Option<String>,

    /// Simulate a device without a graphics context
    #[arg(long)]
    pub no_gpu: bool,

    /// Device pixel ratio
    #[arg(long)]
    pub pixel_ratio: Option<f64>,

    /// Simulated display refresh rate in Hz, sampled for the frame rate
    #[arg(long)]
    pub refresh_hz: Option<f64>,

    /// Include the full quality settings and viewer state
    #[arg(short, long)]
    pub detailed: bool,
}

impl QualityArgs {
    /// Whether any flag describes a simulated device
    pub fn is_simulated(&self) -> bool {
        self.platform.is_some()
            || self.renderer.is_some()
            || self.no_gpu
            || self.pixel_ratio.is_some()
            || self.refresh_hz.is_some()
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
