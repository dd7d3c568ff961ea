// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

use clap::Parser;
use folio::cli::{Cli, Commands, OutputFormat};
use folio::search::SearchField;

#[test]
fn test_parse_search_command() {
    let args = vec!["folio", "search", "--catalog", "works.json", "study"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Search(search_args) = cli.command {
        assert_eq!(search_args.term, Some("study".to_string()));
        assert!(search_args.fields.is_empty());
    } else {
        panic!("Expected Search command");
    }
}

#[test]
fn test_parse_search_with_fields_and_tags() {
    let args = vec![
        "folio", "search", "-c", "works.toml", "red", "-f", "title", "-f", "description", "-t",
        "portrait",
    ];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Search(search_args) = cli.command {
        assert_eq!(
            search_args.fields,
            vec![SearchField::Title, SearchField::Description]
        );
        assert_eq!(search_args.tags, vec!["portrait"]);
    } else {
        panic!("Expected Search command");
    }
}

#[test]
fn test_parse_tags_command() {
    let args = vec!["folio", "tags", "--catalog", "works.yaml"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::Tags(_)));
}

#[test]
fn test_parse_quality_command() {
    let args = vec!["folio", "quality", "--no-gpu", "--refresh-hz", "30"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Quality(quality_args) = cli.command {
        assert!(quality_args.no_gpu);
        assert_eq!(quality_args.refresh_hz, Some(30.0));
        assert!(quality_args.is_simulated());
    } else {
        panic!("Expected Quality command");
    }
}

#[test]
fn test_parse_json_format() {
    let args = vec!["folio", "--format", "json", "quality"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn test_invalid_command() {
    let args = vec!["folio", "invalid-command"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_invalid_pixel_ratio() {
    let args = vec!["folio", "quality", "--pixel-ratio", "retina"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_help_flag() {
    let args = vec!["folio", "--help"];
    let result = Cli::try_parse_from(args);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().kind(),
        clap::error::ErrorKind::DisplayHelp
    );
}

#[test]
fn test_version_flag() {
    let args = vec!["folio", "--version"];
    let result = Cli::try_parse_from(args);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().kind(),
        clap::error::ErrorKind::DisplayVersion
    );
}
