//! Tests for the character subcommands (add, show, list, update, remove).

use clap::Parser;

use super::parse;
use crate::cli::{Cli, CliCommand};

#[test]
fn cli_parse_add() {
    match parse(&[
        "zidian", "add", "河", "--pinyin", "he", "--ipa", "xɤ", "--tone", "2", "--strokes", "8",
        "--radical", "水", "--alternative", "氵",
    ]) {
        CliCommand::Add {
            glyph,
            pinyin,
            ipa,
            tone,
            strokes,
            radical,
            alternative,
            is_radical,
        } => {
            assert_eq!(glyph, "河");
            assert_eq!(pinyin, "he");
            assert_eq!(ipa, "xɤ");
            assert_eq!(tone, 2);
            assert_eq!(strokes, 8);
            assert_eq!(radical.as_deref(), Some("水"));
            assert_eq!(alternative.as_deref(), Some("氵"));
            assert!(!is_radical);
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_radical_flag() {
    match parse(&[
        "zidian", "add", "水", "--pinyin", "shui", "--ipa", "swei", "--tone", "3", "--strokes",
        "4", "--is-radical",
    ]) {
        CliCommand::Add {
            glyph, is_radical, ..
        } => {
            assert_eq!(glyph, "水");
            assert!(is_radical);
        }
        _ => panic!("expected Add with --is-radical"),
    }
}

#[test]
fn cli_add_alternative_requires_radical() {
    let res = Cli::try_parse_from([
        "zidian", "add", "河", "--pinyin", "he", "--ipa", "x", "--tone", "2", "--strokes", "8",
        "--alternative", "氵",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_show_and_list() {
    match parse(&["zidian", "show", "水", "--json"]) {
        CliCommand::Show { glyph, json } => {
            assert_eq!(glyph, "水");
            assert!(json);
        }
        _ => panic!("expected Show"),
    }

    match parse(&["zidian", "list"]) {
        CliCommand::List { radicals, json } => {
            assert!(!radicals);
            assert!(!json);
        }
        _ => panic!("expected List"),
    }

    match parse(&["zidian", "list", "--radicals"]) {
        CliCommand::List { radicals, .. } => assert!(radicals),
        _ => panic!("expected List with --radicals"),
    }
}

#[test]
fn cli_parse_update() {
    match parse(&[
        "zidian",
        "update",
        "河",
        "--tone",
        "2",
        "--clear-radical",
        "--is-radical",
        "false",
    ]) {
        CliCommand::Update {
            glyph,
            tone,
            clear_radical,
            radical,
            is_radical,
            ..
        } => {
            assert_eq!(glyph, "河");
            assert_eq!(tone, Some(2));
            assert!(clear_radical);
            assert!(radical.is_none());
            assert_eq!(is_radical, Some(false));
        }
        _ => panic!("expected Update"),
    }
}

#[test]
fn cli_update_radical_conflicts_with_clear() {
    let res = Cli::try_parse_from([
        "zidian",
        "update",
        "河",
        "--radical",
        "水",
        "--clear-radical",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_remove() {
    match parse(&["zidian", "remove", "河"]) {
        CliCommand::Remove { glyph } => assert_eq!(glyph, "河"),
        _ => panic!("expected Remove"),
    }
}
