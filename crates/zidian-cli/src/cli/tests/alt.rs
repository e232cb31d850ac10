//! Tests for the alt subcommands.

use super::parse;
use crate::cli::{AltCommand, CliCommand};

#[test]
fn cli_parse_alt_add() {
    match parse(&[
        "zidian", "alt", "add", "氵", "--original", "水", "--strokes", "3",
    ]) {
        CliCommand::Alt(AltCommand::Add {
            glyph,
            original,
            strokes,
        }) => {
            assert_eq!(glyph, "氵");
            assert_eq!(original, "水");
            assert_eq!(strokes, 3);
        }
        _ => panic!("expected Alt Add"),
    }
}

#[test]
fn cli_parse_alt_list() {
    match parse(&["zidian", "alt", "list"]) {
        CliCommand::Alt(AltCommand::List { of, json }) => {
            assert!(of.is_none());
            assert!(!json);
        }
        _ => panic!("expected Alt List"),
    }

    match parse(&["zidian", "alt", "list", "--of", "水", "--json"]) {
        CliCommand::Alt(AltCommand::List { of, json }) => {
            assert_eq!(of.as_deref(), Some("水"));
            assert!(json);
        }
        _ => panic!("expected Alt List with --of"),
    }
}

#[test]
fn cli_parse_alt_remove() {
    match parse(&["zidian", "alt", "remove", "氵"]) {
        CliCommand::Alt(AltCommand::Remove { glyph }) => assert_eq!(glyph, "氵"),
        _ => panic!("expected Alt Remove"),
    }
}
