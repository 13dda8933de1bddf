use super::parse;
use crate::cli::CliCommand;
use std::path::PathBuf;

#[test]
fn cli_parse_cards_defaults() {
    match parse(&["lordd", "cards"]) {
        CliCommand::Cards {
            path,
            set,
            preview,
            json,
        } => {
            assert!(path.is_none());
            assert_eq!(set, 1);
            assert_eq!(preview, 10);
            assert!(!json);
        }
        _ => panic!("expected Cards"),
    }
}

#[test]
fn cli_parse_cards_all_flags() {
    match parse(&[
        "lordd",
        "cards",
        "--path",
        "cards.json",
        "--set",
        "3",
        "--preview",
        "0",
        "--json",
    ]) {
        CliCommand::Cards {
            path,
            set,
            preview,
            json,
        } => {
            assert_eq!(path, Some(PathBuf::from("cards.json")));
            assert_eq!(set, 3);
            assert_eq!(preview, 0);
            assert!(json);
        }
        _ => panic!("expected Cards"),
    }
}
