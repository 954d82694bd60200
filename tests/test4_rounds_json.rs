use clap::Parser;
use golf_journal::args::Args;
use golf_journal::args::validation::check_readable_rounds_json;

mod common;

fn fixture_path() -> String {
    format!("{}/tests/fixtures/rounds.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_fixture_file_validates() {
    let config = check_readable_rounds_json(&fixture_path()).expect("fixture should load");
    assert_eq!(config.courses.len(), 2);
    assert_eq!(config.rounds.len(), 3);
    // raw score text is kept as typed
    let round = config.rounds.iter().find(|r| r.id == 2).expect("round 2");
    assert_eq!(round.scores.get(&3).map(String::as_str), Some("x"));
}

#[test]
fn test_missing_file_is_rejected() {
    let err = check_readable_rounds_json("/definitely/not/here.json").unwrap_err();
    assert!(err.contains("is not readable"), "{err}");
}

#[test]
fn test_cli_defaults_and_overrides() {
    let path = fixture_path();
    let args = Args::try_parse_from(["golf-journal", "--rounds-json", path.as_str()]).expect("parse");
    assert_eq!(args.host, "0.0.0.0");
    assert_eq!(args.port, 8081);
    assert_eq!(args.rounds_json.rounds.len(), 3);

    let args = Args::try_parse_from(["golf-journal", "-r", path.as_str(), "-p", "9000", "--host", "127.0.0.1"])
        .expect("parse");
    assert_eq!(args.port, 9000);
    assert_eq!(args.host, "127.0.0.1");

    assert!(Args::try_parse_from(["golf-journal"]).is_err());
    assert!(Args::try_parse_from(["golf-journal", "-r", "/nope.json"]).is_err());
}

#[test]
fn test_round_book_orders_newest_first() {
    let book = common::round_book();
    let dates: Vec<&str> = book.rounds().iter().map(|r| r.entry_date.as_str()).collect();
    assert_eq!(dates, vec!["2026-06-14", "2026-05-02", "2026-03-30"]);
}
