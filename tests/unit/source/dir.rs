use super::*;
use std::path::Path;

fn fixture_source() -> DirSource {
    DirSource::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/matches"))
}

#[test]
fn reads_all_three_payloads() {
    let src = fixture_source();
    let event = src.event(14566935).unwrap();
    assert_eq!(event.event.home_team.name, "Galatasaray");
    assert_eq!(event.event.away_team.name, "Fenerbahçe");

    let lineups = src.lineups(14566935).unwrap();
    assert!(!lineups.home.players.is_empty());
    assert!(!lineups.away.players.is_empty());

    let stats = src.statistics(14566935).unwrap();
    let duels = stats.item("ALL", "Duels").unwrap();
    assert_eq!(duels.home, "53%");
    assert!(stats.item("1ST", "Duels").is_none());
}

#[test]
fn missing_match_is_a_data_error_naming_the_file() {
    let err = fixture_source().event(1).unwrap_err();
    assert!(matches!(err, DuelvizError::Data(_)));
    assert!(err.to_string().contains("event.json"));
}

#[test]
fn malformed_payload_is_a_data_error() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("7");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("lineups.json"), "{\"home\": 3}").unwrap();

    let err = DirSource::new(tmp.path()).lineups(7).unwrap_err();
    assert!(matches!(err, DuelvizError::Data(_)));
    assert!(err.to_string().contains("parse"));
}
