use super::*;
use crate::source::model::EventResponse;
use serde_json::json;

fn event(timestamp: i64, season: serde_json::Value) -> Event {
    let v = json!({
        "event": {
            "startTimestamp": timestamp,
            "tournament": { "name": "UEFA Champions League" },
            "season": season,
            "homeTeam": { "name": "Galatasaray" },
            "awayTeam": { "name": "Liverpool" },
            "homeScore": { "current": 1 },
            "awayScore": {}
        }
    });
    serde_json::from_value::<EventResponse>(v).unwrap().event
}

#[test]
fn builds_header_with_translated_tournament_and_local_date() {
    // 2025-12-07T22:00:00Z is already the 8th in UTC+3.
    let ev = event(1_765_144_800, json!({ "year": "25/26" }));
    let info = MatchInfo::from_event(&ev, &Config::default()).unwrap();
    assert_eq!(info.tournament, "Şampiyonlar Ligi");
    assert_eq!(info.season, "2025/2026");
    assert_eq!(info.date, "8 Aralık 2025");
    assert_eq!(info.home_score, 1);
    assert_eq!(info.away_score, 0);
    assert_eq!(
        info.subtitle(),
        "Şampiyonlar Ligi - 2025/2026 | Galatasaray 1 - 0 Liverpool (8 Aralık 2025)"
    );
}

#[test]
fn utc_offset_and_season_override_apply() {
    let ev = event(1_765_144_800, json!({ "year": "25/26" }));
    let cfg = Config {
        utc_offset_hours: 0,
        season: Some("Sezon".to_owned()),
        ..Config::default()
    };
    let info = MatchInfo::from_event(&ev, &cfg).unwrap();
    assert_eq!(info.date, "7 Aralık 2025");
    assert_eq!(info.season, "Sezon");
}

#[test]
fn season_forms() {
    let s = |y: &str| {
        season_span(&Season {
            year: Some(y.to_owned()),
        })
    };
    assert_eq!(s("25/26"), "2025/2026");
    assert_eq!(s("2025/2026"), "2025/2026");
    assert_eq!(s("2025"), "2025");
    assert_eq!(s("25"), "");
    assert_eq!(s("abc"), "");
    assert_eq!(season_span(&Season::default()), "");
}

#[test]
fn resolves_sides_by_exact_name() {
    let ev = event(0, json!(null));
    assert_eq!(resolve_side(&ev, "Galatasaray").unwrap(), Side::Home);
    assert_eq!(resolve_side(&ev, "Liverpool").unwrap(), Side::Away);
    assert_eq!(Side::Home.opposite(), Side::Away);
    let err = resolve_side(&ev, "galatasaray").unwrap_err();
    assert!(matches!(err, DuelvizError::Data(_)));
}
