use super::*;
use serde_json::json;

fn player(name: &str, pos: &str, sub: bool, stats: serde_json::Value) -> serde_json::Value {
    json!({
        "player": { "name": name, "position": pos },
        "substitute": sub,
        "statistics": stats
    })
}

fn lineups(home: Vec<serde_json::Value>) -> LineupsResponse {
    serde_json::from_value(json!({
        "home": { "players": home },
        "away": { "players": [] }
    }))
    .unwrap()
}

#[test]
fn filters_bench_and_goalkeeper() {
    let l = lineups(vec![
        player("Keeper", "G", false, json!({"duelWon": 9, "duelLost": 9})),
        player("Bench", "F", true, json!({"duelWon": 9, "duelLost": 9})),
        player("Starter", "M", false, json!({"minutesPlayed": 90, "duelWon": 1})),
    ]);
    let out = player_duels(&l, Side::Home);
    assert_eq!(
        out,
        vec![PlayerDuels {
            player: "Starter".to_owned(),
            minutes: 90,
            won: 1,
            lost: 0,
        }]
    );
    assert!(player_duels(&l, Side::Away).is_empty());
}

#[test]
fn sorts_by_total_then_won_and_keeps_ties_stable() {
    let l = lineups(vec![
        player("A", "D", false, json!({"duelWon": 2, "duelLost": 4})),
        player("B", "D", false, json!({"duelWon": 4, "duelLost": 2})),
        player("C", "M", false, json!({"duelWon": 1, "duelLost": 1})),
        player("D", "M", false, json!({"duelWon": 4, "duelLost": 2})),
        player("E", "F", false, json!({})),
        player("F", "F", false, json!({"duelWon": 10, "duelLost": 0})),
    ]);
    let names: Vec<_> = player_duels(&l, Side::Home)
        .into_iter()
        .map(|p| p.player)
        .collect();
    assert_eq!(names, ["F", "B", "D", "A", "C", "E"]);
}

#[test]
fn lineup_position_overrides_player_position() {
    let l: LineupsResponse = serde_json::from_value(json!({
        "home": { "players": [
            { "player": { "name": "Keeper playing out", "position": "G" }, "position": "F",
              "substitute": false, "statistics": { "duelWon": 1 } }
        ]},
        "away": { "players": [] }
    }))
    .unwrap();
    assert_eq!(player_duels(&l, Side::Home).len(), 1);
}

fn stats(duels: (&str, &str), ground: (f64, f64), aerial: (f64, f64)) -> StatisticsResponse {
    serde_json::from_value(json!({
        "statistics": [{
            "period": "ALL",
            "groups": [{ "statisticsItems": [
                { "name": "Duels", "home": duels.0, "away": duels.1 },
                { "name": "Ground duels", "home": "", "away": "", "homeValue": ground.0, "awayValue": ground.1 },
                { "name": "Aerial duels", "home": "", "away": "", "homeValue": aerial.0, "awayValue": aerial.1 }
            ]}]
        }]
    }))
    .unwrap()
}

#[test]
fn team_split_follows_side() {
    let s = stats(("51%", "49%"), (30.0, 28.0), (10.0, 11.0));

    let home = team_duels(&s, Side::Home, "Home FC", "Away FC").unwrap();
    assert_eq!(home.team_pct, 51);
    assert_eq!(home.opponent_pct, 49);
    assert_eq!(home.team_won, 40);
    assert_eq!(home.opponent_won, 39);
    assert_eq!(home.total(), 79);

    let away = team_duels(&s, Side::Away, "Away FC", "Home FC").unwrap();
    assert_eq!(away.team_pct, 49);
    assert_eq!(away.team_won, 39);
    assert_eq!(away.opponent_won, 40);
    assert_eq!(away.team_name, "Away FC");
}

#[test]
fn team_split_errors() {
    let s = stats(("n/a", "49%"), (1.0, 1.0), (1.0, 1.0));
    assert!(team_duels(&s, Side::Home, "a", "b").is_err());

    let s = stats(("150%", "49%"), (1.0, 1.0), (1.0, 1.0));
    assert!(team_duels(&s, Side::Home, "a", "b").is_err());

    let empty: StatisticsResponse = serde_json::from_value(json!({ "statistics": [] })).unwrap();
    let err = team_duels(&empty, Side::Home, "a", "b").unwrap_err();
    assert!(err.to_string().contains("Duels"));
}

#[test]
fn percentage_parsing() {
    assert_eq!(parse_pct("51%").unwrap(), 51);
    assert_eq!(parse_pct(" 7 % ").unwrap(), 7);
    assert_eq!(parse_pct("100").unwrap(), 100);
    assert!(parse_pct("%").is_err());
}

#[test]
fn huge_player_counts_saturate_instead_of_panicking() {
    let l = lineups(vec![
        player("Big", "F", false, json!({"duelWon": 3e9, "duelLost": 3e9})),
        player("Small", "M", false, json!({"duelWon": 1, "duelLost": 1})),
    ]);
    let out = player_duels(&l, Side::Home);
    assert_eq!(out[0].player, "Big");
    assert_eq!(out[0].total(), u32::MAX);
    assert_eq!(out[1].total(), 2);
}

#[test]
fn overflowing_team_sum_is_a_data_error() {
    let s = stats(("51%", "49%"), (3e9, 1.0), (3e9, 1.0));
    let err = team_duels(&s, Side::Home, "a", "b").unwrap_err();
    assert!(matches!(err, DuelvizError::Data(_)));
    assert!(err.to_string().contains("overflow"));

    let split = TeamDuels {
        team_name: "a".to_owned(),
        opponent_name: "b".to_owned(),
        team_pct: 50,
        opponent_pct: 50,
        team_won: u32::MAX,
        opponent_won: 7,
    };
    assert_eq!(split.total(), u32::MAX);
}
