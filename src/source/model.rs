//! Serde views over the Sofascore API responses the chart is built from.
//!
//! Only the fields the chart consumes are modeled; everything else in the payloads is ignored.
//! Numeric statistics are optional because Sofascore omits them for players who never
//! registered the event.

use serde::Deserialize;

/// `GET /api/v1/event/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventResponse {
    /// Match metadata.
    pub event: Event,
}

/// Match metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Kickoff as a unix timestamp (seconds).
    pub start_timestamp: i64,
    /// Competition the match belongs to.
    pub tournament: Tournament,
    /// Season, when present.
    #[serde(default)]
    pub season: Option<Season>,
    /// Home side.
    pub home_team: Team,
    /// Away side.
    pub away_team: Team,
    /// Home goals.
    #[serde(default)]
    pub home_score: Score,
    /// Away goals.
    #[serde(default)]
    pub away_score: Score,
}

/// Competition name.
#[derive(Debug, Clone, Deserialize)]
pub struct Tournament {
    /// Display name, e.g. `"UEFA Champions League"`.
    pub name: String,
}

/// Season descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Season {
    /// Short year span, e.g. `"25/26"`, or a single year `"2025"`.
    #[serde(default)]
    pub year: Option<String>,
}

/// Team reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    /// Display name.
    pub name: String,
}

/// Score block; absent before kickoff.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Score {
    /// Current goals.
    #[serde(default)]
    pub current: Option<u32>,
}

/// `GET /api/v1/event/{id}/lineups`.
#[derive(Debug, Clone, Deserialize)]
pub struct LineupsResponse {
    /// Home side lineup.
    pub home: Lineup,
    /// Away side lineup.
    pub away: Lineup,
}

/// One side's lineup, starters and substitutes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lineup {
    /// Players in lineup order.
    #[serde(default)]
    pub players: Vec<LineupPlayer>,
}

/// A lineup entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LineupPlayer {
    /// Player identity.
    pub player: Player,
    /// Lineup position (`G`, `D`, `M`, `F`); falls back to the player's own position.
    #[serde(default)]
    pub position: Option<String>,
    /// `true` for bench players.
    #[serde(default)]
    pub substitute: bool,
    /// Per-match statistics.
    #[serde(default)]
    pub statistics: PlayerStatistics,
}

impl LineupPlayer {
    /// Effective position code.
    pub fn position(&self) -> Option<&str> {
        self.position
            .as_deref()
            .or(self.player.position.as_deref())
    }
}

/// Player identity.
#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Registered position code.
    #[serde(default)]
    pub position: Option<String>,
}

/// Per-match player statistics. Missing values count as zero.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    /// Minutes on the pitch.
    #[serde(default)]
    pub minutes_played: Option<f64>,
    /// Duels won.
    #[serde(default)]
    pub duel_won: Option<f64>,
    /// Duels lost.
    #[serde(default)]
    pub duel_lost: Option<f64>,
}

/// `GET /api/v1/event/{id}/statistics`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsResponse {
    /// One entry per period (`ALL`, `1ST`, `2ND`).
    pub statistics: Vec<PeriodStatistics>,
}

/// Team statistics for one period.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodStatistics {
    /// Period code.
    pub period: String,
    /// Statistic groups.
    #[serde(default)]
    pub groups: Vec<StatisticsGroup>,
}

/// A named group of statistics.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsGroup {
    /// Items in the group.
    #[serde(default)]
    pub statistics_items: Vec<StatisticsItem>,
}

/// A single team statistic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsItem {
    /// Statistic name, e.g. `"Ground duels"`.
    pub name: String,
    /// Home display string, e.g. `"51%"`.
    pub home: String,
    /// Away display string.
    pub away: String,
    /// Home numeric value.
    #[serde(default)]
    pub home_value: Option<f64>,
    /// Away numeric value.
    #[serde(default)]
    pub away_value: Option<f64>,
}

impl StatisticsResponse {
    /// Find the item named `name` in `period`.
    pub fn item(&self, period: &str, name: &str) -> Option<&StatisticsItem> {
        self.statistics
            .iter()
            .filter(|p| p.period == period)
            .flat_map(|p| p.groups.iter())
            .flat_map(|g| g.statistics_items.iter())
            .find(|item| item.name == name)
    }
}
