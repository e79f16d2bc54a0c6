use serde::Serialize;

use crate::foundation::error::{DuelvizError, DuelvizResult};
use crate::source::model::{LineupsResponse, StatisticsItem, StatisticsResponse};
use crate::stats::match_info::Side;

const GOALKEEPER: &str = "G";
const PERIOD_ALL: &str = "ALL";

/// One starter's duel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerDuels {
    /// Display name.
    pub player: String,
    /// Minutes played.
    pub minutes: u32,
    /// Duels won.
    pub won: u32,
    /// Duels lost.
    pub lost: u32,
}

impl PlayerDuels {
    /// Duels contested, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.won.saturating_add(self.lost)
    }
}

/// Outfield starters of `side`, busiest first.
///
/// Order is total duels descending, then duels won descending; remaining ties keep lineup order.
pub fn player_duels(lineups: &LineupsResponse, side: Side) -> Vec<PlayerDuels> {
    let lineup = match side {
        Side::Home => &lineups.home,
        Side::Away => &lineups.away,
    };

    let mut out: Vec<PlayerDuels> = lineup
        .players
        .iter()
        .filter(|p| !p.substitute && p.position() != Some(GOALKEEPER))
        .map(|p| PlayerDuels {
            player: p.player.name.clone(),
            minutes: count(p.statistics.minutes_played),
            won: count(p.statistics.duel_won),
            lost: count(p.statistics.duel_lost),
        })
        .collect();

    out.sort_by(|a, b| {
        b.total()
            .cmp(&a.total())
            .then_with(|| b.won.cmp(&a.won))
    });
    out
}

fn count(v: Option<f64>) -> u32 {
    match v {
        Some(x) if x.is_finite() && x > 0.0 => x as u32,
        _ => 0,
    }
}

/// Team-level duel split for the legend bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamDuels {
    /// Analysed team.
    pub team_name: String,
    /// Opponent.
    pub opponent_name: String,
    /// Share of duels won by the team, in percent.
    pub team_pct: u32,
    /// Share of duels won by the opponent, in percent.
    pub opponent_pct: u32,
    /// Ground plus aerial duels won by the team.
    pub team_won: u32,
    /// Ground plus aerial duels won by the opponent.
    pub opponent_won: u32,
}

impl TeamDuels {
    /// Duels contested in the match, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.team_won.saturating_add(self.opponent_won)
    }
}

/// Read the whole-match duel split for `side` from team statistics.
pub fn team_duels(
    stats: &StatisticsResponse,
    side: Side,
    team_name: &str,
    opponent_name: &str,
) -> DuelvizResult<TeamDuels> {
    let item = |name: &str| {
        stats.item(PERIOD_ALL, name).ok_or_else(|| {
            DuelvizError::data(format!("statistics lack '{name}' for period {PERIOD_ALL}"))
        })
    };
    let duels = item("Duels")?;
    let ground = item("Ground duels")?;
    let aerial = item("Aerial duels")?;

    let (team_pct, opponent_pct) = match side {
        Side::Home => (parse_pct(&duels.home)?, parse_pct(&duels.away)?),
        Side::Away => (parse_pct(&duels.away)?, parse_pct(&duels.home)?),
    };

    let won = |item: &StatisticsItem, side: Side| {
        let v = match side {
            Side::Home => item.home_value,
            Side::Away => item.away_value,
        };
        v.map(|x| count(Some(x))).ok_or_else(|| {
            DuelvizError::data(format!("statistic '{}' has no numeric value", item.name))
        })
    };
    let sum = |side: Side| -> DuelvizResult<u32> {
        won(ground, side)?
            .checked_add(won(aerial, side)?)
            .ok_or_else(|| DuelvizError::data("ground plus aerial duels overflow u32"))
    };
    let team_won = sum(side)?;
    let opponent_won = sum(side.opposite())?;

    Ok(TeamDuels {
        team_name: team_name.to_owned(),
        opponent_name: opponent_name.to_owned(),
        team_pct,
        opponent_pct,
        team_won,
        opponent_won,
    })
}

/// `"51%"` → 51.
fn parse_pct(s: &str) -> DuelvizResult<u32> {
    let t = s.trim();
    let digits = t.strip_suffix('%').unwrap_or(t).trim();
    let pct: u32 = digits
        .parse()
        .map_err(|_| DuelvizError::data(format!("invalid percentage '{s}'")))?;
    if pct > 100 {
        return Err(DuelvizError::data(format!("percentage '{s}' exceeds 100")));
    }
    Ok(pct)
}

#[cfg(test)]
#[path = "../../tests/unit/stats/duels.rs"]
mod tests;
