use chrono::{DateTime, Datelike as _, FixedOffset, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::foundation::error::{DuelvizError, DuelvizResult};
use crate::source::model::{Event, Season};

/// Which side of the fixture a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Home team.
    Home,
    /// Away team.
    Away,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Locate `team` in the fixture by exact display name.
pub fn resolve_side(event: &Event, team: &str) -> DuelvizResult<Side> {
    if event.home_team.name == team {
        Ok(Side::Home)
    } else if event.away_team.name == team {
        Ok(Side::Away)
    } else {
        Err(DuelvizError::data(format!(
            "team '{team}' did not play this match ({} vs {})",
            event.home_team.name, event.away_team.name
        )))
    }
}

/// Header facts printed above the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchInfo {
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Home goals.
    pub home_score: u32,
    /// Away goals.
    pub away_score: u32,
    /// Tournament, translated when a label exists.
    pub tournament: String,
    /// Season span, e.g. `2025/2026`.
    pub season: String,
    /// Kickoff date in the configured offset, e.g. `8 Aralık 2025`.
    pub date: String,
}

impl MatchInfo {
    /// Build the header from event metadata.
    pub fn from_event(event: &Event, cfg: &Config) -> DuelvizResult<Self> {
        let offset = FixedOffset::east_opt(cfg.utc_offset_hours * 3600).ok_or_else(|| {
            DuelvizError::validation(format!(
                "invalid utc offset {}h",
                cfg.utc_offset_hours
            ))
        })?;
        let kickoff = DateTime::<Utc>::from_timestamp(event.start_timestamp, 0)
            .ok_or_else(|| {
                DuelvizError::data(format!(
                    "start timestamp {} is out of range",
                    event.start_timestamp
                ))
            })?
            .with_timezone(&offset);
        let date = format!(
            "{} {} {}",
            kickoff.day(),
            cfg.labels.month_name(kickoff.month()),
            kickoff.year()
        );

        let season = match &cfg.season {
            Some(s) => s.clone(),
            None => event.season.as_ref().map(season_span).unwrap_or_default(),
        };

        Ok(Self {
            home_team: event.home_team.name.clone(),
            away_team: event.away_team.name.clone(),
            home_score: event.home_score.current.unwrap_or(0),
            away_score: event.away_score.current.unwrap_or(0),
            tournament: cfg.labels.tournament(&event.tournament.name).to_owned(),
            season,
            date,
        })
    }

    /// `"{tournament} - {season} | {home} {hs} - {as} {away} ({date})"`.
    pub fn subtitle(&self) -> String {
        format!(
            "{} - {} | {} {} - {} {} ({})",
            self.tournament,
            self.season,
            self.home_team,
            self.home_score,
            self.away_score,
            self.away_team,
            self.date
        )
    }
}

/// Expand Sofascore's short season year (`25/26`) into `2025/2026`.
///
/// Four-digit forms pass through; anything else yields an empty string.
fn season_span(season: &Season) -> String {
    let Some(year) = season.year.as_deref().map(str::trim) else {
        return String::new();
    };

    fn full_year(part: &str) -> Option<u32> {
        if !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        match part.len() {
            2 => part.parse::<u32>().ok().map(|y| 2000 + y),
            4 => part.parse().ok(),
            _ => None,
        }
    }

    match year.split_once('/') {
        Some((a, b)) => match (full_year(a), full_year(b)) {
            (Some(a), Some(b)) => format!("{a}/{b}"),
            _ => String::new(),
        },
        None => full_year(year)
            .filter(|_| year.len() == 4)
            .map(|y| y.to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stats/match_info.rs"]
mod tests;
