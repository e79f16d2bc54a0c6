use std::path::Path;

use crate::bind::chart::{DuelChart, bind};
use crate::config::Config;
use crate::foundation::error::DuelvizResult;
use crate::render::output::write_output;
use crate::render::raster::RasterOptions;
use crate::source::dir::MatchSource;
use crate::stats::duels::{player_duels, team_duels};
use crate::stats::match_info::{MatchInfo, Side, resolve_side};
use crate::template::loader::Template;

/// Gather everything the chart shows for `team` in match `match_id`.
#[tracing::instrument(skip(source, cfg))]
pub fn build_chart(
    source: &dyn MatchSource,
    match_id: u64,
    team: &str,
    cfg: &Config,
) -> DuelvizResult<DuelChart> {
    let event = source.event(match_id)?.event;
    let info = MatchInfo::from_event(&event, cfg)?;
    tracing::info!(home = %info.home_team, away = %info.away_team, "match loaded");

    let side = resolve_side(&event, team)?;
    let opponent = match side {
        Side::Home => &event.away_team.name,
        Side::Away => &event.home_team.name,
    };

    let players = player_duels(&source.lineups(match_id)?, side);
    tracing::info!(count = players.len(), "starting outfield players found");

    let team = team_duels(&source.statistics(match_id)?, side, team, opponent)?;
    tracing::info!(pct = team.team_pct, "team duel share");

    Ok(DuelChart {
        info,
        players,
        team,
    })
}

/// Build, bind and write a chart in one call.
pub fn generate(
    source: &dyn MatchSource,
    match_id: u64,
    team: &str,
    template: &Template,
    cfg: &Config,
    output: &Path,
    raster: &RasterOptions,
) -> DuelvizResult<DuelChart> {
    let chart = build_chart(source, match_id, team, cfg)?;
    let doc = bind(template, &chart, cfg)?;
    write_output(output, &doc, raster)?;
    Ok(chart)
}
