use kurbo::Rect;
use serde::Serialize;

use crate::assets::color::Color;
use crate::config::Config;
use crate::foundation::core::fmt_num;
use crate::foundation::error::{DuelvizError, DuelvizResult};
use crate::stats::duels::{PlayerDuels, TeamDuels};
use crate::stats::match_info::MatchInfo;
use crate::template::dom::{Element, SvgDocument};
use crate::template::loader::{ROW_ID, Template};

/// Gap between a player's bar and its total, in duel units.
const TOTAL_GAP_UNITS: f64 = 0.25;

/// Gap between the legend bar and the match total, as a share of the legend width.
const LEGEND_TOTAL_GAP: f64 = 0.1 / 6.0;

/// Everything a duel chart shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuelChart {
    /// Header facts.
    pub info: MatchInfo,
    /// Player rows, top to bottom.
    pub players: Vec<PlayerDuels>,
    /// Team split shown in the legend.
    pub team: TeamDuels,
}

/// Upper bound of the player bar scale: `floor(max_total + 1.5)`, never below 1.
pub fn bar_scale_max(players: &[PlayerDuels]) -> f64 {
    let max_total = players.iter().map(PlayerDuels::total).max().unwrap_or(0);
    (f64::from(max_total) + 1.5).floor().max(1.0)
}

/// Write `chart` into a copy of `template`'s document.
#[tracing::instrument(skip_all, fields(players = chart.players.len()))]
pub fn bind(template: &Template, chart: &DuelChart, cfg: &Config) -> DuelvizResult<SvgDocument> {
    let mut doc = template.document().clone();
    let palette = &cfg.palette;

    paint(doc.require_mut("background")?, palette.background);
    write_text(doc.require_mut("title")?, &cfg.labels.title, palette.text);
    write_text(doc.require_mut("subtitle")?, &chart.info.subtitle(), palette.text);

    bind_rows(&mut doc, template.rect_of("bar-area")?, &chart.players, cfg)?;
    bind_legend(&mut doc, template.rect_of("legend-area")?, &chart.team, cfg)?;

    tracing::debug!(ids = doc.ids().len(), "template bound");
    Ok(doc)
}

fn bind_rows(
    doc: &mut SvgDocument,
    area: Rect,
    players: &[PlayerDuels],
    cfg: &Config,
) -> DuelvizResult<()> {
    let proto = doc
        .find(ROW_ID)
        .cloned()
        .ok_or_else(|| DuelvizError::template(format!("no element with id '{ROW_ID}'")))?;

    let unit = area.width() / bar_scale_max(players);
    let pitch = area.height() / players.len().max(1) as f64;
    let palette = &cfg.palette;

    let mut rows = Vec::with_capacity(players.len());
    for (i, p) in players.iter().enumerate() {
        let prefix = format!("{ROW_ID}-{i}");
        let mut row = proto.clone_renamed(&|id: &str| row_child_id(id, &prefix));

        let cy = area.y0 + (i as f64 + 0.5) * pitch;
        let translate = format!("translate(0 {})", fmt_num(cy));
        let transform = match proto.attr("transform") {
            Some(t) => format!("{translate} {t}"),
            None => translate,
        };
        row.set_attr("transform", transform);

        let won_w = f64::from(p.won) * unit;
        let lost_w = f64::from(p.lost) * unit;
        let x0 = area.x0;

        write_text(part(&mut row, &prefix, "name")?, &p.player, palette.text);
        write_text(
            part(&mut row, &prefix, "minutes")?,
            &format!("{} {}", p.minutes, cfg.labels.minutes_suffix),
            palette.text,
        );

        let won = part(&mut row, &prefix, "won")?;
        won.set_attr("x", fmt_num(x0));
        won.set_attr("width", fmt_num(won_w));
        paint(won, palette.won);

        let lost = part(&mut row, &prefix, "lost")?;
        lost.set_attr("x", fmt_num(x0 + won_w));
        lost.set_attr("width", fmt_num(lost_w));
        paint(lost, palette.lost);

        let label = part(&mut row, &prefix, "won-label")?;
        label.set_attr("x", fmt_num(x0 + won_w / 2.0));
        write_text(label, &count_label(p.won), palette.text);

        let label = part(&mut row, &prefix, "lost-label")?;
        label.set_attr("x", fmt_num(x0 + won_w + lost_w / 2.0));
        write_text(label, &count_label(p.lost), palette.text);

        let total = part(&mut row, &prefix, "total")?;
        total.set_attr("x", fmt_num(x0 + won_w + lost_w + TOTAL_GAP_UNITS * unit));
        write_text(total, &p.total().to_string(), palette.text);

        rows.push(row);
    }

    doc.replace(ROW_ID, rows);
    Ok(())
}

fn bind_legend(
    doc: &mut SvgDocument,
    area: Rect,
    team: &TeamDuels,
    cfg: &Config,
) -> DuelvizResult<()> {
    let palette = &cfg.palette;
    let share = f64::from(team.team_pct.min(100)) / 100.0;
    let team_w = share * area.width();
    let opp_w = area.width() - team_w;

    write_text(
        doc.require_mut("legend-title")?,
        &cfg.labels.legend_title,
        palette.text,
    );

    for (id, x, w, color) in [
        ("legend-team", area.x0, team_w, palette.won),
        ("legend-opponent", area.x0 + team_w, opp_w, palette.lost),
    ] {
        let bar = doc.require_mut(id)?;
        bar.set_attr("x", fmt_num(x));
        bar.set_attr("y", fmt_num(area.y0));
        bar.set_attr("width", fmt_num(w));
        bar.set_attr("height", fmt_num(area.height()));
        paint(bar, color);
    }

    let label = doc.require_mut("legend-team-label")?;
    label.set_attr("x", fmt_num(area.x0 + team_w / 2.0));
    write_text(
        label,
        &format!("%{} {} - ({})", team.team_pct, team.team_name, team.team_won),
        palette.text,
    );

    let label = doc.require_mut("legend-opponent-label")?;
    label.set_attr("x", fmt_num(area.x0 + team_w + opp_w / 2.0));
    write_text(
        label,
        &format!(
            "%{} {} - ({})",
            team.opponent_pct, team.opponent_name, team.opponent_won
        ),
        palette.text,
    );

    let total = doc.require_mut("legend-total")?;
    total.set_attr("x", fmt_num(area.x1 + LEGEND_TOTAL_GAP * area.width()));
    write_text(total, &team.total().to_string(), palette.text);
    Ok(())
}

/// `row` → `row-3`, `row-won` → `row-3-won`, other ids get the prefix prepended.
fn row_child_id(id: &str, prefix: &str) -> String {
    if id == ROW_ID {
        return prefix.to_owned();
    }
    match id.strip_prefix(ROW_ID).and_then(|rest| rest.strip_prefix('-')) {
        Some(rest) => format!("{prefix}-{rest}"),
        None => format!("{prefix}-{id}"),
    }
}

fn part<'a>(row: &'a mut Element, prefix: &str, name: &str) -> DuelvizResult<&'a mut Element> {
    let id = format!("{prefix}-{name}");
    row.find_mut(&id)
        .ok_or_else(|| DuelvizError::template(format!("row clone lacks '{id}'")))
}

fn count_label(v: u32) -> String {
    if v > 0 { v.to_string() } else { String::new() }
}

fn paint(el: &mut Element, color: Color) {
    el.set_attr("fill", color.to_svg_hex());
    match color.svg_opacity() {
        Some(a) => el.set_attr("fill-opacity", fmt_num(a)),
        None => {
            el.remove_attr("fill-opacity");
        }
    }
}

fn write_text(el: &mut Element, text: &str, color: Color) {
    el.set_text(text);
    paint(el, color);
}

#[cfg(test)]
#[path = "../../tests/unit/bind/chart.rs"]
mod tests;
