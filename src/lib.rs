//! duelviz renders match duel charts from editable SVG templates.
//!
//! A chart is drawn once in any vector editor, with the shapes that carry data named by their
//! `id`. At render time the crate:
//!
//! - Reads Sofascore match payloads through a [`MatchSource`]
//! - Reduces them to a [`DuelChart`] (header, per-player duels, team split)
//! - Binds the chart onto a [`Template`], producing a new [`SvgDocument`]
//! - Writes the document as SVG, or rasterizes it to PNG
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod bind;
mod config;
mod foundation;
mod pipeline;
mod render;
mod source;
mod stats;
mod template;

pub use crate::assets::color::Color;
pub use crate::bind::chart::{DuelChart, bar_scale_max, bind};
pub use crate::config::{Config, Labels, Palette};
pub use crate::foundation::core::{Canvas, Point, Rect};
pub use crate::foundation::error::{DuelvizError, DuelvizResult};
pub use crate::pipeline::{build_chart, generate};
pub use crate::render::output::{OutputFormat, render_png, render_svg, write_output};
pub use crate::render::raster::{
    Raster, RasterOptions, parse_svg_tree, rasterize, rasterize_tree,
};
pub use crate::source::dir::{DirSource, MatchSource};
pub use crate::source::model::{
    Event, EventResponse, Lineup, LineupPlayer, LineupsResponse, PeriodStatistics, Player,
    PlayerStatistics, Score, Season, StatisticsGroup, StatisticsItem, StatisticsResponse, Team,
    Tournament,
};
pub use crate::stats::duels::{PlayerDuels, TeamDuels, player_duels, team_duels};
pub use crate::stats::match_info::{MatchInfo, Side, resolve_side};
pub use crate::template::dom::{Element, Node, SvgDocument};
pub use crate::template::loader::{FRAME_IDS, ROW_CHILD_IDS, ROW_ID, Template};
