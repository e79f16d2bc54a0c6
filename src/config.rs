//! Presentation settings: texts, colors, time zone and defaults for the CLI.
//!
//! Every field is optional in the JSON file; omitted fields take the Turkish defaults the chart
//! was first drawn with.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::color::Color;
use crate::foundation::error::{DuelvizError, DuelvizResult};

/// User-facing strings placed into the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Chart heading.
    pub title: String,
    /// Word following the minutes count under each player name.
    pub minutes_suffix: String,
    /// Heading above the team split bar.
    pub legend_title: String,
    /// Month names, January first.
    pub months: Vec<String>,
    /// Tournament display names keyed by the name Sofascore reports.
    pub tournaments: BTreeMap<String, String>,
}

impl Default for Labels {
    fn default() -> Self {
        let months = [
            "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül",
            "Ekim", "Kasım", "Aralık",
        ];
        let tournaments = [
            ("UEFA Champions League", "Şampiyonlar Ligi"),
            ("Süper Lig", "Süper Lig"),
            ("Turkish Cup", "Ziraat Türkiye Kupası"),
            ("Turkish Super Cup", "Süper Kupa"),
        ];
        Self {
            title: "İkili Mücadeleler".to_owned(),
            minutes_suffix: "dakika".to_owned(),
            legend_title: "İkili Mücadele Sayıları ve Kazanım Oranları".to_owned(),
            months: months.iter().map(|m| (*m).to_owned()).collect(),
            tournaments: tournaments
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }
}

impl Labels {
    /// Name of `month` (1-based); out-of-range months render as the number.
    pub fn month_name(&self, month: u32) -> String {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get(i as usize))
            .cloned()
            .unwrap_or_else(|| month.to_string())
    }

    /// Translated tournament name, or the input when no translation exists.
    pub fn tournament<'a>(&'a self, name: &'a str) -> &'a str {
        self.tournaments.get(name).map_or(name, String::as_str)
    }
}

/// Chart colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Canvas background.
    pub background: Color,
    /// Duels won (and the analysed team in the legend).
    pub won: Color,
    /// Duels lost (and the opponent in the legend).
    pub lost: Color,
    /// All text.
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x15, 0x14, 0x10),
            won: Color::from_rgb8(0x65, 0xc2, 0xa5),
            lost: Color::from_rgb8(0xcc, 0x44, 0x4b),
            text: Color::from_rgb8(0xff, 0xff, 0xff),
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Texts.
    pub labels: Labels,
    /// Colors.
    pub palette: Palette,
    /// Offset from UTC, in hours, used to print the match date.
    pub utc_offset_hours: i32,
    /// Season text override; derived from the match when unset.
    pub season: Option<String>,
    /// Team analysed when the CLI is not told otherwise.
    pub team: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            palette: Palette::default(),
            utc_offset_hours: 3,
            season: None,
            team: "Galatasaray".to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DuelvizResult<Self> {
        let cfg: Config = serde_json::from_reader(r)
            .map_err(|e| DuelvizError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> DuelvizResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DuelvizError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> DuelvizResult<()> {
        if !(-14..=14).contains(&self.utc_offset_hours) {
            return Err(DuelvizError::validation(format!(
                "utc_offset_hours must be within -14..=14, got {}",
                self.utc_offset_hours
            )));
        }
        if self.labels.months.len() != 12 {
            return Err(DuelvizError::validation(format!(
                "labels.months must list 12 names, got {}",
                self.labels.months.len()
            )));
        }
        if self.team.trim().is_empty() {
            return Err(DuelvizError::validation("team must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
