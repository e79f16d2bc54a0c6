use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::foundation::error::{DuelvizError, DuelvizResult};
use crate::source::model::{EventResponse, LineupsResponse, StatisticsResponse};

/// Provider of the three Sofascore payloads a chart needs.
pub trait MatchSource {
    /// Match metadata.
    fn event(&self, match_id: u64) -> DuelvizResult<EventResponse>;
    /// Both lineups with per-player statistics.
    fn lineups(&self, match_id: u64) -> DuelvizResult<LineupsResponse>;
    /// Team statistics by period.
    fn statistics(&self, match_id: u64) -> DuelvizResult<StatisticsResponse>;
}

/// Reads saved API responses from `<root>/<match_id>/{event,lineups,statistics}.json`.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Serve matches stored under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding one match's files.
    pub fn match_dir(&self, match_id: u64) -> PathBuf {
        self.root.join(match_id.to_string())
    }

    fn read_json<T: DeserializeOwned>(&self, match_id: u64, file: &str) -> DuelvizResult<T> {
        let path = self.match_dir(match_id).join(file);
        tracing::debug!(path = %path.display(), "reading match payload");
        let f = File::open(&path)
            .map_err(|e| DuelvizError::data(format!("open '{}': {e}", path.display())))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| DuelvizError::data(format!("parse '{}': {e}", path.display())))
    }
}

impl MatchSource for DirSource {
    fn event(&self, match_id: u64) -> DuelvizResult<EventResponse> {
        self.read_json(match_id, "event.json")
    }

    fn lineups(&self, match_id: u64) -> DuelvizResult<LineupsResponse> {
        self.read_json(match_id, "lineups.json")
    }

    fn statistics(&self, match_id: u64) -> DuelvizResult<StatisticsResponse> {
        self.read_json(match_id, "statistics.json")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/dir.rs"]
mod tests;
