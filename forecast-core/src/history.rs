//! In-memory history of generated forecasts, optionally persisted as a
//! flat JSON array (no version field, no metadata). Temperatures are
//! stored already unit-converted; insertion order is chronological.

use std::fs;
use std::path::Path;

use crate::error::HistoryError;
use crate::model::Forecast;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<Forecast>,
}

impl HistoryLog {
    pub fn push(&mut self, forecast: Forecast) {
        self.entries.push(forecast);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Forecast] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize the full log to `path` as a JSON array.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let json = serde_json::to_string(&self.entries).map_err(|source| HistoryError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::other(source),
        })?;

        fs::write(path, json)
            .map_err(|source| HistoryError::Write { path: path.to_path_buf(), source })?;

        Ok(())
    }

    /// Parse a JSON array at `path` into a fresh log. Callers replace
    /// their log only on success, so a failed load preserves prior state.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| HistoryError::Read { path: path.to_path_buf(), source })?;

        let entries: Vec<Forecast> = serde_json::from_str(&contents)
            .map_err(|source| HistoryError::Parse { path: path.to_path_buf(), source })?;

        Ok(Self { entries })
    }
}
