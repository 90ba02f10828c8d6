//! Explicit session state: the history log plus the active temperature
//! unit, mutated only by the handler for the current user action.

use std::path::Path;

use crate::convert;
use crate::error::{ForecastError, HistoryError};
use crate::generate::{self, ForecastSource};
use crate::history::HistoryLog;
use crate::model::{Forecast, ForecastRequest, TemperatureUnit};

#[derive(Debug, Default)]
pub struct Session {
    pub history: HistoryLog,
    /// Unit most recently selected by the user. Used to label history
    /// entries whose own unit is unknown (entries loaded from disk).
    pub unit: TemperatureUnit,
}

impl Session {
    pub fn new(unit: TemperatureUnit) -> Self {
        Self { history: HistoryLog::default(), unit }
    }

    /// Generate a forecast, convert it to the requested unit, append it
    /// to the history, and return it for rendering. A failed request
    /// leaves the session untouched.
    pub fn forecast(
        &mut self,
        source: &mut dyn ForecastSource,
        request: &ForecastRequest,
    ) -> Result<Forecast, ForecastError> {
        let raw = generate::generate(source, request)?;

        let converted = Forecast {
            temperature: convert::convert(&raw.temperature, request.unit),
            unit: Some(request.unit),
            ..raw
        };

        self.unit = request.unit;
        self.history.push(converted.clone());

        Ok(converted)
    }

    /// One line per history entry, in stored order:
    /// `"{city}: {temperature}°{symbol} - {condition}"`.
    ///
    /// Each entry is labeled with the unit it was recorded in; entries
    /// loaded from disk carry no unit and fall back to the session's
    /// active unit. Values are never re-converted for display.
    pub fn history_lines(&self) -> Vec<String> {
        self.history
            .entries()
            .iter()
            .map(|entry| {
                let symbol = entry.unit.unwrap_or(self.unit).symbol();
                format!(
                    "{}: {}°{} - {}",
                    entry.city,
                    entry.temperature.joined(),
                    symbol,
                    entry.condition.joined()
                )
            })
            .collect()
    }

    /// Persist the history; refuses with [`HistoryError::Empty`] when
    /// there is nothing to save (no file is written).
    pub fn save_history(&self, path: &Path) -> Result<(), HistoryError> {
        if self.history.is_empty() {
            return Err(HistoryError::Empty);
        }

        self.history.save(path)
    }

    /// Replace the history wholesale from `path`, returning the new
    /// entry count. On failure the existing history is kept as-is.
    pub fn load_history(&mut self, path: &Path) -> Result<usize, HistoryError> {
        let loaded = HistoryLog::load(path)?;
        self.history = loaded;

        Ok(self.history.len())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::test_support::ScriptedSource;
    use crate::generate::{RngSource, TEMP_MAX_C, TEMP_MIN_C};
    use crate::model::{Condition, ForecastType, Samples};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn daily_request(city: &str, unit: TemperatureUnit) -> ForecastRequest {
        ForecastRequest {
            city: city.to_string(),
            kind: ForecastType::Daily,
            custom_days: 1,
            unit,
        }
    }

    #[test]
    fn daily_forecast_appends_one_entry_in_range() {
        let mut session = Session::default();
        let mut source = RngSource::new(StdRng::seed_from_u64(1));

        let forecast = session
            .forecast(&mut source, &daily_request("Paris", TemperatureUnit::Celsius))
            .unwrap();

        assert_eq!(session.history.len(), 1);
        match forecast.temperature {
            Samples::One(t) => assert!((TEMP_MIN_C..=TEMP_MAX_C).contains(&t)),
            Samples::Many(_) => panic!("daily forecast must be scalar"),
        }
        match forecast.condition {
            Samples::One(c) => assert!(Condition::all().contains(&c)),
            Samples::Many(_) => panic!("daily forecast must be scalar"),
        }
    }

    #[test]
    fn custom_fahrenheit_forecast_converts_each_value() {
        let mut session = Session::default();
        let mut source =
            ScriptedSource::new(vec![0.0, -10.0, 35.0], vec![Condition::Clear]);

        let request = ForecastRequest {
            city: "Reykjavik".to_string(),
            kind: ForecastType::Custom,
            custom_days: 3,
            unit: TemperatureUnit::Fahrenheit,
        };
        let forecast = session.forecast(&mut source, &request).unwrap();

        assert_eq!(forecast.temperature, Samples::Many(vec![32.0, 14.0, 95.0]));
        assert_eq!(forecast.condition.len(), 3);
        assert_eq!(forecast.unit, Some(TemperatureUnit::Fahrenheit));
        assert_eq!(session.unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn failed_forecast_leaves_session_untouched() {
        let mut session = Session::default();
        let mut source = RngSource::new(StdRng::seed_from_u64(2));

        let err = session
            .forecast(&mut source, &daily_request("", TemperatureUnit::Celsius))
            .unwrap_err();

        assert!(matches!(err, ForecastError::EmptyCity));
        assert!(session.history.is_empty());
    }

    #[test]
    fn history_lines_use_recorded_unit() {
        let mut session = Session::default();
        let mut source = ScriptedSource::new(vec![10.0], vec![Condition::Cloudy]);

        session
            .forecast(&mut source, &daily_request("Lviv", TemperatureUnit::Fahrenheit))
            .unwrap();
        // Switching the active unit must not relabel the recorded entry.
        session.unit = TemperatureUnit::Celsius;

        assert_eq!(session.history_lines(), vec!["Lviv: 50°F - Cloudy"]);
    }

    #[test]
    fn loaded_entries_fall_back_to_active_unit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"[{"city":"X","temperature":10,"condition":"Clear"}]"#).unwrap();

        let mut session = Session::new(TemperatureUnit::Fahrenheit);
        session.load_history(&path).unwrap();

        assert_eq!(session.history_lines(), vec!["X: 10°F - Clear"]);
    }

    #[test]
    fn save_empty_history_is_refused_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let session = Session::default();
        let err = session.save_history(&path).unwrap_err();

        assert!(matches!(err, HistoryError::Empty));
        assert!(!path.exists());
    }

    #[test]
    fn save_then_load_roundtrips_through_a_new_session() {
        let mut session = Session::default();
        let mut source = RngSource::new(StdRng::seed_from_u64(3));
        for city in ["Paris", "Oslo", "Kyiv"] {
            session
                .forecast(&mut source, &daily_request(city, TemperatureUnit::Celsius))
                .unwrap();
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        session.save_history(&path).unwrap();

        let mut restored = Session::default();
        assert_eq!(restored.load_history(&path).unwrap(), 3);

        for (original, loaded) in
            session.history.entries().iter().zip(restored.history.entries())
        {
            assert_eq!(original.city, loaded.city);
            assert_eq!(original.temperature, loaded.temperature);
            assert_eq!(original.condition, loaded.condition);
        }
    }

    #[test]
    fn load_replaces_existing_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"[{"city":"X","temperature":10,"condition":"Clear"}]"#).unwrap();

        let mut session = Session::default();
        let mut source = RngSource::new(StdRng::seed_from_u64(4));
        session
            .forecast(&mut source, &daily_request("Paris", TemperatureUnit::Celsius))
            .unwrap();
        session
            .forecast(&mut source, &daily_request("Oslo", TemperatureUnit::Celsius))
            .unwrap();

        assert_eq!(session.load_history(&path).unwrap(), 1);
        assert_eq!(session.history.entries()[0].city, "X");
    }

    #[test]
    fn failed_load_preserves_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let mut session = Session::default();
        let mut source = RngSource::new(StdRng::seed_from_u64(5));
        session
            .forecast(&mut source, &daily_request("Paris", TemperatureUnit::Celsius))
            .unwrap();

        assert!(session.load_history(&path).is_err());
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history.entries()[0].city, "Paris");
    }

    #[test]
    fn clear_then_view_yields_no_lines() {
        let mut session = Session::default();
        let mut source = RngSource::new(StdRng::seed_from_u64(6));
        session
            .forecast(&mut source, &daily_request("Paris", TemperatureUnit::Celsius))
            .unwrap();

        session.clear_history();
        assert!(session.history_lines().is_empty());
    }
}
