//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Shared domain models (requests, results, units, conditions)
//! - Random forecast generation behind a pluggable source
//! - Temperature unit conversion
//! - The history log with JSON persistence
//! - Session state and user configuration
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod convert;
pub mod error;
pub mod generate;
pub mod history;
pub mod model;
pub mod session;

pub use config::Config;
pub use error::{ForecastError, HistoryError};
pub use generate::{ForecastSource, RngSource, TEMP_MAX_C, TEMP_MIN_C};
pub use history::HistoryLog;
pub use model::{Condition, Forecast, ForecastRequest, ForecastType, Samples, TemperatureUnit};
pub use session::Session;
