//! Human-friendly output: the forecast summary (the dialog body), the
//! text chart, and message presentation.

use forecast_core::convert::celsius_to;
use forecast_core::{Forecast, ForecastType, Samples, TEMP_MAX_C, TEMP_MIN_C, TemperatureUnit};

/// Severity of a presented message, a terminal stand-in for modal
/// dialog kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// Present a message to the user. Every outcome of a user action ends
/// up here; nothing is silently swallowed.
pub fn present(kind: MessageKind, text: &str) {
    match kind {
        MessageKind::Info => println!("{text}"),
        MessageKind::Warning => println!("Warning: {text}"),
        MessageKind::Error => eprintln!("Error: {text}"),
    }
}

/// The summary shown after a forecast, mirroring the notification body:
/// a single temperature/condition for Daily, comma-joined lists otherwise.
pub fn summary(forecast: &Forecast, kind: ForecastType, unit: TemperatureUnit) -> String {
    match kind {
        ForecastType::Daily => format!(
            "Weather in {}:\nTemperature: {}°{}\nCondition: {}",
            forecast.city,
            forecast.temperature.joined(),
            unit.symbol(),
            forecast.condition.joined()
        ),
        ForecastType::Weekly | ForecastType::Custom => format!(
            "{} Weather Forecast for {}:\nTemperature: {}°{}\nConditions: {}",
            kind,
            forecast.city,
            forecast.temperature.joined(),
            unit.symbol(),
            forecast.condition.joined()
        ),
    }
}

const BAR_WIDTH: usize = 40;

/// Render the temperature chart as text, built from scratch on every
/// call. Daily is a single bar scaled over the full generator range;
/// multi-day forecasts get one row per day scaled over the data range,
/// labeled by day index.
pub fn chart(forecast: &Forecast, kind: ForecastType, unit: TemperatureUnit) -> String {
    let mut lines = vec![format!("{kind} Temperature Forecast")];

    match &forecast.temperature {
        Samples::One(value) => {
            let lo = celsius_to(TEMP_MIN_C, unit);
            let hi = celsius_to(TEMP_MAX_C, unit);
            lines.push(format!(
                "Temperature | {:<BAR_WIDTH$} {}",
                bar(*value, lo, hi),
                value
            ));
        }
        Samples::Many(values) => {
            let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            for (index, value) in values.iter().enumerate() {
                lines.push(format!(
                    "Day {:>2} | {:<BAR_WIDTH$} {}",
                    index + 1,
                    bar(*value, lo, hi),
                    value
                ));
            }
        }
    }

    lines.push(format!("Temperature (°{})", unit.symbol()));
    lines.join("\n")
}

/// Bar of 1 to `BAR_WIDTH` marks, proportional to the value's position
/// in [lo, hi]. A degenerate range (all values equal) draws a half bar.
fn bar(value: f64, lo: f64, hi: f64) -> String {
    let span = hi - lo;
    let ratio = if span <= f64::EPSILON { 0.5 } else { ((value - lo) / span).clamp(0.0, 1.0) };
    let marks = 1 + (ratio * (BAR_WIDTH as f64 - 1.0)).round() as usize;

    "#".repeat(marks)
}
