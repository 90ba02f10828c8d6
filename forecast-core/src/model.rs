use serde::{Deserialize, Serialize};

/// Temperature unit selected by the user. Generated values are always
/// Celsius internally; conversion happens once, at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Symbol used in labels, the first letter of the unit name.
    pub fn symbol(&self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }

    pub const fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        })
    }
}

impl TryFrom<&str> for TemperatureUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: celsius, fahrenheit."
            )),
        }
    }
}

/// Forecast duration selector: one day, a fixed week, or a
/// user-chosen span of 1 to 14 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForecastType {
    #[default]
    Daily,
    Weekly,
    Custom,
}

impl ForecastType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastType::Daily => "daily",
            ForecastType::Weekly => "weekly",
            ForecastType::Custom => "custom",
        }
    }

    pub const fn all() -> &'static [ForecastType] {
        &[ForecastType::Daily, ForecastType::Weekly, ForecastType::Custom]
    }
}

impl std::fmt::Display for ForecastType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ForecastType::Daily => "Daily",
            ForecastType::Weekly => "Weekly",
            ForecastType::Custom => "Custom",
        })
    }
}

impl TryFrom<&str> for ForecastType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "daily" => Ok(ForecastType::Daily),
            "weekly" => Ok(ForecastType::Weekly),
            "custom" => Ok(ForecastType::Custom),
            _ => Err(anyhow::anyhow!(
                "Unknown forecast type '{value}'. Supported types: daily, weekly, custom."
            )),
        }
    }
}

/// The fixed set of weather conditions the generator draws from.
/// Serialized as the exact capitalized names, matching the history
/// file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Cloudy,
    Rainy,
    Stormy,
    Heatwave,
    Snowy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Stormy => "Stormy",
            Condition::Heatwave => "Heatwave",
            Condition::Snowy => "Snowy",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Clear,
            Condition::Cloudy,
            Condition::Rainy,
            Condition::Stormy,
            Condition::Heatwave,
            Condition::Snowy,
        ]
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar-or-sequence container mirroring the history file format:
/// a Daily forecast stores a bare value, Weekly/Custom store an array
/// (a 1-day Custom forecast is still an array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Samples<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Samples<T> {
    pub fn len(&self) -> usize {
        match self {
            Samples::One(_) => 1,
            Samples::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Samples::One(value) => std::slice::from_ref(value).iter(),
            Samples::Many(values) => values.iter(),
        }
    }

    /// Element-wise transformation preserving the scalar/sequence shape.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Samples<U> {
        match self {
            Samples::One(value) => Samples::One(f(value)),
            Samples::Many(values) => Samples::Many(values.iter().map(f).collect()),
        }
    }
}

impl<T: std::fmt::Display> Samples<T> {
    /// Values joined with ", ", the form used in summaries and history lines.
    pub fn joined(&self) -> String {
        self.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }
}

/// Everything needed to produce one forecast. Built fresh from the
/// input controls on each request, never persisted.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub city: String,
    pub kind: ForecastType,
    /// Number of days for a Custom forecast, 1 to 14. The range is
    /// enforced by the input controls; ignored for Daily and Weekly.
    pub custom_days: u8,
    pub unit: TemperatureUnit,
}

/// A generated forecast. `temperature` and `condition` always have the
/// same length: 1 for Daily, 7 for Weekly, the requested span for Custom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub temperature: Samples<f64>,
    pub condition: Samples<Condition>,
    /// Unit the temperatures were converted to, kept in memory so
    /// history lines can be labeled correctly. Not part of the file
    /// format; entries loaded from disk have no recorded unit.
    #[serde(skip)]
    pub unit: Option<TemperatureUnit>,
}

impl Forecast {
    /// Number of forecast days (always equal for both sequences).
    pub fn days(&self) -> usize {
        self.temperature.len()
    }
}
