//! Random forecast generation. There is no real data source: every
//! value is sampled fresh, with no day-to-day correlation and no
//! seeding guarantee in production.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::error::ForecastError;
use crate::model::{Condition, Forecast, ForecastRequest, ForecastType, Samples};

/// Lower bound of generated temperatures, in Celsius.
pub const TEMP_MIN_C: f64 = -10.0;
/// Upper bound of generated temperatures, in Celsius.
pub const TEMP_MAX_C: f64 = 35.0;

/// Source of raw forecast samples. Production uses [`RngSource`];
/// tests inject seeded or scripted implementations.
pub trait ForecastSource {
    /// One temperature, uniform in [`TEMP_MIN_C`, `TEMP_MAX_C`],
    /// rounded to 2 decimal places.
    fn sample_temperature_c(&mut self) -> f64;

    /// One condition, uniform over [`Condition::all`].
    fn sample_condition(&mut self) -> Condition;
}

/// [`ForecastSource`] backed by any `rand` RNG.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local RNG, the production default.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for RngSource<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> ForecastSource for RngSource<R> {
    fn sample_temperature_c(&mut self) -> f64 {
        crate::convert::round2(self.rng.random_range(TEMP_MIN_C..=TEMP_MAX_C))
    }

    fn sample_condition(&mut self) -> Condition {
        let all = Condition::all();
        all[self.rng.random_range(0..all.len())]
    }
}

/// Generate a forecast for the request. Temperatures are Celsius;
/// unit conversion is a separate, later step.
///
/// Daily yields a single scalar pair, Weekly exactly 7 pairs, Custom
/// exactly `custom_days` pairs (the 1-14 range is enforced by the
/// input controls). Both sequences always have the same length.
pub fn generate(
    source: &mut dyn ForecastSource,
    request: &ForecastRequest,
) -> Result<Forecast, ForecastError> {
    if request.city.trim().is_empty() {
        return Err(ForecastError::EmptyCity);
    }

    let (temperature, condition) = match request.kind {
        ForecastType::Daily => (
            Samples::One(source.sample_temperature_c()),
            Samples::One(source.sample_condition()),
        ),
        ForecastType::Weekly => sample_series(source, 7),
        ForecastType::Custom => sample_series(source, usize::from(request.custom_days)),
    };

    Ok(Forecast {
        city: request.city.clone(),
        temperature,
        condition,
        unit: None,
    })
}

fn sample_series(
    source: &mut dyn ForecastSource,
    days: usize,
) -> (Samples<f64>, Samples<Condition>) {
    let temperatures = (0..days).map(|_| source.sample_temperature_c()).collect();
    let conditions = (0..days).map(|_| source.sample_condition()).collect();

    (Samples::Many(temperatures), Samples::Many(conditions))
}
