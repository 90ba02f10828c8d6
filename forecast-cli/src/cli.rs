use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::validator::Validation;
use inquire::{CustomType, Select};

use forecast_core::{
    Config, ForecastRequest, ForecastType, RngSource, Session, TemperatureUnit,
};

use crate::render;
use crate::session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Simulated weather forecast generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate and print one forecast without starting the session.
    Show {
        /// City to forecast.
        city: String,

        /// Forecast type: "daily", "weekly" or "custom".
        #[arg(long)]
        kind: Option<String>,

        /// Number of days for a custom forecast.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=14))]
        days: Option<u8>,

        /// Temperature unit: "celsius" or "fahrenheit".
        #[arg(long)]
        unit: Option<String>,
    },

    /// Set the default forecast type, custom duration and temperature unit.
    Configure,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            None => session::run(&config),
            Some(Command::Show { city, kind, days, unit }) => show(&config, city, kind, days, unit),
            Some(Command::Configure) => configure(config),
        }
    }
}

/// One-shot forecast: generate, print the summary and chart, exit.
/// Does not touch any history file.
fn show(
    config: &Config,
    city: String,
    kind: Option<String>,
    days: Option<u8>,
    unit: Option<String>,
) -> Result<()> {
    let kind = match kind {
        Some(s) => ForecastType::try_from(s.as_str())?,
        None => config.default_forecast()?,
    };
    let unit = match unit {
        Some(s) => TemperatureUnit::try_from(s.as_str())?,
        None => config.default_unit()?,
    };
    let custom_days = days.unwrap_or_else(|| config.custom_duration());

    let mut session = Session::new(unit);
    let mut source = RngSource::thread();
    let request = ForecastRequest { city, kind, custom_days, unit };
    let forecast = session.forecast(&mut source, &request)?;

    println!("{}", render::summary(&forecast, kind, unit));
    println!();
    println!("{}", render::chart(&forecast, kind, unit));

    Ok(())
}

/// Interactive editing of the persisted defaults.
fn configure(mut config: Config) -> Result<()> {
    let kinds = ForecastType::all().to_vec();
    let default_kind = config.default_forecast().ok();
    let kind_cursor = kinds.iter().position(|k| Some(*k) == default_kind).unwrap_or(0);
    let kind = Select::new("Default forecast type:", kinds)
        .with_starting_cursor(kind_cursor)
        .prompt()?;

    let custom_duration = CustomType::<u8>::new("Default custom duration (days):")
        .with_default(config.custom_duration())
        .with_error_message("Please enter a number of days.")
        .with_validator(|days: &u8| {
            if (1..=14).contains(days) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("Duration must be between 1 and 14 days.".into()))
            }
        })
        .prompt()?;

    let units = TemperatureUnit::all().to_vec();
    let unit_cursor = units
        .iter()
        .position(|u| Some(*u) == config.default_unit().ok())
        .unwrap_or(0);
    let unit =
        Select::new("Default temperature unit:", units).with_starting_cursor(unit_cursor).prompt()?;

    config.set_default_forecast(kind);
    config.custom_duration = Some(custom_duration);
    config.set_default_unit(unit);
    config.save()?;

    println!("Defaults saved to {}.", Config::config_file_path()?.display());

    Ok(())
}
