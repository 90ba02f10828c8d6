//! Interactive session loop: an action menu with prompts for the
//! forecast inputs and file paths.

use std::path::PathBuf;

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select, Text};

use forecast_core::{
    Config, ForecastRequest, ForecastSource, ForecastType, RngSource, Session, TemperatureUnit,
};

use crate::render::{self, MessageKind, present};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    GetForecast,
    ViewHistory,
    SaveHistory,
    LoadHistory,
    ClearHistory,
    Quit,
}

impl Action {
    const fn all() -> &'static [Action] {
        &[
            Action::GetForecast,
            Action::ViewHistory,
            Action::SaveHistory,
            Action::LoadHistory,
            Action::ClearHistory,
            Action::Quit,
        ]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::GetForecast => "Get Forecast",
            Action::ViewHistory => "View Historical Data",
            Action::SaveHistory => "Save Historical Data",
            Action::LoadHistory => "Load Historical Data",
            Action::ClearHistory => "Clear Historical Data",
            Action::Quit => "Quit",
        })
    }
}

/// Run the interactive session until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let mut session = Session::new(config.default_unit()?);
    let mut source = RngSource::thread();
    let default_kind = config.default_forecast()?;
    let default_days = config.custom_duration();

    loop {
        println!();
        let action = match Select::new("What would you like to do?", Action::all().to_vec())
            .prompt()
        {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let outcome = match action {
            Action::GetForecast => {
                get_forecast(&mut session, &mut source, default_kind, default_days)
            }
            Action::ViewHistory => {
                view_history(&session);
                Ok(())
            }
            Action::SaveHistory => save_history(&session),
            Action::LoadHistory => load_history(&mut session),
            Action::ClearHistory => {
                session.clear_history();
                present(MessageKind::Info, "Historical data cleared.");
                Ok(())
            }
            Action::Quit => break,
        };

        if let Err(err) = outcome {
            // Esc inside a prompt cancels the action, not the session.
            match err.downcast_ref::<InquireError>() {
                Some(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {}
                _ => return Err(err),
            }
        }
    }

    Ok(())
}

fn get_forecast(
    session: &mut Session,
    source: &mut dyn ForecastSource,
    default_kind: ForecastType,
    default_days: u8,
) -> Result<()> {
    let city = Text::new("City:").prompt()?;
    if city.trim().is_empty() {
        present(MessageKind::Warning, "Please enter a city.");
        return Ok(());
    }

    let kinds = ForecastType::all().to_vec();
    let kind_cursor = kinds.iter().position(|k| *k == default_kind).unwrap_or(0);
    let kind = Select::new("Select forecast type:", kinds).with_starting_cursor(kind_cursor).prompt()?;

    let custom_days = if kind == ForecastType::Custom {
        CustomType::<u8>::new("Custom duration (days):")
            .with_default(default_days)
            .with_error_message("Please enter a number of days.")
            .with_validator(|days: &u8| {
                if (1..=14).contains(days) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid("Duration must be between 1 and 14 days.".into()))
                }
            })
            .prompt()?
    } else {
        default_days
    };

    let units = TemperatureUnit::all().to_vec();
    let unit_cursor = units.iter().position(|u| *u == session.unit).unwrap_or(0);
    let unit =
        Select::new("Select temperature unit:", units).with_starting_cursor(unit_cursor).prompt()?;

    let request = ForecastRequest { city, kind, custom_days, unit };
    match session.forecast(source, &request) {
        Ok(forecast) => {
            present(MessageKind::Info, &render::summary(&forecast, kind, unit));
            println!();
            println!("{}", render::chart(&forecast, kind, unit));
        }
        Err(err) => present(MessageKind::Warning, &err.to_string()),
    }

    Ok(())
}

fn view_history(session: &Session) {
    let lines = session.history_lines();
    if lines.is_empty() {
        present(MessageKind::Info, "No historical data available.");
        return;
    }

    println!("Historical Data:");
    for line in lines {
        println!("  {line}");
    }
}

fn save_history(session: &Session) -> Result<()> {
    if session.history.is_empty() {
        present(MessageKind::Info, "No historical data to save.");
        return Ok(());
    }

    let Some(path) = prompt_path("Save history to:")? else {
        return Ok(());
    };

    match session.save_history(&path) {
        Ok(()) => present(
            MessageKind::Info,
            &format!("Historical data saved to {}.", path.display()),
        ),
        Err(err) => present(MessageKind::Error, &err.to_string()),
    }

    Ok(())
}

fn load_history(session: &mut Session) -> Result<()> {
    let Some(path) = prompt_path("Load history from:")? else {
        return Ok(());
    };

    match session.load_history(&path) {
        Ok(_) => present(
            MessageKind::Info,
            &format!("Historical data loaded from {}.", path.display()),
        ),
        Err(err) => present(MessageKind::Error, &err.to_string()),
    }

    Ok(())
}

/// Path prompt standing in for the native file picker. Esc or an empty
/// path dismisses the operation, as a canceled picker does.
fn prompt_path(message: &str) -> Result<Option<PathBuf>> {
    match Text::new(message).with_initial_value("forecast_history.json").prompt() {
        Ok(input) => {
            let trimmed = input.trim();
            if trimmed.is_empty() { Ok(None) } else { Ok(Some(PathBuf::from(trimmed))) }
        }
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
