use std::process::ExitCode;

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use prayer_window::calendar::{AdjacentMonths, CalendarError, CalendarSet, MonthlyCalendar};
use prayer_window::config::{AppConfig, ConfigError, OutputFormat};
use prayer_window::report::WindowReport;
use prayer_window::resolver::ResolveError;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    let report = match config.now {
        Some(now) => resolve_at(&config, &now)?,
        None => resolve_at(&config, &Local::now())?,
    };

    match config.output {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn resolve_at<Tz: TimeZone>(config: &AppConfig, now: &DateTime<Tz>) -> Result<WindowReport, AppError> {
    let date = now.date_naive();
    let calendars = load_calendars(config, AdjacentMonths::for_date(date))?;
    let tables = calendars.day_tables(date)?;
    let window = tables.resolve(now)?;

    info!(
        %date,
        current = %window.current_prayer,
        next = %window.next_prayer,
        "Resolved prayer window"
    );
    Ok(WindowReport::from(&window))
}

/// Load the current calendar and whichever adjacent calendars `needed` names.
///
/// Adjacent files that are configured but not needed are not read.
fn load_calendars(config: &AppConfig, needed: AdjacentMonths) -> Result<CalendarSet, CalendarError> {
    let mut set = CalendarSet::new(MonthlyCalendar::load(&config.calendar)?);

    if let Some(month) = needed.previous {
        debug!(%month, "Previous month calendar needed");
        if let Some(path) = &config.previous_calendar {
            set = set.with_previous(MonthlyCalendar::load(path)?);
        }
    }
    if let Some(month) = needed.next {
        debug!(%month, "Next month calendar needed");
        if let Some(path) = &config.next_calendar {
            set = set.with_next(MonthlyCalendar::load(path)?);
        }
    }

    Ok(set)
}
