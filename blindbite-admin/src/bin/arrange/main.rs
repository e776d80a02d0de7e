use std::process::ExitCode;

use blindbite_admin::forms::EventForm;
use blindbite_admin::roster::{load_roster, render};
use blindbite_admin::{AdminService, AppError};
use blindbite_config::get_config;
use blindbite_events::{EventRepository, InMemoryEventRepository};
use blindbite_telemetry::setup_telemetry;
use chrono::{Local, NaiveTime};
use tracing::error;

/// Seats the roster named in the configuration and prints the tables.
fn run() -> Result<String, AppError> {
    let config = get_config()?;
    setup_telemetry(config.log_filter.as_deref());

    let attendees = load_roster(&config.roster_path)?;

    let mut service = AdminService::new(InMemoryEventRepository::new(), config.seating);
    let id = service
        .create_event(EventForm {
            id: "roster".to_owned(),
            venue: config.roster_path.display().to_string(),
            address: String::new(),
            city: String::new(),
            date: Local::now().date_naive(),
            time: NaiveTime::default(),
            price: 0,
            table_count: None,
            table_capacity: None,
        })?
        .id;
    service.import_roster(&id, attendees)?;

    let report = service.auto_arrange(&id)?;
    let tables = service.repository().get(&id)?.tables;
    Ok(render(&tables, &report))
}

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
