use blindbite_config::ConfigError;
use blindbite_events::{EventError, EventId};

use crate::forms::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("event error: {0}")]
    Event(#[from] EventError),
    #[error("IO error: {0}")]
    File(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(
        "event {0} has already been arranged automatically. Reset all tables before arranging \
         again."
    )]
    AlreadyArranged(EventId),
    #[error("event {event} has no table {table}")]
    UnknownTable { event: EventId, table: u32 },
}
