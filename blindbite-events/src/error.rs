use thiserror::Error;

use crate::models::{EventId, EventStatus};

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EventError {
    #[error("event {0} does not exist")]
    NotFound(EventId),
    #[error("event {0} already exists")]
    AlreadyExists(EventId),
    #[error("event {id} is {status} and does not take bookings")]
    NotOpen { id: EventId, status: EventStatus },
    #[error("event {0} is fully booked")]
    FullyBooked(EventId),
    #[error("attendee {attendee} is already registered for event {event}")]
    AlreadyRegistered { event: EventId, attendee: String },
    #[error("event {id} cannot go from {from} to {to}")]
    InvalidTransition {
        id: EventId,
        from: EventStatus,
        to: EventStatus,
    },
}
