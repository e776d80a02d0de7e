use core::fmt::{self, Display};

use blindbite_seating::{Attendee, Table};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EventError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Full,
    Completed,
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Full => "full",
            Self::Completed => "completed",
        })
    }
}

/// A dinner together with its table layout and the people booked for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub venue: String,
    pub address: String,
    pub city: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Ticket price in dong.
    pub price: u64,
    pub status: EventStatus,
    pub tables: Vec<Table>,
    pub attendees: Vec<Attendee>,
    /// Set by auto-arrange, cleared when every table is reset.
    pub auto_arranged: bool,
}

impl Event {
    #[must_use]
    pub fn total_seats(&self) -> usize {
        self.tables.iter().map(|table| table.capacity).sum()
    }

    #[must_use]
    pub fn booked_seats(&self) -> usize {
        self.attendees.len()
    }

    pub fn register(&mut self, attendee: Attendee) -> Result<(), EventError> {
        if self.status != EventStatus::Published {
            return Err(EventError::NotOpen {
                id: self.id.clone(),
                status: self.status,
            });
        }
        if self.attendees.iter().any(|booked| booked.id == attendee.id) {
            return Err(EventError::AlreadyRegistered {
                event: self.id.clone(),
                attendee: attendee.id,
            });
        }
        if self.booked_seats() >= self.total_seats() {
            return Err(EventError::FullyBooked(self.id.clone()));
        }

        self.attendees.push(attendee);
        if self.booked_seats() == self.total_seats() {
            info!(event = %self.id, "event is now fully booked");
            self.status = EventStatus::Full;
        }
        Ok(())
    }

    pub fn publish(&mut self) -> Result<(), EventError> {
        self.transition(EventStatus::Published, |from| from == EventStatus::Draft)
    }

    pub fn complete(&mut self) -> Result<(), EventError> {
        self.transition(EventStatus::Completed, |from| {
            matches!(from, EventStatus::Published | EventStatus::Full)
        })
    }

    fn transition(
        &mut self,
        to: EventStatus,
        allowed: impl FnOnce(EventStatus) -> bool,
    ) -> Result<(), EventError> {
        if !allowed(self.status) {
            return Err(EventError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to,
            });
        }
        info!(event = %self.id, from = %self.status, %to, "event status changed");
        self.status = to;
        Ok(())
    }
}
