//! Raw admin form submissions and their validation into typed records.
//!
//! The seating engine trusts its input, so everything that reaches it goes
//! through one of these first.

use core::ops::RangeInclusive;

use blindbite_events::{Event, EventId, EventStatus};
use blindbite_seating::{empty_tables, Attendee, Gender, LookingFor, PersonalityType};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

pub const AGE_RANGE: RangeInclusive<i64> = 18..=120;
pub const TRUST_RANGE: RangeInclusive<f64> = 0.0..=10.0;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("age {0} is outside 18..=120")]
    Age(i64),
    #[error("trust score {0} is outside 0..=10")]
    TrustScore(f64),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },
    #[error("price must not be negative, got {0}")]
    Price(i64),
    #[error("attendee {0} appears more than once")]
    DuplicateAttendee(String),
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(value.to_owned())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn positive(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}

/// Registration plus onboarding answers, as submitted.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeForm {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub age: i64,
    pub job: String,
    #[serde(default)]
    pub is_first_time: bool,
    pub trust_score: f64,
    #[serde(default)]
    pub personality_type: Option<PersonalityType>,
    #[serde(default)]
    pub looking_for: Option<LookingFor>,
    #[serde(default)]
    pub ideal_weekend_activity: Option<String>,
    #[serde(default)]
    pub preferred_cuisine: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub relationship_priority: Option<String>,
}

impl AttendeeForm {
    pub fn validate(self) -> Result<Attendee, ValidationError> {
        let id = required("id", &self.id)?;
        let name = required("name", &self.name)?;
        let job = required("job", &self.job)?;
        if !AGE_RANGE.contains(&self.age) {
            return Err(ValidationError::Age(self.age));
        }
        let age = u32::try_from(self.age).map_err(|_| ValidationError::Age(self.age))?;
        if !TRUST_RANGE.contains(&self.trust_score) {
            return Err(ValidationError::TrustScore(self.trust_score));
        }
        Ok(Attendee {
            id,
            name,
            gender: self.gender,
            age,
            job,
            is_first_time: self.is_first_time,
            trust_score: self.trust_score,
            personality_type: self.personality_type,
            looking_for: self.looking_for,
            ideal_weekend_activity: optional(self.ideal_weekend_activity),
            preferred_cuisine: optional(self.preferred_cuisine),
            purpose: optional(self.purpose),
            relationship_priority: optional(self.relationship_priority),
        })
    }
}

/// Validates a whole roster, rejecting repeated attendee ids.
pub fn validate_roster(forms: Vec<AttendeeForm>) -> Result<Vec<Attendee>, ValidationError> {
    let mut attendees: Vec<Attendee> = Vec::with_capacity(forms.len());
    for form in forms {
        let attendee = form.validate()?;
        if attendees.iter().any(|seen| seen.id == attendee.id) {
            return Err(ValidationError::DuplicateAttendee(attendee.id));
        }
        attendees.push(attendee);
    }
    Ok(attendees)
}

/// "Create event" form. Missing table layout fields fall back to the
/// configured defaults.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub id: String,
    pub venue: String,
    pub address: String,
    pub city: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub price: i64,
    #[serde(default)]
    pub table_count: Option<i64>,
    #[serde(default)]
    pub table_capacity: Option<i64>,
}

impl EventForm {
    pub fn validate(
        self,
        default_table_count: u32,
        default_table_capacity: usize,
    ) -> Result<Event, ValidationError> {
        let id = required("id", &self.id)?;
        let venue = required("venue", &self.venue)?;
        let table_count = match self.table_count {
            Some(count) => u32::try_from(positive("table count", count)?).map_err(|_| {
                ValidationError::NotPositive {
                    field: "table count",
                    value: count,
                }
            })?,
            None => default_table_count,
        };
        let table_capacity = match self.table_capacity {
            Some(capacity) => usize::try_from(positive("table capacity", capacity)?)
                .map_err(|_| ValidationError::NotPositive {
                    field: "table capacity",
                    value: capacity,
                })?,
            None => default_table_capacity,
        };
        let price = u64::try_from(self.price).map_err(|_| ValidationError::Price(self.price))?;

        Ok(Event {
            id: EventId(id),
            venue,
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            date: self.date,
            time: self.time,
            price,
            status: EventStatus::Draft,
            tables: empty_tables(table_count, table_capacity),
            attendees: Vec::new(),
            auto_arranged: false,
        })
    }
}
