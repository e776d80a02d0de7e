use blindbite_config::SeatingConfig;
use blindbite_events::{Event, EventId, EventRepository, EventStatus};
use blindbite_seating::{
    arrange, reset_all, reset_table, summarize, Attendee, SeatingSummary, TableId,
};
use itertools::Itertools;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::forms::{AttendeeForm, EventForm};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrangeReport {
    pub summary: SeatingSummary,
    /// Registered attendees that did not fit at any table.
    pub unplaced: Vec<Attendee>,
}

/// Back-office operations on events. All state lives in the repository.
pub struct AdminService<R> {
    repository: R,
    seating: SeatingConfig,
}

impl<R: EventRepository> AdminService<R> {
    pub const fn new(repository: R, seating: SeatingConfig) -> Self {
        Self {
            repository,
            seating,
        }
    }

    pub const fn repository(&self) -> &R {
        &self.repository
    }

    pub fn create_event(&mut self, form: EventForm) -> Result<Event, AppError> {
        let event = form.validate(self.seating.table_count, self.seating.table_capacity)?;
        info!(event = %event.id, seats = event.total_seats(), "creating event");
        self.repository.insert(event.clone())?;
        Ok(event)
    }

    pub fn publish_event(&mut self, id: &EventId) -> Result<(), AppError> {
        let mut event = self.repository.get(id)?;
        event.publish()?;
        self.repository.update(event)?;
        Ok(())
    }

    pub fn complete_event(&mut self, id: &EventId) -> Result<(), AppError> {
        let mut event = self.repository.get(id)?;
        event.complete()?;
        self.repository.update(event)?;
        Ok(())
    }

    /// Events sorted by date, optionally only those with `status`.
    pub fn list_events(&self, status: Option<EventStatus>) -> Result<Vec<Event>, AppError> {
        Ok(self
            .repository
            .list()?
            .into_iter()
            .filter(|event| status.is_none_or(|status| event.status == status))
            .sorted_by(|a, b| (a.date, a.time, &a.id).cmp(&(b.date, b.time, &b.id)))
            .collect())
    }

    pub fn register_attendee(&mut self, id: &EventId, form: AttendeeForm) -> Result<(), AppError> {
        let attendee = form.validate()?;
        let mut event = self.repository.get(id)?;
        info!(event = %id, attendee = %attendee.id, "registering attendee");
        event.register(attendee)?;
        self.repository.update(event)?;
        Ok(())
    }

    /// Replaces the roster of an event with an already validated booking
    /// list, bypassing the booking rules. Seating is cleared.
    pub fn import_roster(
        &mut self,
        id: &EventId,
        attendees: Vec<Attendee>,
    ) -> Result<(), AppError> {
        let mut event = self.repository.get(id)?;
        info!(event = %id, attendees = attendees.len(), "importing roster");
        event.attendees = attendees;
        reset_all(&mut event.tables);
        event.auto_arranged = false;
        self.repository.update(event)?;
        Ok(())
    }

    /// Seats every registered attendee. Refused once an event has been
    /// arranged until its tables are reset with [`Self::reset_all`].
    pub fn auto_arrange(&mut self, id: &EventId) -> Result<ArrangeReport, AppError> {
        let mut event = self.repository.get(id)?;
        if event.auto_arranged {
            return Err(AppError::AlreadyArranged(event.id));
        }

        let arrangement = arrange(&event.attendees, &event.tables);
        if !arrangement.unplaced.is_empty() {
            warn!(
                event = %id,
                unplaced = arrangement.unplaced.len(),
                seats = event.total_seats(),
                "event does not have enough seats"
            );
        }
        event.tables = arrangement.tables;
        event.auto_arranged = true;
        let report = ArrangeReport {
            summary: summarize(&event.tables),
            unplaced: arrangement.unplaced,
        };
        self.repository.update(event)?;
        Ok(report)
    }

    pub fn reset_table(&mut self, id: &EventId, table: TableId) -> Result<(), AppError> {
        let mut event = self.repository.get(id)?;
        if !reset_table(&mut event.tables, table) {
            return Err(AppError::UnknownTable {
                event: event.id,
                table,
            });
        }
        self.repository.update(event)?;
        Ok(())
    }

    /// Empties every table and allows auto-arrange again.
    pub fn reset_all(&mut self, id: &EventId) -> Result<(), AppError> {
        let mut event = self.repository.get(id)?;
        reset_all(&mut event.tables);
        event.auto_arranged = false;
        self.repository.update(event)?;
        Ok(())
    }

    pub fn seating_summary(&self, id: &EventId) -> Result<SeatingSummary, AppError> {
        Ok(summarize(&self.repository.get(id)?.tables))
    }
}

#[cfg(test)]
mod tests {
    use blindbite_events::{EventError, InMemoryEventRepository};
    use blindbite_seating::Gender;
    use chrono::NaiveDate;

    use super::*;
    use crate::forms::tests::{attendee_form, event_form};

    fn service() -> AdminService<InMemoryEventRepository> {
        AdminService::new(
            InMemoryEventRepository::new(),
            SeatingConfig {
                table_count: 2,
                table_capacity: 4,
            },
        )
    }

    fn published(service: &mut AdminService<InMemoryEventRepository>, id: &str) -> EventId {
        let event = service.create_event(event_form(id)).unwrap();
        service.publish_event(&event.id).unwrap();
        event.id
    }

    fn register_couples(
        service: &mut AdminService<InMemoryEventRepository>,
        id: &EventId,
        couples: i64,
    ) {
        for index in 0..couples {
            let man = attendee_form(&format!("m{index}"), Gender::Male, 25 + index);
            service.register_attendee(id, man).unwrap();
            let woman = attendee_form(&format!("f{index}"), Gender::Female, 24 + index);
            service.register_attendee(id, woman).unwrap();
        }
    }

    #[test]
    fn arranges_registered_attendees() {
        let mut service = service();
        let id = published(&mut service, "1");
        register_couples(&mut service, &id, 3);

        let report = service.auto_arrange(&id).unwrap();

        assert_eq!(report.summary.seated, 6);
        assert_eq!(report.summary.empty_seats, 2);
        assert!(report.unplaced.is_empty());
        let stored = service.repository().get(&id).unwrap();
        assert!(stored.auto_arranged);
        assert_eq!(stored.tables[0].members.len(), 4);
    }

    #[test]
    fn second_arrange_needs_reset() {
        let mut service = service();
        let id = published(&mut service, "1");
        register_couples(&mut service, &id, 2);
        let first = service.auto_arrange(&id).unwrap();

        assert!(matches!(
            service.auto_arrange(&id),
            Err(AppError::AlreadyArranged(_))
        ));

        service.reset_all(&id).unwrap();
        assert_eq!(service.seating_summary(&id).unwrap().seated, 0);
        assert_eq!(service.auto_arrange(&id).unwrap(), first);
    }

    #[test]
    fn reset_single_table() {
        let mut service = service();
        let id = published(&mut service, "1");
        register_couples(&mut service, &id, 3);
        service.auto_arrange(&id).unwrap();

        service.reset_table(&id, 1).unwrap();

        let summary = service.seating_summary(&id).unwrap();
        assert_eq!(summary.seated, 2);
        assert!(matches!(
            service.reset_table(&id, 9),
            Err(AppError::UnknownTable { table: 9, .. })
        ));
    }

    #[test]
    fn full_event_stops_taking_bookings() {
        let mut service = service();
        let id = published(&mut service, "1");
        register_couples(&mut service, &id, 4);

        let result = service.register_attendee(&id, attendee_form("late", Gender::Male, 30));

        assert!(matches!(
            result,
            Err(AppError::Event(EventError::NotOpen {
                status: EventStatus::Full,
                ..
            }))
        ));
    }

    #[test]
    fn invalid_form_is_rejected_before_storage() {
        let mut service = service();
        let id = published(&mut service, "1");

        let result = service.register_attendee(&id, attendee_form("kid", Gender::Male, 12));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(service.repository().get(&id).unwrap().booked_seats(), 0);
    }

    #[test]
    fn lists_by_status_and_date() {
        let mut service = service();
        let mut later = event_form("a");
        later.date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        service.create_event(later).unwrap();
        published(&mut service, "b");
        published(&mut service, "c");
        service.complete_event(&EventId::from("c")).unwrap();

        let all: Vec<String> = service
            .list_events(None)
            .unwrap()
            .into_iter()
            .map(|event| event.id.0)
            .collect();
        assert_eq!(all, ["b", "c", "a"]);

        let drafts = service.list_events(Some(EventStatus::Draft)).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, EventId::from("a"));
    }

    #[test]
    fn imported_roster_may_exceed_capacity() {
        let mut service = service();
        let id = service.create_event(event_form("1")).unwrap().id;
        let attendees = (0..10)
            .map(|index| {
                let gender = if index % 2 == 0 {
                    Gender::Male
                } else {
                    Gender::Female
                };
                attendee_form(&format!("g{index}"), gender, 20 + index)
                    .validate()
                    .unwrap()
            })
            .collect();

        service.import_roster(&id, attendees).unwrap();
        let report = service.auto_arrange(&id).unwrap();

        assert_eq!(report.summary.seated, 8);
        assert_eq!(report.unplaced.len(), 2);
    }

    #[test]
    fn unknown_event() {
        let mut service = service();
        assert!(matches!(
            service.auto_arrange(&EventId::from("404")),
            Err(AppError::Event(EventError::NotFound(_)))
        ));
    }
}
