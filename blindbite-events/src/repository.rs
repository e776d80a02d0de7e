use alloc::collections::BTreeMap;

use tracing::debug;

use crate::error::EventError;
use crate::models::{Event, EventId};

/// Storage for the admin back-office's events.
///
/// The seating engine never touches this; the admin service reads an event,
/// runs the engine and writes the result back.
pub trait EventRepository {
    fn list(&self) -> Result<Vec<Event>, EventError>;

    fn get(&self, id: &EventId) -> Result<Event, EventError>;

    fn insert(&mut self, event: Event) -> Result<(), EventError>;

    fn update(&mut self, event: Event) -> Result<(), EventError>;

    fn remove(&mut self, id: &EventId) -> Result<Event, EventError>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: BTreeMap<EventId, Event>,
}

impl InMemoryEventRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventRepository for InMemoryEventRepository {
    fn list(&self) -> Result<Vec<Event>, EventError> {
        Ok(self.events.values().cloned().collect())
    }

    fn get(&self, id: &EventId) -> Result<Event, EventError> {
        self.events
            .get(id)
            .cloned()
            .ok_or_else(|| EventError::NotFound(id.clone()))
    }

    fn insert(&mut self, event: Event) -> Result<(), EventError> {
        if self.events.contains_key(&event.id) {
            return Err(EventError::AlreadyExists(event.id));
        }
        debug!(event = %event.id, "inserting event");
        self.events.insert(event.id.clone(), event);
        Ok(())
    }

    fn update(&mut self, event: Event) -> Result<(), EventError> {
        let Some(stored) = self.events.get_mut(&event.id) else {
            return Err(EventError::NotFound(event.id));
        };
        debug!(event = %event.id, "updating event");
        *stored = event;
        Ok(())
    }

    fn remove(&mut self, id: &EventId) -> Result<Event, EventError> {
        self.events
            .remove(id)
            .ok_or_else(|| EventError::NotFound(id.clone()))
    }
}
