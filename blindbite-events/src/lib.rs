extern crate alloc;

pub mod error;
pub mod models;
pub mod repository;

pub use error::EventError;
pub use models::{Event, EventId, EventStatus};
pub use repository::{EventRepository, InMemoryEventRepository};
