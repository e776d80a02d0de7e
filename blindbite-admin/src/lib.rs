//! Back-office for blind dinner events: event and booking management and
//! the auto-arrange action that seats the attendees of an event.

pub mod error;
pub mod forms;
pub mod roster;
pub mod service;

pub use error::AppError;
pub use service::{AdminService, ArrangeReport};
