//! Table seating for blind dinner events.
//!
//! [`arrange`] partitions the registered attendees of an event into its
//! tables. Seating is greedy: first-time attendees are seeded first, every
//! further seat goes to the attendee who gets along best with the people
//! already at the table, and a table that holds two people keeps its
//! male/female gap at one or below.

pub mod arrange;
pub mod attendee;
pub mod compatibility;
pub mod report;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use arrange::{arrange, Arrangement};
pub use attendee::{Attendee, Gender, LookingFor, PersonalityType};
pub use compatibility::compatibility;
pub use report::{describe_table, summarize, table_score, SeatingSummary, TableDescription};
pub use table::{empty_tables, reset_all, reset_table, Table, TableId};
