use serde::{Deserialize, Serialize};

use crate::attendee::{Attendee, Gender};

pub type TableId = u32;

/// A fixed-capacity seating unit. `members.len()` never exceeds `capacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub capacity: usize,
    #[serde(default)]
    pub members: Vec<Attendee>,
}

impl Table {
    #[must_use]
    pub const fn new(id: TableId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    #[must_use]
    pub fn free_seats(&self) -> usize {
        self.capacity.saturating_sub(self.members.len())
    }

    #[must_use]
    pub fn count_gender(&self, gender: Gender) -> usize {
        self.members
            .iter()
            .filter(|member| member.gender == gender)
            .count()
    }

    /// Absolute difference between male and female members, optionally
    /// counting `candidate` as already seated.
    #[must_use]
    pub fn gender_gap_with(&self, candidate: Option<&Attendee>) -> usize {
        let mut male = self.count_gender(Gender::Male);
        let mut female = self.count_gender(Gender::Female);
        match candidate.map(|candidate| candidate.gender) {
            Some(Gender::Male) => male += 1,
            Some(Gender::Female) => female += 1,
            Some(Gender::Other) | None => {}
        }
        male.abs_diff(female)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

/// Empties the table with the given id. Returns `false` if there is none.
pub fn reset_table(tables: &mut [Table], id: TableId) -> bool {
    tables
        .iter_mut()
        .find(|table| table.id == id)
        .map(Table::clear)
        .is_some()
}

pub fn reset_all(tables: &mut [Table]) {
    tables.iter_mut().for_each(Table::clear);
}

/// `count` empty tables numbered from 1.
#[must_use]
pub fn empty_tables(count: u32, capacity: usize) -> Vec<Table> {
    (1..=count).map(|id| Table::new(id, capacity)).collect()
}
