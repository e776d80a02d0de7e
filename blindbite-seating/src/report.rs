//! Read-only figures about seated tables, for display.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::attendee::Gender;
use crate::table::Table;

const DIVERSE_JOBS: usize = 3;

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[expect(clippy::cast_precision_loss, reason = "small counts")]
fn mean(total: f64, count: usize) -> f64 {
    total / count as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescription {
    pub male: usize,
    pub female: usize,
    /// Number of distinct job categories.
    pub job_diversity: usize,
    /// Rounded to the nearest year, `0` for an empty table.
    pub average_age: u32,
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "mean of u32 ages fits in u32"
)]
fn average_age(table: &Table) -> u32 {
    if table.members.is_empty() {
        return 0;
    }
    let total: u32 = table.members.iter().map(|member| member.age).sum();
    mean(f64::from(total), table.members.len()).round() as u32
}

#[must_use]
pub fn describe_table(table: &Table) -> TableDescription {
    TableDescription {
        male: table.count_gender(Gender::Male),
        female: table.count_gender(Gender::Female),
        job_diversity: table.members.iter().map(|member| &member.job).unique().count(),
        average_age: average_age(table),
    }
}

/// Average trust of the table plus bonuses for gender balance and job
/// diversity, rounded to one decimal. `0.0` for an empty table.
#[must_use]
pub fn table_score(table: &Table) -> f64 {
    if table.members.is_empty() {
        return 0.0;
    }
    let description = describe_table(table);
    let trust: f64 = table.members.iter().map(|member| member.trust_score).sum();
    let mut score = mean(trust, table.members.len());
    if description.male.abs_diff(description.female) <= 1 {
        score += 1.0;
    }
    if description.job_diversity >= DIVERSE_JOBS {
        score += 0.5;
    }
    round_to_tenth(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatingSummary {
    pub table_count: usize,
    pub seated: usize,
    pub empty_seats: usize,
    /// Mean of the table scores, rounded to one decimal.
    pub average_score: f64,
}

#[must_use]
pub fn summarize(tables: &[Table]) -> SeatingSummary {
    let average_score = if tables.is_empty() {
        0.0
    } else {
        round_to_tenth(mean(tables.iter().map(table_score).sum(), tables.len()))
    };
    SeatingSummary {
        table_count: tables.len(),
        seated: tables.iter().map(|table| table.members.len()).sum(),
        empty_seats: tables.iter().map(Table::free_seats).sum(),
        average_score,
    }
}
