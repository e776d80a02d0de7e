use core::fmt::Write as _;
use std::fs;
use std::path::Path;

use blindbite_seating::{describe_table, table_score, Attendee, Gender, Table};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::forms::{validate_roster, AttendeeForm};
use crate::service::ArrangeReport;

/// `{ "attendees": [...] }`
#[derive(Deserialize, Debug)]
pub struct RosterFile {
    pub attendees: Vec<AttendeeForm>,
}

pub fn parse_roster(json: &str) -> Result<Vec<AttendeeForm>, AppError> {
    Ok(serde_json::from_str::<RosterFile>(json)?.attendees)
}

/// Reads and validates a roster file.
pub fn load_roster(path: &Path) -> Result<Vec<Attendee>, AppError> {
    let json = fs::read_to_string(path)?;
    let attendees = validate_roster(parse_roster(&json)?)?;
    info!(path = %path.display(), attendees = attendees.len(), "loaded roster");
    Ok(attendees)
}

const fn gender_mark(gender: Gender) -> char {
    match gender {
        Gender::Male => 'M',
        Gender::Female => 'F',
        Gender::Other => 'O',
    }
}

/// Plain text rendering of seated tables and the arrangement summary.
#[must_use]
pub fn render(tables: &[Table], report: &ArrangeReport) -> String {
    let mut out = String::new();
    for table in tables {
        let description = describe_table(table);
        let _ = writeln!(
            out,
            "Table {} ({}/{}) score {:.1}",
            table.id,
            table.members.len(),
            table.capacity,
            table_score(table)
        );
        if !table.members.is_empty() {
            let _ = writeln!(
                out,
                "  {}M/{}F, {} jobs, average age {}",
                description.male,
                description.female,
                description.job_diversity,
                description.average_age
            );
        }
        for member in &table.members {
            let _ = writeln!(
                out,
                "  [{}] {} ({}, {}, trust {}){}",
                gender_mark(member.gender),
                member.name,
                member.job,
                member.age,
                member.trust_score,
                if member.is_first_time { " new" } else { "" }
            );
        }
    }
    let summary = &report.summary;
    let _ = writeln!(
        out,
        "{} tables, {} seated, {} empty seats, average score {:.1}",
        summary.table_count, summary.seated, summary.empty_seats, summary.average_score
    );
    if !report.unplaced.is_empty() {
        let _ = writeln!(
            out,
            "not seated: {}",
            report
                .unplaced
                .iter()
                .map(|attendee| attendee.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    out
}
