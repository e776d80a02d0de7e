use core::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::attendee::Attendee;
use crate::compatibility::average_compatibility;
use crate::table::{reset_all, Table};

/// Below this many members a table skips the gender balance check.
const BALANCE_CHECK_FROM: usize = 2;
const MAX_GENDER_GAP: usize = 1;

/// Output of [`arrange`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrangement {
    pub tables: Vec<Table>,
    /// Attendees that did not fit, in processing order.
    pub unplaced: Vec<Attendee>,
}

impl Arrangement {
    #[must_use]
    pub fn seated(&self) -> usize {
        self.tables.iter().map(|table| table.members.len()).sum()
    }
}

/// First-time attendees first, then by descending trust score.
fn priority(a: &&Attendee, b: &&Attendee) -> Ordering {
    b.is_first_time
        .cmp(&a.is_first_time)
        .then_with(|| b.trust_score.total_cmp(&a.trust_score))
}

/// Index into `pool` of the attendee that fits `table` best, if anyone fits.
fn best_candidate(table: &Table, pool: &[&Attendee]) -> Option<usize> {
    let check_balance = table.members.len() >= BALANCE_CHECK_FROM;
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in pool.iter().enumerate() {
        if check_balance && table.gender_gap_with(Some(candidate)) > MAX_GENDER_GAP {
            continue;
        }
        let score = average_compatibility(candidate, &table.members);
        // strictly greater: earlier candidates win ties
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Seats `attendees` at `tables`, greedily maximizing compatibility.
///
/// The members of `tables` are discarded before seating. Tables are filled
/// one after another: an empty table is seeded with the next attendee in
/// priority order, after that every seat goes to the attendee with the best
/// average compatibility with the people already seated. Once a table holds
/// two people, candidates that would push the male/female gap above one are
/// skipped. When nobody fits, the table is left as is and seating moves on.
///
/// The result is deterministic for a given input order.
#[must_use]
pub fn arrange(attendees: &[Attendee], tables: &[Table]) -> Arrangement {
    let mut tables = tables.to_vec();
    reset_all(&mut tables);

    let mut pool: Vec<&Attendee> = attendees.iter().sorted_by(priority).collect();

    let mut index = 0;
    while !pool.is_empty() && index < tables.len() {
        let table = &mut tables[index];
        if table.is_full() {
            debug!(table = table.id, "table has no free seats");
            index += 1;
            continue;
        }

        let chosen = if table.members.is_empty() {
            0
        } else if let Some(chosen) = best_candidate(table, &pool) {
            chosen
        } else {
            debug!(
                table = table.id,
                seated = table.members.len(),
                "no candidate keeps the table balanced"
            );
            index += 1;
            continue;
        };

        let attendee = pool.remove(chosen);
        debug!(table = table.id, attendee = %attendee.id, "seated attendee");
        table.members.push(attendee.clone());

        if table.is_full() {
            index += 1;
        }
    }

    let unplaced: Vec<Attendee> = pool.into_iter().cloned().collect();
    let arrangement = Arrangement { tables, unplaced };
    info!(
        seated = arrangement.seated(),
        unplaced = arrangement.unplaced.len(),
        "arrangement finished"
    );
    if !arrangement.unplaced.is_empty() {
        warn!(
            unplaced = ?arrangement.unplaced.iter().map(|attendee| &attendee.id).collect_vec(),
            "not every attendee could be seated"
        );
    }
    arrangement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendee::Gender;
    use crate::table::{empty_tables, reset_table};
    use crate::test_support::{attendee, mock_users};

    fn ids(table: &Table) -> Vec<&str> {
        table.members.iter().map(|member| member.id.as_str()).collect()
    }

    #[test]
    fn seeds_with_first_time_attendee_of_highest_trust() {
        let arrangement = arrange(&mock_users(), &empty_tables(1, 6));
        assert_eq!(arrangement.tables[0].members[0].id, "U001");
    }

    #[test]
    fn fills_tables_in_order() {
        let arrangement = arrange(&mock_users(), &empty_tables(3, 6));

        assert_eq!(arrangement.tables[0].members.len(), 6);
        assert!(arrangement.tables[1].members.is_empty());
        assert!(arrangement.tables[2].members.is_empty());
        assert!(arrangement.unplaced.is_empty());
        assert_eq!(arrangement.tables[0].gender_gap_with(None), 0);
    }

    #[test]
    fn discards_previous_members() {
        let mut tables = empty_tables(2, 6);
        tables[1].members = mock_users();

        let arrangement = arrange(&mock_users(), &tables);

        assert_eq!(arrangement.seated(), 6);
        assert_eq!(arrangement.tables[0].members.len(), 6);
    }

    #[test]
    fn first_time_attendee_wins_the_only_seat() {
        let mut veteran = attendee("veteran", Gender::Female, 30);
        veteran.trust_score = 10.0;
        let mut newcomer = attendee("newcomer", Gender::Male, 30);
        newcomer.is_first_time = true;
        newcomer.trust_score = 1.0;

        let arrangement = arrange(&[veteran, newcomer], &empty_tables(1, 1));

        assert_eq!(ids(&arrangement.tables[0]), ["newcomer"]);
        assert_eq!(arrangement.unplaced[0].id, "veteran");
    }

    #[test]
    fn equal_priority_keeps_input_order() {
        let roster = [
            attendee("first", Gender::Male, 30),
            attendee("second", Gender::Male, 30),
        ];

        let arrangement = arrange(&roster, &empty_tables(2, 1));

        assert_eq!(ids(&arrangement.tables[0]), ["first"]);
        assert_eq!(ids(&arrangement.tables[1]), ["second"]);
    }

    #[test]
    fn ties_go_to_the_earlier_candidate() {
        // all candidates score the same against the seed
        let roster = [
            attendee("seed", Gender::Male, 30),
            attendee("a", Gender::Female, 50),
            attendee("b", Gender::Female, 50),
        ];

        let arrangement = arrange(&roster, &empty_tables(1, 2));

        assert_eq!(ids(&arrangement.tables[0]), ["seed", "a"]);
    }

    #[test]
    fn moves_on_when_nobody_keeps_the_balance() {
        let roster = [
            attendee("m1", Gender::Male, 30),
            attendee("m2", Gender::Male, 30),
            attendee("m3", Gender::Male, 30),
        ];

        let arrangement = arrange(&roster, &empty_tables(2, 6));

        // the second seat is never balance checked
        assert_eq!(ids(&arrangement.tables[0]), ["m1", "m2"]);
        assert_eq!(ids(&arrangement.tables[1]), ["m3"]);
    }

    #[test]
    fn zero_capacity_table_is_skipped() {
        let tables = vec![Table::new(1, 0), Table::new(2, 2)];

        let arrangement = arrange(&mock_users()[..2], &tables);

        assert!(arrangement.tables[0].members.is_empty());
        assert_eq!(arrangement.tables[1].members.len(), 2);
    }

    #[test]
    fn empty_inputs() {
        let arrangement = arrange(&[], &empty_tables(3, 6));
        assert!(arrangement.tables.iter().all(|table| table.members.is_empty()));

        let arrangement = arrange(&mock_users(), &[]);
        assert!(arrangement.tables.is_empty());
        assert_eq!(arrangement.unplaced.len(), 6);
    }

    #[test]
    fn rerun_after_reset_gives_same_result() {
        let users = mock_users();
        let first = arrange(&users, &empty_tables(2, 4));

        let mut tables = first.tables.clone();
        assert!(reset_table(&mut tables, 1));
        reset_all(&mut tables);

        assert_eq!(arrange(&users, &tables), first);
    }
}
