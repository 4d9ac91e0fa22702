//! Derives what the user sees from the full guest list.
//!
//! Filtering and stats are pure functions over the canonical list: nothing
//! here is cached, the view is recomputed after every mutation.
//!
//! - Search is a case-insensitive substring match on `"{first} {last}"`.
//! - The table selector either lets everything through ([`TableFilter::All`],
//!   spelled `0` or `all` on the command line) or requires an exact table.
//! - The status selector picks arrived, missing, pending (neither) or all.
//!
//! The three predicates are ANDed. Stats always count the unfiltered list.

use crate::error::{GuestError, Result};
use crate::model::{Attendee, AttendeeStatus, Table};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFilter {
    #[default]
    All,
    Only(Table),
}

impl FromStr for TableFilter {
    type Err = GuestError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token == "0" || token.eq_ignore_ascii_case("all") {
            return Ok(TableFilter::All);
        }
        token.parse().map(TableFilter::Only)
    }
}

impl fmt::Display for TableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFilter::All => write!(f, "all"),
            TableFilter::Only(table) => write!(f, "{}", table),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Arrived,
    Missing,
    Pending,
}

impl StatusFilter {
    pub fn matches(&self, status: AttendeeStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Arrived => status == AttendeeStatus::Arrived,
            StatusFilter::Missing => status == AttendeeStatus::Missing,
            StatusFilter::Pending => status == AttendeeStatus::Pending,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = GuestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "arrived" => Ok(StatusFilter::Arrived),
            "missing" => Ok(StatusFilter::Missing),
            "pending" => Ok(StatusFilter::Pending),
            other => Err(GuestError::Validation(format!(
                "Unknown status filter: {} (expected all, arrived, missing or pending)",
                other
            ))),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Arrived => "arrived",
            StatusFilter::Missing => "missing",
            StatusFilter::Pending => "pending",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub search: String,
    pub table: TableFilter,
    pub status: StatusFilter,
}

impl Filter {
    pub fn matches(&self, attendee: &Attendee) -> bool {
        let name = attendee.full_name().to_lowercase();
        let matches_search = name.contains(&self.search.to_lowercase());

        let matches_table = match self.table {
            TableFilter::All => true,
            TableFilter::Only(table) => attendee.table == table,
        };

        matches_search && matches_table && self.status.matches(attendee.status())
    }
}

/// An attendee together with its 1-based position in the full list.
///
/// Positions are stable across filters, so the number printed by `list`
/// can be fed back into `arrived`, `missing` or `delete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAttendee {
    pub position: usize,
    pub attendee: Attendee,
}

/// Positions every attendee without filtering.
pub fn positioned(attendees: &[Attendee]) -> Vec<DisplayAttendee> {
    attendees
        .iter()
        .enumerate()
        .map(|(i, a)| DisplayAttendee {
            position: i + 1,
            attendee: a.clone(),
        })
        .collect()
}

/// Returns the attendees matching `filter`, in store order.
pub fn apply(attendees: &[Attendee], filter: &Filter) -> Vec<DisplayAttendee> {
    positioned(attendees)
        .into_iter()
        .filter(|da| filter.matches(&da.attendee))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub arrived: usize,
    pub missing: usize,
    pub pending: usize,
}

impl Stats {
    pub fn compute(attendees: &[Attendee]) -> Self {
        let mut stats = Self {
            total: attendees.len(),
            ..Self::default()
        };
        for attendee in attendees {
            match attendee.status() {
                AttendeeStatus::Arrived => stats.arrived += 1,
                AttendeeStatus::Missing => stats.missing += 1,
                AttendeeStatus::Pending => stats.pending += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana_and_bob() -> Vec<Attendee> {
        vec![
            Attendee::new("Ana", "Lopez", Table::Numbered(5), 3),
            Attendee::new("Bob", "Ruiz", Table::Numbered(3), 1),
        ]
    }

    #[test]
    fn search_by_name_with_all_tables() {
        let list = ana_and_bob();
        let filter = Filter {
            search: "ana".into(),
            table: "0".parse().unwrap(),
            status: StatusFilter::All,
        };

        let result = apply(&list, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].attendee.first_name, "Ana");
        assert_eq!(result[0].position, 1);
    }

    #[test]
    fn search_spans_first_and_last_name() {
        let list = ana_and_bob();
        let filter = Filter {
            search: "BOB RU".into(),
            ..Filter::default()
        };
        let result = apply(&list, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].position, 2);
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let list = ana_and_bob();
        let result = apply(&list, &Filter::default());
        let names: Vec<_> = result.iter().map(|d| d.attendee.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bob"]);
    }

    #[test]
    fn table_filter_matches_exact_table() {
        let mut list = ana_and_bob();
        list.push(Attendee::new("Eve", "Kim", Table::Principal, 0));

        let only_three = Filter {
            table: TableFilter::Only(Table::Numbered(3)),
            ..Filter::default()
        };
        assert_eq!(apply(&list, &only_three).len(), 1);

        let principal = Filter {
            table: "PRINCIPAL".parse().unwrap(),
            ..Filter::default()
        };
        let result = apply(&list, &principal);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].attendee.first_name, "Eve");
    }

    #[test]
    fn status_filter_pending_excludes_marked() {
        let mut list = ana_and_bob();
        list[0].toggle_arrived();
        list.push(Attendee::new("Eve", "Kim", Table::Principal, 0));
        list[2].toggle_missing();

        let pending = Filter {
            status: StatusFilter::Pending,
            ..Filter::default()
        };
        let result = apply(&list, &pending);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].attendee.first_name, "Bob");

        let arrived = Filter {
            status: StatusFilter::Arrived,
            ..Filter::default()
        };
        assert_eq!(apply(&list, &arrived)[0].attendee.first_name, "Ana");
    }

    #[test]
    fn predicates_are_anded() {
        let list = ana_and_bob();
        let filter = Filter {
            search: "ana".into(),
            table: TableFilter::Only(Table::Numbered(3)),
            status: StatusFilter::All,
        };
        assert!(apply(&list, &filter).is_empty());
    }

    #[test]
    fn parses_table_filter_tokens() {
        assert_eq!("all".parse::<TableFilter>().unwrap(), TableFilter::All);
        assert_eq!("0".parse::<TableFilter>().unwrap(), TableFilter::All);
        assert_eq!(
            "17".parse::<TableFilter>().unwrap(),
            TableFilter::Only(Table::Numbered(17))
        );
        assert!("23".parse::<TableFilter>().is_err());
    }

    #[test]
    fn parses_status_filter_names() {
        assert_eq!("Pending".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert!("late".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn stats_count_the_full_list() {
        let mut list = ana_and_bob();
        list.push(Attendee::new("Eve", "Kim", Table::Principal, 0));
        list[0].toggle_arrived();
        list[1].toggle_missing();

        let stats = Stats::compute(&list);
        assert_eq!(
            stats,
            Stats {
                total: 3,
                arrived: 1,
                missing: 1,
                pending: 1
            }
        );
        assert_eq!(stats.total, stats.arrived + stats.missing + stats.pending);
    }

    #[test]
    fn stats_of_empty_list_are_zero() {
        assert_eq!(Stats::compute(&[]), Stats::default());
    }

    #[test]
    fn stats_buckets_always_sum_to_total() {
        let mut list = ana_and_bob();
        list[0].arrived = true;
        list[0].missing = true;

        let stats = Stats::compute(&list);
        assert_eq!(stats.arrived, 1);
        assert_eq!(stats.missing, 0);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total, stats.arrived + stats.missing + stats.pending);
    }
}
