//! Client-side search filtering and key-based sorting.
//!
//! Both operations borrow their input and return a new vector, so the
//! caller's list is never reordered or filtered in place.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::{CellValue, TableRow};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Error returned when parsing an unknown sort direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort direction `{0}`, expected `asc` or `desc`")]
pub struct ParseSortDirectionError(String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortDirectionError(s.to_owned())),
        }
    }
}

/// Keep the rows where any of `keys` contains `term`, ignoring case.
///
/// An empty term keeps every row. Fields a row does not have never match.
#[must_use]
pub fn filter_by_search<T: TableRow + Clone>(rows: &[T], term: &str, keys: &[&str]) -> Vec<T> {
    if term.is_empty() {
        return rows.to_vec();
    }
    let term = term.to_lowercase();
    rows.iter()
        .filter(|row| {
            keys.iter().any(|key| {
                row.field(key)
                    .is_some_and(|value| value.search_text().contains(&term))
            })
        })
        .cloned()
        .collect()
}

/// Sort rows by the value of field `key`.
///
/// The sort is stable, so rows with equal values keep their input order in
/// both directions. Rows without the field sort first ascending and last
/// descending.
#[must_use]
pub fn sort_by_key<T: TableRow + Clone>(rows: &[T], key: &str, direction: SortDirection) -> Vec<T> {
    let mut keyed: Vec<_> = rows.iter().map(|row| (row.field(key), row)).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare_cells(a.as_ref(), b.as_ref());
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    keyed.into_iter().map(|(_, row)| row.clone()).collect()
}

fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::mock;
    use crate::models::Product;
    use crate::normalize::normalize_products;

    fn products() -> Vec<Product> {
        normalize_products(&json!([
            {"id": "p1", "name": "Blue Mug", "price": 12, "sku": "MUG-1", "category": "kitchen"},
            {"id": "p2", "name": "Red Pen", "price": "2.5", "sku": "PEN-9", "category": "office"},
            {"id": "p3", "name": "Green Mug", "price": 30, "sku": "MUG-2", "category": "kitchen"},
            {"id": "p4", "name": "Notebook", "price": 7, "sku": "NB-1", "category": "Office"}
        ]))
    }

    fn ids(rows: &[Product]) -> Vec<&str> {
        rows.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_across_keys() {
        let rows = products();
        assert_eq!(ids(&filter_by_search(&rows, "MUG", &["name"])), ["p1", "p3"]);
        assert_eq!(
            ids(&filter_by_search(&rows, "office", &["name", "category"])),
            ["p2", "p4"]
        );
        assert_eq!(ids(&filter_by_search(&rows, "nb-", &["sku"])), ["p4"]);
    }

    #[test]
    fn test_empty_term_is_identity() {
        let rows = products();
        assert_eq!(filter_by_search(&rows, "", &["name"]), rows);
    }

    #[test]
    fn test_search_is_idempotent() {
        let rows = products();
        let once = filter_by_search(&rows, "mug", &["name", "sku"]);
        let twice = filter_by_search(&once, "mug", &["name", "sku"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_search_key_matches_nothing() {
        assert!(filter_by_search(&products(), "mug", &["nope"]).is_empty());
    }

    #[test]
    fn test_sort_numeric_field() {
        let rows = products();
        assert_eq!(
            ids(&sort_by_key(&rows, "price", SortDirection::Asc)),
            ["p2", "p4", "p1", "p3"]
        );
    }

    #[test]
    fn test_opposite_directions_reverse_distinct_keys() {
        let rows = products();
        let asc = sort_by_key(&rows, "name", SortDirection::Asc);
        let mut desc = sort_by_key(&rows, "name", SortDirection::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let rows = products();
        assert_eq!(
            ids(&sort_by_key(&rows, "category", SortDirection::Asc)),
            ["p1", "p3", "p2", "p4"]
        );
        assert_eq!(
            ids(&sort_by_key(&rows, "category", SortDirection::Desc)),
            ["p2", "p4", "p1", "p3"]
        );
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let rows = products();
        let before = rows.clone();
        let _sorted = sort_by_key(&rows, "price", SortDirection::Desc);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_sort_mock_orders_by_status() {
        let orders = mock::orders();
        let sorted = sort_by_key(&orders, "status", SortDirection::Asc);
        let statuses: Vec<_> = sorted.iter().map(|o| o.status.as_str()).collect();
        assert_eq!(statuses, ["Delivered", "Delivered", "Process"]);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.reversed(), SortDirection::Desc);
    }
}
