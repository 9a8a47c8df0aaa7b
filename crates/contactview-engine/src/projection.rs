use contactview_types::{ContactRecord, SortColumn, SortDirection};
use std::cmp::Ordering;

use crate::collate::collate;
use crate::filter::{matches_query, normalize_query};
use crate::phone::compare_phone;

/// Comparator for the active column, before the direction is applied.
pub fn compare_records(a: &ContactRecord, b: &ContactRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Alias => collate(a.alias_or_empty(), b.alias_or_empty()),
        SortColumn::Name => collate(a.name_or_empty(), b.name_or_empty()),
        SortColumn::Phone => compare_phone(a, b),
    }
}

/// Filter `records` by `query`, then stable-sort the survivors.
///
/// Pure: the same inputs always yield the same sequence. Records comparing
/// equal keep their relative order from `records`.
pub fn project(
    records: &[ContactRecord],
    query: &str,
    column: SortColumn,
    direction: SortDirection,
) -> Vec<ContactRecord> {
    let normalized = normalize_query(query);

    let mut filtered: Vec<ContactRecord> = records
        .iter()
        .filter(|record| matches_query(record, &normalized))
        .cloned()
        .collect();

    // slice::sort_by is stable
    filtered.sort_by(|a, b| direction.apply(compare_records(a, b, column)));
    filtered
}
