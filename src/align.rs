use std::collections::BTreeMap;

use crate::model::RowMap;

// Leftmost actual column whose label starts with the expected label wins.
// Expected labels without a match are left out of the alignment entirely.
pub(crate) fn align_columns(
    actual_headers: &[String],
    expected_headers: &[String],
) -> BTreeMap<String, usize> {
    expected_headers
        .iter()
        .filter_map(|expected| {
            actual_headers
                .iter()
                .position(|actual| actual.starts_with(expected.as_str()))
                .map(|index| (expected.clone(), index))
        })
        .collect()
}

pub(crate) fn project_rows(
    rows: &[Vec<String>],
    alignment: &BTreeMap<String, usize>,
) -> Vec<RowMap> {
    rows.iter()
        .map(|row| {
            alignment
                .iter()
                .filter_map(|(header, &index)| {
                    row.get(index).map(|value| (header.clone(), value.clone()))
                })
                .collect()
        })
        .collect()
}
