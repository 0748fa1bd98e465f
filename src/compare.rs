use crate::diagnostics::{FailureCode, MatchFailure};
use crate::expectation::MatchMode;
use crate::model::RowMap;

pub(crate) fn compare_rows(
    mode: MatchMode,
    expected: &[RowMap],
    matched: &[RowMap],
) -> Vec<MatchFailure> {
    match mode {
        MatchMode::Exact => compare_exact(expected, matched),
        MatchMode::Include => compare_include(expected, matched),
    }
}

fn compare_exact(expected: &[RowMap], matched: &[RowMap]) -> Vec<MatchFailure> {
    let mut failures = Vec::new();

    if expected.len() != matched.len() {
        failures.push(MatchFailure::new(
            FailureCode::RowCountMismatch,
            format!("expected {} row(s), found {}", expected.len(), matched.len()),
        ));
    }

    for (index, (want, got)) in expected.iter().zip(matched).enumerate() {
        if want != got {
            failures.push(
                MatchFailure::new(
                    FailureCode::RowMismatch,
                    format!(
                        "row {index}: expected {}, found {}",
                        describe_row(want),
                        describe_row(got)
                    ),
                )
                .with_row_index(index)
                .with_expected(want.clone())
                .with_actual(got.clone()),
            );
        }
    }

    failures
}

// Duplicate expected rows may be satisfied by a single actual row.
fn compare_include(expected: &[RowMap], matched: &[RowMap]) -> Vec<MatchFailure> {
    expected
        .iter()
        .enumerate()
        .filter(|(_, want)| !matched.contains(want))
        .map(|(index, want)| {
            MatchFailure::new(
                FailureCode::MissingRow,
                format!("expected row not found in table: {}", describe_row(want)),
            )
            .with_row_index(index)
            .with_expected(want.clone())
        })
        .collect()
}

fn describe_row(row: &RowMap) -> String {
    let cells = row
        .iter()
        .map(|(header, value)| format!("{header}: {value:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{cells}}}")
}
