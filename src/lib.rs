mod align;
mod compare;
mod diagnostics;
mod dom;
mod error;
mod expectation;
mod extract;
mod model;
mod resolve;

pub use diagnostics::{FailureCode, MatchFailure};
pub use dom::{Document, Element};
pub use error::MatchError;
pub use expectation::{DEFAULT_WAIT, MatchMode, TableExpectation, TableIdentifier};
pub use model::{MatchReport, RowMap};

use crate::align::{align_columns, project_rows};
use crate::compare::compare_rows;
use crate::extract::extract_snapshot;
use crate::resolve::resolve_table;

// Resolution failures surface immediately; only extraction and comparison are
// retried while the page settles. The last cycle's report is final on timeout.
pub fn assert_table<D: Document>(
    document: &D,
    expectation: &TableExpectation,
) -> Result<MatchReport, MatchError> {
    let expected_headers = expectation.expected_headers()?;
    let table = resolve_table(document, expectation.identifier())?;

    let mut report = evaluate(&table, expectation, &expected_headers);
    if !report.passed {
        document.poll_until(expectation.wait(), &mut || {
            report = evaluate(&table, expectation, &expected_headers);
            report.passed
        });
    }

    Ok(report)
}

fn evaluate<E: Element>(
    table: &E,
    expectation: &TableExpectation,
    expected_headers: &[String],
) -> MatchReport {
    let snapshot = extract_snapshot(table);
    let alignment = align_columns(&snapshot.headers, expected_headers);
    let matched = project_rows(&snapshot.rows, &alignment);
    let failures = compare_rows(expectation.mode(), expectation.rows(), &matched);

    tracing::debug!(
        table = %expectation.identifier(),
        rows = matched.len(),
        failures = failures.len(),
        "evaluated table expectation"
    );

    MatchReport {
        table: expectation.identifier().to_string(),
        passed: failures.is_empty(),
        headers: snapshot.headers,
        row_count: matched.len(),
        failures,
    }
}
