use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("at least one expected row is required")]
    EmptyExpectation,

    #[error("expected rows must share one header set: {expected:?} vs {conflicting:?}")]
    InconsistentExpectedHeaders {
        expected: Vec<String>,
        conflicting: Vec<String>,
    },

    #[error("unable to find table {identifier} on page")]
    TableNotFound { identifier: String },

    #[error("found {count} elements for table {identifier}, expected exactly one")]
    AmbiguousTable { identifier: String, count: usize },
}
