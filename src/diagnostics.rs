use serde::{Deserialize, Serialize};

use crate::model::RowMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCode {
    RowCountMismatch,
    RowMismatch,
    MissingRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFailure {
    pub code: FailureCode,
    pub message: String,
    pub row_index: Option<usize>,
    pub expected: Option<RowMap>,
    pub actual: Option<RowMap>,
}

impl MatchFailure {
    #[must_use]
    pub fn new(code: FailureCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            row_index: None,
            expected: None,
            actual: None,
        }
    }

    #[must_use]
    pub fn with_row_index(mut self, row_index: usize) -> Self {
        self.row_index = Some(row_index);
        self
    }

    #[must_use]
    pub fn with_expected(mut self, expected: RowMap) -> Self {
        self.expected = Some(expected);
        self
    }

    #[must_use]
    pub fn with_actual(mut self, actual: RowMap) -> Self {
        self.actual = Some(actual);
        self
    }
}
