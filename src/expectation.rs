use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::model::RowMap;

pub const DEFAULT_WAIT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableIdentifier {
    Id(String),
    Label(String),
}

impl TableIdentifier {
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }
}

impl Display for TableIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Label(label) => write!(f, "\"{label}\""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Exact,
    Include,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExpectation {
    identifier: TableIdentifier,
    mode: MatchMode,
    rows: Vec<RowMap>,
    wait: Duration,
}

impl TableExpectation {
    #[must_use]
    pub fn new(identifier: TableIdentifier) -> Self {
        Self {
            identifier,
            mode: MatchMode::Include,
            rows: Vec::new(),
            wait: DEFAULT_WAIT,
        }
    }

    // Match the table exactly with the provided rows, in order.
    #[must_use]
    pub fn with_exact_rows(mut self, rows: impl IntoIterator<Item = RowMap>) -> Self {
        self.mode = MatchMode::Exact;
        self.rows = rows.into_iter().collect();
        self
    }

    // Require the table to include the provided rows, in any order.
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = RowMap>) -> Self {
        self.mode = MatchMode::Include;
        self.rows = rows.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    #[must_use]
    pub fn identifier(&self) -> &TableIdentifier {
        &self.identifier
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    #[must_use]
    pub fn rows(&self) -> &[RowMap] {
        &self.rows
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    // All rows must agree on one header set; the first row fixes it.
    pub(crate) fn expected_headers(&self) -> Result<Vec<String>, MatchError> {
        let Some(first) = self.rows.first() else {
            return Err(MatchError::EmptyExpectation);
        };

        let expected = first.keys().cloned().collect::<Vec<_>>();
        for row in &self.rows[1..] {
            let keys = row.keys().cloned().collect::<Vec<_>>();
            if keys != expected {
                return Err(MatchError::InconsistentExpectedHeaders {
                    expected,
                    conflicting: keys,
                });
            }
        }

        Ok(expected)
    }
}
