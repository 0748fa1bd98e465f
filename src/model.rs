use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::MatchFailure;

// Header label -> cell text, for both expected and matched rows.
pub type RowMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub table: String,
    pub passed: bool,
    pub headers: Vec<String>,
    pub row_count: usize,
    pub failures: Vec<MatchFailure>,
}

impl MatchReport {
    #[must_use]
    pub fn message(&self) -> String {
        if self.passed {
            return format!("table {} matched expected rows", self.table);
        }

        let mut lines = vec![
            format!("found table {} on page, with headers:", self.table),
            format!("{:?}", self.headers),
            "but rows did not match expected values:".to_string(),
        ];
        lines.extend(self.failures.iter().map(|failure| failure.message.clone()));
        lines.join("\n")
    }
}
