//! # Shared Types
//!
//! Result shapes produced by the sandbox and the practice catalog. Everything here
//! serializes to the JSON bodies returned by the server.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Columns and rows of a result set or of a table snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// What the engine reported after running one statement.
///
/// The variant is decided by the shape of the prepared statement, not by
/// its text, so `WITH ...` or `EXPLAIN ...` land in `RowSet` as expected.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementOutcome {
    RowSet(ResultSet),
    Affected(u64),
}

impl StatementOutcome {
    pub fn kind(&self) -> StatementKind {
        match self {
            StatementOutcome::RowSet(_) => StatementKind::RowReturning,
            StatementOutcome::Affected(_) => StatementKind::Mutating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    RowReturning,
    Mutating,
}

/// The last non-empty statement of a sequence together with its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedStatement {
    pub text: String,
    pub outcome: StatementOutcome,
}

/// Outcome of a full sandbox run: the last statement plus every user table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult {
    pub last_statement: Option<ExecutedStatement>,
    pub tables: BTreeMap<String, ResultSet>,
}

impl ExecutionResult {
    /// The row set of the last statement, if it returned rows.
    pub fn result(&self) -> Option<&ResultSet> {
        match self.last_statement.as_ref().map(|s| &s.outcome) {
            Some(StatementOutcome::RowSet(set)) => Some(set),
            _ => None,
        }
    }

    /// The affected-row count of the last statement, if it was mutating.
    pub fn affected_rows(&self) -> Option<u64> {
        match self.last_statement.as_ref().map(|s| &s.outcome) {
            Some(StatementOutcome::Affected(count)) => Some(*count),
            _ => None,
        }
    }

    pub fn last_kind(&self) -> Option<StatementKind> {
        self.last_statement.as_ref().map(|s| s.outcome.kind())
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_statement.as_ref().map(|s| s.text.as_str())
    }
}

/// One column as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(rename = "notnull")]
    pub not_null: bool,
    #[serde(rename = "pk")]
    pub is_primary_key: bool,
}
