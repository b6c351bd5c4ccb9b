//! # Practice Questions
//!
//! Canned SQL exercises: a static catalog, a deterministic schema builder per
//! question, and a read-only execution path for user answers.

pub mod catalog;
pub mod seeds;

pub use catalog::{problem, CannedProblem, Difficulty, PROBLEMS};
pub use seeds::seed_script;

use crate::{
    errors::SageError,
    sandbox::{describe_table, list_tables, snapshot, Store},
    types::{ColumnDescriptor, ResultSet, StatementOutcome},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// The result of running a user query against a practice schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub row_count: usize,
}

/// Column descriptors and full contents of every table of a practice schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSchema {
    pub schema: BTreeMap<String, Vec<ColumnDescriptor>>,
    pub data: BTreeMap<String, ResultSet>,
}

/// Builds a fresh store holding the schema and seed rows of `question_id`.
///
/// Ids without a seed script produce an empty store rather than an error.
pub async fn build(question_id: u32) -> Result<Store, SageError> {
    let store = Store::create().await?;
    match seed_script(question_id) {
        Some(script) => store.apply_script(script).await?,
        None => debug!(question_id, "No schema for question; returning empty store."),
    }
    Ok(store)
}

/// Runs a single read-only query against the schema of `question_id`.
///
/// The read-only check only looks at the leading keyword. It keeps obvious
/// writes like `DELETE` or `DROP` out, but it is not a sanitizer: a statement that
/// starts with `SELECT` is passed to the engine as is.
pub async fn execute_question(question_id: u32, query: &str) -> Result<QuestionResult, SageError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SageError::InvalidInput("Query cannot be empty".to_string()));
    }
    if !starts_with_select(query) {
        return Err(SageError::NonSelectQuery);
    }

    info!(question_id, "Executing practice query.");
    let store = build(question_id).await?;
    match store.execute_statement(query).await? {
        StatementOutcome::RowSet(ResultSet { columns, rows }) => Ok(QuestionResult {
            row_count: rows.len(),
            columns,
            rows,
        }),
        StatementOutcome::Affected(_) => Err(SageError::NotRowReturning(query.to_string())),
    }
}

/// Describes and dumps every table of the schema for `question_id`.
pub async fn question_schema(question_id: u32) -> Result<QuestionSchema, SageError> {
    let store = build(question_id).await?;
    let mut schema = BTreeMap::new();
    for table in list_tables(&store).await? {
        let columns = describe_table(&store, &table).await?;
        schema.insert(table, columns);
    }
    let data = snapshot(&store).await?;
    Ok(QuestionSchema { schema, data })
}

fn starts_with_select(query: &str) -> bool {
    query.trim_start().to_uppercase().starts_with("SELECT")
}
