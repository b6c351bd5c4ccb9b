//! # Ephemeral SQL Sandbox
//!
//! Every sandbox operation works on its own [`Store`]: a fresh in-memory Turso
//! database with a single connection. The store is dropped when the operation
//! returns, whichever path it returns by, so nothing outlives one request.
//!
//! The flow is provision → [`Store::apply_script`] → [`run_statements`] →
//! [`snapshot`], wrapped by [`run_sandbox`].

pub mod sequencer;
pub mod snapshot;
pub mod sql;

pub use sequencer::run_statements;
pub use snapshot::{describe_table, list_tables, snapshot};

use crate::{
    errors::SageError,
    types::{ExecutionResult, ResultSet, StatementOutcome},
};
use serde_json::Value;
use std::fmt::{self, Debug};
use tracing::{debug, info, warn};
use turso::{Connection, Database, Value as TursoValue};

/// One request-scoped, in-memory database.
///
/// `":memory:"` databases are never shared between `Builder` calls, so two
/// stores cannot see each other's tables.
pub struct Store {
    conn: Connection,
    // Kept alive for as long as the connection is in use.
    _db: Database,
}

impl Store {
    /// Provisions a fresh, empty store.
    pub async fn create() -> Result<Self, SageError> {
        let db = turso::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| SageError::StoreConnection(e.to_string()))?;
        let conn = db
            .connect()
            .map_err(|e| SageError::StoreConnection(e.to_string()))?;
        debug!("Provisioned in-memory sandbox store.");
        Ok(Self { conn, _db: db })
    }

    /// Applies a setup script (DDL and seed data) as a single batch.
    ///
    /// Statements are split by the engine itself, so semicolons inside string
    /// literals are safe. Execution stops at the first failing statement.
    pub async fn apply_script(&self, script: &str) -> Result<(), SageError> {
        debug!(script = %script, "--> Applying setup script");
        self.conn.execute_batch(script).await.map_err(|e| {
            warn!("Setup script failed: {e}");
            SageError::Setup(e.to_string())
        })
    }

    /// Executes one statement and reports its runtime shape.
    ///
    /// A prepared statement that exposes columns is drained into a
    /// [`StatementOutcome::RowSet`]; anything else is executed for its side
    /// effects and reported as [`StatementOutcome::Affected`]. `EXPLAIN` and
    /// `INSERT ... RETURNING` therefore come back as row sets.
    pub async fn execute_statement(&self, statement: &str) -> Result<StatementOutcome, SageError> {
        debug!(statement = %statement, "--> Executing sandbox statement");
        let fail = |e: turso::Error| SageError::Statement {
            statement: statement.to_string(),
            message: e.to_string(),
        };

        let mut stmt = self.conn.prepare(statement).await.map_err(fail)?;
        let columns: Vec<String> = stmt
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        if columns.is_empty() {
            let changes = stmt.execute(()).await.map_err(fail)?;
            return Ok(StatementOutcome::Affected(changes));
        }

        let mut rows = stmt.query(()).await.map_err(fail)?;
        let mut collected = Vec::new();
        while let Some(row) = rows.next().await.map_err(fail)? {
            let mut values = Vec::with_capacity(columns.len());
            for i in 0..columns.len() {
                values.push(turso_value_to_json(row.get_value(i).map_err(fail)?));
            }
            collected.push(values);
        }

        Ok(StatementOutcome::RowSet(ResultSet {
            columns,
            rows: collected,
        }))
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

/// Converts a Turso value to a serde_json::Value.
pub(crate) fn turso_value_to_json(v: TursoValue) -> Value {
    match v {
        TursoValue::Null => Value::Null,
        TursoValue::Integer(i) => Value::Number(i.into()),
        TursoValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        TursoValue::Text(s) => Value::String(s),
        TursoValue::Blob(_) => Value::String("<blob>".to_string()),
    }
}

/// Runs a setup script followed by a query sequence in a throwaway store.
///
/// Returns the last non-empty statement's outcome and a snapshot of every user
/// table. On any failure no snapshot is produced and the store is discarded.
pub async fn run_sandbox(setup_sql: &str, queries: &[String]) -> Result<ExecutionResult, SageError> {
    if setup_sql.trim().is_empty() {
        return Err(SageError::InvalidInput(
            "Setup SQL cannot be empty".to_string(),
        ));
    }
    if queries.is_empty() {
        return Err(SageError::InvalidInput(
            "At least one query is required".to_string(),
        ));
    }

    info!("Running sandbox with {} queries.", queries.len());
    let store = Store::create().await?;
    store.apply_script(setup_sql).await?;
    let last_statement = run_statements(&store, queries).await?;
    let tables = snapshot(&store).await?;

    Ok(ExecutionResult {
        last_statement,
        tables,
    })
}
