//! Table enumeration and materialization for a finished sandbox run.

use super::{sql, Store};
use crate::{
    errors::SageError,
    types::{ColumnDescriptor, ResultSet, StatementOutcome},
};
use std::collections::BTreeMap;
use tracing::{debug, info};
use turso::Value as TursoValue;

/// Lists every user-defined table in the store.
pub async fn list_tables(store: &Store) -> Result<Vec<String>, SageError> {
    let mut rows = store
        .connection()
        .query(sql::LIST_USER_TABLES, ())
        .await
        .map_err(|e| SageError::StoreOperation(e.to_string()))?;

    let mut tables = Vec::new();
    while let Some(row) = rows
        .next()
        .await
        .map_err(|e| SageError::StoreOperation(e.to_string()))?
    {
        match row
            .get_value(0)
            .map_err(|e| SageError::StoreOperation(e.to_string()))?
        {
            TursoValue::Text(name) => tables.push(name),
            other => {
                return Err(SageError::StoreOperation(format!(
                    "Unexpected table name in catalog: {other:?}"
                )))
            }
        }
    }
    Ok(tables)
}

/// Materializes the columns and rows of every user table.
///
/// Rows keep the engine's storage order. The map itself is sorted by table name,
/// which callers should treat as incidental.
pub async fn snapshot(store: &Store) -> Result<BTreeMap<String, ResultSet>, SageError> {
    let mut tables = BTreeMap::new();
    for name in list_tables(store).await? {
        let outcome = store
            .execute_statement(&sql::select_all(&name))
            .await
            .map_err(|e| table_read_error(&name, e))?;
        let contents = match outcome {
            StatementOutcome::RowSet(set) => set,
            // `SELECT *` always has a shape; an empty one means a table with no columns.
            StatementOutcome::Affected(_) => ResultSet::default(),
        };
        debug!(table = %name, rows = contents.row_count(), "Captured table snapshot.");
        tables.insert(name, contents);
    }
    info!("Snapshot captured {} tables.", tables.len());
    Ok(tables)
}

/// Returns the column descriptors of `table`, in declaration order.
pub async fn describe_table(
    store: &Store,
    table: &str,
) -> Result<Vec<ColumnDescriptor>, SageError> {
    let mut rows = store
        .connection()
        .query(&sql::table_info(table), ())
        .await
        .map_err(|e| SageError::StoreOperation(e.to_string()))?;

    let mut columns = Vec::new();
    while let Some(row) = rows
        .next()
        .await
        .map_err(|e| SageError::StoreOperation(e.to_string()))?
    {
        let name = match row.get_value(1) {
            Ok(TursoValue::Text(name)) => name,
            _ => continue,
        };
        let declared_type = match row.get_value(2) {
            Ok(TursoValue::Text(t)) => t,
            _ => String::new(),
        };
        columns.push(ColumnDescriptor {
            name,
            declared_type,
            not_null: is_truthy(row.get_value(3).ok()),
            is_primary_key: is_truthy(row.get_value(5).ok()),
        });
    }
    Ok(columns)
}

// Reading a table is the sandbox's own query, so a failure is never blamed on user SQL.
fn table_read_error(table: &str, err: SageError) -> SageError {
    let reason = match err {
        SageError::Statement { message, .. } => message,
        other => other.to_string(),
    };
    SageError::StoreOperation(format!("Failed to read table '{table}': {reason}"))
}

// PRAGMA flags come back as integers; `pk` is the 1-based key position.
fn is_truthy(value: Option<TursoValue>) -> bool {
    matches!(value, Some(TursoValue::Integer(i)) if i != 0)
}
