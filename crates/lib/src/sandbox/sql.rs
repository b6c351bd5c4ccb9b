//! # Sandbox SQL
//!
//! Introspection queries issued by the sandbox itself, kept apart from the
//! execution logic so the SQLite-specific catalog syntax lives in one place.

/// Lists user tables, skipping the engine's own `sqlite_*` catalog tables.
pub const LIST_USER_TABLES: &str =
    "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%';";

/// Quotes an identifier so table names with spaces or quotes survive interpolation.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Returns a query reading every row of `table` in storage order.
pub fn select_all(table: &str) -> String {
    format!("SELECT * FROM {};", quote_identifier(table))
}

/// Returns the `PRAGMA table_info` query for `table`.
///
/// Result columns: cid, name, type, notnull, dflt_value, pk.
pub fn table_info(table: &str) -> String {
    format!("PRAGMA table_info({});", quote_identifier(table))
}
