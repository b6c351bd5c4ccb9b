//! # Sandbox Tests
//!
//! Exercises the provision → setup → sequence → snapshot path against real
//! in-memory Turso stores. Every test builds its own store, so they are isolated
//! and need no cleanup.

mod common;

use crate::common::{expect_rows, int_rows, setup_tracing};
use anyhow::Result;
use sqlsage::{
    run_sandbox,
    sandbox::{describe_table, list_tables, run_statements, snapshot},
    SageError, StatementKind, StatementOutcome, Store,
};

const SETUP: &str = "CREATE TABLE T(a INT); INSERT INTO T VALUES (1),(2);";

fn queries(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_last_mutating_statement_wins_and_snapshot_reflects_it() -> Result<()> {
    setup_tracing();

    let result = run_sandbox(
        SETUP,
        &queries(&["SELECT * FROM T", "INSERT INTO T VALUES (3)"]),
    )
    .await?;

    assert_eq!(result.affected_rows(), Some(1));
    assert!(result.result().is_none());
    assert_eq!(result.last_kind(), Some(StatementKind::Mutating));
    assert_eq!(result.last_text(), Some("INSERT INTO T VALUES (3)"));

    let table = &result.tables["T"];
    assert_eq!(table.columns, vec!["a".to_string()]);
    assert_eq!(table.rows, int_rows(&[&[1], &[2], &[3]]));
    Ok(())
}

#[tokio::test]
async fn test_last_row_returning_statement_clears_affected_rows() -> Result<()> {
    setup_tracing();

    let result = run_sandbox(
        SETUP,
        &queries(&[
            "INSERT INTO T VALUES (3)",
            "UPDATE T SET a = a * 10 WHERE a > 1",
            "SELECT a FROM T ORDER BY a",
        ]),
    )
    .await?;

    assert_eq!(result.affected_rows(), None);
    let rows = result.result().expect("last statement returned rows");
    assert_eq!(rows.columns, vec!["a".to_string()]);
    assert_eq!(rows.rows, int_rows(&[&[1], &[20], &[30]]));
    Ok(())
}

#[tokio::test]
async fn test_blank_statements_are_skipped() -> Result<()> {
    setup_tracing();

    let result = run_sandbox(SETUP, &queries(&["DELETE FROM T WHERE a = 1", "   ", "\n"])).await?;

    // The trailing blanks do not displace the DELETE as the last statement.
    assert_eq!(result.affected_rows(), Some(1));
    assert_eq!(result.last_text(), Some("DELETE FROM T WHERE a = 1"));
    assert_eq!(result.tables["T"].rows, int_rows(&[&[2]]));
    Ok(())
}

#[tokio::test]
async fn test_all_blank_sequence_yields_no_last_statement() -> Result<()> {
    setup_tracing();

    let store = Store::create().await?;
    store.apply_script(SETUP).await?;

    let last = run_statements(&store, &["", "  \t "]).await?;
    assert!(last.is_none());

    let none: [&str; 0] = [];
    assert!(run_statements(&store, &none).await?.is_none());

    let tables = snapshot(&store).await?;
    assert_eq!(tables.len(), 1);
    assert_eq!(tables["T"].rows, int_rows(&[&[1], &[2]]));
    Ok(())
}

#[tokio::test]
async fn test_classification_follows_result_shape_not_keyword() -> Result<()> {
    setup_tracing();

    let store = Store::create().await?;
    store.apply_script(SETUP).await?;

    let cte = store
        .execute_statement("WITH doubled AS (SELECT a * 2 AS d FROM T) SELECT d FROM doubled")
        .await?;
    assert_eq!(cte.kind(), StatementKind::RowReturning);
    assert_eq!(expect_rows(cte).rows, int_rows(&[&[2], &[4]]));

    let lowercase = store.execute_statement("  select count(*) as n from T").await?;
    assert_eq!(expect_rows(lowercase).rows, int_rows(&[&[2]]));

    let ddl = store.execute_statement("CREATE TABLE U(b TEXT)").await?;
    assert_eq!(ddl.kind(), StatementKind::Mutating);
    Ok(())
}

#[tokio::test]
async fn test_explain_and_returning_are_row_returning() -> Result<()> {
    setup_tracing();

    let store = Store::create().await?;
    store.apply_script(SETUP).await?;

    let explain = store.execute_statement("EXPLAIN SELECT * FROM T").await?;
    assert_eq!(explain.kind(), StatementKind::RowReturning);
    let plan = expect_rows(explain);
    assert!(!plan.columns.is_empty());
    assert!(plan.row_count() > 0);

    let returning = store
        .execute_statement("INSERT INTO T VALUES (9) RETURNING a")
        .await?;
    assert_eq!(returning.kind(), StatementKind::RowReturning);
    let inserted = expect_rows(returning);
    assert_eq!(inserted.columns, vec!["a"]);
    assert_eq!(inserted.rows, int_rows(&[&[9]]));

    let after = expect_rows(store.execute_statement("SELECT a FROM T").await?);
    assert_eq!(after.rows, int_rows(&[&[1], &[2], &[9]]));
    Ok(())
}

#[tokio::test]
async fn test_tables_with_awkward_names_are_snapshotted_and_described() -> Result<()> {
    setup_tracing();

    let result = run_sandbox(
        r#"CREATE TABLE "order items"(id INTEGER PRIMARY KEY, label TEXT NOT NULL);
           CREATE TABLE "say ""hi"""(x INT);
           INSERT INTO "order items" VALUES (1, 'pen');"#,
        &queries(&[r#"INSERT INTO "say ""hi""" VALUES (5)"#]),
    )
    .await?;

    assert_eq!(result.tables.len(), 2);
    assert_eq!(result.tables["order items"].columns, vec!["id", "label"]);
    assert_eq!(result.tables["say \"hi\""].rows, int_rows(&[&[5]]));

    let store = Store::create().await?;
    store
        .apply_script(r#"CREATE TABLE "order items"(id INTEGER PRIMARY KEY, label TEXT NOT NULL);"#)
        .await?;
    assert_eq!(list_tables(&store).await?, vec!["order items".to_string()]);

    let columns = describe_table(&store, "order items").await?;
    let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "label"]);
    assert!(columns[0].is_primary_key);
    assert!(columns[1].not_null);
    assert_eq!(columns[1].declared_type, "TEXT");
    Ok(())
}

#[tokio::test]
async fn test_failing_statement_keeps_earlier_mutations() -> Result<()> {
    setup_tracing();

    let store = Store::create().await?;
    store.apply_script(SETUP).await?;

    let err = run_statements(
        &store,
        &[
            "INSERT INTO T VALUES (10)",
            "INSERT INTO missing_table VALUES (1)",
            "INSERT INTO T VALUES (11)",
        ],
    )
    .await
    .expect_err("second statement must fail");

    match err {
        SageError::Statement { statement, message } => {
            assert_eq!(statement, "INSERT INTO missing_table VALUES (1)");
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let rows = expect_rows(store.execute_statement("SELECT a FROM T ORDER BY a").await?);
    assert_eq!(rows.rows, int_rows(&[&[1], &[2], &[10]]));
    Ok(())
}

#[tokio::test]
async fn test_setup_failure_stops_the_batch() -> Result<()> {
    setup_tracing();

    let store = Store::create().await?;
    let err = store
        .apply_script(
            "CREATE TABLE first(x INT);
             INSERT INTO nowhere VALUES (1);
             CREATE TABLE second(y INT);",
        )
        .await
        .expect_err("setup must fail");
    assert!(matches!(err, SageError::Setup(_)));

    let tables = list_tables(&store).await?;
    assert!(!tables.contains(&"second".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_run_sandbox_reports_setup_and_statement_errors() -> Result<()> {
    setup_tracing();

    let setup_err = run_sandbox("CREATE TABLE broken(", &queries(&["SELECT 1"]))
        .await
        .expect_err("invalid setup");
    assert!(matches!(setup_err, SageError::Setup(_)));

    let stmt_err = run_sandbox(SETUP, &queries(&["SELECT nope FROM T"]))
        .await
        .expect_err("invalid statement");
    assert!(matches!(stmt_err, SageError::Statement { .. }));
    Ok(())
}

#[tokio::test]
async fn test_run_sandbox_rejects_empty_input() {
    setup_tracing();

    let empty_setup = run_sandbox("   ", &queries(&["SELECT 1"])).await;
    assert!(matches!(empty_setup, Err(SageError::InvalidInput(_))));

    let no_queries = run_sandbox(SETUP, &[]).await;
    assert!(matches!(no_queries, Err(SageError::InvalidInput(_))));
}

#[tokio::test]
async fn test_snapshot_handles_empty_tables_and_empty_stores() -> Result<()> {
    setup_tracing();

    let store = Store::create().await?;
    assert!(snapshot(&store).await?.is_empty());

    store
        .apply_script("CREATE TABLE empty_one(x INTEGER, y TEXT);")
        .await?;
    let tables = snapshot(&store).await?;
    let empty = &tables["empty_one"];
    assert_eq!(empty.columns, vec!["x".to_string(), "y".to_string()]);
    assert!(empty.rows.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_stores_are_isolated() -> Result<()> {
    setup_tracing();

    let first = Store::create().await?;
    first.apply_script(SETUP).await?;

    let second = Store::create().await?;
    assert!(list_tables(&second).await?.is_empty());
    assert!(matches!(
        second.execute_statement("SELECT * FROM T").await,
        Err(SageError::Statement { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_values_are_converted_to_json() -> Result<()> {
    setup_tracing();

    let store = Store::create().await?;
    let outcome = store
        .execute_statement("SELECT 1 AS i, 2.5 AS r, 'txt' AS t, NULL AS n")
        .await?;
    let set = expect_rows(outcome);
    assert_eq!(set.columns, vec!["i", "r", "t", "n"]);
    assert_eq!(
        set.rows,
        vec![vec![
            serde_json::json!(1),
            serde_json::json!(2.5),
            serde_json::json!("txt"),
            serde_json::Value::Null
        ]]
    );
    assert!(matches!(
        store.execute_statement("CREATE TABLE z(q INT)").await?,
        StatementOutcome::Affected(_)
    ));
    Ok(())
}
