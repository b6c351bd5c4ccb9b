//! # Server Endpoint Tests
//!
//! End-to-end tests for the endpoints that never contact the AI provider:
//! the SQL sandbox, the practice catalog, and problem sources.

mod common;

use crate::common::TestApp;
use anyhow::Result;
use httpmock::Method::GET;
use reqwest::StatusCode;
use serde_json::{json, Value};

const SETUP: &str = "CREATE TABLE T(a INT); INSERT INTO T VALUES (1),(2);";

#[tokio::test]
async fn test_root_and_health() -> Result<()> {
    let app = TestApp::spawn().await?;

    let root = app.client.get(app.url("/")).send().await?;
    assert_eq!(root.status(), StatusCode::OK);
    assert_eq!(root.text().await?, "sqlsage server is running.");

    let health = app.client.get(app.url("/health")).send().await?;
    assert_eq!(health.text().await?, "OK");
    Ok(())
}

#[tokio::test]
async fn test_execute_sql_reports_last_mutation_and_tables() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(app.url("/execute-sql"))
        .json(&json!({
            "setup_sql": SETUP,
            "queries": ["SELECT * FROM T", "INSERT INTO T VALUES (3)"]
        }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(body["last_query_type"], "mutating");
    assert_eq!(body["last_query_text"], "INSERT INTO T VALUES (3)");
    assert_eq!(body["affected_rows"], 1);
    assert!(body["result"].is_null());
    assert_eq!(
        body["tables"]["T"],
        json!({"columns": ["a"], "rows": [[1], [2], [3]]})
    );
    Ok(())
}

#[tokio::test]
async fn test_execute_sql_reports_last_result_set() -> Result<()> {
    let app = TestApp::spawn().await?;

    let body: Value = app
        .client
        .post(app.url("/execute-sql"))
        .json(&json!({
            "setup_sql": SETUP,
            "queries": ["DELETE FROM T WHERE a = 2", "SELECT a, a * 2 AS twice FROM T", ""]
        }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(body["last_query_type"], "row_returning");
    assert!(body["affected_rows"].is_null());
    assert_eq!(
        body["result"],
        json!({"columns": ["a", "twice"], "rows": [[1, 2]]})
    );
    Ok(())
}

#[tokio::test]
async fn test_execute_sql_errors_are_bad_requests() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        json!({"setup_sql": "", "queries": ["SELECT 1"]}),
        json!({"setup_sql": SETUP, "queries": []}),
        json!({"setup_sql": "CREATE TABLE (", "queries": ["SELECT 1"]}),
        json!({"setup_sql": SETUP, "queries": ["INSERT INTO T VALUES (5)", "SELECT nope FROM T"]}),
    ];
    for payload in cases {
        let response = app
            .client
            .post(app.url("/execute-sql"))
            .json(&payload)
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{payload}");
        let body: Value = response.json().await?;
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }
    Ok(())
}

#[tokio::test]
async fn test_statement_error_names_the_failing_statement() -> Result<()> {
    let app = TestApp::spawn().await?;

    let body: Value = app
        .client
        .post(app.url("/execute-sql"))
        .json(&json!({"setup_sql": SETUP, "queries": ["SELECT nope FROM T"]}))
        .send()
        .await?
        .json()
        .await?;

    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.contains("SELECT nope FROM T"), "{message}");
    Ok(())
}

#[tokio::test]
async fn test_practice_catalog_lists_twenty_problems() -> Result<()> {
    let app = TestApp::spawn().await?;

    let body: Value = app
        .client
        .get(app.url("/get-practice-questions"))
        .send()
        .await?
        .json()
        .await?;

    let questions = body["questions"].as_array().cloned().unwrap_or_default();
    assert_eq!(questions.len(), 20);
    assert_eq!(questions[3]["title"], "Second Highest Salary");
    for (index, question) in questions.iter().enumerate() {
        assert_eq!(question["id"], index + 1);
        assert!(question["solution"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn test_execute_question_runs_select_queries() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(app.url("/execute-question"))
        .json(&json!({
            "question_id": 4,
            "query": "SELECT MAX(salary) AS SecondHighestSalary FROM Employee WHERE salary < (SELECT MAX(salary) FROM Employee)"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(
        body,
        json!({"columns": ["SecondHighestSalary"], "rows": [[200]], "row_count": 1})
    );
    Ok(())
}

#[tokio::test]
async fn test_execute_question_rejects_writes() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(app.url("/execute-question"))
        .json(&json!({"question_id": 1, "query": "DELETE FROM Employee"}))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Only SELECT queries are allowed");
    Ok(())
}

#[tokio::test]
async fn test_question_schema_returns_columns_and_rows() -> Result<()> {
    let app = TestApp::spawn().await?;

    let body: Value = app
        .client
        .post(app.url("/get-question-schema"))
        .json(&json!({"question_id": 2}))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(
        body["schema"]["Employee"][0],
        json!({"name": "id", "type": "INTEGER", "notnull": false, "pk": true})
    );
    assert_eq!(body["data"]["Employee"]["rows"].as_array().map(Vec::len), Some(4));

    let unknown: Value = app
        .client
        .post(app.url("/get-question-schema"))
        .json(&json!({"question_id": 999}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(unknown, json!({"schema": {}, "data": {}}));
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_problem_source_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .get(app.url("/fetch-problems?source=leetcode"))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Problem source 'leetcode' is not configured");
    Ok(())
}

#[tokio::test]
async fn test_configured_problem_source_is_passed_through() -> Result<()> {
    let upstream = httpmock::MockServer::start();
    let listing = upstream.mock(|when, then| {
        when.method(GET).path("/problems.json");
        then.status(200)
            .json_body(json!({"problems": [{"slug": "two-sum"}]}));
    });
    let broken = upstream.mock(|when, then| {
        when.method(GET).path("/broken.json");
        then.status(503);
    });

    let app = TestApp::spawn_with_extra_config(&format!(
        "problem_sources:\n  leetcode: \"{}\"\n  flaky: \"{}\"\n",
        upstream.url("/problems.json"),
        upstream.url("/broken.json"),
    ))
    .await?;

    let body: Value = app
        .client
        .get(app.url("/fetch-problems?source=leetcode"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body, json!({"problems": [{"slug": "two-sum"}]}));
    listing.assert();

    let failed = app
        .client
        .get(app.url("/fetch-problems?source=flaky"))
        .send()
        .await?;
    assert_eq!(failed.status(), StatusCode::BAD_GATEWAY);
    broken.assert();
    Ok(())
}
