//! # Default Review Prompts
//!
//! The default prompt templates for the three review tasks. These are loaded
//! programmatically by the server and can be overridden by `config.yml` or
//! `prompt.yml`. Placeholders use `{name}` syntax and are filled by plain string
//! replacement.

/// Appended to the user prompt whenever a JSON answer is expected.
pub const JSON_ONLY_REMINDER: &str =
    "\n\nIMPORTANT: Return ONLY valid JSON. No markdown, no code blocks, no extra text.";

// --- Query Analysis ---
pub const QUERY_ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert SQL query reviewer and performance engineer.
Your job:
- Analyze SQL queries for syntax issues, logical issues, and performance/maintainability problems.
- Output STRICT JSON only, no markdown, no code blocks, just pure JSON."#;

/// Placeholders: `{dialect}`, `{schema_info}`, `{query}`.
pub const QUERY_ANALYSIS_USER_PROMPT: &str = r#"You must respond ONLY with valid JSON.
Dialect: "{dialect}"
Schema info:
{schema_info}

SQL query:
{query}

Return JSON in this exact format:
{
  "syntax_issues": ["issue1", "issue2"],
  "logical_issues": ["issue1"],
  "performance_issues": ["issue1"],
  "needs_optimization": true,
  "overall_assessment": "brief assessment",
  "hints_for_improvement": ["hint1", "hint2"]
}"#;

// --- Query Optimization ---
pub const QUERY_OPTIMIZATION_SYSTEM_PROMPT: &str = r#"You are an expert SQL optimizer.
Generate multiple optimized variations of the given query.
Return STRICT JSON only, no markdown, no code blocks, just pure JSON."#;

/// Placeholders: `{query}`, `{analysis}`, `{query_preview}`.
pub const QUERY_OPTIMIZATION_USER_PROMPT: &str = r#"You must respond ONLY with valid JSON.
Original SQL:
{query}

Detected issues:
{analysis}

Generate optimized versions in this exact format:
{
  "original": "{query_preview}",
  "optimized_variants": [
    {
      "id": 1,
      "optimization_level": "conservative",
      "optimized_query": "SELECT ...",
      "changes_made": ["change1", "change2"]
    },
    {
      "id": 2,
      "optimization_level": "balanced",
      "optimized_query": "SELECT ...",
      "changes_made": ["change1"]
    },
    {
      "id": 3,
      "optimization_level": "aggressive",
      "optimized_query": "SELECT ...",
      "changes_made": ["change1"]
    }
  ]
}"#;

// --- Query Explanation ---
pub const QUERY_EXPLANATION_SYSTEM_PROMPT: &str = r#"You are a senior backend engineer and SQL instructor.
Explain SQL queries in simple language using markdown format."#;

/// Placeholders: `{dialect}`, `{original}`, `{optimized}`.
pub const QUERY_EXPLANATION_USER_PROMPT: &str = r#"Dialect: {dialect}

Original query:
{original}

Optimized query:
{optimized}

Explain in markdown format:
1. What the original query does
2. What optimizations were made
3. Why these optimizations improve performance
4. Any trade-offs to consider

Keep it simple and educational."#;
