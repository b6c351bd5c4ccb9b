//! # SQL Review
//!
//! A thin façade over an [`AiProvider`] for the review features: analysis of a
//! query, optimized rewrites, and a plain-language explanation of the change.
//!
//! The model is trusted as an opaque collaborator. Query text is substituted into
//! the prompt templates verbatim and never inspected here. JSON answers are
//! unwrapped from markdown fences and deserialized; a reply that does not parse is
//! reported as [`SageError::ReviewParse`], distinct from any SQL failure.

use crate::{
    errors::SageError,
    prompts::{
        JSON_ONLY_REMINDER, QUERY_ANALYSIS_SYSTEM_PROMPT, QUERY_ANALYSIS_USER_PROMPT,
        QUERY_EXPLANATION_SYSTEM_PROMPT, QUERY_EXPLANATION_USER_PROMPT,
        QUERY_OPTIMIZATION_SYSTEM_PROMPT, QUERY_OPTIMIZATION_USER_PROMPT,
    },
    providers::ai::AiProvider,
    sandbox::run_sandbox,
    types::ExecutionResult,
};
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// The system/user prompt pair for one review task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl ReviewPrompt {
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
        }
    }

    pub fn default_analysis() -> Self {
        Self::new(QUERY_ANALYSIS_SYSTEM_PROMPT, QUERY_ANALYSIS_USER_PROMPT)
    }

    pub fn default_optimization() -> Self {
        Self::new(QUERY_OPTIMIZATION_SYSTEM_PROMPT, QUERY_OPTIMIZATION_USER_PROMPT)
    }

    pub fn default_explanation() -> Self {
        Self::new(QUERY_EXPLANATION_SYSTEM_PROMPT, QUERY_EXPLANATION_USER_PROMPT)
    }
}

/// A provider paired with the prompts it should be driven with.
#[derive(Debug, Clone, Copy)]
pub struct ReviewTask<'a> {
    pub provider: &'a dyn AiProvider,
    pub prompt: &'a ReviewPrompt,
}

/// The structured review of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    pub syntax_issues: Vec<String>,
    pub logical_issues: Vec<String>,
    pub performance_issues: Vec<String>,
    pub needs_optimization: bool,
    pub overall_assessment: String,
    pub hints_for_improvement: Vec<String>,
    /// Any additional keys the model chose to include.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Optimization {
    pub original: String,
    pub optimized_variants: Vec<OptimizedVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizedVariant {
    pub id: u32,
    pub optimization_level: String,
    pub optimized_query: String,
    pub changes_made: Vec<String>,
}

/// Input for [`analyze_query`].
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeRequest<'a> {
    pub query: &'a str,
    pub dialect: &'a str,
    pub schema_info: &'a str,
}

/// Everything the compile flow produces: the sandbox run plus its review.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileReport {
    pub execution: ExecutionResult,
    pub analysis: Analysis,
    pub optimized: Option<Optimization>,
}

/// Fills `{name}` placeholders from `values` in a single pass.
///
/// Substituted text is never rescanned, so a query that happens to contain
/// `{analysis}` stays untouched. Unknown placeholders and JSON braces are left as is.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> Result<String, SageError> {
    let re = Regex::new(r"\{([a-z_]+)\}")?;
    let rendered = re.replace_all(template, |caps: &regex::Captures| {
        let key = &caps[1];
        values
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
            .unwrap_or_else(|| caps[0].to_string())
    });
    Ok(rendered.into_owned())
}

/// Strips surrounding whitespace and a markdown code fence from a model reply.
pub fn clean_json_response(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    }
    if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Sends one prompt pair to the provider.
///
/// With `expect_json`, a strict-JSON reminder is appended to the user prompt and
/// the reply is unwrapped with [`clean_json_response`].
pub async fn complete(
    provider: &dyn AiProvider,
    system_prompt: &str,
    user_prompt: &str,
    expect_json: bool,
) -> Result<String, SageError> {
    let user_prompt = if expect_json {
        format!("{user_prompt}{JSON_ONLY_REMINDER}")
    } else {
        user_prompt.to_string()
    };

    debug!(system_prompt = %system_prompt, user_prompt = %user_prompt, "--> Sending prompts to AI Provider");
    let response = provider
        .generate(system_prompt, &user_prompt)
        .await
        .inspect_err(|e| warn!("AI provider call failed: {e}"))?;
    debug!("<-- Response from AI: {}", &response);

    if expect_json {
        Ok(clean_json_response(&response).to_string())
    } else {
        Ok(response)
    }
}

fn parse_review<T: DeserializeOwned>(stage: &'static str, body: &str) -> Result<T, SageError> {
    serde_json::from_str(body).map_err(|source| SageError::ReviewParse { stage, source })
}

/// Reviews a query for syntax, logic, and performance issues.
pub async fn analyze_query(
    task: ReviewTask<'_>,
    request: AnalyzeRequest<'_>,
) -> Result<Analysis, SageError> {
    if request.query.trim().is_empty() {
        return Err(SageError::InvalidInput("Query cannot be empty".to_string()));
    }
    info!(dialect = %request.dialect, "Analyzing query.");
    let user_prompt = render_template(
        &task.prompt.user_prompt,
        &[
            ("dialect", request.dialect),
            ("schema_info", request.schema_info),
            ("query", request.query),
        ],
    )?;
    let body = complete(task.provider, &task.prompt.system_prompt, &user_prompt, true).await?;
    parse_review("analysis", &body)
}

/// Asks for optimized rewrites of `query` given a previous analysis.
///
/// `analysis` is any JSON value; clients may send back a trimmed or edited review.
pub async fn optimize_query(
    task: ReviewTask<'_>,
    query: &str,
    analysis: &Value,
) -> Result<Optimization, SageError> {
    if query.trim().is_empty() {
        return Err(SageError::InvalidInput("Query cannot be empty".to_string()));
    }
    info!("Optimizing query.");
    let analysis_json = serde_json::to_string_pretty(analysis)?;
    let preview = query_preview(query);
    let user_prompt = render_template(
        &task.prompt.user_prompt,
        &[
            ("query", query),
            ("analysis", &analysis_json),
            ("query_preview", &preview),
        ],
    )?;
    let body = complete(task.provider, &task.prompt.system_prompt, &user_prompt, true).await?;
    parse_review("optimization", &body)
}

/// Explains, in markdown, how `optimized` differs from `original`.
pub async fn explain_difference(
    task: ReviewTask<'_>,
    original: &str,
    optimized: &str,
    dialect: &str,
) -> Result<String, SageError> {
    if original.trim().is_empty() || optimized.trim().is_empty() {
        return Err(SageError::InvalidInput(
            "Both queries are required".to_string(),
        ));
    }
    info!(dialect = %dialect, "Explaining optimization.");
    let user_prompt = render_template(
        &task.prompt.user_prompt,
        &[
            ("dialect", dialect),
            ("original", original),
            ("optimized", optimized),
        ],
    )?;
    complete(task.provider, &task.prompt.system_prompt, &user_prompt, false).await
}

/// Runs `query` in a sandbox built from `setup_sql`, then reviews it.
///
/// The sandbox runs first so SQL errors surface before any model call. Rewrites
/// are only requested when the analysis says the query needs optimization.
pub async fn compile_and_review(
    setup_sql: &str,
    query: &str,
    dialect: &str,
    analysis_task: ReviewTask<'_>,
    optimization_task: ReviewTask<'_>,
) -> Result<CompileReport, SageError> {
    if query.trim().is_empty() {
        return Err(SageError::InvalidInput("Query cannot be empty".to_string()));
    }
    let execution = run_sandbox(setup_sql, &[query.to_string()]).await?;

    let analysis = analyze_query(
        analysis_task,
        AnalyzeRequest {
            query,
            dialect,
            schema_info: setup_sql,
        },
    )
    .await?;

    let optimized = if analysis.needs_optimization {
        let analysis_value = serde_json::to_value(&analysis)?;
        Some(optimize_query(optimization_task, query, &analysis_value).await?)
    } else {
        debug!("Analysis reports no optimization needed.");
        None
    };

    Ok(CompileReport {
        execution,
        analysis,
        optimized,
    })
}

fn query_preview(query: &str) -> String {
    let head: String = query.chars().take(100).collect();
    format!("{head}...")
}
