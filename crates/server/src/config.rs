//! # Application Configuration
//!
//! This module defines the configuration structure for the `sqlsage-server` and
//! provides the logic for loading it from a `config.yml` file and environment
//! variables.

use config::{
    Config as ConfigBuilder, Environment, File, FileFormat, Value as ConfigValue,
    ValueKind as ConfigValueKind,
};
use regex::Regex;
use serde::Deserialize;
use sqlsage::{
    prompts::{
        QUERY_ANALYSIS_SYSTEM_PROMPT, QUERY_ANALYSIS_USER_PROMPT,
        QUERY_EXPLANATION_SYSTEM_PROMPT, QUERY_EXPLANATION_USER_PROMPT,
        QUERY_OPTIMIZATION_SYSTEM_PROMPT, QUERY_OPTIMIZATION_USER_PROMPT,
    },
    providers::ai::openai::DEFAULT_GROQ_MODEL,
};
use std::collections::HashMap;
use std::env;
use std::fs;
use tracing::info;

/// Task names the handlers resolve from [`AppConfig::tasks`].
pub const QUERY_ANALYSIS_TASK: &str = "query_analysis";
pub const QUERY_OPTIMIZATION_TASK: &str = "query_optimization";
pub const QUERY_EXPLANATION_TASK: &str = "query_explanation";

/// The provider name the built-in tasks point at.
pub const DEFAULT_PROVIDER_NAME: &str = "default";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// A map of named, reusable AI provider configurations.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// A map of tasks, each specifying a provider and prompts.
    pub tasks: HashMap<String, TaskConfig>,
    /// External problem sources, by name. None are configured out of the box.
    #[serde(default)]
    pub problem_sources: HashMap<String, String>,
}

fn default_port() -> u16 {
    5000
}

/// A reusable configuration for a specific AI provider instance.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider: "openai" for any chat-completions API, or "gemini".
    pub provider: String,
    /// The API URL. Optional; derived from the provider type when absent.
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    /// The model to request. Chat-completions providers fall back to the Groq default.
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds. Unset means no deadline.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// The model this provider will request, if one can be determined.
    pub fn effective_model(&self) -> Option<&str> {
        match (self.model_name.as_deref(), self.provider.as_str()) {
            (Some(name), _) => Some(name),
            (None, "openai") => Some(DEFAULT_GROQ_MODEL),
            (None, _) => None,
        }
    }
}

/// Defines the prompts and provider for a specific application task.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TaskConfig {
    /// The key of the provider to use from the `providers` map.
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
}

/// The built-in review tasks as a `config::Value` map. This is the base layer.
fn build_default_tasks() -> HashMap<String, ConfigValue> {
    let tasks = [
        (
            QUERY_ANALYSIS_TASK,
            QUERY_ANALYSIS_SYSTEM_PROMPT,
            QUERY_ANALYSIS_USER_PROMPT,
        ),
        (
            QUERY_OPTIMIZATION_TASK,
            QUERY_OPTIMIZATION_SYSTEM_PROMPT,
            QUERY_OPTIMIZATION_USER_PROMPT,
        ),
        (
            QUERY_EXPLANATION_TASK,
            QUERY_EXPLANATION_SYSTEM_PROMPT,
            QUERY_EXPLANATION_USER_PROMPT,
        ),
    ];

    tasks
        .into_iter()
        .map(|(name, sys, user)| {
            let mut table = HashMap::new();
            table.insert(
                "provider".to_string(),
                ConfigValue::from(DEFAULT_PROVIDER_NAME),
            );
            table.insert("system_prompt".to_string(), ConfigValue::from(sys));
            table.insert("user_prompt".to_string(), ConfigValue::from(user));
            (
                name.to_string(),
                ConfigValue::new(None, ConfigValueKind::Table(table)),
            )
        })
        .collect()
}

// Reads a file and expands `${VAR}` references from the environment.
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded_content.into_owned()))
}

/// Loads the application configuration from files and environment variables.
///
/// Layers, lowest precedence first:
/// 1. the built-in review tasks;
/// 2. `config_path_override`, else `config.yml`, else `config.<AI_PROVIDER>.yml`;
/// 3. an optional `prompt.yml` with prompt overrides;
/// 4. plain environment variables for top-level keys such as `PORT`;
/// 5. `SQLSAGE_...` variables for nested keys (e.g. `SQLSAGE_PROVIDERS__DEFAULT__MODEL_NAME`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let base_path = env!("CARGO_MANIFEST_DIR");
    let mut builder = ConfigBuilder::builder().set_default("tasks", build_default_tasks())?;

    let main_config_path = if let Some(override_path) = config_path_override {
        override_path.to_string()
    } else {
        let user_config_path = format!("{base_path}/config.yml");
        if std::path::Path::new(&user_config_path).exists() {
            info!("Loading user-defined configuration from '{user_config_path}'.");
            user_config_path
        } else {
            let provider = env::var("AI_PROVIDER").unwrap_or_else(|_| "groq".to_string());
            let fallback_path = format!("{base_path}/config.{provider}.yml");
            info!("'{user_config_path}' not found. Falling back to '{fallback_path}' based on AI_PROVIDER='{provider}'.");
            fallback_path
        }
    };

    let main_content = read_and_substitute(&main_config_path)?
        .ok_or_else(|| ConfigError::NotFound(format!("Main config file not found at '{main_config_path}'. Please ensure 'config.yml' exists or your AI_PROVIDER is set to load a valid template ('groq' or 'gemini').")))?;
    builder = builder.add_source(File::from_str(&main_content, FileFormat::Yaml));

    let user_prompt_path = format!("{base_path}/prompt.yml");
    if let Some(user_prompts_content) = read_and_substitute(&user_prompt_path)? {
        info!("Loading user prompt overrides from '{user_prompt_path}'.");
        builder = builder.add_source(File::from_str(&user_prompts_content, FileFormat::Yaml));
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("SQLSAGE")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
