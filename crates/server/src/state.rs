//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The `AppState` holds the configuration, the
//! resolved review tasks, and the instantiated AI provider clients.

use crate::config::{AppConfig, ProviderConfig};
use anyhow::anyhow;
use sqlsage::{
    providers::ai::{
        gemini::GeminiProvider,
        openai::{OpenAiCompatibleProvider, GROQ_CHAT_COMPLETIONS_URL},
        AiProvider, GenerationOptions,
    },
    review::{ReviewPrompt, ReviewTask},
};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tracing::info;

/// A fully resolved task configuration with non-optional fields.
#[derive(Clone, Debug)]
pub struct ResolvedTask {
    pub provider: String,
    pub prompt: ReviewPrompt,
}

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// A map of fully resolved tasks, ready for use by handlers.
    pub tasks: Arc<HashMap<String, ResolvedTask>>,
    /// A map of instantiated AI providers, keyed by their name from the config.
    pub ai_providers: Arc<HashMap<String, Box<dyn AiProvider>>>,
}

impl AppState {
    /// Looks up a task and the provider it runs on.
    pub fn review_task(&self, name: &str) -> anyhow::Result<ReviewTask<'_>> {
        let task = self
            .tasks
            .get(name)
            .ok_or_else(|| anyhow!("Task '{name}' not found in configuration"))?;
        let provider = self.ai_providers.get(&task.provider).ok_or_else(|| {
            anyhow!(
                "Provider '{}' for task '{name}' not found in configuration",
                task.provider
            )
        })?;
        Ok(ReviewTask {
            provider: &**provider,
            prompt: &task.prompt,
        })
    }
}

fn generation_options(config: &ProviderConfig) -> GenerationOptions {
    let defaults = GenerationOptions::default();
    GenerationOptions {
        temperature: config.temperature.unwrap_or(defaults.temperature),
        max_tokens: config.max_tokens.unwrap_or(defaults.max_tokens),
        timeout: config.timeout_secs.map(Duration::from_secs),
    }
}

fn build_provider(name: &str, config: &ProviderConfig) -> anyhow::Result<Box<dyn AiProvider>> {
    let options = generation_options(config);
    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key = config
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| anyhow!("api_key is required for gemini provider '{name}'"))?;
            let api_url = match (&config.api_url, config.effective_model()) {
                (Some(url), _) => url.clone(),
                (None, Some(model)) => GeminiProvider::url_for_model(model),
                (None, None) => {
                    return Err(anyhow!(
                        "gemini provider '{name}' needs either api_url or model_name"
                    ))
                }
            };
            Box::new(GeminiProvider::new(api_url, api_key, options)?)
        }
        "openai" => {
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| GROQ_CHAT_COMPLETIONS_URL.to_string());
            Box::new(OpenAiCompatibleProvider::new(
                api_url,
                config.api_key.clone(),
                config.effective_model().map(str::to_string),
                options,
            )?)
        }
        other => {
            return Err(anyhow!(
                "Unsupported AI provider type '{other}' for provider '{name}'"
            ));
        }
    };
    Ok(provider)
}

/// Builds the shared application state from the configuration.
///
/// Every configured provider is instantiated and every task is resolved up
/// front, so a task with missing fields or an unknown provider fails startup
/// instead of the first request.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let mut ai_providers = HashMap::new();
    for (name, provider_config) in &config.providers {
        ai_providers.insert(name.clone(), build_provider(name, provider_config)?);
    }

    let mut resolved_tasks = HashMap::new();
    for (name, task_config) in &config.tasks {
        let provider = task_config.provider.clone().ok_or_else(|| {
            anyhow!("Resolved task '{name}' is missing required 'provider' field")
        })?;
        let system_prompt = task_config.system_prompt.clone().ok_or_else(|| {
            anyhow!("Resolved task '{name}' is missing required 'system_prompt' field")
        })?;
        let user_prompt = task_config.user_prompt.clone().ok_or_else(|| {
            anyhow!("Resolved task '{name}' is missing required 'user_prompt' field")
        })?;
        if !ai_providers.contains_key(&provider) {
            return Err(anyhow!(
                "Task '{name}' references unknown provider '{provider}'"
            ));
        }

        resolved_tasks.insert(
            name.clone(),
            ResolvedTask {
                provider,
                prompt: ReviewPrompt::new(system_prompt, user_prompt),
            },
        );
    }
    info!(
        providers = ai_providers.len(),
        tasks = resolved_tasks.len(),
        "Application state built."
    );

    Ok(AppState {
        config: Arc::new(config),
        tasks: Arc::new(resolved_tasks),
        ai_providers: Arc::new(ai_providers),
    })
}
