pub mod gemini;
pub mod openai;

use crate::errors::SageError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use reqwest::Client as ReqwestClient;
use std::{fmt::Debug, time::Duration};

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for the text-completion services that
/// review, optimize, and explain SQL queries (e.g., Groq, Gemini).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result should be a string containing the AI's response.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, SageError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// Sampling and transport settings shared by every provider.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound for a single completion request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_tokens: 4000,
            timeout: None,
        }
    }
}

pub(crate) fn build_client(options: &GenerationOptions) -> Result<ReqwestClient, SageError> {
    let mut builder = ReqwestClient::builder();
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(SageError::ReqwestClientBuild)
}
