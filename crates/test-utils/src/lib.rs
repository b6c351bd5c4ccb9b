//! Shared test doubles for the `sqlsage` crates.

use async_trait::async_trait;
use sqlsage::{errors::SageError, providers::ai::AiProvider};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// An in-process stand-in for a review model.
///
/// Replies are keyed by a substring of the system prompt, so one mock can serve
/// the analysis, optimization, and explanation tasks at once. Every call is
/// recorded for later assertions.
#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    replies: Arc<Mutex<Vec<(String, String)>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
    failure: Option<String>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every call fails as if the upstream API returned an error.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Programs `reply` for any system prompt containing `system_prompt_key`.
    pub fn with_reply(self, system_prompt_key: &str, reply: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push((system_prompt_key.to_string(), reply.to_string()));
        self
    }

    /// The `(system_prompt, user_prompt)` pairs received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, SageError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(message) = &self.failure {
            return Err(SageError::AiApi(message.clone()));
        }

        self.replies
            .lock()
            .unwrap()
            .iter()
            .find(|(key, _)| system_prompt.contains(key.as_str()))
            .map(|(_, reply)| reply.clone())
            .ok_or_else(|| {
                SageError::AiApi(format!(
                    "MockAiProvider: no reply programmed for system prompt '{system_prompt}'"
                ))
            })
    }
}
