use crate::{
    errors::SageError,
    providers::ai::{build_client, AiProvider, GenerationOptions},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

/// The Groq chat-completions endpoint, the default upstream for SQL review.
pub const GROQ_CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model requested when a chat-completions provider names none.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

// --- Provider implementation ---

/// A provider for any OpenAI-compatible chat-completions API (Groq, a local server, ...).
#[derive(Clone, Debug)]
pub struct OpenAiCompatibleProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: Option<String>,
    options: GenerationOptions,
}

impl OpenAiCompatibleProvider {
    /// Creates a new `OpenAiCompatibleProvider`.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: Option<String>,
        options: GenerationOptions,
    ) -> Result<Self, SageError> {
        let client = build_client(&options)?;
        Ok(Self {
            client,
            api_url,
            // Keys pasted into .env files often carry a trailing newline.
            api_key: api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()),
            model,
            options,
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiCompatibleProvider {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, SageError> {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ];

        let request_body = ChatRequest {
            messages,
            model: self.model.as_deref(),
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
            stream: false,
        };

        let mut request_builder = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        debug!(api_url = %self.api_url, model = ?self.model, "--> Sending chat completion request");
        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(SageError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SageError::AiApi(error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(SageError::AiDeserialization)?;

        let raw_response = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(raw_response)
    }
}
