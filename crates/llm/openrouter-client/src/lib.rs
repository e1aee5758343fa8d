//! # OpenRouter API client
//!
//! Thin wrapper around [async-openai] pointed at the OpenRouter chat-completion
//! endpoint. One attempt per call, bounded by a fixed deadline; no retry, no
//! backoff. Provides token masking for safe logging.

use std::sync::Arc;
use std::time::Duration;

use async_openai::{error::OpenAIError, types::CreateChatCompletionRequestArgs, Client};
use chaysh_core::ProviderError;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Default OpenRouter API base.
pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

/// Deadline for one completion call. A slow provider must not stall the
/// handling task indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head_len = 7.min(len);
        let tail_len = 4.min(len.saturating_sub(head_len));
        let head = &token[..head_len];
        let tail = if tail_len > 0 {
            &token[len - tail_len..]
        } else {
            ""
        };
        format!("{}***{}", head, tail)
    }
}

/// OpenRouter chat client. Wraps async-openai; holds the API key only for
/// masked logging.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    api_key_for_logging: String,
    timeout: Duration,
}

impl OpenRouterClient {
    /// Builds a client against the default OpenRouter API base.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENROUTER_API_BASE.to_string())
    }

    /// Builds a client with a custom base URL (proxies, mock servers, other
    /// OpenAI-compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let client = Client::with_config(config);
        Self {
            client: Arc::new(client),
            api_key_for_logging,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends one chat completion request and returns the first choice's content.
    ///
    /// Exactly one attempt; the call is cancelled when the deadline elapses.
    /// Logs masked API key and token usage.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        max_tokens: u16,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            max_tokens = max_tokens,
            temperature = temperature,
            api_key = %mask_token(&self.api_key_for_logging),
            "OpenRouter chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .max_tokens(max_tokens)
            .temperature(temperature)
            .build()
            .map_err(map_openai_error)?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "OpenRouter chat_completion request JSON");
        }

        let timeout_secs = self.timeout.as_secs();
        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| ProviderError::Timeout(timeout_secs))?
            .map_err(map_openai_error)?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenRouter chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => choice_content(choice.message.content.clone()),
            None => Err(ProviderError::EmptyResponse),
        }
    }
}

/// A choice without a `content` field is a malformed envelope, not an empty
/// reply; it takes the failure path like a missing choice does.
fn choice_content(content: Option<String>) -> Result<String, ProviderError> {
    content.ok_or(ProviderError::EmptyResponse)
}

/// Maps async-openai failures onto the provider error taxonomy: API-level
/// errors (non-2xx envelopes) keep their message, everything else is transport.
fn map_openai_error(err: OpenAIError) -> ProviderError {
    match err {
        OpenAIError::ApiError(api) => ProviderError::Api(api.message),
        other => ProviderError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: a first choice whose content field is missing is a provider
    /// error, not an empty reply.**
    #[test]
    fn choice_without_content_is_an_error() {
        assert!(matches!(
            choice_content(None),
            Err(ProviderError::EmptyResponse)
        ));
        assert_eq!(choice_content(Some(String::new())).unwrap(), "");
        assert_eq!(choice_content(Some("ok".to_string())).unwrap(), "ok");
    }
}
