//! # Completion client abstraction
//!
//! Defines the [`CompletionClient`] trait and an OpenRouter implementation.
//! Transport-agnostic; the assistant orchestrator depends only on the trait so
//! tests can substitute a mock provider.

use async_trait::async_trait;
use chaysh_core::{Message, ProviderError, Role};
use openrouter_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

mod config;
mod openrouter_llm;

pub use config::EnvLlmConfig;
pub use openrouter_llm::OpenRouterCompletion;

/// Sampling and sizing parameters for one completion call.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: u16,
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: "openai/gpt-3.5-turbo".to_string(),
            max_tokens: 600,
            temperature: 0.7,
        }
    }
}

/// Completion client interface: one request, one raw text reply.
/// No automatic retry; failures carry the provider error taxonomy.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<Message>,
        params: &CompletionParams,
    ) -> Result<String, ProviderError>;
}

/// Converts a core [`Message`] into the OpenAI-compatible request format.
fn message_to_request(msg: &Message) -> Result<ChatCompletionRequestMessage, ProviderError> {
    let content = msg.content.clone();
    let request_msg: ChatCompletionRequestMessage = match msg.role {
        Role::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?
            .into(),
        Role::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?
            .into(),
        Role::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?
            .into(),
    };
    Ok(request_msg)
}
