//! OpenRouter implementation of [`CompletionClient`]: wraps openrouter-client.

use async_trait::async_trait;
use chaysh_core::{Message, ProviderError};
use tracing::instrument;

use super::{message_to_request, CompletionClient, CompletionParams};

/// [`CompletionClient`] backed by the OpenRouter chat-completion endpoint.
#[derive(Clone)]
pub struct OpenRouterCompletion {
    client: openrouter_client::OpenRouterClient,
}

impl OpenRouterCompletion {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openrouter_client::OpenRouterClient::new(api_key),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openrouter_client::OpenRouterClient::with_base_url(api_key, base_url),
        }
    }

    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }
}

#[async_trait]
impl CompletionClient for OpenRouterCompletion {
    #[instrument(skip(self, messages))]
    async fn complete(
        &self,
        messages: Vec<Message>,
        params: &CompletionParams,
    ) -> Result<String, ProviderError> {
        let mut request_messages = Vec::with_capacity(messages.len());
        for msg in &messages {
            request_messages.push(message_to_request(msg)?);
        }
        self.client
            .chat_completion(
                &params.model,
                request_messages,
                params.max_tokens,
                params.temperature,
            )
            .await
    }
}
