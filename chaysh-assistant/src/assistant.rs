//! The assistant orchestrator: one exchange end to end.

use std::sync::Arc;

use categories::CategoryRegistry;
use chaysh_core::{InputError, Message};
use llm_client::{CompletionClient, CompletionParams};
use prompt::PromptBuilder;
use tracing::{info, instrument, warn};

use crate::api::{ChatRequest, ChatResponse, Lang, ResponsePayload};
use crate::context::fold;
use crate::postprocess::{clean, try_parse_structured, StructuredResult};

const SYSTEM_PROMPT_EN: &str =
    "You are Chaysh, a helpful AI assistant. Provide clear, concise responses based on the detected category.";
const SYSTEM_PROMPT_PL: &str =
    "Jesteś Chaysh, pomocnym asystentem AI. Odpowiadaj jasno i zwięźle zgodnie z wykrytą kategorią.";

fn system_prompt(lang: Lang) -> &'static str {
    match lang {
        Lang::En => SYSTEM_PROMPT_EN,
        Lang::Pl => SYSTEM_PROMPT_PL,
    }
}

/// Runs the exchange pipeline against an immutable registry and a completion
/// client. Stateless across requests; the context travels with each call.
pub struct Assistant {
    builder: PromptBuilder,
    client: Arc<dyn CompletionClient>,
    params: CompletionParams,
}

impl Assistant {
    pub fn new(
        registry: CategoryRegistry,
        client: Arc<dyn CompletionClient>,
        params: CompletionParams,
    ) -> Self {
        Self {
            builder: PromptBuilder::new(registry),
            client,
            params,
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        self.builder.registry()
    }

    /// Handles one exchange: Detect → Build → Complete → PostProcess → Fold.
    ///
    /// Input errors surface to the caller. Provider and parse failures convert
    /// to the fallback [`StructuredResult`]; on failure the context is returned
    /// unchanged, so the exchange is treated as not having happened.
    #[instrument(skip(self, request), fields(lang = ?request.lang))]
    pub async fn ask(&self, request: ChatRequest) -> Result<ChatResponse, InputError> {
        let built = self
            .builder
            .build(&request.query, &request.context, request.category.as_deref())?;

        info!(
            category = built.category.as_deref().unwrap_or("none"),
            context_len = request.context.len(),
            first_exchange = built.tip.is_some(),
            "step: prompt built"
        );

        let mut messages = Vec::with_capacity(built.messages.len() + 1);
        messages.push(Message::system(system_prompt(request.lang)));
        messages.extend(built.messages.iter().cloned());

        match self.client.complete(messages, &self.params).await {
            Ok(raw) => {
                let cleaned = clean(&raw);
                let payload = match try_parse_structured(&raw, &request.query) {
                    Some(structured) => ResponsePayload::Structured(structured),
                    None => ResponsePayload::Text(cleaned.clone()),
                };
                let context = fold(
                    request.context,
                    Message::user(built.rewritten),
                    Message::assistant(cleaned),
                );
                Ok(ChatResponse {
                    response: payload,
                    context,
                    category: built.category,
                    tip: built.tip,
                })
            }
            Err(err) => {
                warn!(error = %err, "completion failed, returning fallback");
                Ok(ChatResponse {
                    response: ResponsePayload::Structured(StructuredResult::fallback(
                        &request.query,
                    )),
                    context: request.context,
                    category: built.category,
                    tip: built.tip,
                })
            }
        }
    }
}
