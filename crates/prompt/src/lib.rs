//! # prompt
//!
//! Assembles the ordered message list for one completion call.
//!
//! ## Order
//!
//! - **Onboarding tip** (system, first): only when the session context is empty.
//! - **Recent context**: the last messages of the rolling window.
//! - **User message** (always last, exactly one): the category-rewritten or
//!   verbatim trimmed user text.
//!
//! Detection can be skipped with a category override naming a registered
//! category; an override naming an unknown category is an input error.

use categories::CategoryRegistry;
use chaysh_core::{ConversationContext, InputError, Message};
use tracing::debug;

/// Output of [`PromptBuilder::build`].
#[derive(Debug, Clone)]
pub struct BuiltPrompt {
    /// Messages for the completion call. Ends with exactly one user message;
    /// the onboarding tip, when present, is first.
    pub messages: Vec<Message>,
    /// Winning category, from the override or detection.
    pub category: Option<String>,
    /// The rewritten (or verbatim trimmed) user text, as sent to the provider.
    /// This is what gets folded into the context after the exchange.
    pub rewritten: String,
    /// Onboarding tip content, present only on the first exchange of a session
    /// so the caller can render it once.
    pub tip: Option<String>,
}

/// Builds completion prompts against an immutable category registry.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    registry: CategoryRegistry,
}

impl PromptBuilder {
    pub fn new(registry: CategoryRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Composes the message list for one exchange.
    ///
    /// Blank `user_text` and overrides naming an unregistered category are
    /// rejected before any external call. Pure over its inputs and the
    /// registry.
    pub fn build(
        &self,
        user_text: &str,
        context: &ConversationContext,
        category_override: Option<&str>,
    ) -> Result<BuiltPrompt, InputError> {
        let trimmed = user_text.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyQuery);
        }

        let (category, rewritten) = match category_override {
            Some(name) => {
                let rule = self
                    .registry
                    .rule(name)
                    .ok_or_else(|| InputError::UnknownCategory(name.to_string()))?;
                debug!(category = %rule.name, "category override");
                (Some(rule.name.clone()), rule.template.render(trimmed))
            }
            None => match self.registry.detect(trimmed) {
                Some(detection) => (
                    Some(detection.category.to_string()),
                    detection.template.render(trimmed),
                ),
                None => (None, trimmed.to_string()),
            },
        };

        let mut messages = Vec::new();
        let tip = if context.is_empty() {
            let tip = self.registry.onboarding_tip();
            messages.push(Message::system(tip.clone()));
            Some(tip)
        } else {
            messages.extend(context.recent().iter().cloned());
            None
        };
        messages.push(Message::user(rewritten.clone()));

        Ok(BuiltPrompt {
            messages,
            category,
            rewritten,
            tip,
        })
    }
}
