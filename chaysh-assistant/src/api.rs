//! Inbound API shapes for the web front end.
//!
//! The HTTP layer itself lives outside this workspace; these types document the
//! JSON contract it speaks. Request: `{query, context?, lang?, category?}`.
//! Response: `{response, context, category?, tip?}` where `response` is either
//! a structured result object or a plain string.

use chaysh_core::ConversationContext;
use serde::{Deserialize, Serialize};

use crate::postprocess::StructuredResult;

/// Interface language of the session. Selects the assistant's system prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Pl,
}

/// One chat request from the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    /// Rolling context from the previous response; empty on a new session.
    #[serde(default)]
    pub context: ConversationContext,
    #[serde(default)]
    pub lang: Lang,
    /// Optional category override; must name a registered category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: ConversationContext::new(),
            lang: Lang::default(),
            category: None,
        }
    }
}

/// Either the normalized structured result or the cleaned plain-text reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Structured(StructuredResult),
    Text(String),
}

/// One chat response to the front end. `context` must be sent back with the
/// next request of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: ResponsePayload,
    pub context: ConversationContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Onboarding tip, present only on the first exchange of a session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}
