//! # chaysh-core
//!
//! Core types for the Chaysh assistant: [`Message`] and [`Role`], the bounded
//! [`ConversationContext`] window, the error taxonomy, and tracing initialization.
//! Transport-agnostic; used by every other crate in the workspace.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ChayshError, InputError, ParseError, ProviderError, Result};
pub use logger::init_tracing;
pub use types::{ConversationContext, Message, Role, CONTEXT_WINDOW};
