//! # chaysh-assistant
//!
//! The exchange pipeline: detect category, build the prompt, call the
//! completion provider, post-process the reply, and fold the exchange into the
//! rolling context. Provider and parse failures convert to a deterministic
//! fallback structured result at this boundary; they never propagate raw to the
//! caller.

pub mod api;
pub mod assistant;
pub mod context;
pub mod postprocess;

pub use api::{ChatRequest, ChatResponse, Lang, ResponsePayload};
pub use assistant::Assistant;
pub use context::fold;
pub use postprocess::{clean, parse_structured, try_parse_structured, Action, StructuredResult, Suggestion};
