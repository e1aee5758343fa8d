//! Context folding: appends a completed exchange to the rolling window.

use chaysh_core::{ConversationContext, Message};

/// Appends the rewritten user message and the cleaned assistant reply, then
/// truncates to the window bound, oldest first. Pure; the caller owns
/// persistence of the returned context across requests.
pub fn fold(
    mut context: ConversationContext,
    user: Message,
    assistant: Message,
) -> ConversationContext {
    context.push_exchange(user, assistant);
    context
}
