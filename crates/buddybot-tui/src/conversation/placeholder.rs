//! State-aware placeholder text for the input line.

use buddybot_engine::ConversationState;

/// Placeholder shown in the empty input line.
///
/// Hints at what the bot is waiting for in the current step.
#[must_use]
pub fn input_placeholder(state: ConversationState) -> &'static str {
    match state {
        ConversationState::Idle => "Type your message...",
        ConversationState::AwaitingBudget => "Type your weekly budget, e.g. 1500...",
        ConversationState::AwaitingIngredientName => "Type a recipe name...",
        ConversationState::AwaitingCartConfirmation => "Type yes or no, or pick an option...",
    }
}
