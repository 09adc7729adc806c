//! Conversation steps and quick actions.
//!
//! The widget is always in exactly one [`ConversationState`]. Quick actions
//! either send a canned prompt or move the conversation into a step that
//! waits for the user's next input.

use serde::{Deserialize, Serialize};

/// Bot prompt shown when the budget quick action is chosen.
pub const BUDGET_PROMPT: &str = "Sure! What's your weekly grocery budget? Just type the amount.";

/// Bot prompt shown when the ingredient quick action is chosen.
pub const INGREDIENT_PROMPT: &str = "Happy to help! Which recipe do you need the ingredients for?";

/// Question asked after an ingredient list arrives.
pub const CART_QUESTION: &str = "Would you like to add these ingredients to your cart?";

/// Request sent when the user confirms adding ingredients to the cart.
pub const CART_CONFIRMED_REQUEST: &str = "Got it! Adding those ingredients to your cart for you.";

/// Local reply when the user declines the cart.
pub const CART_DECLINED: &str = "Okay, not adding to the cart for now.";

/// Choices offered after an ingredient list.
pub const CART_OPTIONS: [&str; 2] = ["Yes", "No"];

/// Where the conversation currently is.
///
/// Entering a step always replaces the previous one; steps never stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Free-form chat: input is sent verbatim.
    #[default]
    Idle,
    /// Waiting for a weekly budget amount.
    AwaitingBudget,
    /// Waiting for a recipe name.
    AwaitingIngredientName,
    /// Waiting for a yes/no on adding ingredients to the cart.
    AwaitingCartConfirmation,
}

impl ConversationState {
    /// Whether the widget is waiting for a specific answer.
    pub fn is_awaiting(self) -> bool {
        self != Self::Idle
    }

    /// Short label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Chatting",
            Self::AwaitingBudget => "Budget",
            Self::AwaitingIngredientName => "Recipe",
            Self::AwaitingCartConfirmation => "Cart",
        }
    }
}

/// What choosing a quick action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionKind {
    /// Send a fixed prompt to the chat service.
    Prompt(&'static str),
    /// Enter a step and ask the user for more input. No network call.
    Step {
        next: ConversationState,
        prompt: &'static str,
    },
}

/// Buttons offered above the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    CheerMeUp,
    WhatsNew,
    FunFacts,
    HelpMeDecide,
    BudgetList,
    IngredientList,
}

impl QuickAction {
    /// All quick actions in display order.
    pub fn all() -> &'static [QuickAction] {
        &[
            Self::CheerMeUp,
            Self::WhatsNew,
            Self::FunFacts,
            Self::HelpMeDecide,
            Self::BudgetList,
            Self::IngredientList,
        ]
    }

    /// Button label, also echoed into the log as the user's message.
    pub fn label(self) -> &'static str {
        match self {
            Self::CheerMeUp => "Cheer me up!",
            Self::WhatsNew => "What's new today?",
            Self::FunFacts => "Got any fun facts?",
            Self::HelpMeDecide => "Help me decide...",
            Self::BudgetList => "Budget list",
            Self::IngredientList => "Ingredient list",
        }
    }

    pub fn kind(self) -> QuickActionKind {
        match self {
            Self::CheerMeUp => QuickActionKind::Prompt("Tell me a funny joke!"),
            Self::WhatsNew => QuickActionKind::Prompt(
                "Give me a quick update on current events or interesting facts.",
            ),
            Self::FunFacts => QuickActionKind::Prompt("Tell me a cool and random fun fact."),
            Self::HelpMeDecide => {
                QuickActionKind::Prompt("I need a recommendation for something cool.")
            }
            Self::BudgetList => QuickActionKind::Step {
                next: ConversationState::AwaitingBudget,
                prompt: BUDGET_PROMPT,
            },
            Self::IngredientList => QuickActionKind::Step {
                next: ConversationState::AwaitingIngredientName,
                prompt: INGREDIENT_PROMPT,
            },
        }
    }
}

/// Request text for a budget answer.
pub fn budget_request(currency_symbol: &str, amount: &str) -> String {
    format!("Make a grocery list under {currency_symbol}{amount} for a week")
}

/// Request text for a recipe name.
pub fn ingredient_request(recipe: &str) -> String {
    format!("Give the ingredient list for {recipe}")
}
