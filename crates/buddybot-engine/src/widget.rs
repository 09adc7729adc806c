//! The chat widget: message log, conversation steps and theme.
//!
//! [`ChatWidget`] is synchronous. Operations that need the network return a
//! [`SendRequest`]; the caller runs it with [`SendRequest::execute`] (on
//! whatever task it likes) and hands the [`SendOutcome`] back to
//! [`ChatWidget::complete`]. Replies are applied in completion order.
//!
//! A send moves to its next step right away, so text typed while the reply
//! is in flight is handled by the new step. If the send fails and nothing
//! else moved the conversation meanwhile, the previous step is restored and
//! the user can simply try again.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::client::{ChatService, ChatServiceUnavailable};
use crate::config::Config;
use crate::conversation::{
    budget_request, ingredient_request, ConversationState, QuickAction, QuickActionKind,
    CART_CONFIRMED_REQUEST, CART_DECLINED, CART_OPTIONS, CART_QUESTION,
};
use crate::message::Message;
use crate::theme::{resolve_theme, system_preference, PreferenceStore, ThemePreference, THEME_KEY};

/// Identifier of an outgoing chat request.
pub type RequestId = u64;

/// Wording that depends on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    /// Name the bot uses for itself.
    pub bot_name: String,
    /// Currency prefix for budget requests.
    pub currency_symbol: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for WidgetSettings {
    fn from(config: &Config) -> Self {
        Self {
            bot_name: config.bot_name.clone(),
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

impl WidgetSettings {
    /// Greeting that seeds every fresh conversation.
    pub fn greeting(&self) -> String {
        format!(
            "Hey there! I'm {}, your friendly assistant. How can I lend a hand today?",
            self.bot_name
        )
    }

    /// Message shown when the chat service fails.
    pub fn apology(&self) -> String {
        format!(
            "⚠️ Oops! {} can't reach the server right now. Please try again!",
            self.bot_name
        )
    }

    /// Transient indicator shown while a request is in flight.
    pub fn typing_indicator(&self) -> String {
        format!("{} is typing...", self.bot_name)
    }
}

/// One call to the chat service, produced by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub id: RequestId,
    /// Text sent to the service.
    pub message: String,
}

impl SendRequest {
    /// Perform the call.
    pub async fn execute<S: ChatService + ?Sized>(self, service: &S) -> SendOutcome {
        let result = service.send(&self.message).await;
        SendOutcome {
            id: self.id,
            result,
        }
    }
}

/// The completed result of a [`SendRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub id: RequestId,
    pub result: Result<String, ChatServiceUnavailable>,
}

/// Bookkeeping for a request in flight.
#[derive(Debug, Clone, Copy)]
struct PendingSend {
    /// State to go back to if the send fails.
    restore: ConversationState,
    /// Ask about the cart once the reply is shown.
    offer_cart: bool,
    /// State generation right after dispatch.
    generation: u64,
}

/// Client-side chat widget.
pub struct ChatWidget {
    settings: WidgetSettings,
    log: Vec<Message>,
    state: ConversationState,
    /// Bumped on every state change so stale replies don't overwrite a newer step.
    generation: u64,
    options: Vec<String>,
    pending: HashMap<RequestId, PendingSend>,
    next_id: RequestId,
    theme: ThemePreference,
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for ChatWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidget")
            .field("state", &self.state)
            .field("messages", &self.log.len())
            .field("options", &self.options)
            .field("pending", &self.pending.len())
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl ChatWidget {
    /// Create a widget, resolving the theme from the store and the terminal.
    pub fn new(settings: WidgetSettings, store: Box<dyn PreferenceStore>) -> Self {
        Self::with_system_theme(settings, store, system_preference())
    }

    /// Create a widget with an explicit system theme (or none).
    pub fn with_system_theme(
        settings: WidgetSettings,
        store: Box<dyn PreferenceStore>,
        system: Option<ThemePreference>,
    ) -> Self {
        let theme = resolve_theme(store.as_ref(), system);
        let mut widget = Self {
            settings,
            log: Vec::new(),
            state: ConversationState::Idle,
            generation: 0,
            options: Vec::new(),
            pending: HashMap::new(),
            next_id: 1,
            theme,
            store,
        };
        widget.seed_greeting();
        widget
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.log
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Active option buttons (empty when none are offered).
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether any request is in flight.
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of requests in flight.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Text of the most recent bot message, if any.
    pub fn last_bot_message(&self) -> Option<&Message> {
        self.log.iter().rev().find(|m| !m.is_user())
    }

    /// Handle text typed into the input box.
    ///
    /// Empty or whitespace-only input is ignored in every state.
    pub fn submit_input(&mut self, input: &str) -> Option<SendRequest> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.log.push(Message::user(text));
        if self.state != ConversationState::AwaitingCartConfirmation {
            self.options.clear();
        }
        self.respond_to(text)
    }

    /// Handle a quick-action button.
    pub fn quick_action(&mut self, action: QuickAction) -> Option<SendRequest> {
        self.log.push(Message::user(action.label()));
        self.options.clear();

        match action.kind() {
            QuickActionKind::Step { next, prompt } => {
                self.set_state(next);
                self.log.push(Message::bot(prompt));
                None
            }
            QuickActionKind::Prompt(prompt) => {
                Some(self.dispatch(prompt.to_string(), ConversationState::Idle, false))
            }
        }
    }

    /// Handle a click on one of the active option buttons.
    ///
    /// Does nothing when no options are active.
    pub fn choose_option(&mut self, label: &str) -> Option<SendRequest> {
        if self.options.is_empty() {
            return None;
        }

        self.log.push(Message::user(label));
        self.options.clear();
        self.respond_to(&label.to_lowercase())
    }

    /// Apply the result of a request.
    pub fn complete(&mut self, outcome: SendOutcome) {
        let Some(pending) = self.pending.remove(&outcome.id) else {
            debug!(id = outcome.id, "Discarding reply for a cleared conversation");
            return;
        };

        match outcome.result {
            Ok(reply) => {
                self.log.push(Message::bot_markdown(reply));

                // Only offer the cart if nothing else changed the step meanwhile.
                if pending.offer_cart && pending.generation == self.generation {
                    self.log.push(Message::bot(CART_QUESTION));
                    self.show_cart_options();
                }
            }
            Err(e) => {
                warn!(id = outcome.id, error = %e, "Chat request failed");
                self.log.push(Message::bot_warning(self.settings.apology()));

                if pending.generation == self.generation && pending.restore != self.state {
                    self.set_state(pending.restore);
                    if pending.restore == ConversationState::AwaitingCartConfirmation {
                        self.show_cart_options();
                    }
                }
            }
        }
    }

    /// Clear the conversation back to a single greeting.
    pub fn reset(&mut self) {
        info!(
            messages = self.log.len(),
            pending = self.pending.len(),
            "Resetting conversation"
        );
        self.log.clear();
        self.options.clear();
        self.pending.clear();
        self.set_state(ConversationState::Idle);
        self.seed_greeting();
    }

    /// Flip between light and dark and persist the choice.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            warn!(error = %e, "Failed to persist theme preference");
        }
        info!(theme = self.theme.as_str(), "Theme changed");
        self.theme
    }

    fn respond_to(&mut self, text: &str) -> Option<SendRequest> {
        match self.state {
            ConversationState::Idle => {
                Some(self.dispatch(text.to_string(), ConversationState::Idle, false))
            }
            ConversationState::AwaitingBudget => {
                let request = budget_request(&self.settings.currency_symbol, text);
                Some(self.dispatch(request, ConversationState::Idle, false))
            }
            ConversationState::AwaitingIngredientName => Some(self.dispatch(
                ingredient_request(text),
                ConversationState::AwaitingCartConfirmation,
                true,
            )),
            ConversationState::AwaitingCartConfirmation => {
                self.options.clear();
                if text.eq_ignore_ascii_case("yes") {
                    Some(self.dispatch(
                        CART_CONFIRMED_REQUEST.to_string(),
                        ConversationState::Idle,
                        false,
                    ))
                } else {
                    self.log.push(Message::bot(CART_DECLINED));
                    self.set_state(ConversationState::Idle);
                    None
                }
            }
        }
    }

    /// Move to `next` and record a request for `message`.
    fn dispatch(
        &mut self,
        message: String,
        next: ConversationState,
        offer_cart: bool,
    ) -> SendRequest {
        let restore = self.state;
        if next != restore {
            self.set_state(next);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(
            id,
            PendingSend {
                restore,
                offer_cart,
                generation: self.generation,
            },
        );
        debug!(id, state = ?self.state, len = message.len(), "Dispatching chat request");
        SendRequest { id, message }
    }

    fn show_cart_options(&mut self) {
        self.options = CART_OPTIONS.iter().map(|s| (*s).to_string()).collect();
    }

    fn set_state(&mut self, state: ConversationState) {
        self.state = state;
        self.generation += 1;
    }

    fn seed_greeting(&mut self) {
        self.log.push(Message::bot(self.settings.greeting()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageFormat, Sender};
    use crate::theme::MemoryStore;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Chat service that records every message and answers from a script.
    struct RecordingService {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingService {
        fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatService for RecordingService {
        async fn send(&self, message: &str) -> Result<String, ChatServiceUnavailable> {
            self.calls.lock().unwrap().push(message.to_string());
            if self.fail {
                Err(ChatServiceUnavailable::new("offline"))
            } else {
                Ok(format!("reply to: {message}"))
            }
        }
    }

    fn widget() -> ChatWidget {
        ChatWidget::with_system_theme(
            WidgetSettings::default(),
            Box::new(MemoryStore::new()),
            None,
        )
    }

    async fn run(widget: &mut ChatWidget, service: &RecordingService, request: Option<SendRequest>) {
        if let Some(request) = request {
            let outcome = request.execute(service).await;
            widget.complete(outcome);
        }
    }

    #[test]
    fn test_new_widget_has_greeting_only() {
        let widget = widget();
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.messages()[0].sender, Sender::Bot);
        assert!(widget.messages()[0].text.starts_with("Hey there! I'm BuddyBot"));
        assert_eq!(widget.state(), ConversationState::Idle);
        assert!(!widget.is_typing());
    }

    #[tokio::test]
    async fn test_idle_free_text_sends_verbatim_once() {
        let service = RecordingService::ok();
        let mut widget = widget();

        for text in ["hello", "What's for dinner?", "₹ and emoji 🎉"] {
            let request = widget.submit_input(text);
            run(&mut widget, &service, request).await;
        }

        assert_eq!(
            service.calls(),
            vec!["hello", "What's for dinner?", "₹ and emoji 🎉"]
        );
        assert_eq!(widget.state(), ConversationState::Idle);
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut widget = widget();
        let request = widget.submit_input("  hi  ").unwrap();
        assert_eq!(request.message, "hi");
        assert_eq!(widget.messages().last().unwrap().text, "hi");
    }

    #[test]
    fn test_typing_indicator_tracks_pending_requests() {
        let mut widget = widget();
        let first = widget.submit_input("one").unwrap();
        let second = widget.submit_input("two").unwrap();
        assert!(widget.is_typing());
        assert_eq!(widget.pending_count(), 2);
        assert_ne!(first.id, second.id);

        widget.complete(SendOutcome {
            id: second.id,
            result: Ok("two done".into()),
        });
        assert!(widget.is_typing());

        widget.complete(SendOutcome {
            id: first.id,
            result: Ok("one done".into()),
        });
        assert!(!widget.is_typing());

        // Completion order, not submission order.
        let texts: Vec<_> = widget.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[texts.len() - 2..], ["two done", "one done"]);
    }

    #[test]
    fn test_whitespace_input_ignored_in_every_state() {
        let mut widget = widget();
        for action in [None, Some(QuickAction::BudgetList), Some(QuickAction::IngredientList)] {
            if let Some(action) = action {
                widget.quick_action(action);
            }
            let before = widget.messages().len();
            let state = widget.state();
            assert!(widget.submit_input("   \t ").is_none());
            assert!(widget.submit_input("").is_none());
            assert_eq!(widget.messages().len(), before);
            assert_eq!(widget.state(), state);
        }
    }

    #[tokio::test]
    async fn test_budget_flow() {
        let service = RecordingService::ok();
        let mut widget = widget();

        assert!(widget.quick_action(QuickAction::BudgetList).is_none());
        assert_eq!(widget.state(), ConversationState::AwaitingBudget);
        assert!(service.calls().is_empty());

        let request = widget.submit_input("500");
        run(&mut widget, &service, request).await;

        assert_eq!(
            service.calls(),
            vec!["Make a grocery list under ₹500 for a week"]
        );
        assert_eq!(widget.state(), ConversationState::Idle);
    }

    #[tokio::test]
    async fn test_ingredient_flow_offers_cart() {
        let service = RecordingService::ok();
        let mut widget = widget();

        widget.quick_action(QuickAction::IngredientList);
        assert_eq!(widget.state(), ConversationState::AwaitingIngredientName);

        let request = widget.submit_input("pasta");
        let before = widget.messages().len();
        run(&mut widget, &service, request).await;

        assert_eq!(service.calls(), vec!["Give the ingredient list for pasta"]);
        assert_eq!(widget.state(), ConversationState::AwaitingCartConfirmation);
        assert_eq!(widget.messages().len(), before + 2);

        let reply = &widget.messages()[before];
        assert_eq!(reply.format, MessageFormat::Markdown);
        assert_eq!(reply.text, "reply to: Give the ingredient list for pasta");
        assert_eq!(widget.messages()[before + 1].text, CART_QUESTION);
        assert_eq!(widget.options(), ["Yes", "No"]);
    }

    async fn widget_awaiting_cart(service: &RecordingService) -> ChatWidget {
        let mut widget = widget();
        widget.quick_action(QuickAction::IngredientList);
        let request = widget.submit_input("pasta");
        run(&mut widget, service, request).await;
        assert_eq!(widget.state(), ConversationState::AwaitingCartConfirmation);
        widget
    }

    #[tokio::test]
    async fn test_cart_no_is_local() {
        let service = RecordingService::ok();
        let mut widget = widget_awaiting_cart(&service).await;
        let calls_before = service.calls().len();

        let request = widget.choose_option("No");
        assert!(request.is_none());
        assert_eq!(service.calls().len(), calls_before);
        assert_eq!(widget.messages().last().unwrap().text, CART_DECLINED);
        assert_eq!(widget.state(), ConversationState::Idle);
        assert!(widget.options().is_empty());
    }

    #[tokio::test]
    async fn test_cart_free_text_other_than_yes_declines() {
        let service = RecordingService::ok();
        let mut widget = widget_awaiting_cart(&service).await;

        assert!(widget.submit_input("maybe later").is_none());
        assert_eq!(widget.messages().last().unwrap().text, CART_DECLINED);
        assert_eq!(widget.state(), ConversationState::Idle);
    }

    #[tokio::test]
    async fn test_cart_yes_sends_once_and_returns_to_idle() {
        let service = RecordingService::ok();
        let mut widget = widget_awaiting_cart(&service).await;
        let calls_before = service.calls().len();

        let request = widget.choose_option("Yes");
        assert_eq!(widget.messages().last().unwrap().text, "Yes");
        run(&mut widget, &service, request).await;

        let calls = service.calls();
        assert_eq!(calls.len(), calls_before + 1);
        assert_eq!(calls.last().unwrap(), CART_CONFIRMED_REQUEST);
        assert_eq!(widget.state(), ConversationState::Idle);
    }

    #[tokio::test]
    async fn test_typed_yes_is_case_insensitive() {
        let service = RecordingService::ok();
        let mut widget = widget_awaiting_cart(&service).await;

        let request = widget.submit_input("YES").unwrap();
        assert_eq!(request.message, CART_CONFIRMED_REQUEST);
    }

    #[tokio::test]
    async fn test_failure_keeps_state_and_apologizes_once() {
        let service = RecordingService::failing();
        let mut widget = widget();

        for (setup, state) in [
            (None, ConversationState::Idle),
            (Some(QuickAction::BudgetList), ConversationState::AwaitingBudget),
            (
                Some(QuickAction::IngredientList),
                ConversationState::AwaitingIngredientName,
            ),
        ] {
            if let Some(action) = setup {
                widget.quick_action(action);
            }
            let request = widget.submit_input("something");
            let before = widget.messages().len();
            run(&mut widget, &service, request).await;

            assert_eq!(widget.state(), state);
            assert_eq!(widget.messages().len(), before + 1);
            let last = widget.messages().last().unwrap();
            assert_eq!(last.text, widget.settings().apology());
            assert_eq!(last.format, MessageFormat::Warning);
            assert!(widget.options().is_empty());
            assert!(!widget.is_typing());
        }
    }

    #[tokio::test]
    async fn test_failed_cart_confirmation_stays_awaiting() {
        let ok = RecordingService::ok();
        let mut widget = widget_awaiting_cart(&ok).await;

        let failing = RecordingService::failing();
        let request = widget.choose_option("Yes");
        run(&mut widget, &failing, request).await;

        assert_eq!(widget.state(), ConversationState::AwaitingCartConfirmation);
        assert_eq!(widget.options(), ["Yes", "No"]);
    }

    #[test]
    fn test_budget_answer_returns_to_idle_before_reply() {
        let mut widget = widget();
        widget.quick_action(QuickAction::BudgetList);

        let budget = widget.submit_input("500").unwrap();
        assert_eq!(budget.message, "Make a grocery list under ₹500 for a week");
        assert_eq!(widget.state(), ConversationState::Idle);

        // Typed while the budget reply is still pending.
        let next = widget.submit_input("hello").unwrap();
        assert_eq!(next.message, "hello");
        assert_eq!(widget.pending_count(), 2);
    }

    #[test]
    fn test_ingredient_answer_awaits_cart_before_reply() {
        let mut widget = widget();
        widget.quick_action(QuickAction::IngredientList);

        let request = widget.submit_input("pasta").unwrap();
        assert_eq!(widget.state(), ConversationState::AwaitingCartConfirmation);
        assert!(widget.options().is_empty());

        widget.complete(SendOutcome {
            id: request.id,
            result: Ok("flour, eggs".into()),
        });
        assert_eq!(widget.options(), ["Yes", "No"]);
    }

    #[test]
    fn test_failed_ingredient_lookup_restores_step() {
        let mut widget = widget();
        widget.quick_action(QuickAction::IngredientList);
        let request = widget.submit_input("pasta").unwrap();

        widget.complete(SendOutcome {
            id: request.id,
            result: Err(ChatServiceUnavailable::new("offline")),
        });
        assert_eq!(widget.state(), ConversationState::AwaitingIngredientName);
        assert!(widget.options().is_empty());
    }

    #[test]
    fn test_failure_after_step_change_keeps_new_step() {
        let mut widget = widget();
        widget.quick_action(QuickAction::BudgetList);
        let request = widget.submit_input("500").unwrap();

        widget.quick_action(QuickAction::IngredientList);
        widget.complete(SendOutcome {
            id: request.id,
            result: Err(ChatServiceUnavailable::new("offline")),
        });

        assert_eq!(widget.state(), ConversationState::AwaitingIngredientName);
        assert_eq!(widget.messages().last().unwrap().format, MessageFormat::Warning);
    }

    #[tokio::test]
    async fn test_reset_from_any_state() {
        let service = RecordingService::ok();

        let mut idle = widget();
        idle.submit_input("pending forever");
        let mut budget = widget();
        budget.quick_action(QuickAction::BudgetList);
        let mut cart = widget_awaiting_cart(&service).await;

        for widget in [&mut idle, &mut budget, &mut cart] {
            widget.reset();
            assert_eq!(widget.messages().len(), 1);
            assert_eq!(widget.messages()[0].text, widget.settings().greeting());
            assert_eq!(widget.state(), ConversationState::Idle);
            assert!(widget.options().is_empty());
            assert!(!widget.is_typing());
        }
    }

    #[test]
    fn test_reply_after_reset_is_discarded() {
        let mut widget = widget();
        let request = widget.submit_input("slow question").unwrap();
        widget.reset();

        widget.complete(SendOutcome {
            id: request.id,
            result: Ok("late answer".into()),
        });
        assert_eq!(widget.messages().len(), 1);
    }

    #[test]
    fn test_step_change_while_in_flight_wins() {
        let mut widget = widget();
        widget.quick_action(QuickAction::IngredientList);
        let request = widget.submit_input("soup").unwrap();

        // User moves on before the ingredient list arrives.
        widget.quick_action(QuickAction::BudgetList);
        widget.complete(SendOutcome {
            id: request.id,
            result: Ok("carrots, onions".into()),
        });

        assert_eq!(widget.state(), ConversationState::AwaitingBudget);
        assert!(widget.options().is_empty());
        assert_eq!(widget.messages().last().unwrap().text, "carrots, onions");
    }

    #[test]
    fn test_entering_step_replaces_previous() {
        let mut widget = widget();
        widget.quick_action(QuickAction::BudgetList);
        widget.quick_action(QuickAction::IngredientList);
        assert_eq!(widget.state(), ConversationState::AwaitingIngredientName);
    }

    #[tokio::test]
    async fn test_generic_quick_action_sends_mapped_prompt() {
        let service = RecordingService::ok();
        let mut widget = widget();

        let request = widget.quick_action(QuickAction::CheerMeUp);
        assert_eq!(widget.messages().last().unwrap().text, "Cheer me up!");
        run(&mut widget, &service, request).await;

        assert_eq!(service.calls(), vec!["Tell me a funny joke!"]);
    }

    #[test]
    fn test_choose_option_without_options_is_ignored() {
        let mut widget = widget();
        assert!(widget.choose_option("Yes").is_none());
        assert_eq!(widget.messages().len(), 1);
    }

    #[test]
    fn test_theme_toggle_persists_across_reload() {
        let store = MemoryStore::new();
        let mut first = ChatWidget::with_system_theme(
            WidgetSettings::default(),
            Box::new(store.clone()),
            Some(ThemePreference::Dark),
        );
        assert_eq!(first.theme(), ThemePreference::Dark);
        assert_eq!(first.toggle_theme(), ThemePreference::Light);

        // System says dark, but the stored choice wins.
        let reloaded = ChatWidget::with_system_theme(
            WidgetSettings::default(),
            Box::new(store),
            Some(ThemePreference::Dark),
        );
        assert_eq!(reloaded.theme(), ThemePreference::Light);
    }

    #[test]
    fn test_custom_bot_name_in_local_messages() {
        let settings = WidgetSettings {
            bot_name: "Sous".into(),
            currency_symbol: "$".into(),
        };
        assert!(settings.greeting().contains("I'm Sous"));
        assert!(settings.apology().contains("Sous can't reach"));
        assert_eq!(settings.typing_indicator(), "Sous is typing...");
    }
}
