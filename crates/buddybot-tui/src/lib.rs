//! buddybot-tui: Terminal UI for the BuddyBot chat client
//!
//! This crate provides the TUI layer for BuddyBot, including:
//! - The conversation pane with markdown replies and a typing indicator
//! - The quick-action bar and option buttons
//! - Settings and help popups
//! - Theme palettes that follow the stored dark/light preference

mod app;
mod conversation;
mod event;
mod layout;
#[cfg(test)]
pub mod test_utils;
mod text;
mod theme;
mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use buddybot_engine;

use buddybot_engine::{
    ChatService, ChatWidget, Config, HttpChatClient, PreferenceStore, SendOutcome, SendRequest,
    WidgetSettings,
};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ShowCursor
        );
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(
    config: &Config,
    store: Box<dyn PreferenceStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let service: Arc<dyn ChatService> = Arc::new(HttpChatClient::from_config(config)?);
    let widget = ChatWidget::new(WidgetSettings::from(config), store);
    let mut app = App::new(widget);
    info!(endpoint = %config.endpoint, "Starting TUI");

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 8 Hz keeps the typing spinner smooth.
    let mut events = EventHandler::new(125);

    let result = run_loop(&mut terminal, &mut app, &mut events, &service).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    service: &Arc<dyn ChatService>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut chats = ChatTasks::new(Arc::clone(service));

    loop {
        terminal.draw(|frame| layout::render_shell(frame, app))?;

        chats.drain(app);

        let Some(event) = events.next().await else {
            break;
        };

        let requests = match event {
            Event::Key(key) => app.handle_action(key_to_action(key)),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Paste(text) => {
                app.handle_paste(&text);
                Vec::new()
            }
            Event::Tick => {
                app.on_tick();
                Vec::new()
            }
            Event::Resize(..) => Vec::new(),
        };
        chats.spawn(requests);

        if app.should_quit {
            break;
        }
    }

    chats.abort_all();
    Ok(())
}

/// Chat requests running on their own tasks.
///
/// Each task pushes its outcome into a channel as soon as it finishes, so
/// replies are applied in completion order.
struct ChatTasks {
    service: Arc<dyn ChatService>,
    tx: mpsc::UnboundedSender<SendOutcome>,
    rx: mpsc::UnboundedReceiver<SendOutcome>,
    handles: Vec<JoinHandle<()>>,
    in_flight: usize,
}

impl ChatTasks {
    fn new(service: Arc<dyn ChatService>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            service,
            tx,
            rx,
            handles: Vec::new(),
            in_flight: 0,
        }
    }

    /// Start one task per chat request.
    fn spawn(&mut self, requests: Vec<SendRequest>) {
        for request in requests {
            let service = Arc::clone(&self.service);
            let tx = self.tx.clone();
            self.handles.push(tokio::spawn(async move {
                let outcome = request.execute(service.as_ref()).await;
                let _ = tx.send(outcome);
            }));
            self.in_flight += 1;
        }
    }

    /// Feed finished requests back into the app (non-blocking).
    fn drain(&mut self, app: &mut App) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            app.complete(outcome);
        }
        self.handles.retain(|handle| !handle.is_finished());
    }

    /// Requests whose outcome has not been applied yet.
    #[cfg(test)]
    fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn abort_all(&mut self) {
        if !self.handles.is_empty() {
            warn!(count = self.handles.len(), "Aborting unfinished chat requests");
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Focus;
    use crate::test_utils::create_test_app;
    use async_trait::async_trait;
    use buddybot_engine::{ChatServiceUnavailable, ConversationState};
    use std::time::Duration;

    struct EchoService;

    #[async_trait]
    impl ChatService for EchoService {
        async fn send(&self, message: &str) -> Result<String, ChatServiceUnavailable> {
            Ok(format!("echo: {message}"))
        }
    }

    struct DownService;

    #[async_trait]
    impl ChatService for DownService {
        async fn send(&self, _message: &str) -> Result<String, ChatServiceUnavailable> {
            Err(ChatServiceUnavailable::new("connection refused"))
        }
    }

    /// Answers "slow" messages after the others.
    struct SlowFirstService;

    #[async_trait]
    impl ChatService for SlowFirstService {
        async fn send(&self, message: &str) -> Result<String, ChatServiceUnavailable> {
            if message == "slow" {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            Ok(format!("echo: {message}"))
        }
    }

    fn chats(service: impl ChatService + 'static) -> ChatTasks {
        ChatTasks::new(Arc::new(service))
    }

    async fn settle(chats: &mut ChatTasks, app: &mut App) {
        for _ in 0..200 {
            chats.drain(app);
            if chats.in_flight() == 0 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("chat tasks did not finish");
    }

    fn type_and_send(app: &mut App, text: &str) -> Vec<SendRequest> {
        for c in text.chars() {
            app.handle_action(Action::Insert(c));
        }
        app.handle_action(Action::Select)
    }

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
    }

    #[tokio::test]
    async fn test_reply_reaches_the_log() {
        let mut chats = chats(EchoService);
        let mut app = create_test_app();

        let requests = type_and_send(&mut app, "hello");
        assert_eq!(requests.len(), 1);
        chats.spawn(requests);
        assert!(app.widget.is_typing());

        settle(&mut chats, &mut app).await;
        assert!(!app.widget.is_typing());
        let last = app.widget.last_bot_message().expect("bot reply");
        assert_eq!(last.text, "echo: hello");
    }

    #[tokio::test]
    async fn test_replies_apply_in_completion_order() {
        let mut chats = chats(SlowFirstService);
        let mut app = create_test_app();

        let first = type_and_send(&mut app, "slow");
        let second = type_and_send(&mut app, "fast");
        chats.spawn(first);
        chats.spawn(second);
        settle(&mut chats, &mut app).await;

        let texts: Vec<_> = app
            .widget
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts[texts.len() - 2..], ["echo: fast", "echo: slow"]);
    }

    #[tokio::test]
    async fn test_budget_flow_through_the_loop() {
        let mut chats = chats(EchoService);
        let mut app = create_test_app();

        app.focus = Focus::QuickActions;
        app.quick_selected = 4;
        let requests = app.handle_action(Action::Select);
        chats.spawn(requests);
        settle(&mut chats, &mut app).await;
        assert_eq!(app.widget.state(), ConversationState::AwaitingBudget);
        assert_eq!(app.focus, Focus::Input);

        let requests = type_and_send(&mut app, "1500");
        chats.spawn(requests);
        assert_eq!(app.widget.state(), ConversationState::Idle);
        settle(&mut chats, &mut app).await;
        assert_eq!(app.widget.state(), ConversationState::Idle);
    }

    #[tokio::test]
    async fn test_unavailable_service_apologizes() {
        let mut chats = chats(DownService);
        let mut app = create_test_app();

        let requests = type_and_send(&mut app, "hello");
        chats.spawn(requests);
        settle(&mut chats, &mut app).await;

        let apology = app.widget.settings().apology();
        let last = app.widget.last_bot_message().expect("apology");
        assert_eq!(last.text, apology);
    }

    #[tokio::test]
    async fn test_reply_after_clear_is_discarded() {
        let mut chats = chats(EchoService);
        let mut app = create_test_app();

        let requests = type_and_send(&mut app, "hello");
        chats.spawn(requests);
        app.handle_action(Action::ClearChat);
        settle(&mut chats, &mut app).await;

        assert_eq!(app.widget.messages().len(), 1);
        assert!(!app.widget.messages()[0].text.contains("echo"));
    }

    #[tokio::test]
    async fn test_abort_all_stops_pending_tasks() {
        let mut chats = chats(SlowFirstService);
        let mut app = create_test_app();

        chats.spawn(type_and_send(&mut app, "slow"));
        chats.abort_all();
        tokio::time::sleep(Duration::from_millis(80)).await;
        chats.drain(&mut app);

        assert!(app.widget.is_typing());
        assert_eq!(chats.in_flight(), 1);
    }
}
