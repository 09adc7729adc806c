//! Application state and update logic for the BuddyBot TUI.
//!
//! [`App`] owns the [`ChatWidget`] and everything around it (input line,
//! focus, popups, scrolling). Key handling returns the chat requests it
//! produced; the event loop runs them and feeds the outcomes back through
//! [`App::complete`].

use buddybot_engine::{ChatWidget, QuickAction, QuickActionKind, SendOutcome, SendRequest};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::conversation::{ScrollState, SCROLL_SPEED};
use crate::event::Action;
use crate::layout::Focus;
use crate::theme::Theme;
use crate::widgets::{ButtonRow, SettingsEntry, SettingsMenuState, TextInputState};

/// Where the clickable regions were drawn last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Buttons inside the quick-action bar.
    pub quick_actions: Rect,
    /// Option buttons under the log.
    pub options: Rect,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    pub widget: ChatWidget,
    pub input: TextInputState,
    pub focus: Focus,
    /// Highlighted quick action.
    pub quick_selected: usize,
    /// Highlighted option button.
    pub option_selected: usize,
    /// Open settings menu, if any.
    pub settings: Option<SettingsMenuState>,
    pub show_help: bool,
    pub should_quit: bool,
    pub scroll: ScrollState,
    /// Palette for the current theme preference.
    pub theme: Theme,
    /// Animation tick, advanced while a reply is pending.
    pub tick: usize,
    /// One-shot message for the footer (cleared on the next key).
    pub notice: Option<String>,
    pub areas: ScreenAreas,
}

impl App {
    pub fn new(widget: ChatWidget) -> Self {
        let theme = Theme::for_preference(widget.theme());
        Self {
            widget,
            input: TextInputState::new(),
            focus: Focus::Input,
            quick_selected: 0,
            option_selected: 0,
            settings: None,
            show_help: false,
            should_quit: false,
            scroll: ScrollState::new(),
            theme,
            tick: 0,
            notice: None,
            areas: ScreenAreas::default(),
        }
    }

    /// Labels of the quick-action bar, in display order.
    pub fn quick_action_labels() -> Vec<&'static str> {
        QuickAction::all().iter().map(|a| a.label()).collect()
    }

    fn has_options(&self) -> bool {
        !self.widget.options().is_empty()
    }

    /// Keep focus and selections valid after the widget changed.
    fn normalize(&mut self) {
        if !self.has_options() {
            self.option_selected = 0;
            if self.focus == Focus::Options {
                self.focus = Focus::Input;
            }
        }
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: Action) -> Vec<SendRequest> {
        self.notice = None;

        if self.show_help {
            // Any key closes help.
            self.show_help = false;
            if action == Action::Quit {
                self.should_quit = true;
            }
            return Vec::new();
        }

        if let Some(mut menu) = self.settings {
            self.handle_settings(action, &mut menu);
            return Vec::new();
        }

        let requests = match action {
            Action::Quit | Action::Back => {
                self.should_quit = true;
                Vec::new()
            }
            Action::Help => {
                self.show_help = true;
                Vec::new()
            }
            Action::Settings => {
                self.settings = Some(SettingsMenuState::default());
                Vec::new()
            }
            Action::ToggleTheme => {
                self.toggle_theme();
                Vec::new()
            }
            Action::ClearChat => {
                self.clear_chat();
                Vec::new()
            }
            Action::CopyReply => {
                self.copy_last_reply();
                Vec::new()
            }
            Action::NextFocus => {
                self.focus = self.focus.next(self.has_options());
                Vec::new()
            }
            Action::PrevFocus => {
                self.focus = self.focus.prev(self.has_options());
                Vec::new()
            }
            Action::PageUp => {
                self.scroll.page_up();
                Vec::new()
            }
            Action::PageDown => {
                self.scroll.page_down();
                Vec::new()
            }
            _ => match self.focus {
                Focus::Input => self.handle_input(action),
                Focus::QuickActions => self.handle_quick_actions(action),
                Focus::Options => self.handle_options(action),
            },
        };

        self.normalize();
        requests
    }

    fn handle_settings(&mut self, action: Action, menu: &mut SettingsMenuState) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Back | Action::Settings => self.settings = None,
            Action::Up | Action::Left | Action::PrevFocus => {
                menu.prev();
                self.settings = Some(*menu);
            }
            Action::Down | Action::Right | Action::NextFocus => {
                menu.next();
                self.settings = Some(*menu);
            }
            Action::Select => {
                self.settings = None;
                match menu.selected() {
                    SettingsEntry::DarkMode => self.toggle_theme(),
                    SettingsEntry::ClearChat => self.clear_chat(),
                }
            }
            _ => {}
        }
    }

    fn handle_input(&mut self, action: Action) -> Vec<SendRequest> {
        match action {
            Action::Select => {
                let text = self.input.submit();
                self.scroll.to_bottom();
                return self.widget.submit_input(&text).into_iter().collect();
            }
            Action::Up => {
                if self.input.is_empty() || self.input.is_browsing_history() {
                    self.input.history_prev();
                } else {
                    self.scroll.scroll_up(1);
                }
            }
            Action::Down => {
                if self.input.is_browsing_history() {
                    self.input.history_next();
                } else {
                    self.scroll.scroll_down(1);
                }
            }
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => self.input.move_end(),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::ClearLine => self.input.clear_to_start(),
            Action::Insert(c) => self.input.insert(c),
            _ => {}
        }
        Vec::new()
    }

    fn handle_quick_actions(&mut self, action: Action) -> Vec<SendRequest> {
        let count = QuickAction::all().len();
        match action {
            Action::Left => self.quick_selected = (self.quick_selected + count - 1) % count,
            Action::Right => self.quick_selected = (self.quick_selected + 1) % count,
            Action::Home => self.quick_selected = 0,
            Action::End => self.quick_selected = count - 1,
            Action::Up => self.scroll.scroll_up(1),
            Action::Down => self.scroll.scroll_down(1),
            Action::Select => return self.run_quick_action(self.quick_selected),
            Action::Insert(c) => {
                self.focus = Focus::Input;
                self.input.insert(c);
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_options(&mut self, action: Action) -> Vec<SendRequest> {
        let count = self.widget.options().len().max(1);
        match action {
            Action::Left => self.option_selected = (self.option_selected + count - 1) % count,
            Action::Right => self.option_selected = (self.option_selected + 1) % count,
            Action::Up => self.scroll.scroll_up(1),
            Action::Down => self.scroll.scroll_down(1),
            Action::Select => return self.choose_option(self.option_selected),
            Action::Insert(c) => {
                self.focus = Focus::Input;
                self.input.insert(c);
            }
            _ => {}
        }
        Vec::new()
    }

    fn run_quick_action(&mut self, index: usize) -> Vec<SendRequest> {
        let Some(action) = QuickAction::all().get(index).copied() else {
            return Vec::new();
        };
        self.quick_selected = index;
        if matches!(action.kind(), QuickActionKind::Step { .. }) {
            // The bot now waits for typed input.
            self.focus = Focus::Input;
        }
        self.scroll.to_bottom();
        self.widget.quick_action(action).into_iter().collect()
    }

    fn choose_option(&mut self, index: usize) -> Vec<SendRequest> {
        let Some(label) = self.widget.options().get(index).cloned() else {
            return Vec::new();
        };
        self.focus = Focus::Input;
        self.scroll.to_bottom();
        let request = self.widget.choose_option(&label);
        self.normalize();
        request.into_iter().collect()
    }

    /// Handle pasted text.
    pub fn handle_paste(&mut self, text: &str) {
        if self.settings.is_none() && !self.show_help {
            self.focus = Focus::Input;
            self.input.insert_str(text);
        }
    }

    /// Handle wheel scrolling and clicks on buttons.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<SendRequest> {
        if self.settings.is_some() || self.show_help {
            return Vec::new();
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll.scroll_up(SCROLL_SPEED),
            MouseEventKind::ScrollDown => self.scroll.scroll_down(SCROLL_SPEED),
            MouseEventKind::Down(MouseButton::Left) => {
                let labels = Self::quick_action_labels();
                if let Some(i) =
                    ButtonRow::hit_test(&labels, self.areas.quick_actions, mouse.column, mouse.row)
                {
                    return self.run_quick_action(i);
                }

                let options: Vec<&str> =
                    self.widget.options().iter().map(String::as_str).collect();
                if let Some(i) =
                    ButtonRow::hit_test(&options, self.areas.options, mouse.column, mouse.row)
                {
                    return self.choose_option(i);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    /// Apply a finished request.
    pub fn complete(&mut self, outcome: SendOutcome) {
        self.widget.complete(outcome);
        self.normalize();
    }

    /// Advance the spinner.
    pub fn on_tick(&mut self) {
        if self.widget.is_typing() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn toggle_theme(&mut self) {
        let preference = self.widget.toggle_theme();
        self.theme = Theme::for_preference(preference);
    }

    pub fn clear_chat(&mut self) {
        self.widget.reset();
        self.scroll.to_bottom();
        self.normalize();
    }

    fn copy_last_reply(&mut self) {
        let Some(text) = self.widget.last_bot_message().map(|m| m.text.clone()) else {
            return;
        };
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => {
                debug!("Copied last reply to clipboard");
                self.notice = Some("Copied last reply".into());
            }
            Err(e) => {
                warn!(error = %e, "Clipboard unavailable");
                self.notice = Some("Clipboard unavailable".into());
            }
        }
    }
}
