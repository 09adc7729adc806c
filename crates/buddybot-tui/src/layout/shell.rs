//! Main screen layout with 4 regions.
//!
//! Regions:
//! 1. Header (top, 1 line)
//! 2. Quick-action bar (bordered, wraps as needed)
//! 3. Conversation pane (expands)
//! 4. Footer hints (bottom, 1 line)
//!
//! Help and settings popups draw over everything.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use super::Focus;
use crate::app::{App, ScreenAreas};
use crate::conversation::ConversationPane;
use crate::widgets::{
    hints_for_focus, FooterHints, HelpOverlay, QuickActionBar, SettingsMenu, StatusBar,
    StatusBarContent,
};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 12;

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the whole screen and record clickable regions on the app.
pub fn render_shell(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let title = app.widget.settings().bot_name.clone();
        frame.render_widget(Paragraph::new(StatusBarContent::too_small(&title)), area);
        app.areas = ScreenAreas::default();
        return;
    }

    let labels = App::quick_action_labels();
    let bar_height = QuickActionBar::height(&labels, area.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Header
            Constraint::Length(bar_height), // Quick actions
            Constraint::Min(0),             // Conversation (expands)
            Constraint::Length(1),          // Footer hints
        ])
        .split(area);

    let header = StatusBarContent::from_widget(&app.widget);
    frame.render_widget(StatusBar::new(&header, &app.theme), chunks[0]);

    let focus = app.focus;
    frame.render_widget(
        QuickActionBar::new(
            &labels,
            app.quick_selected,
            focus == Focus::QuickActions,
            &app.theme,
        ),
        chunks[1],
    );

    let options: Vec<&str> = app.widget.options().iter().map(String::as_str).collect();
    let pane_areas = ConversationPane::areas(chunks[2], &options);
    let pane = ConversationPane::new(&app.widget, &app.input, &app.theme)
        .focus(focus)
        .option_selected(app.option_selected)
        .tick(app.tick);
    frame.render_stateful_widget(pane, chunks[2], &mut app.scroll);

    let hints = hints_for_focus(focus);
    let footer = FooterHints::new(&hints, &app.theme)
        .focus(focus)
        .notice(app.notice.as_deref());
    frame.render_widget(footer, chunks[3]);

    if let Some(menu) = app.settings {
        frame.render_widget(SettingsMenu::new(menu, app.widget.theme(), &app.theme), area);
    }
    if app.show_help {
        frame.render_widget(HelpOverlay::new(&app.theme), area);
    }

    app.areas.quick_actions = QuickActionBar::inner(chunks[1]);
    app.areas.options = pane_areas.options;
}
