//! Turns the message log into styled lines.

use buddybot_engine::{ChatWidget, Message, MessageFormat};
use chrono::Local;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::text::{render_markdown, wrap_text};
use crate::theme::Theme;

/// Animation frames for the typing indicator.
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Message bodies are indented under their author line.
const BODY_INDENT: usize = 2;

/// Render every message (and the typing indicator) at the given width.
///
/// `tick` advances the spinner.
pub fn transcript_lines(
    widget: &ChatWidget,
    theme: &Theme,
    width: usize,
    tick: usize,
) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(BODY_INDENT).max(1);
    let bot_name = widget.settings().bot_name.as_str();

    let mut lines = Vec::new();
    for (i, message) in widget.messages().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(author_line(message, bot_name, theme));

        let indent = Span::raw(" ".repeat(BODY_INDENT));
        match message.format {
            MessageFormat::Markdown => {
                for line in render_markdown(&message.text, body_width, theme) {
                    let mut spans = vec![indent.clone()];
                    spans.extend(line.spans);
                    lines.push(Line::from(spans));
                }
            }
            MessageFormat::Plain | MessageFormat::Warning => {
                let style = if message.format == MessageFormat::Warning {
                    Style::default().fg(theme.error)
                } else {
                    Style::default().fg(theme.text)
                };
                for text in message.text.lines() {
                    for wrapped in wrap_text(text, body_width) {
                        lines.push(Line::from(vec![indent.clone(), Span::styled(wrapped, style)]));
                    }
                }
            }
        }
    }

    if widget.is_typing() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                SPINNER_FRAMES[tick % SPINNER_FRAMES.len()],
                Style::default().fg(theme.bot),
            ),
            Span::raw(" "),
            Span::styled(
                widget.settings().typing_indicator(),
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines
}

fn author_line(message: &Message, bot_name: &str, theme: &Theme) -> Line<'static> {
    let (name, color) = if message.is_user() {
        ("You".to_string(), theme.user)
    } else {
        (bot_name.to_string(), theme.bot)
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    Line::from(vec![
        Span::styled(
            name,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {time}"), Style::default().fg(theme.muted)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_widget;
    use buddybot_engine::{ChatServiceUnavailable, QuickAction, SendOutcome};

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_greeting_is_rendered() {
        let widget = create_test_widget();
        let lines = plain(&transcript_lines(&widget, &Theme::default(), 80, 0));
        assert!(lines[0].starts_with("BuddyBot · "));
        assert!(lines[1].contains("Hey there! I'm BuddyBot"));
        assert!(lines[1].starts_with("  "));
    }

    #[test]
    fn test_user_messages_are_labelled() {
        let mut widget = create_test_widget();
        widget.quick_action(QuickAction::BudgetList);
        let lines = plain(&transcript_lines(&widget, &Theme::default(), 80, 0));
        assert!(lines.iter().any(|l| l.starts_with("You · ")));
        assert!(lines.iter().any(|l| l.contains("Budget list")));
    }

    #[test]
    fn test_typing_indicator_while_pending() {
        let mut widget = create_test_widget();
        let request = widget.submit_input("hello").unwrap();

        let lines = plain(&transcript_lines(&widget, &Theme::default(), 80, 1));
        let last = lines.last().unwrap();
        assert!(last.starts_with(SPINNER_FRAMES[1]));
        assert!(last.ends_with("BuddyBot is typing..."));

        widget.complete(SendOutcome {
            id: request.id,
            result: Ok("**hi**".into()),
        });
        let lines = plain(&transcript_lines(&widget, &Theme::default(), 80, 1));
        assert!(!lines.iter().any(|l| l.contains("typing")));
        assert_eq!(lines.last().unwrap(), "  hi");
    }

    #[test]
    fn test_apology_uses_error_color() {
        let mut widget = create_test_widget();
        let request = widget.submit_input("hello").unwrap();
        widget.complete(SendOutcome {
            id: request.id,
            result: Err(ChatServiceUnavailable::new("down")),
        });

        let theme = Theme::default();
        let lines = transcript_lines(&widget, &theme, 80, 0);
        let last = lines.last().unwrap();
        assert_eq!(last.spans[1].style.fg, Some(theme.error));
    }

    #[test]
    fn test_reply_matching_apology_text_is_not_a_warning() {
        let mut widget = create_test_widget();
        let apology = widget.settings().apology();
        let request = widget.submit_input("say the error line").unwrap();
        widget.complete(SendOutcome {
            id: request.id,
            result: Ok(apology.clone()),
        });

        let theme = Theme::default();
        let lines = transcript_lines(&widget, &theme, 80, 0);
        let last = lines.last().unwrap();
        assert!(last.spans.iter().all(|s| s.style.fg != Some(theme.error)));
    }

    #[test]
    fn test_long_messages_wrap_within_width() {
        let mut widget = create_test_widget();
        widget.submit_input(&"word ".repeat(40));
        for line in transcript_lines(&widget, &Theme::default(), 30, 0) {
            assert!(line.width() <= 30);
        }
    }
}
