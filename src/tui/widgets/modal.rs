//! Yes/no confirmation modal.

use super::centered_rect;
use crate::tui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Outcome of a key offered to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Selection moved or the key was ignored; modal stays open.
    Pending,
    Confirmed,
    Cancelled,
}

/// Two-button confirmation dialog. The cancel button starts selected.
#[derive(Debug, Clone)]
pub struct ConfirmModal {
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    confirm_selected: bool,
}

impl ConfirmModal {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        cancel_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            cancel_label: cancel_label.into(),
            confirm_selected: false,
        }
    }

    pub fn confirm_selected(&self) -> bool {
        self.confirm_selected
    }

    /// Offer a key to the modal.
    pub fn handle_key(&mut self, key: KeyEvent) -> Choice {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.confirm_selected = !self.confirm_selected;
                Choice::Pending
            }
            KeyCode::Char('y') => Choice::Confirmed,
            KeyCode::Char('n') => Choice::Cancelled,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.confirm_selected {
                    Choice::Confirmed
                } else {
                    Choice::Cancelled
                }
            }
            KeyCode::Esc => Choice::Cancelled,
            _ => Choice::Pending,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = (self.message.len() as u16 + 8).clamp(40, area.width);
        let rect = centered_rect(width, 7, area);

        f.render_widget(Clear, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));

        let selected = Style::default()
            .fg(theme.bg)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD);
        let unselected = Style::default().fg(theme.text_secondary);

        let buttons = Line::from(vec![
            Span::styled(
                format!("[ {} ]", self.confirm_label),
                if self.confirm_selected { selected } else { unselected },
            ),
            Span::raw("    "),
            Span::styled(
                format!("[ {} ]", self.cancel_label),
                if self.confirm_selected { unselected } else { selected },
            ),
        ]);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(theme.text),
            )),
            Line::default(),
            buttons,
        ];

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn modal() -> ConfirmModal {
        ConfirmModal::new("Confirm Logout", "Log out of QuickSpin?", "Logout", "Cancel")
    }

    #[test]
    fn cancel_is_the_default() {
        let mut m = modal();
        assert_eq!(m.handle_key(key(KeyCode::Enter)), Choice::Cancelled);
    }

    #[test]
    fn arrow_then_enter_confirms() {
        let mut m = modal();
        assert_eq!(m.handle_key(key(KeyCode::Left)), Choice::Pending);
        assert!(m.confirm_selected());
        assert_eq!(m.handle_key(key(KeyCode::Enter)), Choice::Confirmed);
    }

    #[test]
    fn shortcut_keys_resolve_immediately() {
        assert_eq!(modal().handle_key(key(KeyCode::Char('y'))), Choice::Confirmed);
        assert_eq!(modal().handle_key(key(KeyCode::Char('n'))), Choice::Cancelled);
        assert_eq!(modal().handle_key(key(KeyCode::Esc)), Choice::Cancelled);
    }
}
