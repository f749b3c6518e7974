//! Static key-binding reference.

use super::{back, chrome};
use crate::tui::message::{Message, Update};
use crate::tui::state::AppState;
use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const BINDINGS: &[(&str, &str)] = &[
    ("↑/k, ↓/j", "Move selection"),
    ("enter", "Activate / submit"),
    ("esc", "Back / previous step"),
    ("tab", "Next form field"),
    ("ctrl+n/p", "Wizard next / previous step"),
    ("r", "Refresh the current view"),
    ("c", "Create a service (from the list)"),
    ("1-5", "Dashboard menu shortcuts"),
    ("q", "Back (quit from the dashboard)"),
    ("ctrl+c", "Quit from anywhere"),
];

#[derive(Debug)]
pub struct HelpView;

impl HelpView {
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self, message: Message) -> Update {
        if let Message::Key(key) = message {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
                return back();
            }
        }
        Update::none()
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let area = chrome(f, state, "esc back");

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("{keys:<12}"),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*action, Style::default().fg(theme.text)),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Key Bindings "),
            ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn dismiss_keys_go_back() {
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Enter] {
            let mut view = HelpView::new();
            let update = view.update(Message::Key(KeyEvent::new(code, KeyModifiers::NONE)));
            assert!(matches!(update.message, Some(Message::Back)));
        }
    }
}
