//! Authentication submenu.

use super::{back, chrome, go, menu_nav};
use crate::tui::message::{Message, Update};
use crate::tui::router::ViewId;
use crate::tui::state::AppState;
use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const MENU: &[(&str, ViewId)] = &[
    ("Login", ViewId::AuthLogin),
    ("Logout", ViewId::AuthLogout),
    ("Current User", ViewId::AuthWhoami),
];

#[derive(Debug)]
pub struct AuthMenuView {
    selected: usize,
}

impl AuthMenuView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn update(&mut self, message: Message) -> Update {
        if let Message::Key(key) = message {
            if menu_nav(key.code, &mut self.selected, MENU.len()) {
                return Update::none();
            }
            match key.code {
                KeyCode::Enter => {
                    if let Some((_, view)) = MENU.get(self.selected) {
                        return go(*view);
                    }
                }
                KeyCode::Esc | KeyCode::Char('q') => return back(),
                _ => {}
            }
        }
        Update::none()
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let area = chrome(f, state, "↑↓ select · enter open · esc back");

        let lines: Vec<Line> = MENU
            .iter()
            .enumerate()
            .map(|(i, (label, _))| {
                if i == self.selected {
                    Line::from(Span::styled(
                        format!("▶ {label}"),
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {label}"),
                        Style::default().fg(theme.text),
                    ))
                }
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Authentication "),
            ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_opens_login_by_default() {
        let mut view = AuthMenuView::new();
        let update = view.update(key(KeyCode::Enter));
        assert!(matches!(
            update.message,
            Some(Message::Navigate(ViewId::AuthLogin))
        ));
    }

    #[test]
    fn esc_goes_back() {
        let mut view = AuthMenuView::new();
        let update = view.update(key(KeyCode::Esc));
        assert!(matches!(update.message, Some(Message::Back)));
    }
}
