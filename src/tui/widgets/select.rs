//! Vertical single-selection list.

use crate::tui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// A labeled option list with one selected entry.
#[derive(Debug, Clone)]
pub struct SelectInput {
    label: String,
    options: Vec<String>,
    selected: usize,
}

impl SelectInput {
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            label: label.into(),
            options,
            selected: 0,
        }
    }

    pub fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    /// Offer a key to the list. Returns true if it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.options.len() {
                    self.selected += 1;
                }
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(theme.text_secondary),
            ));

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                if i == self.selected {
                    Line::from(Span::styled(
                        format!("▶ {option}"),
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {option}"),
                        Style::default().fg(theme.text),
                    ))
                }
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Rendered height, border included.
    pub fn height(&self) -> u16 {
        self.options.len() as u16 + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn select() -> SelectInput {
        SelectInput::new(
            "Type",
            vec!["redis".into(), "postgresql".into(), "mysql".into()],
        )
    }

    #[test]
    fn selection_moves_and_clamps() {
        let mut s = select();
        assert_eq!(s.value(), "redis");
        s.handle_key(key(KeyCode::Down));
        s.handle_key(key(KeyCode::Down));
        s.handle_key(key(KeyCode::Down));
        assert_eq!(s.value(), "mysql");
        s.handle_key(key(KeyCode::Up));
        assert_eq!(s.value(), "postgresql");
    }

    #[test]
    fn vim_keys_work() {
        let mut s = select();
        s.handle_key(key(KeyCode::Char('j')));
        assert_eq!(s.selected(), 1);
        s.handle_key(key(KeyCode::Char('k')));
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn other_keys_are_not_consumed() {
        let mut s = select();
        assert!(!s.handle_key(key(KeyCode::Char('x'))));
    }
}
