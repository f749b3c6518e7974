//! Single-line text input with cursor management and optional masking.

use crate::tui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// A labeled one-line input field.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    label: String,
    placeholder: String,
    content: String,
    /// Byte offset of the cursor within `content`.
    cursor: usize,
    focused: bool,
    masked: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// Mask typed characters (password entry).
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Offer a key to the field. Returns true if it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.content.clear();
                self.cursor = 0;
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.content.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let prev = self.content[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.content.remove(prev);
                    self.cursor = prev;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.content.len() {
                    self.content.remove(self.cursor);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.content[..self.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                true
            }
            KeyCode::Right => {
                if self.cursor < self.content.len() {
                    let c = self.content[self.cursor..].chars().next().unwrap();
                    self.cursor += c.len_utf8();
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.content.len();
                true
            }
            _ => false,
        }
    }

    fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.content.chars().count())
        } else {
            self.content.clone()
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(theme.text_secondary),
            ));

        let line = if self.content.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(theme.muted),
            ))
        } else {
            let text = self.display_text();
            let mut spans = vec![Span::styled(text, Style::default().fg(theme.text))];
            if self.focused {
                spans.push(Span::styled(
                    "█",
                    Style::default().fg(theme.primary).add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        f.render_widget(Paragraph::new(line).block(block), area);
    }

    /// Rendered height, border included.
    pub fn height(&self) -> u16 {
        3
    }

    /// Width of the visible text (used by tests and layout).
    pub fn display_width(&self) -> usize {
        self.display_text().width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused_input() -> TextInput {
        let mut input = TextInput::new("Email", "you@example.com");
        input.set_focused(true);
        input
    }

    #[test]
    fn typing_and_backspace() {
        let mut input = focused_input();
        for c in "abc".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "abc");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn cursor_movement_edits_mid_string() {
        let mut input = focused_input();
        for c in "ac".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn unfocused_field_ignores_keys() {
        let mut input = TextInput::new("Email", "");
        assert!(!input.handle_key(key(KeyCode::Char('x'))));
        assert!(input.is_empty());
    }

    #[test]
    fn masked_display_hides_content() {
        let mut input = focused_input().masked();
        for c in "secret".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "secret");
        assert_eq!(input.display_text(), "••••••");
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut input = focused_input();
        for c in "hello".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(input.is_empty());
    }

    #[test]
    fn multibyte_input_keeps_cursor_on_boundaries() {
        let mut input = focused_input();
        input.handle_key(key(KeyCode::Char('é')));
        input.handle_key(key(KeyCode::Char('x')));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "x");
    }
}
