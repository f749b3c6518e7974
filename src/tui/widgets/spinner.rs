//! Braille spinner shown while a command is in flight.

use crate::tui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone)]
pub struct Spinner {
    label: String,
    frame: usize,
}

impl Spinner {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            frame: 0,
        }
    }

    /// Advance the animation by one frame (called on `Message::Tick`).
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = Line::from(vec![
            Span::styled(FRAMES[self.frame], Style::default().fg(theme.accent)),
            Span::raw(" "),
            Span::styled(self.label.clone(), Style::default().fg(theme.text_secondary)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_wraps_around() {
        let mut spinner = Spinner::new("Loading...");
        for _ in 0..FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.frame, 0);
    }
}
