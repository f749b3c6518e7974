//! Step indicator for multi-step forms.

use crate::tui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Horizontal "Step 2 of 5: Name ● ● ○ ○ ○" indicator.
#[derive(Debug, Clone)]
pub struct StepProgress {
    steps: Vec<String>,
    current: usize,
}

impl StepProgress {
    pub fn new(steps: Vec<String>) -> Self {
        Self { steps, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        }
    }

    /// Step back. Returns false when already on the first step.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let label = self
            .steps
            .get(self.current)
            .map(String::as_str)
            .unwrap_or("");
        let mut spans = vec![Span::styled(
            format!("Step {} of {}: {}  ", self.current + 1, self.steps.len(), label),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )];
        for i in 0..self.steps.len() {
            let (dot, color) = if i <= self.current {
                ("● ", theme.primary)
            } else {
                ("○ ", theme.muted)
            };
            spans.push(Span::styled(dot, Style::default().fg(color)));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress() -> StepProgress {
        StepProgress::new(vec![
            "Name".into(),
            "Type".into(),
            "Tier".into(),
            "Description".into(),
            "Confirm".into(),
        ])
    }

    #[test]
    fn next_clamps_at_the_last_step() {
        let mut p = progress();
        for _ in 0..10 {
            p.next();
        }
        assert_eq!(p.current(), 4);
        assert!(p.is_last());
    }

    #[test]
    fn prev_reports_when_already_first() {
        let mut p = progress();
        assert!(!p.prev());
        p.next();
        assert!(p.prev());
        assert_eq!(p.current(), 0);
    }
}
