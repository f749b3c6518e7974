//! One-line status bar at the bottom of every view.

use crate::tui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Left: view name, center: breadcrumb, right: key hints.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    left: String,
    center: String,
    right: String,
}

impl StatusBar {
    pub fn new(
        left: impl Into<String>,
        center: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            center: center.into(),
            right: right.into(),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = area.width as usize;
        let left = format!(" {}", self.left);
        let right = format!("{} ", self.right);

        // Center the breadcrumb; pad left/right to fill the line.
        let used = left.width() + right.width();
        let center_room = width.saturating_sub(used);
        let center = if self.center.width() > center_room {
            String::new()
        } else {
            let pad = (center_room - self.center.width()) / 2;
            format!(
                "{}{}{}",
                " ".repeat(pad),
                self.center,
                " ".repeat(center_room - pad - self.center.width())
            )
        };

        let line = Line::from(vec![
            Span::styled(left, Style::default().fg(theme.text).bg(theme.highlight)),
            Span::styled(
                center,
                Style::default().fg(theme.muted).bg(theme.highlight),
            ),
            Span::styled(
                right,
                Style::default().fg(theme.text_secondary).bg(theme.highlight),
            ),
        ]);

        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(theme.highlight)),
            area,
        );
    }
}
