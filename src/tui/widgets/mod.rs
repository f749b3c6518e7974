//! Reusable widgets for the dashboard views.

mod input;
mod modal;
mod progress;
mod select;
mod spinner;
mod status_bar;

pub use input::TextInput;
pub use modal::{Choice, ConfirmModal};
pub use progress::StepProgress;
pub use select::SelectInput;
pub use spinner::Spinner;
pub use status_bar::StatusBar;

use ratatui::layout::Rect;

/// A `width` x `height` rectangle centered inside `area`, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect(100, 100, area);
        assert_eq!(r, area);
    }

    #[test]
    fn centered_rect_centers() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect(10, 4, area);
        assert_eq!(r, Rect::new(5, 3, 10, 4));
    }
}
