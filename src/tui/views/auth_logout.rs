//! Logout confirmation.

use super::{back, chrome, go};
use crate::tui::command::Command;
use crate::tui::message::{Message, Update};
use crate::tui::router::ViewId;
use crate::tui::state::AppState;
use crate::tui::widgets::{Choice, ConfirmModal, Spinner};
use ratatui::Frame;

#[derive(Debug)]
enum Phase {
    Confirming(ConfirmModal),
    Submitting(Spinner),
}

#[derive(Debug)]
pub struct AuthLogoutView {
    phase: Phase,
}

impl AuthLogoutView {
    pub fn new() -> Self {
        Self {
            phase: Phase::Confirming(ConfirmModal::new(
                "Confirm Logout",
                "Sign out and clear stored credentials?",
                "Logout",
                "Cancel",
            )),
        }
    }

    pub fn update(&mut self, message: Message) -> Update {
        match message {
            Message::Tick => {
                if let Phase::Submitting(spinner) = &mut self.phase {
                    spinner.tick();
                }
                Update::none()
            }
            Message::Key(key) => {
                let Phase::Confirming(modal) = &mut self.phase else {
                    return Update::none();
                };
                match modal.handle_key(key) {
                    Choice::Confirmed => {
                        self.phase = Phase::Submitting(Spinner::new("Signing out..."));
                        Update::command(Command::Logout)
                    }
                    Choice::Cancelled => back(),
                    Choice::Pending => Update::none(),
                }
            }
            // Local credentials are cleared regardless of the server's
            // answer, so both outcomes land back on the dashboard.
            Message::LogoutFinished(_) => go(ViewId::Dashboard),
            _ => Update::none(),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let full = f.area();
        let area = chrome(f, state, "←→ choose · enter confirm · esc cancel");
        match &self.phase {
            Phase::Confirming(modal) => modal.render(f, full, theme),
            Phase::Submitting(spinner) => spinner.render(f, area, theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn default_choice_cancels() {
        let mut view = AuthLogoutView::new();
        let update = view.update(key(KeyCode::Enter));
        assert!(update.command.is_none());
        assert!(matches!(update.message, Some(Message::Back)));
    }

    #[test]
    fn confirming_issues_logout() {
        let mut view = AuthLogoutView::new();
        view.update(key(KeyCode::Left));
        let update = view.update(key(KeyCode::Enter));
        assert!(matches!(update.command, Some(Command::Logout)));
    }

    #[test]
    fn failed_logout_still_returns_to_dashboard() {
        let mut view = AuthLogoutView::new();
        let update = view.update(Message::LogoutFinished(Err(ApiError::Transport(
            "connection refused".to_string(),
        ))));
        assert!(matches!(
            update.message,
            Some(Message::Navigate(ViewId::Dashboard))
        ));
    }
}
