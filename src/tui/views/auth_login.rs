//! Email/password login form.

use super::{back, chrome, go};
use crate::tui::command::Command;
use crate::tui::message::{Message, Update};
use crate::tui::router::ViewId;
use crate::tui::state::AppState;
use crate::tui::widgets::{Spinner, TextInput};
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FOCUS_EMAIL: usize = 0;
const FOCUS_PASSWORD: usize = 1;
const FOCUS_SUBMIT: usize = 2;

#[derive(Debug)]
enum Phase {
    Editing,
    Submitting(Spinner),
    Error(String),
}

#[derive(Debug)]
pub struct AuthLoginView {
    email: TextInput,
    password: TextInput,
    focus: usize,
    phase: Phase,
}

impl AuthLoginView {
    pub fn new() -> Self {
        let mut email = TextInput::new("Email", "you@example.com");
        email.set_focused(true);
        Self {
            email,
            password: TextInput::new("Password", "").masked(),
            focus: FOCUS_EMAIL,
            phase: Phase::Editing,
        }
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
        self.email.set_focused(focus == FOCUS_EMAIL);
        self.password.set_focused(focus == FOCUS_PASSWORD);
    }

    fn submit(&mut self) -> Update {
        if self.email.is_empty() || self.password.is_empty() {
            self.phase = Phase::Error("Email and password are required".to_string());
            self.set_focus(FOCUS_EMAIL);
            return Update::none();
        }
        self.phase = Phase::Submitting(Spinner::new("Signing in..."));
        Update::command(Command::Login {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        })
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
                if matches!(self.phase, Phase::Submitting(_)) {
                    return Update::none();
                }
                match key.code {
                    KeyCode::Esc => back(),
                    KeyCode::Tab | KeyCode::Down => {
                        self.set_focus((self.focus + 1) % 3);
                        Update::none()
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        self.set_focus((self.focus + 2) % 3);
                        Update::none()
                    }
                    KeyCode::Enter => {
                        // A filled password submits straight from the field;
                        // otherwise Enter walks the focus forward.
                        if self.focus == FOCUS_SUBMIT
                            || (self.focus == FOCUS_PASSWORD && !self.password.is_empty())
                        {
                            self.submit()
                        } else {
                            self.set_focus(self.focus + 1);
                            Update::none()
                        }
                    }
                    _ => {
                        if self.email.handle_key(key) || self.password.handle_key(key) {
                            if matches!(self.phase, Phase::Error(_)) {
                                self.phase = Phase::Editing;
                            }
                        }
                        Update::none()
                    }
                }
            }
            Message::LoginFinished(Ok(_)) => {
                // The engine has already recorded the session.
                go(ViewId::Dashboard)
            }
            Message::LoginFinished(Err(e)) => {
                self.phase = Phase::Error(e.to_string());
                self.set_focus(FOCUS_EMAIL);
                Update::none()
            }
            _ => Update::none(),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let area = chrome(f, state, "tab next field · enter submit · esc back");

        let [email_area, password_area, submit_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(area);

        self.email.render(f, email_area, theme);
        self.password.render(f, password_area, theme);

        let submit_style = if self.focus == FOCUS_SUBMIT {
            Style::default()
                .fg(theme.bg)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("[ Sign in ]", submit_style))),
            submit_area,
        );

        match &self.phase {
            Phase::Editing => {}
            Phase::Submitting(spinner) => spinner.render(f, status_area, theme),
            Phase::Error(message) => {
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        message.clone(),
                        Style::default().fg(theme.error),
                    ))),
                    status_area,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(view: &mut AuthLoginView, s: &str) {
        for c in s.chars() {
            view.update(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn empty_form_is_rejected_without_a_command() {
        let mut view = AuthLoginView::new();
        view.set_focus(FOCUS_SUBMIT);
        let update = view.update(key(KeyCode::Enter));
        assert!(update.command.is_none());
        assert!(matches!(view.phase, Phase::Error(_)));
    }

    #[test]
    fn filled_form_issues_login_command() {
        let mut view = AuthLoginView::new();
        type_str(&mut view, "user@example.com");
        view.update(key(KeyCode::Tab));
        type_str(&mut view, "hunter2");
        view.update(key(KeyCode::Tab));
        let update = view.update(key(KeyCode::Enter));
        match update.command {
            Some(Command::Login { email, password }) => {
                assert_eq!(email, "user@example.com");
                assert_eq!(password, "hunter2");
            }
            other => panic!("expected login command, got {other:?}"),
        }
        assert!(matches!(view.phase, Phase::Submitting(_)));
    }

    #[test]
    fn enter_on_filled_password_submits_without_reaching_the_button() {
        let mut view = AuthLoginView::new();
        type_str(&mut view, "user@example.com");
        view.update(key(KeyCode::Enter));
        type_str(&mut view, "hunter2");
        let update = view.update(key(KeyCode::Enter));
        assert!(matches!(update.command, Some(Command::Login { .. })));
        assert!(matches!(view.phase, Phase::Submitting(_)));
    }

    #[test]
    fn enter_on_empty_password_only_moves_focus() {
        let mut view = AuthLoginView::new();
        type_str(&mut view, "user@example.com");
        view.update(key(KeyCode::Enter));
        let update = view.update(key(KeyCode::Enter));
        assert!(update.command.is_none());
        assert_eq!(view.focus, FOCUS_SUBMIT);
    }

    #[test]
    fn keys_are_ignored_while_submitting() {
        let mut view = AuthLoginView::new();
        view.phase = Phase::Submitting(Spinner::new("Signing in..."));
        let update = view.update(key(KeyCode::Esc));
        assert!(update.message.is_none());
    }

    #[test]
    fn failed_login_surfaces_the_error() {
        let mut view = AuthLoginView::new();
        view.phase = Phase::Submitting(Spinner::new("Signing in..."));
        view.update(Message::LoginFinished(Err(ApiError::Unauthorized(
            "invalid credentials".to_string(),
        ))));
        assert!(matches!(view.phase, Phase::Error(_)));
    }

    #[test]
    fn successful_login_returns_to_dashboard() {
        let mut view = AuthLoginView::new();
        let json = r#"{
            "user": {"id":"u-1","email":"user@example.com"},
            "tokens": {"access_token":"at","refresh_token":"rt"}
        }"#;
        let resp = serde_json::from_str(json).unwrap();
        let update = view.update(Message::LoginFinished(Ok(resp)));
        assert!(matches!(
            update.message,
            Some(Message::Navigate(ViewId::Dashboard))
        ));
    }
}
