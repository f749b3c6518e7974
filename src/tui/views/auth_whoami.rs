//! Current-user screen.

use super::{back, chrome};
use crate::tui::command::Command;
use crate::tui::message::{Message, Update};
use crate::tui::state::AppState;
use crate::tui::widgets::Spinner;
use crate::models::User;
use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

#[derive(Debug)]
enum Phase {
    Loading(Spinner),
    Loaded(Box<User>),
    Error(String),
}

#[derive(Debug)]
pub struct AuthWhoamiView {
    phase: Phase,
}

impl AuthWhoamiView {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading(Spinner::new("Fetching current user...")),
        }
    }

    pub fn init(&mut self) -> Update {
        Update::command(Command::Whoami)
    }

    pub fn update(&mut self, message: Message) -> Update {
        match message {
            Message::Tick => {
                if let Phase::Loading(spinner) = &mut self.phase {
                    spinner.tick();
                }
                Update::none()
            }
            Message::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => back(),
                KeyCode::Char('r') => {
                    self.phase = Phase::Loading(Spinner::new("Fetching current user..."));
                    Update::command(Command::Whoami)
                }
                _ => Update::none(),
            },
            Message::WhoamiFinished(Ok(user)) => {
                self.phase = Phase::Loaded(Box::new(user));
                Update::none()
            }
            Message::WhoamiFinished(Err(e)) => {
                self.phase = Phase::Error(e.to_string());
                Update::none()
            }
            _ => Update::none(),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let area = chrome(f, state, "r refresh · esc back");

        match &self.phase {
            Phase::Loading(spinner) => spinner.render(f, area, theme),
            Phase::Error(message) => {
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        message.clone(),
                        Style::default().fg(theme.error),
                    ))),
                    area,
                );
            }
            Phase::Loaded(user) => {
                let label = Style::default().fg(theme.text_secondary);
                let value = Style::default().fg(theme.text);
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("Email  ", label),
                        Span::styled(user.email.clone(), value.add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(vec![
                        Span::styled("Name   ", label),
                        Span::styled(
                            if user.name.is_empty() {
                                "-".to_string()
                            } else {
                                user.name.clone()
                            },
                            value,
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("Role   ", label),
                        Span::styled(format!("{:?}", user.role).to_lowercase(), value),
                    ]),
                    Line::from(vec![
                        Span::styled("ID     ", label),
                        Span::styled(user.id.clone(), Style::default().fg(theme.muted)),
                    ]),
                ];
                if let Some(created) = user.created_at {
                    lines.push(Line::from(vec![
                        Span::styled("Since  ", label),
                        Span::styled(created.format("%Y-%m-%d").to_string(), value),
                    ]));
                }
                f.render_widget(
                    Paragraph::new(lines).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(theme.border))
                            .title(" Current User "),
                    ),
                    area,
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

    fn user() -> User {
        serde_json::from_str(r#"{"id":"u-1","email":"user@example.com"}"#).unwrap()
    }

    #[test]
    fn init_issues_whoami() {
        let mut view = AuthWhoamiView::new();
        assert!(matches!(view.init().command, Some(Command::Whoami)));
    }

    #[test]
    fn result_replaces_the_loading_phase() {
        let mut view = AuthWhoamiView::new();
        view.update(Message::WhoamiFinished(Ok(user())));
        assert!(matches!(view.phase, Phase::Loaded(_)));
        view.update(Message::WhoamiFinished(Err(ApiError::Forbidden)));
        assert!(matches!(view.phase, Phase::Error(_)));
    }

    #[test]
    fn refresh_reloads() {
        let mut view = AuthWhoamiView::new();
        view.update(Message::WhoamiFinished(Ok(user())));
        let update = view.update(key(KeyCode::Char('r')));
        assert!(matches!(update.command, Some(Command::Whoami)));
        assert!(matches!(view.phase, Phase::Loading(_)));
    }
}
