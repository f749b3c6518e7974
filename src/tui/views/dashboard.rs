//! Landing screen: main menu, account panel, recent services.

use super::{back, chrome, go, menu_nav};
use crate::tui::command::Command;
use crate::tui::message::{Message, Update};
use crate::tui::router::ViewId;
use crate::tui::state::AppState;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const MENU: &[(&str, ViewId)] = &[
    ("Services", ViewId::ServiceList),
    ("Create Service", ViewId::ServiceCreate),
    ("Authentication", ViewId::AuthMenu),
    ("Help", ViewId::Help),
    ("Exit", ViewId::Exit),
];

#[derive(Debug)]
pub struct DashboardView {
    selected: usize,
}

impl DashboardView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn init(&mut self, state: &AppState) -> Update {
        // Warm the recent-services panel; anonymous sessions skip the call.
        if state.is_authenticated() {
            Update::command(Command::ListServices)
        } else {
            Update::none()
        }
    }

    pub fn update(&mut self, message: Message, state: &mut AppState) -> Update {
        match message {
            Message::Key(key) => {
                if menu_nav(key.code, &mut self.selected, MENU.len()) {
                    return Update::none();
                }
                match key.code {
                    KeyCode::Enter => self.activate(self.selected),
                    KeyCode::Char(c @ '1'..='5') => {
                        self.activate(c as usize - '1' as usize)
                    }
                    KeyCode::Char('q') => Update::message(Message::Exit),
                    KeyCode::Esc if state.router.can_go_back() => back(),
                    _ => Update::none(),
                }
            }
            // The engine already folded the list into the shared cache.
            Message::ServicesLoaded(_) => Update::none(),
            // Startup session probe confirmed; warm the recent panel now.
            Message::WhoamiFinished(Ok(_)) => Update::command(Command::ListServices),
            _ => Update::none(),
        }
    }

    fn activate(&self, index: usize) -> Update {
        match MENU.get(index) {
            Some((_, ViewId::Exit)) => Update::message(Message::Exit),
            Some((_, view)) => go(*view),
            None => Update::none(),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let area = chrome(f, state, "↑↓ select · enter open · q quit");

        let [menu_area, side] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        let [account_area, recent_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(side);

        let menu_lines: Vec<Line> = MENU
            .iter()
            .enumerate()
            .map(|(i, (label, _))| {
                let prefix = format!(" {}. ", i + 1);
                if i == self.selected {
                    Line::from(vec![
                        Span::styled(prefix, Style::default().fg(theme.muted)),
                        Span::styled(
                            format!("▶ {label}"),
                            Style::default()
                                .fg(theme.primary)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled(prefix, Style::default().fg(theme.muted)),
                        Span::styled(format!("  {label}"), Style::default().fg(theme.text)),
                    ])
                }
            })
            .collect();
        f.render_widget(
            Paragraph::new(menu_lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Menu "),
            ),
            menu_area,
        );

        let account_lines = if let Some(user) = state.current_user() {
            vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(theme.success)),
                    Span::styled(user.email.clone(), Style::default().fg(theme.text)),
                ]),
                Line::from(Span::styled(
                    format!("role: {:?}", user.role).to_lowercase(),
                    Style::default().fg(theme.text_secondary),
                )),
            ]
        } else {
            vec![
                Line::from(vec![
                    Span::styled("○ ", Style::default().fg(theme.muted)),
                    Span::styled("Not signed in", Style::default().fg(theme.text_secondary)),
                ]),
                Line::from(Span::styled(
                    "Authentication › Login to get started",
                    Style::default().fg(theme.muted),
                )),
            ]
        };
        f.render_widget(
            Paragraph::new(account_lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Account "),
            ),
            account_area,
        );

        let recent_lines: Vec<Line> = if state.recent_services.is_empty() {
            vec![Line::from(Span::styled(
                "No services yet",
                Style::default().fg(theme.muted),
            ))]
        } else {
            state
                .recent_services
                .iter()
                .map(|svc| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:<20}", svc.name),
                            Style::default().fg(theme.text),
                        ),
                        Span::styled(
                            format!("{:<14}", svc.service_type),
                            Style::default().fg(theme.text_secondary),
                        ),
                        Span::styled(
                            svc.status.to_string(),
                            Style::default().fg(super::service_list::status_color(
                                svc.status, theme,
                            )),
                        ),
                    ])
                })
                .collect()
        };
        f.render_widget(
            Paragraph::new(recent_lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Recent Services "),
            ),
            recent_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state() -> AppState {
        AppState::new(Theme::default(), ViewId::Dashboard)
    }

    #[test]
    fn enter_navigates_to_selected_entry() {
        let mut view = DashboardView::new();
        let mut st = state();
        let update = view.update(key(KeyCode::Enter), &mut st);
        assert!(matches!(
            update.message,
            Some(Message::Navigate(ViewId::ServiceList))
        ));
    }

    #[test]
    fn exit_entry_emits_exit_message() {
        let mut view = DashboardView::new();
        let mut st = state();
        for _ in 0..MENU.len() {
            view.update(key(KeyCode::Down), &mut st);
        }
        let update = view.update(key(KeyCode::Enter), &mut st);
        assert!(matches!(update.message, Some(Message::Exit)));
    }

    #[test]
    fn digit_shortcut_activates_directly() {
        let mut view = DashboardView::new();
        let mut st = state();
        let update = view.update(key(KeyCode::Char('3')), &mut st);
        assert!(matches!(
            update.message,
            Some(Message::Navigate(ViewId::AuthMenu))
        ));
    }

    #[test]
    fn anonymous_dashboard_does_not_fetch_services() {
        let mut view = DashboardView::new();
        let st = state();
        assert!(view.init(&st).command.is_none());
    }
}
