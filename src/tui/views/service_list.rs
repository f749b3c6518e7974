//! Service listing with selection.

use super::{back, chrome, go};
use crate::models::ServiceStatus;
use crate::tui::command::Command;
use crate::tui::message::{Message, Update};
use crate::tui::router::ViewId;
use crate::tui::state::AppState;
use crate::tui::theme::Theme;
use crate::tui::widgets::Spinner;
use crossterm::event::KeyCode;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

/// Status color shared with the dashboard's recent panel.
pub(super) fn status_color(status: ServiceStatus, theme: &Theme) -> Color {
    match status {
        ServiceStatus::Running => theme.success,
        ServiceStatus::Pending | ServiceStatus::Creating => theme.warning,
        ServiceStatus::Stopped => theme.muted,
        ServiceStatus::Failed => theme.error,
        ServiceStatus::Deleting => theme.warning,
    }
}

#[derive(Debug)]
enum Phase {
    Loading(Spinner),
    Loaded,
    Error(String),
}

#[derive(Debug)]
pub struct ServiceListView {
    phase: Phase,
    selected: usize,
}

impl ServiceListView {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading(Spinner::new("Loading services...")),
            selected: 0,
        }
    }

    pub fn init(&mut self) -> Update {
        Update::command(Command::ListServices)
    }

    fn refresh(&mut self) -> Update {
        self.phase = Phase::Loading(Spinner::new("Loading services..."));
        Update::command(Command::ListServices)
    }

    pub fn update(&mut self, message: Message, state: &mut AppState) -> Update {
        match message {
            Message::Tick => {
                if let Phase::Loading(spinner) = &mut self.phase {
                    spinner.tick();
                }
                Update::none()
            }
            Message::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => back(),
                KeyCode::Char('r') => self.refresh(),
                KeyCode::Char('c') => go(ViewId::ServiceCreate),
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    }
                    Update::none()
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected + 1 < state.services.len() {
                        self.selected += 1;
                    }
                    Update::none()
                }
                KeyCode::Enter => {
                    if state.services.is_empty() {
                        Update::none()
                    } else {
                        go(ViewId::ServiceDetail)
                    }
                }
                _ => Update::none(),
            },
            Message::ServicesLoaded(Ok(_)) => {
                // Shared cache was updated by the engine before dispatch.
                self.phase = Phase::Loaded;
                self.selected = self.selected.min(state.services.len().saturating_sub(1));
                Update::none()
            }
            Message::ServicesLoaded(Err(e)) => {
                self.phase = Phase::Error(e.to_string());
                Update::none()
            }
            _ => Update::none(),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let area = chrome(f, state, "↑↓ select · enter details · c create · r refresh · esc back");

        match &self.phase {
            Phase::Loading(spinner) => spinner.render(f, area, theme),
            Phase::Error(message) => {
                let lines = vec![
                    Line::from(Span::styled(
                        message.clone(),
                        Style::default().fg(theme.error),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Press r to retry",
                        Style::default().fg(theme.muted),
                    )),
                ];
                f.render_widget(Paragraph::new(lines), area);
            }
            Phase::Loaded if state.services.is_empty() => {
                let lines = vec![
                    Line::from(Span::styled(
                        "No services found",
                        Style::default().fg(theme.muted),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Press c to create your first service",
                        Style::default().fg(theme.text_secondary),
                    )),
                ];
                f.render_widget(Paragraph::new(lines), area);
            }
            Phase::Loaded => {
                let header = Row::new(["Name", "Type", "Tier", "Status", "Region"]).style(
                    Style::default()
                        .fg(theme.secondary)
                        .add_modifier(Modifier::BOLD),
                );
                let rows: Vec<Row> = state
                    .services
                    .iter()
                    .enumerate()
                    .map(|(i, svc)| {
                        let row = Row::new(vec![
                            Span::styled(svc.name.clone(), Style::default().fg(theme.text)),
                            Span::styled(
                                svc.service_type.to_string(),
                                Style::default().fg(theme.text_secondary),
                            ),
                            Span::styled(
                                svc.tier.to_string(),
                                Style::default().fg(theme.text_secondary),
                            ),
                            Span::styled(
                                svc.status.to_string(),
                                Style::default().fg(status_color(svc.status, theme)),
                            ),
                            Span::styled(
                                svc.region.clone(),
                                Style::default().fg(theme.muted),
                            ),
                        ]);
                        if i == self.selected {
                            row.style(Style::default().bg(theme.highlight))
                        } else {
                            row
                        }
                    })
                    .collect();
                let table = Table::new(
                    rows,
                    [
                        Constraint::Percentage(30),
                        Constraint::Percentage(18),
                        Constraint::Percentage(14),
                        Constraint::Percentage(16),
                        Constraint::Percentage(22),
                    ],
                )
                .header(header)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border))
                        .title(format!(" Services ({}) ", state.services.len())),
                );
                f.render_widget(table, area);
            }
        }
    }
}
