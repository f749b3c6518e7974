//! Five-step service creation wizard.

use super::{back, chrome, go};
use crate::models::{CreateServiceRequest, ServiceTier, ServiceType};
use crate::tui::command::Command;
use crate::tui::message::{Message, Update};
use crate::tui::router::ViewId;
use crate::tui::state::AppState;
use crate::tui::widgets::{SelectInput, Spinner, StepProgress, TextInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const STEP_NAME: usize = 0;
const STEP_TYPE: usize = 1;
const STEP_TIER: usize = 2;
const STEP_DESCRIPTION: usize = 3;
const STEP_CONFIRM: usize = 4;

#[derive(Debug)]
enum Phase {
    Editing,
    Submitting(Spinner),
    Error(String),
}

#[derive(Debug)]
pub struct ServiceCreateView {
    progress: StepProgress,
    name: TextInput,
    service_type: SelectInput,
    tier: SelectInput,
    description: TextInput,
    phase: Phase,
    validation: Option<String>,
}

impl ServiceCreateView {
    pub fn new() -> Self {
        let mut name = TextInput::new("Service name", "my-cache");
        name.set_focused(true);
        let mut description = TextInput::new("Description (optional)", "");
        description.set_focused(false);
        Self {
            progress: StepProgress::new(vec![
                "Name".into(),
                "Type".into(),
                "Tier".into(),
                "Description".into(),
                "Confirm".into(),
            ]),
            name,
            service_type: SelectInput::new(
                "Service type",
                ServiceType::ALL.iter().map(|t| t.to_string()).collect(),
            ),
            tier: SelectInput::new(
                "Tier",
                ServiceTier::SELECTABLE
                    .iter()
                    .map(|t| t.to_string())
                    .collect(),
            ),
            description,
            phase: Phase::Editing,
            validation: None,
        }
    }

    fn sync_focus(&mut self) {
        self.name.set_focused(self.progress.current() == STEP_NAME);
        self.description
            .set_focused(self.progress.current() == STEP_DESCRIPTION);
    }

    fn advance(&mut self) {
        if self.progress.current() == STEP_NAME && self.name.is_empty() {
            self.validation = Some("Service name is required".to_string());
            return;
        }
        self.validation = None;
        self.progress.next();
        self.sync_focus();
    }

    fn retreat(&mut self) -> Update {
        self.validation = None;
        if self.progress.prev() {
            self.sync_focus();
            Update::none()
        } else {
            back()
        }
    }

    fn request(&self) -> CreateServiceRequest {
        let service_type = ServiceType::ALL[self.service_type.selected()];
        let tier = ServiceTier::SELECTABLE[self.tier.selected()];
        CreateServiceRequest {
            name: self.name.value().to_string(),
            service_type,
            tier,
            region: None,
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.value().to_string())
            },
        }
    }

    fn submit(&mut self) -> Update {
        self.phase = Phase::Submitting(Spinner::new("Creating service..."));
        Update::command(Command::CreateService(Box::new(self.request())))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Update {
        if let Phase::Error(_) = self.phase {
            // Any key returns to the confirm step for another attempt.
            self.phase = Phase::Editing;
            return Update::none();
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return self.retreat(),
            KeyCode::Char('n') | KeyCode::Char('j') if ctrl => {
                self.advance();
                return Update::none();
            }
            KeyCode::Char('p') | KeyCode::Char('k') if ctrl => return self.retreat(),
            // Enter submits only from the review step; on every other step
            // it belongs to the active field.
            KeyCode::Enter if self.progress.current() == STEP_CONFIRM => return self.submit(),
            _ => {}
        }

        let consumed = match self.progress.current() {
            STEP_NAME => self.name.handle_key(key),
            STEP_TYPE => self.service_type.handle_key(key),
            STEP_TIER => self.tier.handle_key(key),
            STEP_DESCRIPTION => self.description.handle_key(key),
            _ => false,
        };
        if consumed {
            self.validation = None;
        }
        Update::none()
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
                self.handle_key(key)
            }
            Message::ServiceCreated(Ok(_)) => go(ViewId::ServiceList),
            Message::ServiceCreated(Err(e)) => {
                self.phase = Phase::Error(e.to_string());
                Update::none()
            }
            _ => Update::none(),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let theme = &state.theme;
        let area = chrome(f, state, "ctrl+n next step · ctrl+p previous · esc back");

        let [progress_area, body, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(area);

        self.progress.render(f, progress_area, theme);

        match self.progress.current() {
            STEP_NAME => {
                let [input_area] = Layout::vertical([Constraint::Length(3)]).areas(body);
                self.name.render(f, input_area, theme);
            }
            STEP_TYPE => {
                let [list_area] =
                    Layout::vertical([Constraint::Length(self.service_type.height())]).areas(body);
                self.service_type.render(f, list_area, theme);
            }
            STEP_TIER => {
                let [list_area] =
                    Layout::vertical([Constraint::Length(self.tier.height())]).areas(body);
                self.tier.render(f, list_area, theme);
            }
            STEP_DESCRIPTION => {
                let [input_area] = Layout::vertical([Constraint::Length(3)]).areas(body);
                self.description.render(f, input_area, theme);
            }
            _ => self.render_summary(f, body, state),
        }

        match &self.phase {
            Phase::Submitting(spinner) => spinner.render(f, status_area, theme),
            Phase::Error(message) => {
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        format!("{message} (press any key to retry)"),
                        Style::default().fg(theme.error),
                    ))),
                    status_area,
                );
            }
            Phase::Editing => {
                if let Some(validation) = &self.validation {
                    f.render_widget(
                        Paragraph::new(Line::from(Span::styled(
                            validation.clone(),
                            Style::default().fg(theme.warning),
                        ))),
                        status_area,
                    );
                }
            }
        }
    }

    fn render_summary(&self, f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
        let theme = &state.theme;
        let label = Style::default().fg(theme.text_secondary);
        let value = Style::default().fg(theme.text);
        let request = self.request();
        let lines = vec![
            Line::from(vec![
                Span::styled("Name         ", label),
                Span::styled(request.name, value.add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("Type         ", label),
                Span::styled(request.service_type.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Tier         ", label),
                Span::styled(request.tier.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Description  ", label),
                Span::styled(request.description.unwrap_or_else(|| "-".to_string()), value),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Press enter to create",
                Style::default().fg(theme.accent),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_focused))
                    .title(" Review "),
            ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Message {
        Message::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_str(view: &mut ServiceCreateView, s: &str) {
        for c in s.chars() {
            view.update(key(KeyCode::Char(c)));
        }
    }

    /// Drive the wizard to the confirm step with a valid name.
    fn filled_wizard() -> ServiceCreateView {
        let mut view = ServiceCreateView::new();
        type_str(&mut view, "cache");
        for _ in 0..4 {
            view.update(ctrl('n'));
        }
        view
    }

    #[test]
    fn empty_name_blocks_the_first_step() {
        let mut view = ServiceCreateView::new();
        view.update(ctrl('n'));
        assert_eq!(view.progress.current(), STEP_NAME);
        assert!(view.validation.is_some());
    }

    #[test]
    fn ctrl_n_walks_all_steps() {
        let view = filled_wizard();
        assert_eq!(view.progress.current(), STEP_CONFIRM);
    }

    #[test]
    fn enter_never_drives_the_wizard_forward() {
        let mut view = ServiceCreateView::new();
        type_str(&mut view, "cache");
        for _ in 0..5 {
            let update = view.update(key(KeyCode::Enter));
            assert!(update.command.is_none());
        }
        assert_eq!(view.progress.current(), STEP_NAME);

        // On a selection step Enter is equally inert.
        view.update(ctrl('n'));
        let update = view.update(key(KeyCode::Enter));
        assert!(update.command.is_none());
        assert_eq!(view.progress.current(), STEP_TYPE);
    }

    #[test]
    fn only_the_confirm_step_submits() {
        let mut view = ServiceCreateView::new();
        type_str(&mut view, "cache");
        let update = view.update(ctrl('n'));
        assert!(update.command.is_none());

        let mut view = filled_wizard();
        let update = view.update(key(KeyCode::Enter));
        match update.command {
            Some(Command::CreateService(request)) => {
                assert_eq!(request.name, "cache");
                assert_eq!(request.service_type, ServiceType::Redis);
                assert_eq!(request.tier, ServiceTier::Developer);
                assert!(request.description.is_none());
            }
            other => panic!("expected create command, got {other:?}"),
        }
    }

    #[test]
    fn esc_steps_back_then_leaves() {
        let mut view = ServiceCreateView::new();
        type_str(&mut view, "cache");
        view.update(ctrl('n'));
        assert_eq!(view.progress.current(), STEP_TYPE);
        view.update(key(KeyCode::Esc));
        assert_eq!(view.progress.current(), STEP_NAME);
        let update = view.update(key(KeyCode::Esc));
        assert!(matches!(update.message, Some(Message::Back)));
    }

    #[test]
    fn selections_are_captured_in_the_request() {
        let mut view = ServiceCreateView::new();
        type_str(&mut view, "queue");
        view.update(ctrl('n'));
        view.update(key(KeyCode::Down));
        view.update(ctrl('n'));
        view.update(key(KeyCode::Down));
        view.update(key(KeyCode::Down));
        let request = view.request();
        assert_eq!(request.service_type, ServiceType::ALL[1]);
        assert_eq!(request.tier, ServiceTier::SELECTABLE[2]);
    }

    #[test]
    fn create_failure_shows_error_and_any_key_retries() {
        let mut view = filled_wizard();
        view.update(key(KeyCode::Enter));
        view.update(Message::ServiceCreated(Err(ApiError::Conflict(
            "name already in use".to_string(),
        ))));
        assert!(matches!(view.phase, Phase::Error(_)));
        view.update(key(KeyCode::Enter));
        assert!(matches!(view.phase, Phase::Editing));
        assert_eq!(view.progress.current(), STEP_CONFIRM);
    }

    #[test]
    fn create_success_navigates_to_the_list() {
        let mut view = filled_wizard();
        let svc = serde_json::from_str(
            r#"{"id":"svc-1","name":"cache","type":"redis","tier":"developer","status":"creating"}"#,
        )
        .unwrap();
        let update = view.update(Message::ServiceCreated(Ok(Box::new(svc))));
        assert!(matches!(
            update.message,
            Some(Message::Navigate(ViewId::ServiceList))
        ));
    }
}
