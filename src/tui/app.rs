//! The session engine.
//!
//! One message at a time flows through [`App::handle_message`], so all
//! state mutation is serialized even though commands run concurrently on
//! the runtime. The engine owns the shared mutations (navigation, the
//! auth pair, the service cache) and forwards everything else to the
//! active view.

use super::command::Command;
use super::message::{Message, Update};
use super::router::ViewId;
use super::state::AppState;
use super::theme::Theme;
use super::views::View;
use crate::api::Client;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Frame;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

pub struct App {
    state: AppState,
    view: View,
    client: Arc<Client>,
    tx: UnboundedSender<Message>,
    quit: bool,
}

impl App {
    /// Build the engine, already sitting on the entry view.
    pub fn new(client: Arc<Client>, tx: UnboundedSender<Message>, entry: ViewId, theme: Theme) -> Self {
        let mut app = Self {
            state: AppState::new(theme, entry),
            view: View::build(entry),
            client,
            tx,
            quit: false,
        };
        // A stored token is only trusted once the server vouches for it;
        // the auth pair flips when the probe's result message arrives.
        if app.client.config().token().is_some() {
            app.spawn(Command::Whoami);
        }
        let update = app.view.init(&app.state);
        app.apply(update);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process one message from the queue.
    pub fn handle_message(&mut self, message: Message) {
        // Global bindings outrank the active view.
        if let Message::Key(key) = &message {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.quit = true;
                return;
            }
        }

        match message {
            Message::Resize(cols, rows) => {
                self.state.set_terminal_size(cols, rows);
                let update = self.view.update(Message::Resize(cols, rows), &mut self.state);
                self.apply(update);
            }
            Message::Exit => {
                self.quit = true;
            }
            Message::Navigate(view) => {
                self.state.router.push(view);
                self.activate();
            }
            Message::Back => {
                self.state.router.pop();
                self.activate();
            }
            message => {
                self.fold_shared_state(&message);
                let update = self.view.update(message, &mut self.state);
                self.apply(update);
            }
        }
    }

    /// Apply the engine-owned mutations a result message implies, before
    /// the view sees it.
    fn fold_shared_state(&mut self, message: &Message) {
        match message {
            Message::LoginFinished(Ok(response)) => {
                self.state.set_user(response.user.clone());
            }
            Message::WhoamiFinished(Ok(user)) => {
                self.state.set_user(user.clone());
            }
            // Logout clears the session regardless of what the server said.
            Message::LogoutFinished(_) => {
                self.state.clear_user();
            }
            Message::ServicesLoaded(Ok(services)) => {
                self.state.update_services(services.clone());
            }
            // The gateway already tried a refresh; a 401 surviving it means
            // the session is gone.
            Message::ServicesLoaded(Err(e)) if e.is_auth_error() => {
                self.state.clear_user();
            }
            _ => {}
        }
    }

    /// Build the view for the router's current entry and run its init.
    fn activate(&mut self) {
        self.view = View::build(self.state.router.current());
        let update = self.view.init(&self.state);
        self.apply(update);
    }

    fn apply(&mut self, update: Update) {
        if let Some(command) = update.command {
            self.spawn(command);
        }
        if let Some(message) = update.message {
            self.handle_message(message);
        }
    }

    fn spawn(&self, command: Command) {
        command.spawn(self.client.clone(), self.tx.clone());
    }

    pub fn render(&self, f: &mut Frame) {
        self.view.render(f, &self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::config::Config;
    use crate::models::LoginResponse;
    use crossterm::event::KeyEvent;
    use tokio::sync::mpsc;

    fn login_response() -> LoginResponse {
        serde_json::from_str(
            r#"{
                "user": {"id":"u-1","email":"user@example.com"},
                "tokens": {"access_token":"at","refresh_token":"rt"}
            }"#,
        )
        .unwrap()
    }

    fn app() -> App {
        let client = Arc::new(Client::new(Config::default()).unwrap());
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(client, tx, ViewId::Dashboard, Theme::default())
    }

    #[tokio::test]
    async fn login_result_flips_auth_without_touching_navigation() {
        let mut app = app();
        let depth = app.state.router.depth();

        app.handle_message(Message::LoginFinished(Ok(login_response())));

        assert!(app.state.is_authenticated());
        assert_eq!(app.state.current_user().unwrap().email, "user@example.com");
        // Login lands back on the dashboard entry it started from.
        assert!(app.state.router.depth() >= depth);
    }

    #[tokio::test]
    async fn surviving_auth_error_clears_the_session() {
        let mut app = app();
        app.handle_message(Message::LoginFinished(Ok(login_response())));
        assert!(app.state.is_authenticated());

        app.handle_message(Message::ServicesLoaded(Err(ApiError::Unauthorized(
            "token expired".to_string(),
        ))));
        assert!(!app.state.is_authenticated());
        assert!(app.state.current_user().is_none());
    }

    #[tokio::test]
    async fn non_auth_failure_keeps_the_session() {
        let mut app = app();
        app.handle_message(Message::LoginFinished(Ok(login_response())));
        app.handle_message(Message::ServicesLoaded(Err(ApiError::ServiceUnavailable)));
        assert!(app.state.is_authenticated());
    }

    #[tokio::test]
    async fn navigate_and_back_move_the_stack() {
        let mut app = app();
        app.handle_message(Message::Navigate(ViewId::Help));
        assert_eq!(app.state.router.current(), ViewId::Help);

        app.handle_message(Message::Back);
        assert_eq!(app.state.router.current(), ViewId::Dashboard);
        assert!(!app.state.router.can_go_back());
    }

    #[tokio::test]
    async fn ctrl_c_quits_from_any_view() {
        let mut app = app();
        app.handle_message(Message::Navigate(ViewId::Help));
        app.handle_message(Message::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn resize_updates_dimensions() {
        let mut app = app();
        app.handle_message(Message::Resize(120, 40));
        assert_eq!(app.state.width, 120);
        assert_eq!(app.state.height, 40);
    }

    #[tokio::test]
    async fn exit_message_quits() {
        let mut app = app();
        app.handle_message(Message::Exit);
        assert!(app.should_quit());
    }
}
