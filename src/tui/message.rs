//! Messages consumed by the session engine.
//!
//! Every event in the system, whether keyboard input, a terminal resize, or
//! the result of an async command, arrives as one `Message` on a single
//! serialized queue. State is only ever mutated while handling one of them.

use super::router::ViewId;
use crate::api::ApiError;
use crate::models::{LoginResponse, Service, User};
use crossterm::event::KeyEvent;

/// An event routed through the engine to the active view.
#[derive(Debug)]
pub enum Message {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    /// Periodic tick for spinner animation.
    Tick,

    /// Navigate forward to a view.
    Navigate(ViewId),
    /// Navigate back to the previous view.
    Back,
    /// Terminate the session.
    Exit,

    /// Result of a login command.
    LoginFinished(Result<LoginResponse, ApiError>),
    /// Result of a logout command. Logout is authoritative client-side, so
    /// the session is cleared even on `Err`.
    LogoutFinished(Result<(), ApiError>),
    /// Result of a whoami lookup.
    WhoamiFinished(Result<User, ApiError>),
    /// Result of a service list fetch.
    ServicesLoaded(Result<Vec<Service>, ApiError>),
    /// Result of a service creation.
    ServiceCreated(Result<Box<Service>, ApiError>),
}

/// What a view's `update` hands back to the engine: an async command to
/// launch, a follow-up message to re-inject into the queue, or both.
#[derive(Debug, Default)]
pub struct Update {
    pub command: Option<super::command::Command>,
    pub message: Option<Message>,
}

impl Update {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command(command: super::command::Command) -> Self {
        Self {
            command: Some(command),
            message: None,
        }
    }

    pub fn message(message: Message) -> Self {
        Self {
            command: None,
            message: Some(message),
        }
    }
}
