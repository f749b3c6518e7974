//! Asynchronous units of work issued by views.
//!
//! A command captures everything it needs up front, runs concurrently with
//! the engine on the tokio runtime, and reports its observation as a single
//! message back into the serialized queue. There is no cancellation: a
//! command started by a view that is later replaced runs to completion and
//! its result is delivered to whichever view is current at that point,
//! which ignores result variants it did not issue.

use super::message::Message;
use crate::api::Client;
use crate::models::CreateServiceRequest;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// An async gateway call with its inputs captured by value.
#[derive(Debug)]
pub enum Command {
    Login { email: String, password: String },
    Logout,
    Whoami,
    ListServices,
    CreateService(Box<CreateServiceRequest>),
}

impl Command {
    /// Execute the command and produce its result message.
    pub async fn run(self, client: Arc<Client>) -> Message {
        match self {
            Command::Login { email, password } => {
                Message::LoginFinished(client.login(&email, &password).await)
            }
            Command::Logout => Message::LogoutFinished(client.logout().await),
            Command::Whoami => Message::WhoamiFinished(client.whoami().await),
            Command::ListServices => Message::ServicesLoaded(client.list_services().await),
            Command::CreateService(request) => {
                Message::ServiceCreated(client.create_service(&request).await.map(Box::new))
            }
        }
    }

    /// Launch the command on the runtime, delivering its result over `tx`.
    ///
    /// A send failure means the engine already shut down; the result is
    /// dropped.
    pub fn spawn(self, client: Arc<Client>, tx: UnboundedSender<Message>) {
        tokio::spawn(async move {
            let message = self.run(client).await;
            let _ = tx.send(message);
        });
    }
}
