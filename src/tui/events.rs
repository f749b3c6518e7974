//! Terminal input for the dashboard.
//!
//! A dedicated reader thread polls crossterm and forwards key, resize, and
//! tick messages into the engine's queue, so the engine itself only ever
//! waits on one channel.

use super::message::Message;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Tick cadence when no input arrives (drives spinner animation).
const TICK_RATE: Duration = Duration::from_millis(250);

/// Spawn the input reader thread.
///
/// The thread exits when the engine drops its receiver and sends start
/// failing.
pub fn spawn_input_reader(tx: UnboundedSender<Message>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || loop {
        let message = match poll_next(TICK_RATE) {
            Ok(Some(message)) => message,
            Ok(None) => continue,
            Err(_) => Message::Tick,
        };
        if tx.send(message).is_err() {
            break;
        }
    })
}

/// Poll for the next terminal event, converting it to a [`Message`].
///
/// Returns `Ok(Some(Tick))` when the timeout elapses and `Ok(None)` for
/// events the engine does not care about (focus changes, key releases).
fn poll_next(timeout: Duration) -> std::io::Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(Some(Message::Tick));
    }
    let message = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Message::Key(key)),
        Event::Key(_) => None,
        Event::Resize(cols, rows) => Some(Message::Resize(cols, rows)),
        _ => None,
    };
    Ok(message)
}
