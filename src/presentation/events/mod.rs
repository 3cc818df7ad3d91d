//! Event handling.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed and the screen needs a redraw.
    Consumed,
}

/// Terminal event handler.
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    const DEFAULT_POLL_TIMEOUT_MS: u64 = 250;

    /// Creates new handler with default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(Self::DEFAULT_POLL_TIMEOUT_MS),
        }
    }

    /// Polls for events.
    ///
    /// # Errors
    /// Returns IO error if polling fails.
    pub fn poll(&self) -> std::io::Result<Option<Event>> {
        if event::poll(self.poll_timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Extracts key presses, dropping releases and repeats reported by
    /// terminals with enhanced keyboard support.
    #[must_use]
    pub fn key_press(event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
