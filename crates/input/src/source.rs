//! Terminal-backed [`InputSource`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::core::InputSource;
use crate::map::{handle_key_event, should_quit};
use crate::types::InputEvent;

/// Polls crossterm for key presses.
///
/// Each `poll` reads at most one terminal event. A resize becomes
/// [`InputEvent::Redraw`]; unbound keys and mouse events yield `None`.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    wait: Duration,
    quit: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            wait: Duration::ZERO,
            quit: false,
        }
    }

    /// Let `poll` wait up to `wait` for an event instead of returning at once.
    ///
    /// Keeps an idle loop from spinning.
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Feed one key event. Split out from `poll` so it can be driven without
    /// a terminal.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if should_quit(key) {
            self.quit = true;
            return None;
        }
        handle_key_event(key)
    }

    /// Feed one terminal event.
    pub fn handle_event(&mut self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(..) => Some(InputEvent::Redraw),
            _ => None,
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Option<InputEvent>> {
        if !event::poll(self.wait)? {
            return Ok(None);
        }
        let event = event::read()?;
        Ok(self.handle_event(event))
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
