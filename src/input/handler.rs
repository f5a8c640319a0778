use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{FutureExt, StreamExt};
use tracing::warn;

use super::InputSource;
use crate::game::{Direction, Intent};

/// Maps key presses to intents
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Intent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Intent::Quit);
        }

        let intent = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Intent::Move(Direction::Up),
            KeyCode::Down => Intent::Move(Direction::Down),
            KeyCode::Left => Intent::Move(Direction::Left),
            KeyCode::Right => Intent::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Intent::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Intent::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Intent::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Intent::Move(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Intent::Restart,
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Intent::TogglePause,

            _ => return None,
        };
        Some(intent)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard input from the terminal, read without blocking
pub struct TerminalInput {
    events: EventStream,
    handler: InputHandler,
}

impl TerminalInput {
    /// Must be created after raw mode is enabled
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
            handler: InputHandler::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Option<Intent> {
        // Drain events that do not map to an intent, stop at the first one
        // that does or when nothing is pending
        while let Some(next) = self.events.next().now_or_never() {
            match next {
                Some(Ok(Event::Key(key))) => {
                    // Only process key press events, not release
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(intent) = self.handler.handle_key_event(key) {
                        return Some(intent);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(error = %e, "failed to read terminal event");
                    return None;
                }
                None => return None,
            }
        }
        None
    }
}
