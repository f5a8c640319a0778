pub mod handler;

pub use handler::{InputHandler, TerminalInput};

use crate::game::Intent;

/// Non-blocking source of player intents
pub trait InputSource {
    /// Next pending intent, or `None` when nothing is waiting. Never blocks.
    fn poll(&mut self) -> Option<Intent>;
}
