pub mod renderer;

pub use renderer::TerminalRenderer;

use anyhow::Result;

use crate::game::{GameState, Grid, Position, Status};
use crate::metrics::GameMetrics;

/// Read-only snapshot of everything a frame shows
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub grid: Grid,
    /// Snake segments, head first
    pub segments: &'a [Position],
    pub apple: Position,
    pub score: u32,
    pub status: Status,
    pub high_score: u32,
    /// Formatted clock of the current game
    pub elapsed: String,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState, metrics: &GameMetrics) -> Self {
        Self {
            grid: *state.grid(),
            segments: state.snake().segments(),
            apple: state.apple().position(),
            score: state.score(),
            status: state.status(),
            high_score: metrics.best(state.score()),
            elapsed: metrics.format_time(),
        }
    }
}

/// Draws one frame of the game
pub trait Renderer {
    fn draw_frame(&mut self, frame: &FrameView<'_>) -> Result<()>;
}
