use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tracing::info;

use crate::audio::{AudioSignal, Muted, TerminalBell};
use crate::game::{GameConfig, GameEngine};
use crate::game_loop::GameLoop;
use crate::input::TerminalInput;
use crate::render::TerminalRenderer;

/// Keyboard play in the terminal
pub struct HumanMode {
    config: GameConfig,
    seed: Option<u64>,
    mute: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            seed: None,
            mute: false,
        }
    }

    /// Fix the apple placement sequence
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn muted(mut self, mute: bool) -> Self {
        self.mute = mute;
        self
    }

    fn engine(&self) -> GameEngine {
        match self.seed {
            Some(seed) => GameEngine::seeded(self.config.clone(), seed),
            None => GameEngine::new(self.config.clone()),
        }
    }

    fn audio(&self) -> Box<dyn AudioSignal> {
        if self.mute {
            Box::new(Muted)
        } else {
            Box::new(TerminalBell::new(stderr()))
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        info!(
            width = self.config.board_width,
            height = self.config.board_height,
            cell = self.config.cell_size,
            seed = ?self.seed,
            "terminal ready"
        );

        let mut game = GameLoop::new(
            self.engine(),
            TerminalInput::new(),
            TerminalRenderer::new(terminal),
            self.audio(),
        );

        // Run game loop, stopping between ticks on Ctrl+C
        let result = tokio::select! {
            result = game.run() => result,
            signal = tokio::signal::ctrl_c() => signal.context("Failed to listen for Ctrl+C"),
        };

        // Cleanup terminal
        cleanup_terminal(game.renderer_mut().terminal_mut())?;

        let metrics = game.metrics();
        println!(
            "Games played: {}  Best score: {}",
            metrics.games_played,
            metrics.best(game.engine().state().score())
        );

        result
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
