//! The timed loop that ties the engine to its collaborators
//!
//! Input is drained every `POLL_INTERVAL`; the simulation ticks whenever the
//! current speed interval has elapsed, so the game speeds up as the snake
//! eats. Everything runs on the calling task.

use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use rand::rngs::StdRng;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

use crate::audio::{AudioSignal, SoundEffect};
use crate::game::{GameEngine, Intent, TickOutcome, Transition};
use crate::input::InputSource;
use crate::metrics::GameMetrics;
use crate::render::{FrameView, Renderer};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub struct GameLoop<I, V, A, R = StdRng> {
    engine: GameEngine<R>,
    input: I,
    renderer: V,
    audio: A,
    metrics: GameMetrics,
}

impl<I, V, A, R> GameLoop<I, V, A, R>
where
    I: InputSource,
    V: Renderer,
    A: AudioSignal,
    R: Rng,
{
    pub fn new(engine: GameEngine<R>, input: I, renderer: V, audio: A) -> Self {
        Self {
            engine,
            input,
            renderer,
            audio,
            metrics: GameMetrics::new(),
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut V {
        &mut self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    /// Run until a quit intent arrives
    pub async fn run(&mut self) -> Result<()> {
        info!(
            speed_ms = self.engine.state().speed().as_millis() as u64,
            "game loop started"
        );
        self.draw()?;
        let mut next_tick = Instant::now() + self.engine.state().speed();

        loop {
            let mut redraw = false;
            while let Some(intent) = self.input.poll() {
                match self.apply(intent) {
                    Transition::Quit => {
                        info!(
                            games_played = self.metrics.games_played,
                            high_score = self.metrics.best(self.engine.state().score()),
                            "quit"
                        );
                        return Ok(());
                    }
                    Transition::Paused | Transition::Resumed | Transition::Restarted => {
                        redraw = true
                    }
                    Transition::Steered | Transition::Ignored => {}
                }
            }
            if redraw {
                self.draw()?;
            }

            let now = Instant::now();
            if now >= next_tick {
                self.step()?;
                next_tick = now + self.engine.state().speed();
            }

            sleep_until(next_tick.min(Instant::now() + POLL_INTERVAL)).await;
        }
    }

    /// Apply one intent and emit the matching audio signals
    pub fn apply(&mut self, intent: Intent) -> Transition {
        let transition = self.engine.apply(intent);
        match transition {
            Transition::Paused => self.audio.pause_music(),
            Transition::Resumed => self.audio.resume_music(),
            Transition::Restarted => {
                self.metrics.on_game_start();
                self.audio.resume_music();
            }
            Transition::Steered | Transition::Ignored | Transition::Quit => {}
        }
        transition
    }

    /// One tick: simulate, signal audio, draw
    pub fn step(&mut self) -> Result<TickOutcome> {
        let outcome = self.engine.tick();

        if outcome.ate_apple {
            self.audio.play(SoundEffect::Eat);
        }
        if let Some(cause) = outcome.collision {
            debug!(?cause, "crash");
            self.audio.play(SoundEffect::Crash);
            self.audio.pause_music();
            self.metrics.on_game_over(self.engine.state().score());
        }

        self.metrics.update(!self.engine.state().is_over());
        self.draw()?;
        Ok(outcome)
    }

    fn draw(&mut self) -> Result<()> {
        let view = FrameView::new(self.engine.state(), &self.metrics);
        self.renderer.draw_frame(&view)
    }
}
