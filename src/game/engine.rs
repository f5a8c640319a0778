use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use super::{
    action::Intent,
    config::GameConfig,
    state::{GameState, Status, TickOutcome},
};

/// State change caused by applying an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Intent had no effect in the current status
    Ignored,
    /// Heading buffered for the next tick
    Steered,
    Paused,
    Resumed,
    Restarted,
    Quit,
}

/// The game engine: the game state plus its random source
pub struct GameEngine<R = StdRng> {
    state: GameState,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from the OS
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose apple placement is reproducible
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            state: GameState::new(config),
            rng,
        }
    }

    /// Wrap an existing state
    pub fn from_state(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Execute one tick of the game
    pub fn tick(&mut self) -> TickOutcome {
        self.state.tick(&mut self.rng)
    }

    /// Route one player intent into the state machine
    pub fn apply(&mut self, intent: Intent) -> Transition {
        let transition = match intent {
            Intent::Quit => Transition::Quit,
            Intent::Move(direction) => {
                if self.state.set_direction(direction) {
                    Transition::Steered
                } else {
                    Transition::Ignored
                }
            }
            Intent::TogglePause => match self.state.toggle_pause() {
                Some(Status::Paused) => Transition::Paused,
                Some(_) => Transition::Resumed,
                None => Transition::Ignored,
            },
            Intent::Restart => {
                if self.state.restart() {
                    Transition::Restarted
                } else {
                    Transition::Ignored
                }
            }
        };

        if transition != Transition::Ignored {
            debug!(?intent, ?transition, "intent applied");
        }
        transition
    }
}
