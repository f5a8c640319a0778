//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The game loop drives it; tests drive it directly with a seeded random source.

pub mod action;
pub mod apple;
pub mod collision;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use apple::Apple;
pub use collision::CollisionType;
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, Transition};
pub use geometry::{Grid, Position};
pub use snake::Snake;
pub use state::{GameState, Status, TickOutcome};
