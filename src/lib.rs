//! Arcade Snake - a terminal snake game
//!
//! This library provides:
//! - Core game logic: grid, snake, apple, collisions and the tick state machine (game module)
//! - The timed game loop and its collaborator traits (game_loop, render, input, audio)
//! - Terminal front end built on ratatui and crossterm (render, input, modes)

pub mod audio;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
