use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::Direction;
use super::geometry::{Grid, Position};

/// Configuration for the game
///
/// All distances are in pixels; positions must sit on the `cell_size` grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of one grid cell
    pub cell_size: i32,
    /// Width of the board
    pub board_width: i32,
    /// Height of the board
    pub board_height: i32,
    /// Where the snake starts (and restarts)
    pub snake_start: Position,
    /// Initial heading of the snake
    pub start_direction: Direction,
    /// Where the apple starts
    pub apple_start: Position,

    /// Tick interval at the start of a game
    pub base_speed_ms: u64,
    /// Interval removed on every apple eaten
    pub speed_step_ms: u64,
    /// Shortest allowed tick interval
    pub min_speed_ms: u64,

    /// Only drop apples on cells the snake does not cover
    pub apple_avoids_snake: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    CellSize(i32),

    #[error("board {width}x{height} must be a positive multiple of cell size {cell_size}")]
    Board {
        width: i32,
        height: i32,
        cell_size: i32,
    },

    #[error("{what} at ({x}, {y}) is off the board or not on the grid")]
    StartPosition { what: &'static str, x: i32, y: i32 },

    #[error("minimum tick interval must be at least 1ms")]
    ZeroFloor,

    #[error("speed step must be at least 1ms")]
    ZeroStep,

    #[error("minimum tick interval {min}ms exceeds base interval {base}ms")]
    FloorAboveBase { min: u64, base: u64 },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 40,
            board_width: 1000,
            board_height: 800,
            snake_start: Position::new(40, 40),
            start_direction: Direction::Down,
            apple_start: Position::new(120, 120),
            base_speed_ms: 200,
            speed_step_ms: 10,
            min_speed_ms: 50,
            apple_avoids_snake: true,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(400, 400)
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    ///
    /// The result is not validated, so callers can apply overrides first.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }

        if self.board_width <= 0
            || self.board_height <= 0
            || self.board_width % self.cell_size != 0
            || self.board_height % self.cell_size != 0
        {
            return Err(ConfigError::Board {
                width: self.board_width,
                height: self.board_height,
                cell_size: self.cell_size,
            });
        }

        let grid = self.grid();
        for (what, pos) in [("snake start", self.snake_start), ("apple start", self.apple_start)] {
            if !grid.contains(pos) || !grid.is_aligned(pos) {
                return Err(ConfigError::StartPosition {
                    what,
                    x: pos.x,
                    y: pos.y,
                });
            }
        }

        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroFloor);
        }
        if self.speed_step_ms == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.min_speed_ms > self.base_speed_ms {
            return Err(ConfigError::FloorAboveBase {
                min: self.min_speed_ms,
                base: self.base_speed_ms,
            });
        }

        Ok(())
    }

    /// Board geometry. Only call on a validated config.
    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_size, self.board_width, self.board_height)
    }

    pub fn base_speed(&self) -> Duration {
        Duration::from_millis(self.base_speed_ms)
    }

    pub fn speed_step(&self) -> Duration {
        Duration::from_millis(self.speed_step_ms)
    }

    pub fn min_speed(&self) -> Duration {
        Duration::from_millis(self.min_speed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.cell_size, 40);
        assert_eq!(config.board_width, 1000);
        assert_eq!(config.board_height, 800);
        assert_eq!(config.snake_start, Position::new(40, 40));
        assert_eq!(config.apple_start, Position::new(120, 120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(600, 480);
        assert_eq!(config.board_width, 600);
        assert_eq!(config.board_height, 480);
        assert_eq!(config.grid().columns(), 15);
        assert_eq!(config.grid().rows(), 12);
    }

    #[test]
    fn test_rejects_misaligned_board() {
        let config = GameConfig::new(1010, 800);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Board {
                width: 1010,
                height: 800,
                cell_size: 40
            })
        );
    }

    #[test]
    fn test_rejects_off_board_start() {
        let config = GameConfig {
            apple_start: Position::new(1000, 0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartPosition { what: "apple start", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_speed_floor() {
        let zero = GameConfig {
            min_speed_ms: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroFloor));

        let no_step = GameConfig {
            speed_step_ms: 0,
            ..Default::default()
        };
        assert_eq!(no_step.validate(), Err(ConfigError::ZeroStep));

        let inverted = GameConfig {
            base_speed_ms: 40,
            min_speed_ms: 50,
            ..Default::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::FloorAboveBase { min: 50, base: 40 })
        );
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"board_width": 400, "board_height": 320, "start_direction": "right"}}"#)
            .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.board_width, 400);
        assert_eq!(config.board_height, 320);
        assert_eq!(config.start_direction, Direction::Right);
        assert_eq!(config.cell_size, 40);
    }

    #[test]
    fn test_load_leaves_validation_to_caller() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"cell_size": 0}}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::CellSize(0)));
    }

    #[test]
    fn test_load_rejects_unparsable_file() {
        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(GameConfig::load(garbage.path()).is_err());
    }
}
