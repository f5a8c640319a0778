use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) in cells for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// One decoded player intent, as produced by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Request a new heading for the next tick
    Move(Direction),
    /// Toggle between running and paused
    TogglePause,
    /// Start a fresh game after game over
    Restart,
    /// Leave the game loop
    Quit,
}

impl From<Direction> for Intent {
    fn from(direction: Direction) -> Self {
        Intent::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_direction_serde_names() {
        let json = serde_json::to_string(&Direction::Down).unwrap();
        assert_eq!(json, "\"down\"");
        let parsed: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(parsed, Direction::Left);
    }
}
