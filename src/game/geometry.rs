use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position on the board, in pixels
///
/// Every position the game produces is aligned to the grid's cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell of `cell_size` in a direction
    pub fn moved_in_direction(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_size, dy * cell_size)
    }
}

/// Board geometry: cell size and board extent, all in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_size: i32,
    width: i32,
    height: i32,
}

impl Grid {
    /// Build a grid. The caller guarantees the dimensions are positive
    /// multiples of `cell_size`; `GameConfig::validate` checks this for
    /// user-supplied values.
    pub fn new(cell_size: i32, width: i32, height: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        assert!(
            width > 0 && height > 0 && width % cell_size == 0 && height % cell_size == 0,
            "board {width}x{height} is not a multiple of cell size {cell_size}"
        );
        Self {
            cell_size,
            width,
            height,
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cell columns
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_aligned(&self, pos: Position) -> bool {
        pos.x % self.cell_size == 0 && pos.y % self.cell_size == 0
    }

    /// Top-left corner of the cell at (column, row)
    pub fn cell(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell_size, row * self.cell_size)
    }

    /// Iterate every cell of the board, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(40, 40);
        assert_eq!(pos.moved_in_direction(Direction::Down, 40), Position::new(40, 80));
        assert_eq!(pos.moved_in_direction(Direction::Up, 40), Position::new(40, 0));
        assert_eq!(pos.moved_in_direction(Direction::Left, 40), Position::new(0, 40));
        assert_eq!(pos.moved_in_direction(Direction::Right, 40), Position::new(80, 40));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(40, 1000, 800);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(960, 760)));
        assert!(!grid.contains(Position::new(-40, 0)));
        assert!(!grid.contains(Position::new(1000, 0)));
        assert!(!grid.contains(Position::new(0, 800)));
    }

    #[test]
    fn test_cells_cover_board() {
        let grid = Grid::new(10, 30, 20);
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[5], Position::new(20, 10));
        assert!(cells.iter().all(|&c| grid.is_aligned(c) && grid.contains(c)));
    }

    #[test]
    #[should_panic]
    fn test_misaligned_board_panics() {
        Grid::new(40, 1010, 800);
    }
}
