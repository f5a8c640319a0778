use rand::Rng;
use rand::seq::IteratorRandom;

use super::geometry::{Grid, Position};

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Position,
}

impl Apple {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to a uniformly random cell of the board
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        let column = rng.gen_range(0..grid.columns());
        let row = rng.gen_range(0..grid.rows());
        self.place(grid, grid.cell(column, row));
    }

    /// Move to a uniformly random cell not listed in `occupied`.
    ///
    /// Returns false and stays put when every cell is occupied.
    pub fn relocate_avoiding<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        occupied: &[Position],
        rng: &mut R,
    ) -> bool {
        match grid.cells().filter(|cell| !occupied.contains(cell)).choose(rng) {
            Some(cell) => {
                self.place(grid, cell);
                true
            }
            None => false,
        }
    }

    fn place(&mut self, grid: &Grid, position: Position) {
        debug_assert!(
            grid.contains(position) && grid.is_aligned(position),
            "apple placed off-grid at {position:?}"
        );
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_relocate_stays_on_grid() {
        let grid = Grid::new(40, 1000, 800);
        let mut apple = Apple::new(Position::new(120, 120));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            apple.relocate(&grid, &mut rng);
            let pos = apple.position();
            assert!(pos.x >= 0 && pos.x < 1000);
            assert!(pos.y >= 0 && pos.y < 800);
            assert_eq!(pos.x % 40, 0);
            assert_eq!(pos.y % 40, 0);
        }
    }

    #[test]
    fn test_relocate_is_deterministic_with_seed() {
        let grid = Grid::new(40, 1000, 800);
        let mut a = Apple::new(Position::new(0, 0));
        let mut b = Apple::new(Position::new(0, 0));

        a.relocate(&grid, &mut StdRng::seed_from_u64(42));
        b.relocate(&grid, &mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn test_relocate_avoiding_skips_occupied_cells() {
        // 2x2 board with three cells taken leaves exactly one choice
        let grid = Grid::new(10, 20, 20);
        let occupied = [
            Position::new(0, 0),
            Position::new(10, 0),
            Position::new(0, 10),
        ];
        let mut apple = Apple::new(Position::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(apple.relocate_avoiding(&grid, &occupied, &mut rng));
        assert_eq!(apple.position(), Position::new(10, 10));
    }

    #[test]
    fn test_relocate_avoiding_full_board() {
        let grid = Grid::new(10, 10, 10);
        let mut apple = Apple::new(Position::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(!apple.relocate_avoiding(&grid, &[Position::new(0, 0)], &mut rng));
        assert_eq!(apple.position(), Position::new(0, 0));
    }
}
