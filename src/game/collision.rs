use super::geometry::{Grid, Position};

/// Type of collision that ends a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake head ran into its own body
    SelfCollision,
}

/// True iff `b` lies in the half-open square of side `size` anchored at `a`.
///
/// For grid-aligned inputs this is plain equality, but the half-open form
/// keeps working for positions that are not on the grid.
pub fn overlaps(a: Position, b: Position, size: i32) -> bool {
    a.y <= b.y && b.y < a.y + size && a.x <= b.x && b.x < a.x + size
}

/// Head leaving `[0, width) x [0, height)`
pub fn out_of_bounds(grid: &Grid, pos: Position) -> bool {
    !grid.contains(pos)
}

/// Head overlapping any of `body` (the segments after the head)
pub fn hits_body(head: Position, body: &[Position], size: i32) -> bool {
    body.iter().any(|&segment| overlaps(head, segment, size))
}
