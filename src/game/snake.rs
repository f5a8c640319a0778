use super::action::Direction;
use super::geometry::Position;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Direction used by the last advance
    direction: Direction,
    /// Requested direction, applied on the next advance
    pending_direction: Option<Direction>,
}

impl Snake {
    /// Create a single-segment snake at `head`
    pub fn new(head: Position, direction: Direction) -> Self {
        Self::from_segments(vec![head], direction)
    }

    /// Create a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self {
            body,
            direction,
            pending_direction: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next advance will use
    pub fn next_direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.direction)
    }

    /// Request a heading for the next advance. Later requests replace earlier
    /// ones; reversing onto the body is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Shift every segment onto its predecessor and move the head one cell
    pub fn advance(&mut self, cell_size: i32) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].moved_in_direction(self.direction, cell_size);
    }

    /// Append a tail segment one cell up and left of the current tail.
    ///
    /// The new segment does not follow the snake's path; the next advance
    /// overwrites it with the old tail.
    pub fn grow(&mut self, cell_size: i32) {
        let tail = self.tail();
        self.body.push(tail.moved_by(-cell_size, -cell_size));
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
