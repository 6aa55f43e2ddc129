use super::board::Point;
use crate::consts;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The axis of motion.  A turn is only accepted when it changes this, so
    /// the snake can never reverse into its own neck.
    pub(crate) fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// The position one cell from `pos` in this direction.  The result may
    /// lie outside the board; the caller decides what that means.
    pub(crate) fn step(self, pos: Point) -> Point {
        let Point { x, y } = pos;
        match self {
            Direction::Up => Point::new(x, y - consts::CELL_SIZE),
            Direction::Down => Point::new(x, y + consts::CELL_SIZE),
            Direction::Left => Point::new(x - consts::CELL_SIZE, y),
            Direction::Right => Point::new(x + consts::CELL_SIZE, y),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}
