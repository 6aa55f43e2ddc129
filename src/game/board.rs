use crate::consts;
use std::fmt;

/// A grid-aligned position in board units.
///
/// Coordinates are signed so that one step past any edge of the board is
/// representable; such positions fail [`Board::contains()`] and end the run.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The fixed square game board: [`consts::BOARD_EXTENT`] units on a side,
/// divided into cells of [`consts::CELL_SIZE`] units.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    extent: i32,
    cell: i32,
}

impl Board {
    pub(crate) const fn standard() -> Board {
        Board {
            extent: consts::BOARD_EXTENT,
            cell: consts::CELL_SIZE,
        }
    }

    /// Whether `pos` lies within the board
    pub(crate) fn contains(self, pos: Point) -> bool {
        (0..self.extent).contains(&pos.x) && (0..self.extent).contains(&pos.y)
    }

    /// The cell at the center of the board, where each run starts
    pub(crate) fn center(self) -> Point {
        let mid = self.extent / 2 / self.cell * self.cell;
        Point::new(mid, mid)
    }

    /// Number of cells along one side of the board
    pub(crate) fn cells_per_side(self) -> i32 {
        self.extent / self.cell
    }

    /// Iterate over the top-left corners of every cell on the board
    pub(crate) fn cells(self) -> impl Iterator<Item = Point> {
        let side = self.cells_per_side();
        let cell = self.cell;
        (0..side).flat_map(move |gy| (0..side).map(move |gx| Point::new(gx * cell, gy * cell)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Point::new(0, 0), true)]
    #[case(Point::new(380, 380), true)]
    #[case(Point::new(200, 200), true)]
    #[case(Point::new(400, 200), false)]
    #[case(Point::new(200, 400), false)]
    #[case(Point::new(-20, 200), false)]
    #[case(Point::new(200, -20), false)]
    fn test_contains(#[case] pos: Point, #[case] inside: bool) {
        assert_eq!(Board::standard().contains(pos), inside);
    }

    #[test]
    fn center_is_a_cell_corner() {
        let board = Board::standard();
        let center = board.center();
        assert_eq!(center, Point::new(200, 200));
        assert_eq!(center.x % consts::CELL_SIZE, 0);
        assert!(board.contains(center));
    }

    #[test]
    fn cells_cover_the_board() {
        let board = Board::standard();
        let cells = board.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 400);
        assert!(cells.iter().all(|&p| board.contains(p)));
        assert!(cells.contains(&Point::new(0, 0)));
        assert!(cells.contains(&Point::new(380, 380)));
        assert!(!cells.contains(&Point::new(400, 0)));
    }
}
