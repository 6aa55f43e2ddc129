use super::board::Point;
use std::collections::VecDeque;

/// The snake's segment chain, head first.
///
/// The chain is never empty.  Growth happens by pushing a new head without
/// dropping the tail; a plain move does both.  Duplicate positions are not
/// structurally prevented; [`Snake::self_collision()`] reports them and the
/// game ends the run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    segments: VecDeque<Point>,
}

impl Snake {
    /// Create a single-segment snake with its head at `head`
    pub(crate) fn new(head: Point) -> Snake {
        Snake {
            segments: VecDeque::from([head]),
        }
    }

    pub(crate) fn head(&self) -> Point {
        *self.segments.front().expect("snake is never empty")
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether any segment occupies `pos`
    pub(crate) fn occupies(&self, pos: Point) -> bool {
        self.segments.contains(&pos)
    }

    /// Whether the head occupies the same cell as some other segment
    pub(crate) fn self_collision(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&p| p == head)
    }

    pub(crate) fn push_head(&mut self, head: Point) {
        self.segments.push_front(head);
    }

    pub(crate) fn drop_tail(&mut self) {
        let _ = self.segments.pop_back();
    }
}
