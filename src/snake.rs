use std::collections::VecDeque;

use crate::Coord;
use Heading::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Movement delta as (row, col).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Ordered body segments, head at the front. Grid bookkeeping for every
/// mutation is the caller's responsibility.
pub struct Snake {
    segments: VecDeque<Coord>,
}

impl Snake {
    pub fn spawn(coord: Coord) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(coord);
        Snake { segments }
    }

    pub fn head(&self) -> Coord {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn push_head(&mut self, coord: Coord) {
        self.segments.push_front(coord);
    }

    pub fn pop_tail(&mut self) -> Option<Coord> {
        self.segments.pop_back()
    }

    /// Flips the traversal order, swapping head and tail. The snake stores no
    /// persistent orientation, so turning back on itself is an order flip:
    /// without it the next step would read the neck as a self-collision.
    pub fn reverse_order(&mut self) {
        self.segments.make_contiguous().reverse();
    }

    pub fn segments(&self) -> impl Iterator<Item = Coord> + '_ {
        self.segments.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_a_single_segment() {
        let snake = Snake::spawn((5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), (5, 5));
    }

    #[test]
    fn push_head_prepends() {
        let mut snake = Snake::spawn((5, 5));
        snake.push_head((5, 6));

        assert_eq!(snake.head(), (5, 6));
        assert_eq!(snake.segments().collect::<Vec<_>>(), vec![(5, 6), (5, 5)]);
    }

    #[test]
    fn pop_tail_removes_the_last_segment() {
        let mut snake = Snake::spawn((5, 5));
        snake.push_head((5, 6));
        snake.push_head((5, 7));

        assert_eq!(snake.pop_tail(), Some((5, 5)));
        assert_eq!(snake.segments().collect::<Vec<_>>(), vec![(5, 7), (5, 6)]);
    }

    #[test]
    fn reverse_order_swaps_head_and_tail() {
        let mut snake = Snake::spawn((5, 5));
        snake.push_head((5, 6));
        snake.push_head((5, 7));

        snake.reverse_order();

        assert_eq!(snake.head(), (5, 5));
        assert_eq!(snake.segments().collect::<Vec<_>>(), vec![(5, 5), (5, 6), (5, 7)]);
    }

    #[test]
    fn opposites() {
        assert_eq!(Up.opposite(), Down);
        assert_eq!(Down.opposite(), Up);
        assert_eq!(Left.opposite(), Right);
        assert_eq!(Right.opposite(), Left);
    }

    #[test]
    fn deltas_are_unit_vectors() {
        assert_eq!(Up.delta(), (-1, 0));
        assert_eq!(Down.delta(), (1, 0));
        assert_eq!(Left.delta(), (0, -1));
        assert_eq!(Right.delta(), (0, 1));
    }
}
