use std::collections::VecDeque;

use crate::grid::{Grid, Point};

/// Classification of a candidate head position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
    Safe,
}

impl Collision {
    #[inline]
    pub fn is_safe(self) -> bool {
        self == Self::Safe
    }
}

/// Classify `head` against the pre-move `body` (head at index 0).
///
/// The current head cell becomes the neck after the move, so it never counts.
/// When `tail_will_move_off` is set the last segment is vacated by the same
/// move and is ignored as well, unless it is also the neck (a two-segment
/// snake): reversing into the neck is always a collision. Walls are checked
/// first.
pub fn detect(grid: Grid, head: Point, body: &VecDeque<Point>, tail_will_move_off: bool) -> Collision {
    if !grid.in_bounds(head) {
        return Collision::Wall;
    }

    let end = if tail_will_move_off && body.len() > 2 {
        body.len() - 1
    } else {
        body.len()
    };
    if body.iter().take(end).skip(1).any(|&s| s == head) {
        Collision::SelfCollision
    } else {
        Collision::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(cells: &[(i32, i32)]) -> VecDeque<Point> {
        cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let g = Grid::new(20);
        let b = body(&[(0, 0)]);
        assert_eq!(detect(g, Point::new(-1, 0), &b, true), Collision::Wall);
        assert_eq!(detect(g, Point::new(0, 20), &b, true), Collision::Wall);
    }

    #[test]
    fn moving_away_from_neck_is_safe() {
        let g = Grid::new(20);
        let b = body(&[(5, 5), (5, 6), (5, 7)]);
        assert_eq!(detect(g, Point::new(5, 4), &b, true), Collision::Safe);
    }

    #[test]
    fn hitting_a_middle_segment_is_self() {
        let g = Grid::new(20);
        // A hook: head at (4,5) can step right into (5,5).
        let b = body(&[(4, 5), (4, 6), (5, 6), (5, 5), (5, 4)]);
        assert_eq!(detect(g, Point::new(5, 5), &b, true), Collision::SelfCollision);
    }

    #[test]
    fn old_head_cell_is_not_a_collision() {
        let g = Grid::new(20);
        let b = body(&[(3, 3), (4, 3)]);
        assert_eq!(detect(g, Point::new(3, 3), &b, true), Collision::Safe);
    }

    #[test]
    fn vacating_tail_is_safe_but_held_tail_is_not() {
        let g = Grid::new(20);
        // 2x2 loop: head (0,0), tail (0,1) directly below it.
        let b = body(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let onto_tail = Point::new(0, 1);
        assert_eq!(detect(g, onto_tail, &b, true), Collision::Safe);
        assert_eq!(detect(g, onto_tail, &b, false), Collision::SelfCollision);
    }

    #[test]
    fn reversing_a_two_segment_snake_hits_the_neck() {
        let g = Grid::new(20);
        let b = body(&[(5, 5), (4, 5)]);
        assert_eq!(detect(g, Point::new(4, 5), &b, true), Collision::SelfCollision);
        assert_eq!(detect(g, Point::new(4, 5), &b, false), Collision::SelfCollision);
    }

    #[test]
    fn wall_wins_over_everything() {
        let g = Grid::new(2);
        let b = body(&[(1, 0), (0, 0)]);
        assert_eq!(detect(g, Point::new(2, 0), &b, false), Collision::Wall);
    }
}
