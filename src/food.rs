use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Grid, Point};

/// Pick a random free cell for food, or `None` when `occupied` fills the grid.
///
/// Draws uniformly over the whole board and rejects occupied cells. After a
/// bounded number of misses (a nearly full board) it switches to a uniform
/// pick among the enumerated free cells, so the result stays uniform over
/// free cells and the call always terminates.
pub fn place_food<'a, R, I>(grid: Grid, occupied: I, rng: &mut R) -> Option<Point>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Point>,
{
    let taken: HashSet<Point> = occupied
        .into_iter()
        .copied()
        .filter(|&p| grid.in_bounds(p))
        .collect();
    let cells = grid.cell_count();
    if taken.len() >= cells {
        return None;
    }

    // Very small grids could be nearly full--avoid long rejection runs.
    let max_attempts = cells.saturating_mul(2).max(8);
    for _ in 0..max_attempts {
        let x = rng.random_range(0..grid.size());
        let y = rng.random_range(0..grid.size());
        let p = Point::new(x, y);
        if !taken.contains(&p) {
            return Some(p);
        }
    }

    let free: Vec<Point> = grid.cells().filter(|p| !taken.contains(p)).collect();
    let pick = rng.random_range(0..free.len());
    Some(free[pick])
}
