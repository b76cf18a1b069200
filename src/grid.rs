/// Integer coordinate type for grid cells (not pixels)
pub type Coord = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: Coord, dy: Coord) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square board of `size` x `size` cells, origin in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: Coord,
}

impl Grid {
    pub const fn new(size: Coord) -> Self {
        Self { size }
    }

    #[inline]
    pub const fn size(self) -> Coord {
        self.size
    }

    #[inline]
    pub const fn in_bounds(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size && p.y >= 0 && p.y < self.size
    }

    /// Number of cells on the board; zero for a degenerate size.
    pub fn cell_count(self) -> usize {
        let side = self.size.max(0) as usize;
        side * side
    }

    /// Row-major iterator over every cell.
    pub fn cells(self) -> impl Iterator<Item = Point> {
        let size = self.size.max(0);
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }
}
