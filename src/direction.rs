use crate::grid::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn dx_dy(self) -> (Coord, Coord) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Whether a turn into `self` is allowed while travelling `committed`.
    ///
    /// Vertical turns need a committed direction with no vertical component,
    /// horizontal turns one with no horizontal component. This rejects both
    /// reversals and repeats of the current axis.
    #[inline]
    pub fn can_turn_from(self, committed: Self) -> bool {
        let (dx, dy) = committed.dx_dy();
        match self {
            Self::Up | Self::Down => dy == 0,
            Self::Left | Self::Right => dx == 0,
        }
    }
}

/// Holds the candidate direction between ticks.
///
/// Only turns valid against the committed direction are kept, and a later
/// accepted turn overwrites an earlier one. The engine consumes the pending
/// turn on the next tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Steering {
    pending: Option<Direction>,
}

impl Steering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a turn. Returns true if it was accepted as the pending direction.
    pub fn steer(&mut self, committed: Direction, input: Direction) -> bool {
        if !input.can_turn_from(committed) {
            return false;
        }
        self.pending = Some(input);
        true
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Direction for the coming tick, clearing the pending turn.
    pub fn commit(&mut self, committed: Direction) -> Direction {
        self.pending.take().unwrap_or(committed)
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
