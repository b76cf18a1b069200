use std::time::Duration;

use thiserror::Error;

use crate::direction::Direction;
use crate::grid::{Coord, Grid, Point};

pub const GRID_SIZE: Coord = 20;
pub const TICK_PERIOD: Duration = Duration::from_millis(150);
pub const INITIAL_HEAD: Point = Point::new(10, 10);
pub const INITIAL_FOOD: Point = Point::new(15, 15);
pub const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Cells per side of the square board
    pub grid_size: Coord,
    /// Time between simulation ticks
    pub tick_period: Duration,
    /// Starting cell of the one-segment snake
    pub initial_head: Point,
    /// Food position at the start of every round
    pub initial_food: Point,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_period: TICK_PERIOD,
            initial_head: INITIAL_HEAD,
            initial_food: INITIAL_FOOD,
            initial_direction: INITIAL_DIRECTION,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be positive, got {0}")]
    EmptyGrid(Coord),
    #[error("tick period must be non-zero")]
    ZeroTickPeriod,
    #[error("initial head {0} is outside the grid")]
    HeadOutOfBounds(Point),
    #[error("initial food {0} is outside the grid")]
    FoodOutOfBounds(Point),
    #[error("initial food overlaps the snake at {0}")]
    FoodOnSnake(Point),
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::EmptyGrid(self.grid_size));
        }
        if self.tick_period.is_zero() {
            return Err(ConfigError::ZeroTickPeriod);
        }
        let grid = self.grid();
        if !grid.in_bounds(self.initial_head) {
            return Err(ConfigError::HeadOutOfBounds(self.initial_head));
        }
        if !grid.in_bounds(self.initial_food) {
            return Err(ConfigError::FoodOutOfBounds(self.initial_food));
        }
        if self.initial_food == self.initial_head {
            return Err(ConfigError::FoodOnSnake(self.initial_food));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.grid_size, 20);
        assert_eq!(cfg.tick_period, Duration::from_millis(150));
        assert_eq!(cfg.initial_head, Point::new(10, 10));
        assert_eq!(cfg.initial_food, Point::new(15, 15));
        assert_eq!(cfg.initial_direction, Direction::Right);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_layouts() {
        let base = GameConfig::default();

        let cfg = GameConfig { grid_size: 0, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyGrid(0)));

        let cfg = GameConfig { tick_period: Duration::ZERO, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTickPeriod));

        let cfg = GameConfig { initial_head: Point::new(20, 0), ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::HeadOutOfBounds(Point::new(20, 0))));

        let cfg = GameConfig { initial_food: Point::new(-1, 3), ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::FoodOutOfBounds(Point::new(-1, 3))));

        let cfg = GameConfig { initial_food: base.initial_head, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::FoodOnSnake(Point::new(10, 10))));
    }
}
