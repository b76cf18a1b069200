use std::collections::VecDeque;

use rand::Rng;

use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::food::place_food;
use crate::grid::{Grid, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    /// The snake filled the board; no cell is left for food.
    Won,
}

impl GameStatus {
    /// True once the round has ended and only a reset can continue it.
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Paused or finished; nothing changed.
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
    Won,
}

/// UI-agnostic result of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub event: TickEvent,
    pub status: GameStatus,
    pub score: u32,
    /// Set on the tick that ended the round with a score above the previous best.
    pub new_high_score: bool,
}

/// Authoritative state of one round plus the best score seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    snake: VecDeque<Point>,
    dir: Direction,
    food: Option<Point>,
    status: GameStatus,
    score: u32,
    high_score: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default(), 0)
    }
}

impl GameState {
    /// Fresh round laid out from `cfg`, carrying over `high_score`.
    pub fn new(cfg: &GameConfig, high_score: u32) -> Self {
        Self {
            grid: cfg.grid(),
            snake: VecDeque::from([cfg.initial_head]),
            dir: cfg.initial_direction,
            food: Some(cfg.initial_food),
            status: GameStatus::Running,
            score: 0,
            high_score,
        }
    }

    /// Running round with an explicit layout. `body` is head-first and must
    /// not be empty.
    pub fn with_layout<I>(grid: Grid, body: I, dir: Direction, food: Point) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let snake: VecDeque<Point> = body.into_iter().collect();
        assert!(!snake.is_empty(), "snake needs at least one segment");
        Self {
            grid,
            snake,
            dir,
            food: Some(food),
            status: GameStatus::Running,
            score: 0,
            high_score: 0,
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn snake_segments(&self) -> impl Iterator<Item = &Point> {
        self.snake.iter()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Point {
        *self.snake.front().expect("snake is non-empty")
    }

    /// Flip between running and paused. Finished rounds are left alone.
    /// Returns true if the status changed.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver | GameStatus::Won => return false,
        };
        true
    }

    /// Start a new round from `cfg`; the high score survives.
    pub fn reset(&mut self, cfg: &GameConfig) {
        *self = Self::new(cfg, self.high_score);
    }

    fn finish(&mut self, status: GameStatus) -> bool {
        self.status = status;
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    fn result(&self, event: TickEvent, new_high_score: bool) -> TickResult {
        TickResult {
            event,
            status: self.status,
            score: self.score,
            new_high_score,
        }
    }
}

/// Advance `state` by one tick travelling `dir`.
///
/// Only a running round changes. The move is checked against the body as it
/// stood before the move; a crash leaves the body where it was. Eating keeps
/// the tail and places new food away from the grown body; if no free cell
/// remains the round is won.
pub fn tick<R>(mut state: GameState, dir: Direction, rng: &mut R) -> (GameState, TickResult)
where
    R: Rng + ?Sized,
{
    if state.status != GameStatus::Running {
        let res = state.result(TickEvent::Idle, false);
        return (state, res);
    }

    state.dir = dir;
    let (dx, dy) = dir.dx_dy();
    let next_head = state.head().offset(dx, dy);

    let is_eating = state.food == Some(next_head);
    let hit = collision::detect(state.grid, next_head, &state.snake, !is_eating);
    if !hit.is_safe() {
        let new_high = state.finish(GameStatus::GameOver);
        let res = state.result(TickEvent::Crashed(hit), new_high);
        return (state, res);
    }

    state.snake.push_front(next_head);

    if !is_eating {
        state.snake.pop_back();
        let res = state.result(TickEvent::Moved, false);
        return (state, res);
    }

    state.score += 1;
    state.food = place_food(state.grid, &state.snake, rng);
    if state.food.is_none() {
        let new_high = state.finish(GameStatus::Won);
        let res = state.result(TickEvent::Won, new_high);
        return (state, res);
    }
    let res = state.result(TickEvent::Ate, false);
    (state, res)
}
