use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, GameConfig};
use crate::direction::{Direction, Steering};
use crate::engine::{self, GameState, GameStatus, TickEvent, TickResult};
use crate::grid::{Coord, Point};
use crate::store::HighScoreStore;

/// Player intent, already decoded from raw device events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    Restart,
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid_size: Coord,
    /// Head first.
    pub body: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub high_score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub won: bool,
}

impl Snapshot {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }
}

/// One player's game: owns the state, the pending turn, the food RNG and the
/// high-score store, and is the only writer of all of them.
pub struct Session<S> {
    cfg: GameConfig,
    state: GameState,
    steering: Steering,
    rng: ChaCha8Rng,
    store: S,
}

impl<S: HighScoreStore> Session<S> {
    /// Create a session with a deterministic food RNG.
    pub fn with_seed(cfg: GameConfig, store: S, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(cfg, store, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(cfg: GameConfig, store: S, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let high_score = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load high score, starting from 0");
            0
        });
        info!(grid = cfg.grid_size, high_score, "session started");
        Ok(Self {
            state: GameState::new(&cfg, high_score),
            cfg,
            steering: Steering::new(),
            rng,
            store,
        })
    }

    /// Create a session with a non-deterministic seed.
    pub fn new(cfg: GameConfig, store: S) -> Result<Self, ConfigError> {
        Self::with_rng(cfg, store, ChaCha8Rng::from_os_rng())
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.steering.pending()
    }

    /// Apply one command. Returns true if it was accepted.
    ///
    /// Steering and pause are ignored once the round is over; restart is
    /// only honoured then.
    pub fn handle(&mut self, cmd: Command) -> bool {
        let over = self.state.status().is_over();
        match cmd {
            Command::Steer(_) | Command::TogglePause if over => false,
            Command::Steer(dir) => self.steering.steer(self.state.direction(), dir),
            Command::TogglePause => {
                let changed = self.state.toggle_pause();
                if changed {
                    let paused = self.state.status() == GameStatus::Paused;
                    info!(paused, "pause toggled");
                }
                changed
            }
            Command::Restart if over => {
                self.reset();
                true
            }
            Command::Restart => false,
        }
    }

    /// Run one simulation step with the pending turn, if any.
    pub fn tick(&mut self) -> TickResult {
        let dir = if self.state.status() == GameStatus::Running {
            self.steering.commit(self.state.direction())
        } else {
            self.state.direction()
        };

        let (next, res) = engine::tick(std::mem::take(&mut self.state), dir, &mut self.rng);
        self.state = next;

        match res.event {
            TickEvent::Crashed(collision) => {
                info!(score = res.score, ?collision, "game over");
            }
            TickEvent::Won => info!(score = res.score, "board filled"),
            TickEvent::Ate => debug!(score = res.score, "food eaten"),
            TickEvent::Moved | TickEvent::Idle => {}
        }
        if res.new_high_score {
            self.persist_high_score();
        }
        res
    }

    /// Start over from the configured layout, from any state. The high
    /// score is kept.
    pub fn reset(&mut self) {
        self.state.reset(&self.cfg);
        self.steering.clear();
        info!(high_score = self.state.high_score(), "session reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        let status = self.state.status();
        Snapshot {
            grid_size: self.state.grid().size(),
            body: self.state.snake_segments().copied().collect(),
            food: self.state.food(),
            score: self.state.score(),
            high_score: self.state.high_score(),
            paused: status == GameStatus::Paused,
            game_over: status.is_over(),
            won: status == GameStatus::Won,
        }
    }

    fn persist_high_score(&mut self) {
        let score = self.state.high_score();
        info!(score, "new high score");
        if let Err(e) = self.store.save(score) {
            warn!(error = %e, "could not save high score");
        }
    }
}
