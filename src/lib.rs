//! Grid snake: a one-player snake on a fixed square board.
//!
//! The simulation ([`engine::tick`]) is a plain state transition with no I/O;
//! [`session::Session`] owns a round, routes player commands and keeps the
//! high score. Terminal input mapping and drawing live in [`input`] and
//! [`render`].

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod input;
pub mod render;
pub mod session;
pub mod store;
pub mod ticker;

pub use collision::Collision;
pub use config::{ConfigError, GameConfig};
pub use direction::{Direction, Steering};
pub use engine::{GameState, GameStatus, TickEvent, TickResult, tick};
pub use grid::{Coord, Grid, Point};
pub use session::{Command, Session, Snapshot};
pub use store::{HighScoreStore, JsonFileStore, MemoryStore, StoreError};
pub use ticker::Ticker;
