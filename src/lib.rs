//! Rules engine for a single-player escape room on an 8x5 grid: walk to the
//! right edge, dodging walls, springing hidden traps and collecting prizes.

pub mod logger;

pub mod board;
pub mod command;
pub mod config;
pub mod console;
pub mod countdown;
pub mod game;
pub mod rules;
pub mod session;

pub use board::{Board, BoardCounts, TrapId};
pub use game::{Direction, GameState, GameStatus, MoveEvent, MoveOutcome, PickupOutcome, SpringOutcome};
pub use rules::Rules;
