//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the complete rules of the sliding-tile merge game.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: same seed and inputs produce identical games
//! - **Testable**: every rule is exercisable without a terminal
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with tile spawning and terminal-state queries
//! - [`moves`]: the slide-and-merge transform, one primitive for all four
//!   directions via board rotation
//! - [`anim`]: best-effort source -> destination tile mapping for renderers
//! - [`history`]: snapshot stack backing undo
//! - [`game`]: the session - score, best, win latch, command surface
//! - [`rng`]: seedable LCG injected into everything random
//!
//! # Game Rules
//!
//! - Tiles slide as far as they can in the chosen direction; equal neighbors
//!   merge into their doubled sum, each tile merging at most once per move
//! - Every accepted move spawns one tile (2 at 90%, 4 at 10%) on a uniformly
//!   random empty cell
//! - Reaching a 2048 tile wins; the win flag latches for the whole game
//! - The game ends when the board is full and no adjacent pair is equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{merge_line, GameState};
//! use tui_2048_core::types::Direction;
//!
//! // The merge primitive works on one line at a time.
//! let (line, gain) = merge_line([2, 2, 4, 0]);
//! assert_eq!(line, [4, 4, 0, 0]);
//! assert_eq!(gain, 4);
//!
//! // A session starts with two spawned tiles.
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().count_empty(), 14);
//! let record = game.try_move(Direction::Left);
//! assert!(record.is_none() || game.board().count_empty() <= 14);
//! ```

pub mod anim;
pub mod board;
pub mod game;
pub mod history;
pub mod moves;
pub mod rng;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use anim::{map_tiles, TileDest, TileMap};
pub use board::Board;
pub use game::{GameSnapshot, GameState, MoveRecord};
pub use history::{History, HistoryEntry};
pub use moves::{merge_line, move_board, MoveOutcome};
pub use rng::SimpleRng;
