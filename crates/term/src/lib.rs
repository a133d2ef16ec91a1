//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders
//! into a simple framebuffer that a terminal backend flushes, keeping the
//! view pure and unit-testable while all I/O lives in one place.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal concerns
//! - Render the board, scores, and the tile slide animation from plain data
//! - Restore the user's terminal reliably on the way out

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
