//! Game session - ties board, move engine, history, and RNG together
//!
//! Owns all mutable session state; nothing here is process-global. A
//! successful move commits board, score, best, history, and the random
//! spawn synchronously inside [`GameState::try_move`], so a presentation
//! layer that yields between animation frames can never observe a
//! half-applied move.

use crate::anim::TileMap;
use crate::board::Board;
use crate::history::History;
use crate::moves::move_board;
use crate::rng::SimpleRng;
use crate::types::Direction;

/// Everything the renderer needs to animate an accepted move.
///
/// The session state is already fully committed when this is returned; the
/// record only replays where tiles came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Board as it was before the move.
    pub before: Board,
    /// Points gained by the move's merges.
    pub gain: u32,
    /// Source -> destination correspondence over `before`.
    pub tile_map: TileMap,
}

/// Plain-data view of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: u32,
    pub best: u32,
    pub won: bool,
    pub game_over: bool,
}

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    best: u32,
    /// One-way win latch; survives undo, cleared only by restart.
    won: bool,
    history: History,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    ///
    /// The fresh board carries two random tiles.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::new_game(&mut rng);
        Self {
            board,
            score: 0,
            best: 0,
            won: false,
            history: History::new(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest score reached this session. Never decreases; survives both
    /// undo and restart.
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Whether a target tile has ever been reached this game.
    ///
    /// Latches permanently: undoing past the winning move does not clear it.
    /// Only [`GameState::restart`] does.
    pub fn won(&self) -> bool {
        self.won
    }

    /// True when no direction can change the board. Won and game over are
    /// not mutually exclusive.
    pub fn game_over(&self) -> bool {
        !self.board.can_move()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Plain-data copy of the current session for the view layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            score: self.score,
            best: self.best,
            won: self.won,
            game_over: self.game_over(),
        }
    }

    /// Attempt a directional move.
    ///
    /// Returns `None` when the board is unplayable or the direction changes
    /// nothing; no tile spawns, no history is pushed, and the score is
    /// untouched in that case. On success the entire commit happens before
    /// returning, in order: history push, board replacement, score and best
    /// update, one random spawn, win latch.
    pub fn try_move(&mut self, direction: Direction) -> Option<MoveRecord> {
        if self.game_over() {
            return None;
        }
        let outcome = move_board(&self.board, direction);
        if !outcome.moved {
            return None;
        }

        let before = self.board.clone();
        self.history.push(before.clone(), self.score);
        self.board = outcome.board;
        self.score += outcome.gain;
        self.best = self.best.max(self.score);
        self.board.add_random_tile(&mut self.rng);
        if self.board.has_won() {
            self.won = true;
        }

        Some(MoveRecord {
            before,
            gain: outcome.gain,
            tile_map: outcome.tile_map,
        })
    }

    /// Restore the most recent pre-move snapshot exactly (board and score).
    ///
    /// Returns `false` when there is nothing to undo. The win latch and the
    /// best score are left as they are.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(entry) => {
                self.board = entry.board;
                self.score = entry.score;
                true
            }
            None => false,
        }
    }

    /// Start a fresh game: new board, zero score, cleared history and win
    /// latch. The best score is session-scoped and survives.
    pub fn restart(&mut self) {
        self.board = Board::new_game(&mut self.rng);
        self.score = 0;
        self.won = false;
        self.history.clear();
    }
}
