//! Move engine - the directional slide-and-merge transform
//!
//! One primitive does all the real work: merging a single line toward its
//! start. Rotating the board clockwise until the requested direction becomes
//! a plain leftward slide, merging every row independently, and rotating
//! back yields all four directions without four near-duplicate algorithms.
//! The rotation counts live in [`Direction::rotations`] and must match the
//! inverse rotation here exactly.

use arrayvec::ArrayVec;

use crate::anim::{map_tiles, TileMap};
use crate::board::Board;
use crate::types::{Direction, GRID_SIZE};

/// Result of a directional move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after sliding and merging, before any random spawn.
    pub board: Board,
    /// Whether the move changed anything. When `false`, `board` equals the
    /// input cell-for-cell and `gain` is zero; callers must not spawn a
    /// tile, push history, or touch the score.
    pub moved: bool,
    /// Sum of the tile values created by merges during this move.
    pub gain: u32,
    /// Source -> destination correspondence for the renderer.
    pub tile_map: TileMap,
}

/// Merge a single line toward its start.
///
/// Zeros are discarded first (order preserved), then equal neighbors in the
/// dense run collapse left to right. Each tile participates in at most one
/// merge per move: a run of three or four equal values produces exactly one
/// merged pair plus leftover singles, never a cascade into a double merge.
///
/// Returns the merged line, right-padded with zeros, and the gain.
pub fn merge_line(line: [u32; GRID_SIZE]) -> ([u32; GRID_SIZE], u32) {
    let mut dense: ArrayVec<u32, GRID_SIZE> = ArrayVec::new();
    for value in line {
        if value != 0 {
            dense.push(value);
        }
    }

    let mut out = [0u32; GRID_SIZE];
    let mut gain = 0;
    let mut write = 0;
    let mut i = 0;
    while i < dense.len() {
        if i + 1 < dense.len() && dense[i] == dense[i + 1] {
            let merged = dense[i] * 2;
            out[write] = merged;
            gain += merged;
            i += 2;
        } else {
            out[write] = dense[i];
            i += 1;
        }
        write += 1;
    }
    (out, gain)
}

/// Slide and merge the whole board in `direction`.
///
/// Deterministic: the same board and direction always produce the same
/// outcome. `moved` is detected row-by-row in the rotated frame, so callers
/// get an explicit no-op signal instead of diffing boards themselves.
pub fn move_board(board: &Board, direction: Direction) -> MoveOutcome {
    let rot = direction.rotations();

    let mut working = board.clone();
    for _ in 0..rot {
        working = working.rotated_cw();
    }

    let mut moved = false;
    let mut gain = 0;
    for row in 0..GRID_SIZE {
        let before = working.row(row);
        let (merged, row_gain) = merge_line(before);
        if merged != before {
            moved = true;
        }
        working.set_row(row, merged);
        gain += row_gain;
    }

    for _ in 0..(4 - rot) % 4 {
        working = working.rotated_cw();
    }

    let tile_map = map_tiles(board, &working);
    MoveOutcome {
        board: working,
        moved,
        gain,
        tile_map,
    }
}
