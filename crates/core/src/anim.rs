//! Animation mapper - source -> destination tile correspondence
//!
//! Reconstructs, from a before/after board pair alone, where each pre-move
//! tile plausibly went, so a renderer can interpolate tile positions. This
//! is not provenance tracking: when several equal-valued tiles could reach
//! the same destination the assignment may differ from the physical motion.
//! Every pre-move occupied cell is guaranteed *some* destination with a
//! consistent value relationship, which is all a visual consumer needs.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{GRID_CELLS, GRID_SIZE};

/// Destination record for one pre-move tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDest {
    pub row: usize,
    pub col: usize,
    /// True when the tile slid into a merge: its destination cell holds
    /// double its value.
    pub merged: bool,
}

/// Mapping from pre-move cell coordinates to destination records.
///
/// Only cells that were non-zero before the move have entries. Built once
/// per move and discarded after the animation step consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    /// One slot per source cell, row-major.
    entries: [Option<TileDest>; GRID_CELLS],
}

impl TileMap {
    fn new() -> Self {
        Self {
            entries: [None; GRID_CELLS],
        }
    }

    fn set(&mut self, row: usize, col: usize, dest: TileDest) {
        self.entries[row * GRID_SIZE + col] = Some(dest);
    }

    /// Destination for the tile that was at (row, col), if that cell was
    /// occupied before the move.
    pub fn get(&self, row: usize, col: usize) -> Option<TileDest> {
        self.entries[row * GRID_SIZE + col]
    }

    /// Number of mapped source cells
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Iterate `((source_row, source_col), dest)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), TileDest)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.map(|dest| ((i / GRID_SIZE, i % GRID_SIZE), dest)))
    }
}

// Queues are indexed by tile value exponent. Sixteen cells can never push a
// tile past 2^17, so 18 slots cover every reachable value.
const MAX_EXPONENT: usize = 18;

/// Per-value FIFO queues of post-move tile positions, in row-major order.
struct PositionQueues {
    queues: [ArrayVec<(usize, usize), GRID_CELLS>; MAX_EXPONENT],
    heads: [usize; MAX_EXPONENT],
}

fn exponent(value: u32) -> usize {
    (value.trailing_zeros() as usize).min(MAX_EXPONENT - 1)
}

impl PositionQueues {
    fn index(after: &Board) -> Self {
        let mut queues = Self {
            queues: Default::default(),
            heads: [0; MAX_EXPONENT],
        };
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = after.get(row, col);
                if value != 0 {
                    queues.queues[exponent(value)].push((row, col));
                }
            }
        }
        queues
    }

    fn pop_front(&mut self, value: u32) -> Option<(usize, usize)> {
        let e = exponent(value);
        let pos = self.queues[e].get(self.heads[e]).copied();
        if pos.is_some() {
            self.heads[e] += 1;
        }
        pos
    }

    fn peek_front(&self, value: u32) -> Option<(usize, usize)> {
        let e = exponent(value);
        self.queues[e].get(self.heads[e]).copied()
    }
}

/// Build the correspondence between a pre-move and post-move board.
///
/// For each pre-move occupied cell in row-major order: take the next
/// same-valued destination if one remains (popped, `merged: false`);
/// otherwise aim at the next doubled-value destination without consuming it
/// (peeked, `merged: true` - both halves of a merge converge on it);
/// otherwise fall back to mapping the tile onto itself.
pub fn map_tiles(before: &Board, after: &Board) -> TileMap {
    let mut queues = PositionQueues::index(after);
    let mut map = TileMap::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let value = before.get(row, col);
            if value == 0 {
                continue;
            }
            let dest = if let Some((r, c)) = queues.pop_front(value) {
                TileDest {
                    row: r,
                    col: c,
                    merged: false,
                }
            } else if let Some((r, c)) = queues.peek_front(value * 2) {
                TileDest {
                    row: r,
                    col: c,
                    merged: true,
                }
            } else {
                TileDest {
                    row,
                    col,
                    merged: false,
                }
            };
            map.set(row, col, dest);
        }
    }
    map
}
