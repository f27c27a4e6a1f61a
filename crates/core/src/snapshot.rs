//! Read-only view of the engine state, consumed by presentation code.

use crate::types::{Tile, GRID_SIZE, TILE_COUNT};

/// Snapshot of everything a renderer needs, copyable and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Row-major grid, `grid[y][x]`.
    pub grid: [[Tile; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub score: u32,
    pub best_score: u32,
    pub free_cells: u8,
    pub game_over: bool,
    /// Current RNG state (diagnostic).
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.score = 0;
        self.best_score = 0;
        self.free_cells = TILE_COUNT;
        self.game_over = false;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[0; GRID_SIZE as usize]; GRID_SIZE as usize],
            score: 0,
            best_score: 0,
            free_cells: TILE_COUNT,
            game_over: false,
            seed: 0,
        };
        s.clear();
        s
    }
}
