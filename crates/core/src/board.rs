//! Board module - the 4x4 tile grid and the slide/merge transform.
//!
//! The board is stored as a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3
//! (top to bottom). Every non-zero tile is a power of two >= 2.
//!
//! All four directions reuse one canonical squash routine: each row or column
//! is copied into a 4-element line buffer oriented so that index 3 is the
//! edge tiles slide toward, squashed, and written back.

use arrayvec::ArrayVec;

use crate::types::{Direction, Tile, EMPTY, GRID_SIZE, TILE_COUNT};

/// Total number of cells on the board
const BOARD_SIZE: usize = TILE_COUNT as usize;

/// Line length (one row or column)
const LINE: usize = GRID_SIZE as usize;

/// Result of sliding the whole board in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideOutcome {
    /// Whether any tile changed position or value.
    pub moved: bool,
    /// Sum of merged tile values produced by this slide.
    pub score_gain: u32,
}

/// The game board - 4x4 tiles using flat array storage plus a cached count
/// of empty cells.
///
/// Invariant: `free_cells` always equals the number of `EMPTY` tiles.
/// The cache is maintained incrementally: merges free a cell, spawns and
/// `set_tile` writes adjust it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of tiles, row-major order (y * GRID_SIZE + x)
    tiles: [Tile; BOARD_SIZE],
    /// Cached number of empty cells
    free_cells: u8,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            tiles: [EMPTY; BOARD_SIZE],
            free_cells: TILE_COUNT,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return None;
        }
        Some((y as usize) * LINE + (x as usize))
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.tiles[idx])
    }

    /// Set tile at position (x, y), keeping the free-cell cache consistent.
    /// Returns false if out of bounds
    pub fn set_tile(&mut self, x: u8, y: u8, value: Tile) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                let old = self.tiles[idx];
                if old == EMPTY && value != EMPTY {
                    self.free_cells -= 1;
                } else if old != EMPTY && value == EMPTY {
                    self.free_cells += 1;
                }
                self.tiles[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Number of empty cells
    pub fn free_cells(&self) -> u8 {
        self.free_cells
    }

    /// Whether the board has no empty cells
    pub fn is_full(&self) -> bool {
        self.free_cells == 0
    }

    /// Enumerate the coordinates of all empty cells.
    ///
    /// This is stack-only and does not allocate.
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), BOARD_SIZE> {
        let mut out = ArrayVec::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if self.tiles[(y as usize) * LINE + (x as usize)] == EMPTY {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Map (line, pos) to a flat index so that `pos == LINE - 1` is the edge
    /// tiles slide toward for `dir`.
    ///
    /// Lines are rows for Left/Right and columns for Up/Down.
    #[inline(always)]
    fn line_index(dir: Direction, line: usize, pos: usize) -> usize {
        match dir {
            Direction::Right => line * LINE + pos,
            Direction::Left => line * LINE + (LINE - 1 - pos),
            Direction::Down => pos * LINE + line,
            Direction::Up => (LINE - 1 - pos) * LINE + line,
        }
    }

    /// Slide and merge every line of the board toward the `dir` edge.
    ///
    /// Pure grid transform: no spawn and no terminal-state check happen here.
    /// Score gain is reported to the caller, merges free cells in the cache.
    pub fn slide(&mut self, dir: Direction) -> SlideOutcome {
        let mut outcome = SlideOutcome::default();

        for line in 0..LINE {
            let mut buf = [EMPTY; LINE];
            for pos in 0..LINE {
                buf[pos] = self.tiles[Self::line_index(dir, line, pos)];
            }

            let (moved, gained, freed) = squash_line(&mut buf);
            outcome.moved |= moved;
            outcome.score_gain += gained;
            self.free_cells += freed;

            for pos in 0..LINE {
                self.tiles[Self::line_index(dir, line, pos)] = buf[pos];
            }
        }

        outcome
    }

    /// Check whether any legal move exists.
    ///
    /// True if a cell is free, or any cell equals its right or below
    /// neighbor (a merge is possible). Pure read.
    pub fn can_move(&self) -> bool {
        if self.free_cells > 0 {
            return true;
        }

        for y in 0..LINE {
            for x in 0..LINE {
                let current = self.tiles[y * LINE + x];
                if x + 1 < LINE && current == self.tiles[y * LINE + x + 1] {
                    return true;
                }
                if y + 1 < LINE && current == self.tiles[(y + 1) * LINE + x] {
                    return true;
                }
            }
        }
        false
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.tiles = [EMPTY; BOARD_SIZE];
        self.free_cells = TILE_COUNT;
    }

    /// Copy the grid into a 2D array (row-major), for snapshots.
    pub fn write_grid(&self, out: &mut [[Tile; LINE]; LINE]) {
        for y in 0..LINE {
            for x in 0..LINE {
                out[y][x] = self.tiles[y * LINE + x];
            }
        }
    }

    /// View the grid as rows.
    pub fn rows(&self) -> [[Tile; LINE]; LINE] {
        let mut out = [[EMPTY; LINE]; LINE];
        self.write_grid(&mut out);
        out
    }

    /// Create a board from rows, recomputing the free-cell cache.
    pub fn from_rows(rows: [[Tile; LINE]; LINE]) -> Self {
        let mut tiles = [EMPTY; BOARD_SIZE];
        let mut free = 0u8;
        for (y, row) in rows.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                tiles[y * LINE + x] = tile;
                if tile == EMPTY {
                    free += 1;
                }
            }
        }
        Self {
            tiles,
            free_cells: free,
        }
    }

    /// Count zero tiles by scanning (for validating the cache in tests).
    #[cfg(test)]
    pub fn count_empty(&self) -> u8 {
        self.tiles.iter().filter(|&&t| t == EMPTY).count() as u8
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Squash one line toward its high end (index `LINE - 1`).
///
/// Walks the line from the far end toward the near end with a write cursor.
/// Each destination cell merges at most once per call, so a merge result
/// never merges again in the same move. Returns (moved, score gained,
/// cells freed by merges).
fn squash_line(line: &mut [Tile; LINE]) -> (bool, u32, u8) {
    let mut moved = false;
    let mut gained = 0u32;
    let mut freed = 0u8;
    let mut insert = (LINE - 1) as i32;

    for i in (0..LINE).rev() {
        if line[i] == EMPTY {
            continue;
        }

        let val = line[i];
        line[i] = EMPTY;

        if insert < (LINE - 1) as i32 && line[insert as usize + 1] == val {
            // Merge into the tile just written; do not advance the cursor,
            // so this slot cannot absorb a second merge.
            line[insert as usize + 1] = val * 2;
            gained += val * 2;
            freed += 1;
            moved = true;
        } else {
            line[insert as usize] = val;
            if insert as usize != i {
                moved = true;
            }
            insert -= 1;
        }
    }

    (moved, gained, freed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(mut line: [Tile; LINE]) -> ([Tile; LINE], bool, u32) {
        let (moved, gained, _freed) = squash_line(&mut line);
        (line, moved, gained)
    }

    #[test]
    fn test_squash_slides_toward_high_end() {
        let (line, moved, gained) = squash([2, 0, 0, 0]);
        assert_eq!(line, [0, 0, 0, 2]);
        assert!(moved);
        assert_eq!(gained, 0);
    }

    #[test]
    fn test_squash_merges_adjacent_pair() {
        let (line, moved, gained) = squash([0, 0, 2, 2]);
        assert_eq!(line, [0, 0, 0, 4]);
        assert!(moved);
        assert_eq!(gained, 4);
    }

    #[test]
    fn test_squash_merges_at_most_once_per_slot() {
        let (line, moved, gained) = squash([2, 2, 2, 2]);
        assert_eq!(line, [0, 0, 4, 4]);
        assert!(moved);
        assert_eq!(gained, 8);
    }

    #[test]
    fn test_squash_merge_result_does_not_chain() {
        // 4 then 2,2: the 2s merge into a 4 but must not merge with the
        // existing 4 in the same move.
        let (line, _, gained) = squash([0, 2, 2, 4]);
        assert_eq!(line, [0, 0, 4, 4]);
        assert_eq!(gained, 4);
    }

    #[test]
    fn test_squash_packed_line_is_a_no_op() {
        let (line, moved, gained) = squash([0, 2, 4, 8]);
        assert_eq!(line, [0, 2, 4, 8]);
        assert!(!moved);
        assert_eq!(gained, 0);
    }

    #[test]
    fn test_squash_empty_line_is_a_no_op() {
        let (line, moved, gained) = squash([0, 0, 0, 0]);
        assert_eq!(line, [0, 0, 0, 0]);
        assert!(!moved);
        assert_eq!(gained, 0);
    }

    #[test]
    fn test_squash_full_distinct_line_is_a_no_op() {
        let (line, moved, _) = squash([2, 4, 8, 16]);
        assert_eq!(line, [2, 4, 8, 16]);
        assert!(!moved);
    }

    #[test]
    fn test_slide_left_merges_toward_left_edge() {
        let mut board = Board::from_rows([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let outcome = board.slide(Direction::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gain, 4);
        assert_eq!(board.rows()[0], [4, 0, 0, 0]);
    }

    #[test]
    fn test_slide_right_slides_without_chain_merge() {
        let mut board = Board::from_rows([
            [2, 0, 2, 4],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let outcome = board.slide(Direction::Right);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gain, 4);
        assert_eq!(board.rows()[0], [0, 0, 4, 4]);
    }

    #[test]
    fn test_slide_up_and_down_operate_on_columns() {
        let rows = [
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [0, 0, 0, 0],
        ];

        let mut up = Board::from_rows(rows);
        let outcome = up.slide(Direction::Up);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gain, 4);
        assert_eq!(up.rows()[0][0], 4);
        assert_eq!(up.rows()[1][0], 4);
        assert_eq!(up.rows()[2][0], 0);

        let mut down = Board::from_rows(rows);
        let outcome = down.slide(Direction::Down);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gain, 4);
        assert_eq!(down.rows()[3][0], 4);
        assert_eq!(down.rows()[2][0], 4);
        assert_eq!(down.rows()[1][0], 0);
    }

    #[test]
    fn test_slide_keeps_free_cell_cache_consistent() {
        let mut board = Board::from_rows([
            [2, 2, 4, 4],
            [8, 8, 0, 0],
            [0, 0, 2, 2],
            [16, 0, 0, 16],
        ]);
        assert_eq!(board.free_cells(), board.count_empty());

        for dir in Direction::ALL {
            let mut b = board.clone();
            b.slide(dir);
            assert_eq!(b.free_cells(), b.count_empty(), "dir {:?}", dir);
        }

        board.slide(Direction::Left);
        assert_eq!(board.free_cells(), board.count_empty());
    }

    #[test]
    fn test_unmoved_slide_leaves_board_unchanged() {
        let board = Board::from_rows([
            [0, 0, 0, 2],
            [0, 0, 0, 4],
            [0, 0, 0, 2],
            [0, 0, 0, 8],
        ]);
        let mut slid = board.clone();
        let outcome = slid.slide(Direction::Right);
        assert!(!outcome.moved);
        assert_eq!(outcome.score_gain, 0);
        assert_eq!(slid, board);
    }

    #[test]
    fn test_can_move_with_free_cells() {
        let board = Board::new();
        assert!(board.can_move());
    }

    #[test]
    fn test_can_move_full_board_with_merge() {
        // Full board, one vertical pair.
        let board = Board::from_rows([
            [2, 4, 8, 16],
            [4, 8, 16, 2],
            [4, 2, 4, 8],
            [2, 4, 8, 16],
        ]);
        assert!(board.is_full());
        assert!(board.can_move());
    }

    #[test]
    fn test_can_move_false_when_locked() {
        // Full board, no equal right or below neighbors anywhere.
        let board = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(!board.can_move());
    }

    #[test]
    fn test_set_tile_maintains_cache() {
        let mut board = Board::new();
        assert_eq!(board.free_cells(), 16);

        board.set_tile(1, 2, 2);
        assert_eq!(board.free_cells(), 15);

        // Overwrite with another value: no cache change.
        board.set_tile(1, 2, 4);
        assert_eq!(board.free_cells(), 15);

        board.set_tile(1, 2, EMPTY);
        assert_eq!(board.free_cells(), 16);

        assert!(!board.set_tile(4, 0, 2));
    }

    #[test]
    fn test_empty_cells_enumeration() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [0, 4, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 8],
        ]);
        let empties = board.empty_cells();
        assert_eq!(empties.len(), 13);
        assert!(!empties.contains(&(0, 0)));
        assert!(!empties.contains(&(1, 1)));
        assert!(!empties.contains(&(3, 3)));
        assert!(empties.contains(&(2, 2)));
    }
}
