//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of letter tiles (6x10 by default).
//! Uses a flat row-major vector: index = y * width + x.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! New pieces spawn in the two horizontally centered cells of row 0.
//!
//! The board owns every tile. Pieces and the word scanner refer to cells by
//! index only and always read and write through the board.

use log::trace;

use crate::types::{Tile, TileState, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board - flat storage of `width * height` tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major tiles (y * width + x)
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if either dimension is smaller than 2 (a piece needs two spawn
    /// cells and a row to fall into), or if `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 2 && height >= 2,
            "board must be at least 2x2, got {}x{}",
            width,
            height
        );
        let Some(len) = width.checked_mul(height) else {
            panic!("board {}x{} has too many cells", width, height);
        };
        Self {
            width,
            height,
            tiles: vec![Tile::EMPTY; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(Tile::is_empty)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// (x, y) coordinates of a flat index
    #[inline(always)]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Set every cell back to empty
    pub fn reset(&mut self) {
        self.tiles.fill(Tile::EMPTY);
    }

    /// Tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    /// Overwrite the tile at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, tile: Tile) {
        self.tiles[index] = tile;
    }

    /// Tile at (x, y), or None if out of bounds
    pub fn tile_at(&self, x: usize, y: usize) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Empty every given cell
    pub fn clear<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for idx in indices {
            self.tiles[idx] = Tile::EMPTY;
        }
    }

    /// The two top-row cells a new piece occupies (left, right)
    pub fn spawn_indices(&self) -> [usize; 2] {
        let left = self.width / 2 - 1;
        [left, left + 1]
    }

    /// Check if either spawn cell is occupied (game over condition)
    pub fn is_spawn_blocked(&self) -> bool {
        self.spawn_indices()
            .iter()
            .any(|&idx| !self.tiles[idx].is_empty())
    }

    /// Indices of row `y`, left to right
    pub fn row_indices(&self, y: usize) -> impl Iterator<Item = usize> {
        let start = y * self.width;
        start..start + self.width
    }

    /// Indices of column `x`, top to bottom
    pub fn column_indices(&self, x: usize) -> impl Iterator<Item = usize> {
        let width = self.width;
        (0..self.height).map(move |y| y * width + x)
    }

    /// One gravity pass.
    ///
    /// Every falling tile with an empty cell directly below moves down one row.
    /// Falling tiles that end the pass on the bottom row or on top of a static
    /// tile become static. Cells are visited bottom-to-top, right-to-left, so a
    /// tile that moved lands in a row that has already been visited and is
    /// never moved twice. Returns the number of tiles that moved.
    ///
    /// Must not run while a player piece is active: piece tiles are falling too.
    pub fn collapse(&mut self) -> usize {
        let width = self.width;
        let mut moved = 0;

        for y in (0..self.height).rev() {
            for x in (0..width).rev() {
                let idx = y * width + x;
                let tile = self.tiles[idx];
                if !tile.is_falling() {
                    continue;
                }

                let mut at = idx;
                let below = idx + width;
                if below < self.tiles.len() && self.tiles[below].is_empty() {
                    self.tiles[below] = tile;
                    self.tiles[idx] = Tile::EMPTY;
                    at = below;
                    moved += 1;
                }

                if self.is_resting(at) {
                    self.tiles[at] = tile.with_state(TileState::Static);
                }
            }
        }

        moved
    }

    /// Mark every static tile that has an empty cell somewhere below it in its
    /// column as falling. Returns how many tiles were released.
    pub fn release_unsupported(&mut self) -> usize {
        let mut released = 0;

        for x in 0..self.width {
            let mut gap_below = false;
            for y in (0..self.height).rev() {
                let idx = y * self.width + x;
                let tile = self.tiles[idx];
                match tile.state() {
                    TileState::Empty => gap_below = true,
                    TileState::Static if gap_below => {
                        self.tiles[idx] = tile.with_state(TileState::Falling);
                        released += 1;
                    }
                    _ => {}
                }
            }
        }

        released
    }

    /// Drop every unsupported tile until nothing moves.
    ///
    /// Afterwards no tile is falling and no static tile hangs over a gap.
    /// Returns the total number of single-row moves performed.
    pub fn settle(&mut self) -> usize {
        let released = self.release_unsupported();
        let mut moves = 0;
        let mut passes = 0;

        loop {
            let moved = self.collapse();
            passes += 1;
            if moved == 0 {
                break;
            }
            moves += moved;
        }

        trace!(
            "settle: released {} tiles, {} moves over {} passes",
            released,
            moves,
            passes
        );
        moves
    }

    /// Get a reference to the internal tiles
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Build a board from text rows.
    ///
    /// `.` or space is empty, an uppercase letter is a static tile and a
    /// lowercase letter is a falling tile (stored uppercase).
    ///
    /// # Panics
    ///
    /// Panics on ragged rows, fewer than 2 rows or columns, or any other character.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::new(width, height);

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged row {}", y);
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '.' | ' ' => Tile::EMPTY,
                    c if c.is_ascii_uppercase() => Tile::locked(c),
                    c if c.is_ascii_lowercase() => Tile::falling(c.to_ascii_uppercase()),
                    c => panic!("unexpected board character {:?}", c),
                };
                board.tiles[y * width + x] = tile;
            }
        }

        board
    }

    /// Inverse of [`Board::from_rows`]
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|tile| match (tile.state(), tile.letter()) {
                        (TileState::Falling, Some(c)) => c.to_ascii_lowercase(),
                        (_, Some(c)) => c,
                        (_, None) => '.',
                    })
                    .collect()
            })
            .collect()
    }

    fn is_resting(&self, idx: usize) -> bool {
        let below = idx + self.width;
        below >= self.tiles.len() || self.tiles[below].is_static()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
