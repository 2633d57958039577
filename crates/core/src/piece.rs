//! Piece module - the two-tile player piece
//!
//! A [`Piece`] is a selector over two board cells currently holding falling
//! tiles, plus a rotation state. It never stores tiles itself: every move
//! reads the letters out of the board and writes them back to the new cells.
//!
//! Rotation is a 4-state cycle. Each `(rotation, spin)` pair maps to a fixed
//! one-cell offset per tile; four turns with the same spin return both tiles
//! to where they started.

use log::debug;

use crate::board::Board;
use crate::types::{Rotation, Spin, Tile, TileState};

/// Single-cell offset (dx, dy)
pub type CellOffset = (i8, i8);

/// Offsets applied to (tile 0, tile 1) when turning from `from` with `spin`.
///
/// - North: tile 0 left of tile 1
/// - West: tile 0 above tile 1
/// - South: tile 1 left of tile 0
/// - East: tile 1 above tile 0
pub fn rotation_offsets(from: Rotation, spin: Spin) -> [CellOffset; 2] {
    use Rotation::*;
    use Spin::*;

    match (from, spin) {
        (North, CounterClockwise) | (East, Clockwise) => [(0, -1), (-1, 0)],
        (West, CounterClockwise) | (North, Clockwise) => [(1, 0), (0, -1)],
        (South, CounterClockwise) | (West, Clockwise) => [(0, 1), (1, 0)],
        (East, CounterClockwise) | (South, Clockwise) => [(-1, 0), (0, 1)],
    }
}

/// Check whether a tile may move from `from` to the candidate index `to`.
///
/// The move is classified by index arithmetic. Down (`to == from + width`) is
/// checked before right (`to > from`), and up (`to == from - width`) before
/// left (`to < from`), because a whole-row delta would otherwise read as a
/// horizontal move. The boundary for that direction is applied to `from`
/// (bottom row, right edge, top row, left edge), and the destination must be
/// on the board and not static.
pub fn check_collision(board: &Board, to: isize, from: usize) -> bool {
    let width = board.width() as isize;
    let from_i = from as isize;
    let (x, y) = board.coords(from);

    let moving_down = to == from_i + width;
    let moving_right = !moving_down && to > from_i;
    let moving_up = to == from_i - width;
    let moving_left = !moving_up && to < from_i;

    let blocked = if moving_down {
        y + 1 == board.height()
    } else if moving_right {
        x + 1 == board.width()
    } else if moving_up {
        y == 0
    } else if moving_left {
        x == 0
    } else {
        false
    };
    if blocked {
        return false;
    }

    match usize::try_from(to) {
        Ok(to) if to < board.len() => !board.get(to).is_static(),
        _ => false,
    }
}

/// The active two-tile piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    indices: [usize; 2],
    rotation: Rotation,
}

impl Piece {
    /// Spawn a new piece in the two centered top-row cells.
    ///
    /// Returns None without touching the board (or calling `draw`) when
    /// either cell is occupied.
    pub fn spawn(board: &mut Board, mut draw: impl FnMut() -> char) -> Option<Self> {
        if board.is_spawn_blocked() {
            return None;
        }

        let indices = board.spawn_indices();
        for &idx in &indices {
            board.set(idx, Tile::falling(draw()));
        }
        debug!(
            "spawned piece {:?}{:?}",
            board.get(indices[0]).letter(),
            board.get(indices[1]).letter()
        );

        Some(Self {
            indices,
            rotation: Rotation::North,
        })
    }

    pub fn indices(&self) -> [usize; 2] {
        self.indices
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Letters under the piece, read through the board
    pub fn letters(&self, board: &Board) -> [Option<char>; 2] {
        self.indices.map(|idx| board.get(idx).letter())
    }

    /// Try to shift both tiles by one cell.
    ///
    /// On failure the board and piece are unchanged; the caller decides what
    /// a failed downward move means.
    pub fn try_move(&mut self, board: &mut Board, dx: i8, dy: i8) -> bool {
        debug_assert!(
            dx.abs() + dy.abs() == 1,
            "pieces move one cell at a time, got ({}, {})",
            dx,
            dy
        );
        self.try_shift(board, [(dx, dy), (dx, dy)])
    }

    /// Try to turn the piece a quarter in the given direction.
    pub fn try_rotate(&mut self, board: &mut Board, spin: Spin) -> bool {
        let offsets = rotation_offsets(self.rotation, spin);
        if self.try_shift(board, offsets) {
            self.rotation = self.rotation.turn(spin);
            return true;
        }
        false
    }

    /// Mark both tiles static. The piece is consumed.
    pub fn lock(self, board: &mut Board) {
        for idx in self.indices {
            let tile = board.get(idx);
            board.set(idx, tile.with_state(TileState::Static));
        }
    }

    fn try_shift(&mut self, board: &mut Board, offsets: [CellOffset; 2]) -> bool {
        let width = board.width() as isize;
        let targets = [0, 1].map(|i| {
            let (dx, dy) = offsets[i];
            self.indices[i] as isize + dx as isize + dy as isize * width
        });

        let clear = targets
            .iter()
            .zip(self.indices)
            .all(|(&to, from)| check_collision(board, to, from));
        if !clear {
            return false;
        }

        // Lift both tiles before placing either: the targets may overlap the
        // old cells.
        let tiles = self.indices.map(|idx| board.get(idx));
        board.clear(self.indices);
        for (target, tile) in targets.into_iter().zip(tiles) {
            // check_collision proved every target is on the board
            let idx = target as usize;
            board.set(idx, tile);
        }
        self.indices = targets.map(|t| t as usize);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_on(board: &mut Board) -> Piece {
        let mut letters = ['A', 'B'].into_iter();
        Piece::spawn(board, || letters.next().unwrap_or('Z')).unwrap()
    }

    #[test]
    fn test_spawn_places_two_falling_tiles() {
        let mut board = Board::default();
        let piece = spawn_on(&mut board);

        assert_eq!(piece.indices(), [2, 3]);
        assert_eq!(piece.rotation(), Rotation::North);
        assert_eq!(board.get(2), Tile::falling('A'));
        assert_eq!(board.get(3), Tile::falling('B'));
    }

    #[test]
    fn test_spawn_blocked_leaves_board_alone() {
        let mut board = Board::from_rows(&["..A...", "......"]);
        let before = board.clone();
        let mut draws = 0;
        let piece = Piece::spawn(&mut board, || {
            draws += 1;
            'X'
        });

        assert!(piece.is_none());
        assert_eq!(draws, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_keeps_letters_in_order() {
        let mut board = Board::default();
        let mut piece = spawn_on(&mut board);

        assert!(piece.try_move(&mut board, 1, 0));
        assert_eq!(piece.indices(), [3, 4]);
        assert_eq!(board.get(2), Tile::EMPTY);
        assert_eq!(board.get(3), Tile::falling('A'));
        assert_eq!(board.get(4), Tile::falling('B'));
    }

    #[test]
    fn test_collision_classifies_row_delta_as_vertical() {
        let board = Board::new(6, 10);
        // from the right edge, +width is a legal downward move
        assert!(check_collision(&board, 11, 5));
        // from the left edge of row 1, -width is a legal upward move
        assert!(check_collision(&board, 0, 6));
        // from the bottom row, +width is blocked
        assert!(!check_collision(&board, 60, 54));
        // from the top row, -width is blocked
        assert!(!check_collision(&board, -3, 3));
    }

    #[test]
    fn test_rotation_offsets_cancel_over_a_cycle() {
        for spin in [Spin::Clockwise, Spin::CounterClockwise] {
            let mut rotation = Rotation::North;
            let mut sum = [(0i8, 0i8); 2];
            for _ in 0..4 {
                let offsets = rotation_offsets(rotation, spin);
                for i in 0..2 {
                    sum[i].0 += offsets[i].0;
                    sum[i].1 += offsets[i].1;
                }
                rotation = rotation.turn(spin);
            }
            assert_eq!(sum, [(0, 0), (0, 0)]);
            assert_eq!(rotation, Rotation::North);
        }
    }
}
