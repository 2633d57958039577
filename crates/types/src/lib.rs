//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (configuration accepts 2 to `MAX_BOARD_SIDE`
//! cells per side):
//!
//! - **Width**: 6 columns (indexed 0-5)
//! - **Height**: 10 rows (indexed 0-9)
//! - **Spawn cells**: the two horizontally centered cells of the top row
//!
//! # Timing and Word Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Gravity interval (one row per tick) |
//! | `FRAME_MS` | 16 | Front-end loop interval (~60 FPS) |
//! | `MIN_WORD_LEN` | 3 | Shortest substring considered a word |
//! | `MAX_WORD_LEN` | 10 | Longest substring considered a word |
//!
//! # Examples
//!
//! ```
//! use wordtris_types::{GameCommand, Rotation, Spin, Tile, TileState, BOARD_WIDTH};
//!
//! let tile = Tile::falling('Q');
//! assert_eq!(tile.state(), TileState::Falling);
//! assert_eq!(tile.letter(), Some('Q'));
//! assert_eq!(Tile::EMPTY.letter(), None);
//!
//! assert_eq!(Rotation::North.turn(Spin::Clockwise), Rotation::East);
//! assert_eq!(GameCommand::from_str("rotateCcw"), Some(GameCommand::RotateCcw));
//! assert_eq!(BOARD_WIDTH, 6);
//! ```

/// Default board width in cells (6 columns)
pub const BOARD_WIDTH: usize = 6;

/// Default board height in cells (10 rows)
pub const BOARD_HEIGHT: usize = 10;

/// Largest width or height accepted from configuration
pub const MAX_BOARD_SIDE: usize = 512;

/// Gravity interval in milliseconds (one row per second)
pub const TICK_MS: u32 = 1000;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Shortest run of letters the scanner looks up
pub const MIN_WORD_LEN: usize = 3;

/// Longest run of letters the scanner looks up
pub const MAX_WORD_LEN: usize = 10;

/// Lifecycle state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    /// Unoccupied; always carries a blank letter
    #[default]
    Empty,
    /// Locked in place
    Static,
    /// Part of the player's piece, or dropping after a clear
    Falling,
}

/// A cell on the game board: a state plus an optional letter.
///
/// Construction enforces that `Empty` tiles are blank and every other tile
/// carries an uppercase `A..Z` letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    state: TileState,
    letter: Option<char>,
}

impl Tile {
    /// The blank, unoccupied tile
    pub const EMPTY: Tile = Tile {
        state: TileState::Empty,
        letter: None,
    };

    /// A player/falling tile.
    ///
    /// # Panics
    ///
    /// Panics if `letter` is not in `A..Z`.
    pub fn falling(letter: char) -> Self {
        Self::occupied(TileState::Falling, letter)
    }

    /// A locked tile.
    ///
    /// # Panics
    ///
    /// Panics if `letter` is not in `A..Z`.
    pub fn locked(letter: char) -> Self {
        Self::occupied(TileState::Static, letter)
    }

    fn occupied(state: TileState, letter: char) -> Self {
        assert!(
            letter.is_ascii_uppercase(),
            "tile letter must be in A..Z, got {:?}",
            letter
        );
        Self {
            state,
            letter: Some(letter),
        }
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_empty(&self) -> bool {
        self.state == TileState::Empty
    }

    pub fn is_static(&self) -> bool {
        self.state == TileState::Static
    }

    pub fn is_falling(&self) -> bool {
        self.state == TileState::Falling
    }

    /// Same letter, new state. Empty tiles stay empty.
    pub fn with_state(self, state: TileState) -> Self {
        match (self.letter, state) {
            (None, _) | (_, TileState::Empty) => Tile::EMPTY,
            (Some(letter), state) => Self::occupied(state, letter),
        }
    }
}

/// Rotation states of the two-tile piece
///
/// - **North**: Spawn orientation, tile 0 left of tile 1
/// - **East**: Rotated 90° clockwise, tile 1 above tile 0
/// - **South**: Rotated 180°, tile 1 left of tile 0
/// - **West**: Rotated 90° counter-clockwise, tile 0 above tile 1
///
/// The clockwise cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Apply one quarter turn in the given direction
    pub fn turn(&self, spin: Spin) -> Self {
        match spin {
            Spin::Clockwise => self.rotate_cw(),
            Spin::CounterClockwise => self.rotate_ccw(),
        }
    }

    /// Number of clockwise quarter turns from North (0..=3)
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Rotation direction input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Commands the game accepts from the input layer
///
/// This is the complete command set; raw key events are translated into
/// these by `wordtris-input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down and restart the gravity timer
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl GameCommand {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtris_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("softdrop"), Some(GameCommand::SoftDrop));
    /// assert_eq!(GameCommand::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotatecw" => Some(GameCommand::RotateCw),
            "rotateccw" => Some(GameCommand::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::RotateCcw => "rotateCcw",
        }
    }
}

/// Discrete feedback events emitted by the core.
///
/// A sound layer may map these to cues; the core has no knowledge of audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveSucceeded,
    MoveFailed,
    WordFound,
}

/// Overall game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Reserved; no command transitions into it.
    Paused,
    /// Terminal: input and ticks are ignored.
    GameOver,
}

/// Which kind of board line a word was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
}
