//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management for the
//! falling-letter word game. It has no dependencies on the terminal or input
//! layers; the only I/O is loading the word list and letter table at startup.
//!
//! - **Deterministic**: the same seed draws the same letters
//! - **Testable**: boards can be built from text rows with [`Board::from_rows`]
//!
//! # Module Structure
//!
//! - [`board`]: flat grid of letter tiles, spawn cells and gravity
//! - [`piece`]: the two-tile piece, collision rules and the rotation cycle
//! - [`dictionary`]: trie of valid words
//! - [`scanner`]: finds and clears dictionary words in rows and columns
//! - [`pool`]: weighted letter distribution and the seeded RNG
//! - [`game_state`]: the [`Game`] state machine tying it all together
//! - [`config`]: environment-driven settings and the JSON letter table
//!
//! # Game Rules
//!
//! - A piece is two letter tiles spawned side by side in the top row
//! - Every tick the piece falls one row; when it cannot, it locks in place
//! - After a lock, unsupported tiles drop, then every word of 3 to 10 letters
//!   read left to right or top to bottom is cleared and the board settles again
//! - A word must contain a vowel and a consonant
//! - The game ends when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use wordtris_core::{Game, WeightedLetterPool, WordDictionary};
//! use wordtris_types::{GameCommand, GameStatus};
//!
//! let dictionary: WordDictionary = ["cat", "dog"].into_iter().collect();
//! let mut game = Game::new(6, 10, dictionary, WeightedLetterPool::standard(), 12345);
//! game.start();
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::RotateCw);
//! game.tick(1000);
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`](game_state::Game::tick) every frame with the elapsed
//! time; gravity fires once per [`TICK_MS`](types::TICK_MS) by default.

pub mod board;
pub mod config;
pub mod dictionary;
pub mod game_state;
pub mod piece;
pub mod pool;
pub mod scanner;

pub use wordtris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use dictionary::{DictionaryError, WordDictionary};
pub use game_state::Game;
pub use piece::{check_collision, rotation_offsets, Piece};
pub use pool::{LetterWeight, SimpleRng, WeightedLetterPool, DEFAULT_LETTER_WEIGHTS};
pub use scanner::{WordMatch, WordScanner};
