//! Game configuration
//!
//! Settings come from environment variables, each falling back to a default
//! when unset or unparsable:
//!
//! - `WORDTRIS_DICTIONARY`: word list path (default: "dictionary.txt")
//! - `WORDTRIS_LETTERS`: optional JSON letter table replacing the built-in weights,
//!   e.g. `[{"letter":"A","weight":6},{"letter":"B","weight":2}]`
//! - `WORDTRIS_WIDTH` / `WORDTRIS_HEIGHT`: board size (default: 6x10, each side 2 to 512)
//! - `WORDTRIS_TICK_MS`: gravity interval (default: 1000)
//! - `WORDTRIS_SEED`: RNG seed (default: chosen by the caller)
//! - `WORDTRIS_LOG_PATH`: log file for the binary (default: no logging)

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pool::{LetterWeight, WeightedLetterPool};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE, TICK_MS};

/// Errors raised while validating configuration or loading a letter table
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read letter table {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed letter table")]
    Json(#[from] serde_json::Error),
    #[error("letter {0:?} is not in A..Z")]
    InvalidLetter(char),
    #[error("letter table has zero total weight")]
    EmptyPool,
    #[error("letter table weights add up to more than {}", u32::MAX)]
    WeightOverflow,
    #[error("board sides must be between 2 and {max}, got {width}x{height}", max = MAX_BOARD_SIDE)]
    InvalidDimensions { width: usize, height: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub tick_ms: u32,
    pub seed: Option<u32>,
    pub dictionary_path: PathBuf,
    pub letters_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_ms: TICK_MS,
            seed: None,
            dictionary_path: PathBuf::from("dictionary.txt"),
            letters_path: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };
        let number = |key: &str| lookup(key).and_then(|s| s.trim().parse().ok());

        Self {
            width: parsed(number("WORDTRIS_WIDTH"), defaults.width),
            height: parsed(number("WORDTRIS_HEIGHT"), defaults.height),
            tick_ms: parsed(number("WORDTRIS_TICK_MS"), defaults.tick_ms),
            seed: lookup("WORDTRIS_SEED").and_then(|s| s.trim().parse().ok()),
            dictionary_path: path("WORDTRIS_DICTIONARY").unwrap_or(defaults.dictionary_path),
            letters_path: path("WORDTRIS_LETTERS"),
            log_path: path("WORDTRIS_LOG_PATH"),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let side = 2..=MAX_BOARD_SIDE;
        if !side.contains(&self.width) || !side.contains(&self.height) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// The configured letter table, or the built-in one
    pub fn letter_pool(&self) -> Result<WeightedLetterPool, ConfigError> {
        match &self.letters_path {
            Some(path) => load_letter_table(path),
            None => Ok(WeightedLetterPool::standard()),
        }
    }
}

fn parsed<T: TryFrom<u64>>(value: Option<u64>, default: T) -> T {
    value
        .and_then(|v| T::try_from(v).ok())
        .unwrap_or(default)
}

/// Read a JSON letter table from disk.
pub fn load_letter_table(path: impl AsRef<Path>) -> Result<WeightedLetterPool, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    letter_pool_from_json(&text)
}

/// Parse a JSON letter table. Lowercase letters are accepted and uppercased.
pub fn letter_pool_from_json(json: &str) -> Result<WeightedLetterPool, ConfigError> {
    let entries: Vec<LetterWeight> = serde_json::from_str(json)?;

    let mut pool = WeightedLetterPool::new();
    for entry in entries {
        let letter = entry.letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(ConfigError::InvalidLetter(entry.letter));
        }
        if pool.total_weight().checked_add(entry.weight).is_none() {
            return Err(ConfigError::WeightOverflow);
        }
        pool.add(letter, entry.weight);
    }

    if pool.is_empty() {
        return Err(ConfigError::EmptyPool);
    }
    Ok(pool)
}
