//! Word scanner - finds and clears dictionary words on the board
//!
//! Every row (left to right) and every column (top to bottom) is read as a
//! line of `(letter, board index)` cells. Windows of the line are tried from
//! the longest allowed length down to [`MIN_WORD_LEN`], leftmost first. A
//! window is a candidate only if it has no blank cell and contains at least
//! one vowel and one consonant.
//!
//! Once a window matches, the rest of that line is still searched, but later
//! matches may not reuse its cells. All matches on the board are collected
//! before any cell is cleared, so a row word and a column word that cross are
//! both cleared.

use arrayvec::ArrayString;
use log::debug;

use crate::board::Board;
use crate::dictionary::WordDictionary;
use crate::types::{LineKind, MAX_WORD_LEN, MIN_WORD_LEN};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// One cell of a line: lowercased letter (None when blank) and its board index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCell {
    pub letter: Option<char>,
    pub index: usize,
}

/// A full row or column of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    /// Row number (y) or column number (x)
    pub number: usize,
    pub cells: Vec<LineCell>,
}

/// A dictionary word found on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub kind: LineKind,
    /// Board indices of the letters, in reading order
    pub indices: Vec<usize>,
}

/// True if `word` has at least one vowel and at least one consonant
pub fn has_vowel_and_consonant(word: &str) -> bool {
    let vowels = word.chars().filter(|c| VOWELS.contains(c)).count();
    vowels > 0 && vowels < word.chars().count()
}

/// Read the whole board as lines: every row, then every column.
pub fn board_lines(board: &Board) -> Vec<Line> {
    let rows = (0..board.height())
        .map(|y| read_line(board, LineKind::Row, y, board.row_indices(y)));
    let columns = (0..board.width())
        .map(|x| read_line(board, LineKind::Column, x, board.column_indices(x)));
    rows.chain(columns).collect()
}

fn read_line(
    board: &Board,
    kind: LineKind,
    number: usize,
    indices: impl Iterator<Item = usize>,
) -> Line {
    let cells = indices
        .map(|index| LineCell {
            letter: board.get(index).letter().map(|c| c.to_ascii_lowercase()),
            index,
        })
        .collect();
    Line {
        kind,
        number,
        cells,
    }
}

/// Scanner configuration: the range of word lengths looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScanner {
    min_len: usize,
    max_len: usize,
}

impl Default for WordScanner {
    fn default() -> Self {
        Self {
            min_len: MIN_WORD_LEN,
            max_len: MAX_WORD_LEN,
        }
    }
}

impl WordScanner {
    /// Scanner that looks up words of `MIN_WORD_LEN..=max_len` letters.
    ///
    /// # Panics
    ///
    /// Panics if `max_len` is outside `MIN_WORD_LEN..=MAX_WORD_LEN`.
    pub fn with_max_len(max_len: usize) -> Self {
        assert!(
            (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&max_len),
            "max word length {} outside {}..={}",
            max_len,
            MIN_WORD_LEN,
            MAX_WORD_LEN
        );
        Self {
            min_len: MIN_WORD_LEN,
            max_len,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Find the non-overlapping words of a single line, longest first.
    pub fn find_in_line(&self, line: &Line, dict: &WordDictionary) -> Vec<WordMatch> {
        let n = line.cells.len();
        let mut used = vec![false; n];
        let mut found = Vec::new();

        for len in (self.min_len..=n.min(self.max_len)).rev() {
            for start in 0..=n - len {
                let end = start + len;
                if used[start..end].iter().any(|&u| u) {
                    continue;
                }

                let window = &line.cells[start..end];
                let Some(word) = candidate(window) else {
                    continue;
                };
                if !dict.contains(&word) {
                    continue;
                }

                used[start..end].fill(true);
                found.push(WordMatch {
                    word: word.to_string(),
                    kind: line.kind,
                    indices: window.iter().map(|c| c.index).collect(),
                });
            }
        }

        found
    }

    /// Find every word on the board without modifying it.
    pub fn find_words(&self, board: &Board, dict: &WordDictionary) -> Vec<WordMatch> {
        board_lines(board)
            .iter()
            .flat_map(|line| self.find_in_line(line, dict))
            .collect()
    }

    /// Find every word and empty the cells they cover.
    ///
    /// Returns the matches; an empty result means nothing was found and the
    /// board is untouched.
    pub fn clear_words(&self, board: &mut Board, dict: &WordDictionary) -> Vec<WordMatch> {
        let matches = self.find_words(board, dict);
        for m in &matches {
            debug!("clearing {:?} word {:?} at {:?}", m.kind, m.word, m.indices);
        }
        board.clear(matches.iter().flat_map(|m| m.indices.iter().copied()));
        matches
    }
}

/// The window's letters if it is a viable word candidate
fn candidate(window: &[LineCell]) -> Option<ArrayString<MAX_WORD_LEN>> {
    let mut word = ArrayString::new();
    for cell in window {
        word.try_push(cell.letter?).ok()?;
    }
    has_vowel_and_consonant(&word).then_some(word)
}
