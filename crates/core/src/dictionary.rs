//! Dictionary module - prefix tree of valid words
//!
//! Each node has one child slot per lowercase letter and an end-of-word flag.
//! Lookups cost O(L) in the word length regardless of dictionary size.
//! Nodes are uniquely owned by their parent, so dropping the root frees the
//! whole tree.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

const ALPHABET: usize = 26;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET],
    end_of_word: bool,
}

/// Child slot for a lowercase ASCII letter
#[inline(always)]
fn slot(ch: char) -> Option<usize> {
    if ch.is_ascii_lowercase() {
        Some((ch as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Set of lowercase `a..z` words backed by a trie
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    root: TrieNode,
    words: usize,
}

impl WordDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a word list with one word per line.
    ///
    /// A missing or unreadable file is an error; the caller treats it as fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_err = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let dict = Self::from_reader(BufReader::new(file)).map_err(io_err)?;
        info!("loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Read words from any buffered reader.
    ///
    /// Lines are trimmed and lowercased; blank lines are ignored and lines with
    /// characters outside `a..z` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut dict = Self::new();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            let word = line.trim().to_ascii_lowercase();
            if word.is_empty() {
                continue;
            }
            if !dict.insert(&word) {
                skipped += 1;
            }
        }

        if skipped > 0 {
            debug!("skipped {} word-list lines with non a-z characters", skipped);
        }
        Ok(dict)
    }

    /// Insert a word. Idempotent.
    ///
    /// Returns false (and inserts nothing) if the word is empty or contains a
    /// character outside `a..z`.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return false;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            let Some(i) = slot(ch) else {
                return false;
            };
            node = &mut **node.children[i].get_or_insert_with(Box::default);
        }

        if !node.end_of_word {
            node.end_of_word = true;
            self.words += 1;
        }
        true
    }

    /// True iff `word` was inserted. A stored prefix that is not itself a
    /// word returns false.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.end_of_word)
    }

    /// True if some inserted word starts with `prefix`
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn find(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in s.chars() {
            node = node.children[slot(ch)?].as_deref()?;
        }
        Some(node)
    }
}

impl<'a> FromIterator<&'a str> for WordDictionary {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut dict = Self::new();
        for word in iter {
            dict.insert(word);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut dict = WordDictionary::new();
        assert!(dict.insert("cat"));
        assert!(dict.insert("cattle"));

        assert!(dict.contains("cat"));
        assert!(dict.contains("cattle"));
        assert!(!dict.contains("catt"));
        assert!(!dict.contains("ca"));
        assert!(!dict.contains("dog"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut dict = WordDictionary::new();
        dict.insert("tea");
        dict.insert("tea");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_rejects_non_lowercase_words() {
        let mut dict = WordDictionary::new();
        assert!(!dict.insert("Cat"));
        assert!(!dict.insert("it's"));
        assert!(!dict.insert(""));
        assert!(dict.is_empty());
        assert!(!dict.contains("Cat"));
    }

    #[test]
    fn test_prefix_lookup() {
        let dict: WordDictionary = ["bread"].into_iter().collect();
        assert!(dict.contains_prefix("bre"));
        assert!(dict.contains_prefix(""));
        assert!(!dict.contains_prefix("bra"));
    }

    #[test]
    fn test_from_reader_trims_and_skips() {
        let text = "cat\r\n\n  Dog \nnaïve\nowl\n";
        let dict = WordDictionary::from_reader(text.as_bytes()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("owl"));
    }
}
