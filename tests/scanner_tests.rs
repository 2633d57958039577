//! Scanner tests - word detection and clearing on full boards

use wordtris::core::{Board, WordDictionary, WordScanner};
use wordtris::types::LineKind;

fn dict(words: &[&str]) -> WordDictionary {
    words.iter().copied().collect()
}

#[test]
fn test_cat_is_cleared_from_a_full_row() {
    // 6x10 board, CAT in the bottom row surrounded by letters that spell nothing
    let mut rows = vec!["......"; 9];
    rows.push("XCATQZ");
    let mut board = Board::from_rows(&rows);

    let found = WordScanner::default().clear_words(&mut board, &dict(&["cat"]));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].word, "cat");
    assert_eq!(found[0].kind, LineKind::Row);
    assert_eq!(found[0].indices, vec![55, 56, 57]);
    assert_eq!(board.to_rows()[9], "X...QZ");
    assert_eq!(board.tiles().iter().filter(|t| !t.is_empty()).count(), 3);
}

#[test]
fn test_all_vowel_run_is_never_cleared() {
    let mut rows = vec!["......"; 9];
    rows.push("AEIOU.");
    let mut board = Board::from_rows(&rows);
    let before = board.clone();

    let found =
        WordScanner::default().clear_words(&mut board, &dict(&["aei", "eio", "aeiou", "iou"]));

    assert!(found.is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_column_word_read_top_to_bottom() {
    let mut board = Board::from_rows(&["....", ".D..", ".O..", ".G..", ".S.."]);
    let found = WordScanner::default().clear_words(&mut board, &dict(&["dog", "dogs"]));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].word, "dogs");
    assert_eq!(found[0].kind, LineKind::Column);
    assert!(board.is_empty());
}

#[test]
fn test_crossing_words_are_both_cleared() {
    // BAT across, CAN down, sharing the A
    let mut board = Board::from_rows(&["......", "..C...", ".BAT..", "..N..."]);
    let found = WordScanner::default().clear_words(&mut board, &dict(&["bat", "can"]));

    let mut words: Vec<_> = found.iter().map(|m| m.word.as_str()).collect();
    words.sort_unstable();
    assert_eq!(words, vec!["bat", "can"]);
    assert!(board.is_empty());
}

#[test]
fn test_every_row_is_scanned() {
    let mut board = Board::from_rows(&["CAT...", "......", "...DOG"]);
    let found = WordScanner::default().clear_words(&mut board, &dict(&["cat", "dog"]));
    assert_eq!(found.len(), 2);
    assert!(board.is_empty());
}

#[test]
fn test_find_words_does_not_modify() {
    let board = Board::from_rows(&["......", "TEA..."]);
    let found = WordScanner::default().find_words(&board, &dict(&["tea"]));
    assert_eq!(found.len(), 1);
    assert_eq!(board.to_rows()[1], "TEA...");
}

#[test]
fn test_tiles_above_a_cleared_word_fall() {
    let mut board = Board::from_rows(&["......", ".R.S..", ".CAT..", ".E.E.."]);
    let found = WordScanner::default().clear_words(&mut board, &dict(&["cat"]));
    assert_eq!(found.len(), 1);

    board.settle();
    assert_eq!(
        board.to_rows(),
        vec!["......", "......", ".R.S..", ".E.E.."]
    );
}

#[test]
fn test_gravity_formed_word_waits_for_next_scan() {
    let mut board = Board::from_rows(&["C..", "BOX", "A..", "T.."]);
    let scanner = WordScanner::default();
    let words = dict(&["box", "cat"]);

    // clearing BOX drops C onto A T, but this scan is already done
    let found = scanner.clear_words(&mut board, &words);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].word, "box");

    board.settle();
    assert_eq!(board.to_rows(), vec!["...", "C..", "A..", "T.."]);

    let next = scanner.find_words(&board, &words);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].word, "cat");
    assert_eq!(next[0].kind, LineKind::Column);
}
