//! Game state module - the complete word-game state machine
//!
//! Ties together the board, the active piece, the dictionary, the letter pool
//! and the scanner. One [`Game`] owns all of them, so independent games can run
//! side by side.
//!
//! Every piece lock runs the same fixed sequence before control returns:
//! lock → settle → scan and clear → settle → spawn.

use log::{debug, info};

use crate::board::Board;
use crate::dictionary::WordDictionary;
use crate::piece::Piece;
use crate::pool::{SimpleRng, WeightedLetterPool};
use crate::scanner::WordScanner;
use crate::types::{GameCommand, GameEvent, GameStatus, Spin, TICK_MS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    piece: Option<Piece>,
    dictionary: WordDictionary,
    pool: WeightedLetterPool,
    rng: SimpleRng,
    scanner: WordScanner,
    status: GameStatus,
    tick_ms: u32,
    drop_timer_ms: u32,
    events: Vec<GameEvent>,
    /// Words removed by the most recent scan that found any
    last_words: Vec<String>,
    words_cleared: u32,
    started: bool,
}

impl Game {
    /// Create a game on an empty `width x height` board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below 2, or if `pool` has zero total
    /// weight (nothing could ever be drawn for a new piece).
    pub fn new(
        width: usize,
        height: usize,
        dictionary: WordDictionary,
        pool: WeightedLetterPool,
        seed: u32,
    ) -> Self {
        Self::from_board(Board::new(width, height), dictionary, pool, seed)
    }

    /// Create a game on a prepared board.
    pub fn from_board(
        board: Board,
        dictionary: WordDictionary,
        pool: WeightedLetterPool,
        seed: u32,
    ) -> Self {
        assert!(!pool.is_empty(), "letter pool has zero total weight");

        Self {
            board,
            piece: None,
            dictionary,
            pool,
            rng: SimpleRng::new(seed),
            scanner: WordScanner::default(),
            status: GameStatus::Playing,
            tick_ms: TICK_MS,
            drop_timer_ms: 0,
            events: Vec::new(),
            last_words: Vec::new(),
            words_cleared: 0,
            started: false,
        }
    }

    /// Override the gravity interval (milliseconds per row, at least 1)
    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms.max(1);
        self
    }

    /// Override the scanner used after each lock
    pub fn with_scanner(mut self, scanner: WordScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    pub fn dictionary(&self) -> &WordDictionary {
        &self.dictionary
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Milliseconds accumulated toward the next gravity step
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn last_words(&self) -> &[String] {
        &self.last_words
    }

    /// Total words cleared this game
    pub fn words_cleared(&self) -> u32 {
        self.words_cleared
    }

    /// Drain the feedback events raised since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn a new piece at the top of the board.
    ///
    /// If either spawn cell is occupied the game is over; the board is left
    /// exactly as it was. Does nothing while a piece is still falling.
    fn spawn_piece(&mut self) -> bool {
        if self.piece.is_some() {
            return false;
        }
        let pool = &self.pool;
        let rng = &mut self.rng;
        match Piece::spawn(&mut self.board, || pool.draw(rng)) {
            Some(piece) => {
                self.piece = Some(piece);
                self.drop_timer_ms = 0;
                true
            }
            None => {
                self.piece = None;
                self.status = GameStatus::GameOver;
                info!("game over after {} words", self.words_cleared);
                false
            }
        }
    }

    /// Advance the gravity timer.
    ///
    /// Once a full interval has accumulated the piece tries to fall one row;
    /// if it cannot, it locks and the lock sequence runs. Returns true if the
    /// board changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != GameStatus::Playing || !self.started {
            return false;
        }
        let Some(mut piece) = self.piece else {
            return false;
        };

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.tick_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        if piece.try_move(&mut self.board, 0, 1) {
            self.piece = Some(piece);
        } else {
            self.events.push(GameEvent::MoveFailed);
            self.lock_piece();
        }
        true
    }

    /// Lock the active piece and run the rest of the lock sequence.
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.piece.take() else {
            return;
        };

        debug!("locking piece at {:?}", piece.indices());
        piece.lock(&mut self.board);
        self.board.settle();

        let found = self.scanner.clear_words(&mut self.board, &self.dictionary);
        if !found.is_empty() {
            self.words_cleared += found.len() as u32;
            self.last_words = found.into_iter().map(|m| m.word).collect();
            debug!("cleared {:?}", self.last_words);
            self.events.push(GameEvent::WordFound);
            self.board.settle();
        }

        self.spawn_piece();
    }

    /// Apply a player command.
    ///
    /// Returns true if the piece moved or turned. Commands are ignored unless
    /// the game is started and playing.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        if self.status != GameStatus::Playing || !self.started {
            return false;
        }
        let Some(mut piece) = self.piece else {
            return false;
        };

        let moved = match command {
            GameCommand::MoveLeft | GameCommand::MoveRight => {
                let dx = if command == GameCommand::MoveLeft { -1 } else { 1 };
                let moved = piece.try_move(&mut self.board, dx, 0);
                self.events.push(if moved {
                    GameEvent::MoveSucceeded
                } else {
                    GameEvent::MoveFailed
                });
                moved
            }
            GameCommand::SoftDrop => {
                let moved = piece.try_move(&mut self.board, 0, 1);
                if moved {
                    // the piece just fell; don't let the next tick drop it again
                    self.drop_timer_ms = 0;
                    self.events.push(GameEvent::MoveSucceeded);
                }
                moved
            }
            GameCommand::RotateCw => piece.try_rotate(&mut self.board, Spin::Clockwise),
            GameCommand::RotateCcw => piece.try_rotate(&mut self.board, Spin::CounterClockwise),
        };

        self.piece = Some(piece);
        moved
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(
            crate::types::BOARD_WIDTH,
            crate::types::BOARD_HEIGHT,
            WordDictionary::new(),
            WeightedLetterPool::standard(),
            1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rotation, Tile};

    fn only(letter: char) -> WeightedLetterPool {
        WeightedLetterPool::from_weights([(letter, 1)])
    }

    fn game_on(rows: &[&str], words: &[&str], letter: char) -> Game {
        let dict: WordDictionary = words.iter().copied().collect();
        Game::from_board(Board::from_rows(rows), dict, only(letter), 7)
    }

    #[test]
    fn test_new_game() {
        let game = Game::default();
        assert!(!game.started());
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.piece().is_none());
        assert!(game.board().is_empty());
        assert_eq!(game.tick_ms(), TICK_MS);
    }

    #[test]
    fn test_start_spawns_piece_once() {
        let mut game = Game::default();
        game.start();
        let piece = game.piece().unwrap();
        assert_eq!(piece.indices(), [2, 3]);
        assert_eq!(piece.rotation(), Rotation::North);

        game.start();
        assert_eq!(game.piece(), Some(piece));
    }

    #[test]
    fn test_commands_and_ticks_ignored_before_start() {
        let mut game = Game::default();
        assert!(!game.apply(GameCommand::MoveLeft));
        assert!(!game.tick(5000));
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_blocked_spawn_is_game_over_without_mutation() {
        let mut game = game_on(&["..XY..", "......"], &[], 'A');
        let before = game.board().clone();

        game.start();

        assert_eq!(game.status(), GameStatus::GameOver);
        assert!(game.piece().is_none());
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_tick_waits_for_full_interval() {
        let mut game = Game::default();
        game.start();

        assert!(!game.tick(999));
        assert_eq!(game.piece().unwrap().indices(), [2, 3]);

        assert!(game.tick(1));
        assert_eq!(game.piece().unwrap().indices(), [8, 9]);
        assert_eq!(game.drop_timer_ms(), 0);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_soft_drop_restarts_gravity_timer() {
        let mut game = Game::default();
        game.start();

        game.tick(900);
        assert!(game.apply(GameCommand::SoftDrop));
        assert_eq!(game.piece().unwrap().indices(), [8, 9]);
        assert_eq!(game.drop_timer_ms(), 0);

        // 900 + 500 would have crossed the interval without the reset
        assert!(!game.tick(500));
        assert_eq!(game.piece().unwrap().indices(), [8, 9]);
        assert_eq!(game.take_events(), vec![GameEvent::MoveSucceeded]);
    }

    #[test]
    fn test_failed_soft_drop_changes_nothing() {
        let mut game = game_on(&["......", "......"], &[], 'B');
        game.start();
        game.tick(1000);
        game.take_events();

        game.tick(400);
        let before = game.board().clone();
        assert!(!game.apply(GameCommand::SoftDrop));
        assert_eq!(game.board(), &before);
        assert_eq!(game.drop_timer_ms(), 400);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_horizontal_moves_raise_events() {
        let mut game = Game::default();
        game.start();

        assert!(game.apply(GameCommand::MoveLeft));
        assert!(game.apply(GameCommand::MoveLeft));
        assert!(!game.apply(GameCommand::MoveLeft));
        assert_eq!(game.piece().unwrap().indices(), [0, 1]);
        assert_eq!(
            game.take_events(),
            vec![
                GameEvent::MoveSucceeded,
                GameEvent::MoveSucceeded,
                GameEvent::MoveFailed
            ]
        );
    }

    #[test]
    fn test_rotation_has_no_events() {
        let mut game = Game::default();
        game.start();
        game.tick(1000);

        assert!(game.apply(GameCommand::RotateCw));
        assert_eq!(game.piece().unwrap().rotation(), Rotation::East);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_lock_clears_word_and_respawns() {
        let mut game = game_on(&["......", "CA..QQ"], &["cat"], 'T');
        game.start();

        game.tick(1000);
        assert_eq!(game.board().to_rows(), vec!["......", "CAttQQ"]);

        game.tick(1000);
        assert_eq!(game.board().to_rows(), vec!["..tt..", "...TQQ"]);
        assert_eq!(game.last_words(), ["cat".to_string()]);
        assert_eq!(game.words_cleared(), 1);
        assert_eq!(
            game.take_events(),
            vec![GameEvent::MoveFailed, GameEvent::WordFound]
        );
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_lock_settles_overhanging_tile() {
        let mut game = game_on(&["......", "......", "...X.."], &[], 'T');
        game.start();
        game.tick(1000);
        game.tick(1000);

        assert_eq!(game.board().to_rows(), vec!["..tt..", "...T..", "..TX.."]);
        assert_eq!(game.board().get(14), Tile::locked('T'));
    }

    #[test]
    fn test_spawn_keeps_active_piece() {
        let mut game = Game::default();
        game.start();
        let piece = game.piece();

        assert!(!game.spawn_piece());
        assert_eq!(game.piece(), piece);
        let falling = game.board().tiles().iter().filter(|t| t.is_falling()).count();
        assert_eq!(falling, 2);
    }

    #[test]
    fn test_custom_scanner_limits_word_length() {
        let rows = ["......", "......", "CAT..Q"];

        let mut game = game_on(&rows, &["cats"], 'S');
        game.start();
        game.tick(1000);
        game.tick(1000);
        assert_eq!(game.board().to_rows(), vec!["..ss..", "......", "..S..Q"]);
        assert_eq!(game.last_words(), ["cats".to_string()]);

        let scanner = WordScanner::with_max_len(3);
        assert_eq!(scanner.max_len(), 3);
        let mut game = game_on(&rows, &["cats"], 'S').with_scanner(scanner);
        game.start();
        game.tick(1000);
        game.tick(1000);
        assert_eq!(game.board().to_rows(), vec!["..ss..", "..S...", "CATS.Q"]);
        assert_eq!(game.words_cleared(), 0);
        assert_eq!(game.take_events(), vec![GameEvent::MoveFailed]);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut game = game_on(&["......", "..AB.."], &[], 'Z');
        game.start();
        // the piece cannot fall; locking it leaves the spawn cells occupied
        game.tick(1000);
        assert!(game.is_game_over());
        game.take_events();

        let before = game.board().clone();
        assert!(!game.apply(GameCommand::MoveRight));
        assert!(!game.tick(10_000));
        assert_eq!(game.board(), &before);
        assert!(game.take_events().is_empty());
    }
}
