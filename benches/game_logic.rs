use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordtris::core::{Board, Game, Piece, WeightedLetterPool, WordDictionary, WordScanner};
use wordtris::types::{GameCommand, Spin};

fn bundled_dictionary() -> WordDictionary {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("dictionary.txt");
    WordDictionary::load(path).unwrap_or_default()
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(6, 10, bundled_dictionary(), WeightedLetterPool::standard(), 12345);
    game.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let dict = bundled_dictionary();

    c.bench_function("play_left_stacking_game", |b| {
        b.iter(|| {
            let mut game = Game::new(6, 10, dict.clone(), WeightedLetterPool::standard(), 7);
            game.start();
            for _ in 0..10_000 {
                if game.is_game_over() {
                    break;
                }
                game.apply(GameCommand::MoveLeft);
                game.tick(1000);
            }
            black_box(game.words_cleared())
        })
    });
}

fn bench_word_scan(c: &mut Criterion) {
    let dict = bundled_dictionary();
    let scanner = WordScanner::default();
    let board = Board::from_rows(&[
        "......", "......", "......", "......", "BREADX", "OQUIET", "ATLASK", "THORNS",
        "SWORDY", "PLANET",
    ]);

    c.bench_function("scan_full_board", |b| {
        b.iter(|| black_box(scanner.find_words(black_box(&board), &dict)))
    });
}

fn bench_dictionary_lookup(c: &mut Criterion) {
    let dict = bundled_dictionary();
    let words = ["cat", "planet", "zzzz", "thorn", "qwerty", "breadx"];

    c.bench_function("dictionary_contains", |b| {
        b.iter(|| {
            for w in words {
                black_box(dict.contains(black_box(w)));
            }
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut board = Board::default();
    let mut letters = "AB".chars().cycle();
    let Some(mut piece) = Piece::spawn(&mut board, || letters.next().unwrap_or('A')) else {
        return;
    };
    piece.try_move(&mut board, 0, 1);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            piece.try_move(&mut board, 1, 0);
            piece.try_move(&mut board, -1, 0);
        })
    });

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            piece.try_rotate(&mut board, Spin::Clockwise);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_full_game,
    bench_word_scan,
    bench_dictionary_lookup,
    bench_try_move
);
criterion_main!(benches);
