use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_fifteen::core::{Board, PuzzleGame, SimpleRng};
use tui_fifteen::term::{BoardView, Surface, Viewport};
use tui_fifteen::types::SlideDirection;

fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("shuffle_4x4", |b| {
        let mut rng = SimpleRng::new(12345);
        b.iter(|| Board::shuffled(black_box(4), black_box(4), &mut rng));
    });
}

fn bench_move_tile(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let board = Board::shuffled(4, 4, &mut rng).unwrap();
    let tile = board.legal_moves()[0];

    c.bench_function("move_tile", |b| {
        b.iter(|| {
            let mut scratch = board.clone();
            scratch.move_tile(black_box(tile))
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let board = Board::shuffled(4, 4, &mut rng).unwrap();

    c.bench_function("legal_moves", |b| b.iter(|| black_box(&board).legal_moves()));
}

fn bench_solvability(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let board = Board::shuffled(8, 8, &mut rng).unwrap();

    c.bench_function("is_solvable_8x8", |b| {
        b.iter(|| black_box(&board).is_solvable())
    });
}

fn bench_render(c: &mut Criterion) {
    let game = PuzzleGame::new(4, 4, 12345).unwrap();
    let view = BoardView::default();
    let mut surface = Surface::new(100, 30);

    c.bench_function("render_frame", |b| {
        b.iter(|| view.render_into(&game, Viewport::new(100, 30), &mut surface))
    });
}

fn bench_slide_walk(c: &mut Criterion) {
    c.bench_function("slide_walk_100", |b| {
        b.iter(|| {
            let mut game = PuzzleGame::new(4, 4, black_box(777)).unwrap();
            for i in 0..100u32 {
                let direction = match i % 4 {
                    0 => SlideDirection::Left,
                    1 => SlideDirection::Up,
                    2 => SlideDirection::Right,
                    _ => SlideDirection::Down,
                };
                game.slide(direction);
            }
            game
        })
    });
}

criterion_group!(
    benches,
    bench_shuffle,
    bench_move_tile,
    bench_legal_moves,
    bench_solvability,
    bench_render,
    bench_slide_walk
);
criterion_main!(benches);
