use criterion::{criterion_group, criterion_main, Criterion};

use ricochet_solver::config::{Dedup, Method, SearchConfig};
use ricochet_solver::data::{Color, Dir, Position};
use ricochet_solver::puzzle::Target;
use ricochet_solver::{LoadPuzzle, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_corner(c: &mut Criterion) {
    // 2 moves, plain BFS
    bench_puzzle(c, "puzzles/corner.txt", None, SearchConfig::new(2, 5), 100);
}

#[allow(unused)]
fn bench_full_board(c: &mut Criterion) {
    // 3 moves among walls and diagonals
    let target = Target::new(Color::Green, Position::new(7, 5));
    bench_puzzle(c, "puzzles/original.txt", Some(target), SearchConfig::default(), 50);
}

#[allow(unused)]
fn bench_full_board_dedup(c: &mut Criterion) {
    // 4 moves, needs the visited set to stay small
    let target = Target::new(Color::Green, Position::new(13, 0));
    let config = SearchConfig::default().with_dedup(Dedup::Visited);
    bench_puzzle(c, "puzzles/original.txt", Some(target), config, 50);
}

#[allow(unused)]
fn bench_full_board_deepening(c: &mut Criterion) {
    // same puzzle, the transposition table replaces the visited set
    let target = Target::new(Color::Green, Position::new(13, 0));
    let config = SearchConfig::default()
        .with_method(Method::IterativeDeepening)
        .with_dedup(Dedup::Visited);
    bench_puzzle(c, "puzzles/original.txt", Some(target), config, 50);
}

#[allow(unused)]
fn bench_slides(c: &mut Criterion) {
    let puzzle = "puzzles/original.txt".load_puzzle().unwrap();

    c.bench_function("all slides from start", move |b| {
        b.iter(|| {
            for &color in &[Color::Yellow, Color::Red, Color::Green, Color::Blue] {
                for &dir in &[Dir::East, Dir::West, Dir::North, Dir::South] {
                    criterion::black_box(puzzle.board.slide(&puzzle.robots, color, dir));
                }
            }
        })
    });
}

fn bench_puzzle(
    c: &mut Criterion,
    puzzle_path: &str,
    target: Option<Target>,
    config: SearchConfig,
    samples: usize,
) {
    let mut puzzle = puzzle_path.load_puzzle().unwrap();
    if let Some(target) = target {
        puzzle.target = target;
    }

    let mut group = c.benchmark_group(format!("{} {}", config.method, config.dedup));
    group.sample_size(samples);
    group.bench_function(format!("{} {}", puzzle_path, puzzle.target), |b| {
        b.iter(|| {
            criterion::black_box(
                puzzle.solve(criterion::black_box(config), criterion::black_box(false)),
            )
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_corner,
    bench_full_board,
    bench_full_board_dedup,
    bench_full_board_deepening,
    bench_slides,
);
criterion_main!(benches);
