use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridfill::puzzle::{Puzzle, WordList};
use gridfill::solver::heuristics::{IdentityValueHeuristic, SelectFirstHeuristic};
use gridfill::solver::Solver;

const STRUCTURE: &str = include_str!("../puzzles/structure0.txt");
const WORDS: &str = include_str!("../puzzles/words0.txt");

fn bench_fill(c: &mut Criterion) {
    let puzzle = Puzzle::from_structure(STRUCTURE).unwrap();
    let words = WordList::parse(WORDS).unwrap();

    c.bench_function("fill_structure0_default_heuristics", |b| {
        b.iter(|| {
            let mut solver = Solver::new(black_box(&puzzle), black_box(&words));
            solver.solve()
        })
    });

    c.bench_function("fill_structure0_baseline_heuristics", |b| {
        b.iter(|| {
            let mut solver = Solver::with_heuristics(
                black_box(&puzzle),
                black_box(&words),
                Box::new(SelectFirstHeuristic),
                Box::new(IdentityValueHeuristic),
            );
            solver.solve()
        })
    });
}

fn bench_propagation_only(c: &mut Criterion) {
    let puzzle = Puzzle::from_structure(STRUCTURE).unwrap();
    let words = WordList::parse(WORDS).unwrap();

    c.bench_function("build_domains", |b| {
        b.iter(|| gridfill::solver::DomainStore::new(black_box(&puzzle), black_box(&words)))
    });
}

criterion_group!(benches, bench_fill, bench_propagation_only);
criterion_main!(benches);
