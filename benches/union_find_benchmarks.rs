/// Performance benchmarks for union-find and region capture
///
/// Run with: cargo bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regionfind::{classify_with, Cell, Grid, Strategy, UnionFind};

/// Generate a random square board with the given share of open cells
fn generate_board(side: usize, open: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(42);
    let rows: Vec<Vec<Cell>> = (0..side)
        .map(|_| {
            (0..side)
                .map(|_| if rng.gen_bool(open) { Cell::Open } else { Cell::Closed })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

/// Benchmark: random unions followed by connectivity queries
fn bench_union_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find");

    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(7);
            let pairs: Vec<(usize, usize)> = (0..size)
                .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
                .collect();

            b.iter(|| {
                let mut uf = UnionFind::new(size);
                for &(p, q) in &pairs {
                    uf.union(p, q).unwrap();
                }
                let mut connected = 0;
                for &(p, q) in &pairs {
                    if uf.is_connected(q, p).unwrap() {
                        connected += 1;
                    }
                }
                black_box(connected)
            });
        });
    }

    group.finish();
}

/// Benchmark: region capture strategies on the same board
fn bench_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");
    group.sample_size(20);

    for side in [64, 256, 1024].iter() {
        let board = generate_board(*side, 0.55);
        group.throughput(Throughput::Elements((side * side) as u64));

        for strategy in [Strategy::UnionFind, Strategy::OutsideIn, Strategy::InsideOut] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), side),
                &board,
                |b, board| {
                    b.iter_with_setup(
                        || board.clone(),
                        |mut grid| black_box(classify_with(&mut grid, strategy).unwrap()),
                    );
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_union_find, bench_capture);
criterion_main!(benches);
