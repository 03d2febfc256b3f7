use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use grid_astar::{cell_pos, search, CellState, GridConfig, GridModel};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use std::ops::ControlFlow;

fn random_grid(config: &GridConfig, density: f64, rng: &mut StdRng) -> GridModel {
    let mut grid = GridModel::from_config(config).unwrap();
    for row in 0..config.rows() {
        for col in 0..config.cols() {
            if rng.gen_bool(density) {
                grid.set_state(cell_pos(row, col), CellState::Wall).unwrap();
            }
        }
    }
    grid
}

fn search_bench(c: &mut Criterion) {
    let config = GridConfig::default();
    let start = cell_pos(0, 0);
    let end = cell_pos(config.rows() - 1, config.cols() - 1);
    for density in [0.0, 0.2, 0.35] {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = random_grid(&config, density, &mut rng);
        grid.set_state(start, CellState::Start).unwrap();
        grid.set_state(end, CellState::End).unwrap();
        let name = format!(
            "{}x{}, {:.0}% walls",
            config.rows(),
            config.cols(),
            density * 100.0
        );
        c.bench_function(name.as_str(), |b| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| {
                    black_box(search(&mut grid, start, end, |_| ControlFlow::Continue(())))
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
