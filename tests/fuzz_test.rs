/// Fuzzes the search by checking on many random grids that a path is found exactly when the goal
/// is reachable, that it is as short as a breadth-first search says, and that the cell states and
/// scores the search leaves behind are consistent.
use grid_astar::*;
use rand::prelude::*;
use std::collections::VecDeque;
use std::ops::ControlFlow;

fn random_grid(rng: &mut StdRng) -> (GridModel, Point, Point) {
    let rows = rng.gen_range(1..=40);
    let cols = rng.gen_range(1..=40);
    let density = rng.gen_range(0.0..0.45);
    let mut grid = GridModel::new(rows, cols).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(density) {
                grid.set_state(cell_pos(row, col), CellState::Wall).unwrap();
            }
        }
    }
    let start = cell_pos(rng.gen_range(0..rows), rng.gen_range(0..cols));
    let end = cell_pos(rng.gen_range(0..rows), rng.gen_range(0..cols));
    grid.set_state(start, CellState::Start).unwrap();
    grid.set_state(end, CellState::End).unwrap();
    (grid, start, end)
}

/// Shortest hop count by breadth-first search, the reference for optimality.
fn bfs_distance(grid: &GridModel, start: Point, end: Point) -> Option<Score> {
    let mut dist = vec![INFINITE; grid.cell_count()];
    let mut queue = VecDeque::new();
    dist[grid.index_of(start).unwrap()] = 0;
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[grid.index_of(p).unwrap()];
        if p == end {
            return Some(d);
        }
        for n in grid.neighbors(p) {
            let ix = grid.index_of(n).unwrap();
            if dist[ix] == INFINITE {
                dist[ix] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn visualize_grid(grid: &GridModel) {
    println!("{}", grid);
}

fn states(grid: &GridModel) -> Vec<CellState> {
    grid.cells().iter().map(Cell::state).collect()
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let (mut grid, start, end) = random_grid(&mut rng);
        let expected = bfs_distance(&grid, start, end);
        let reachable = grid.reachable(&start, &end);
        let before = grid.clone();

        let outcome = search(&mut grid, start, end, |grid| {
            for cell in grid.cells().iter().filter(|c| c.is_reached()) {
                assert_eq!(cell.f(), cell.g() + cell.h());
                if cell.pos() != start {
                    assert_eq!(cell.h(), manhattan(&cell.pos(), &end));
                }
            }
            ControlFlow::Continue(())
        })
        .unwrap();

        if outcome.is_found() != reachable || reachable != expected.is_some() {
            visualize_grid(&before);
        }
        assert_eq!(outcome.is_found(), reachable);
        match outcome {
            Outcome::Found(path) => {
                assert_eq!(Some(path.cost), expected);
                assert_eq!(grid.cell(end).unwrap().g(), path.cost);
                let waypoints = path.waypoints();
                assert_eq!(waypoints.len() as Score, path.cost + 1);
                for pair in waypoints.windows(2) {
                    assert_eq!(manhattan(&pair[0], &pair[1]), 1);
                    let (from, to) = (grid.cell(pair[0]).unwrap(), grid.cell(pair[1]).unwrap());
                    assert_eq!(to.g(), from.g() + 1);
                    assert_eq!(to.predecessor(), grid.index_of(pair[0]));
                }
                for p in &path.cells {
                    assert_eq!(grid.state(*p), Some(CellState::Path));
                }
                assert_eq!(grid.count(CellState::Path), path.cells.len());
                assert_eq!(grid.state(end), Some(CellState::End));
                if start != end {
                    assert_eq!(grid.state(start), Some(CellState::Start));
                }
            }
            Outcome::NotFound => {
                assert_eq!(expected, None);
                assert_eq!(grid.count(CellState::Path), 0);
                assert_eq!(grid.state(end), Some(CellState::End));
            }
            Outcome::Aborted => panic!("search was never cancelled"),
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let (grid, start, end) = random_grid(&mut rng);
        let mut runs = Vec::new();
        for _ in 0..2 {
            let mut grid = grid.clone();
            let mut frames = Vec::new();
            let outcome = search(&mut grid, start, end, |grid| {
                frames.push(states(grid));
                ControlFlow::Continue(())
            })
            .unwrap();
            runs.push((outcome, frames));
        }
        assert_eq!(runs[0], runs[1]);
    }
}

#[test]
fn fuzz_cancellation_leaves_no_path() {
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let (mut grid, start, end) = random_grid(&mut rng);
        let limit = rng.gen_range(1..10);
        let mut steps = 0;
        let outcome = search(&mut grid, start, end, |_| {
            steps += 1;
            if steps == limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();
        if outcome == Outcome::Aborted {
            assert_eq!(steps, limit);
            assert_eq!(grid.count(CellState::Path), 0);
        } else {
            // Finished before or exactly at the limit
            assert!(steps <= limit);
        }
    }
}
