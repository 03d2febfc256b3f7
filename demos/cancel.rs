use grid_astar::{cell_pos, search, GridModel};
use std::ops::ControlFlow;

// Stops a search on an open 20x20 grid after a fixed number of expansions and shows the
// intermediate state: o marks open cells, x closed ones. No cell is marked as part of a path.
fn main() {
    const MAX_STEPS: usize = 25;
    let mut grid = GridModel::new(20, 20).unwrap();
    let mut steps = 0;
    let outcome = search(&mut grid, cell_pos(0, 0), cell_pos(19, 19), |_| {
        steps += 1;
        if steps >= MAX_STEPS {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .unwrap();
    println!("{:?} after {} steps", outcome, steps);
    println!("{}", grid);
}
