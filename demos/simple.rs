use grid_astar::{cell_pos, search, CellState, GridModel, Outcome};
use std::ops::ControlFlow;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = GridModel::new(3, 3).unwrap();
    let start = cell_pos(0, 0);
    let end = cell_pos(2, 2);
    grid.set_state(cell_pos(1, 1), CellState::Wall).unwrap();
    grid.set_state(start, CellState::Start).unwrap();
    grid.set_state(end, CellState::End).unwrap();
    println!("{}", grid);
    match search(&mut grid, start, end, |_| ControlFlow::Continue(())).unwrap() {
        Outcome::Found(path) => {
            println!("Path of cost {}:", path.cost);
            for p in path.waypoints() {
                println!("{:?}", p);
            }
            println!("{}", grid);
        }
        outcome => println!("{:?}", outcome),
    }
}
