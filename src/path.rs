use grid_util::Point;

use crate::cell::CellState;
use crate::grid_model::GridModel;

/// Walks the predecessor chain back from `end`, marking every cell strictly between `end` and
/// `start` as [CellState::Path]. The cells are returned in goal to start order, excluding both
/// endpoints. `start` itself is never overwritten; restoring `end` is left to the caller.
///
/// `end` must have been reached by a search from `start`, which makes the predecessor relation a
/// tree rooted at `start` and guarantees termination.
pub fn reconstruct(grid: &mut GridModel, end: usize, start: usize) -> Vec<Point> {
    let chain = std::iter::successors(grid.cell_at(end).predecessor(), |&ix| {
        grid.cell_at(ix).predecessor()
    })
    .take_while(|&ix| ix != start)
    .take(grid.cell_count())
    .collect::<Vec<usize>>();
    chain
        .into_iter()
        .map(|ix| {
            grid.mark(ix, CellState::Path);
            grid.point_at(ix)
        })
        .collect()
}
