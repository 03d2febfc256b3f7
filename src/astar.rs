//! Step-wise A* over a [GridModel].
//!
//! The frontier is a binary heap ordered on `(f, insertion sequence)` so that cells of equal
//! priority are served first-discovered-first, independent of any hashing order. A cell whose `g`
//! improves while it is pending gets a second entry with the lower priority; the older entry is
//! skipped when it surfaces, since its `f` no longer matches the cell.
use fxhash::FxHashSet;
use grid_util::Point;
use log::{debug, info, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use crate::cell::{CellState, Score};
use crate::error::{GridError, Result};
use crate::grid_model::GridModel;
use crate::path::reconstruct;

/// Heuristic used by [search]: `|Δrow| + |Δcol|`.
pub fn manhattan(p1: &Point, p2: &Point) -> Score {
    p1.manhattan_distance(p2) as Score
}

/// A path found by [search].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPath {
    pub start: Point,
    pub end: Point,
    /// Cells strictly between start and end, in start to end order.
    pub cells: Vec<Point>,
    /// Number of moves, which is `g` of the end cell.
    pub cost: Score,
}

impl GridPath {
    /// Every cell of the path including both endpoints.
    pub fn waypoints(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.cells.len() + 2);
        points.push(self.start);
        points.extend(self.cells.iter().copied());
        if self.end != self.start {
            points.push(self.end);
        }
        points
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(GridPath),
    /// The frontier ran dry without reaching the end.
    NotFound,
    /// The step hook asked to stop before the search finished.
    Aborted,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
    pub fn path(&self) -> Option<&GridPath> {
        match self {
            Outcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: Score,
    seq: u64,
    index: usize,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest f, then the earliest insertion
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Pending cells plus the set of every cell that was ever discovered.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    members: FxHashSet<usize>,
    next_seq: u64,
}

impl Frontier {
    /// Pushes `index` with priority `f` unless it has been discovered before. Returns whether it
    /// was newly discovered.
    fn push(&mut self, index: usize, f: Score) -> bool {
        if !self.members.insert(index) {
            return false;
        }
        self.push_entry(index, f);
        true
    }

    /// Pushes another entry for an already discovered cell whose `f` dropped.
    fn repush(&mut self, index: usize, f: Score) {
        debug_assert!(self.members.contains(&index));
        self.push_entry(index, f);
    }

    fn push_entry(&mut self, index: usize, f: Score) {
        self.heap.push(FrontierEntry {
            f,
            seq: self.next_seq,
            index,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

/// Runs A* from `start` to `end` on `grid`, updating cell scores, predecessors and states as it
/// goes: discovered cells become [CellState::Open], expanded ones [CellState::Closed] and the
/// cells of a found path [CellState::Path]. Start and End cells keep their state.
///
/// `on_step` is called after every expansion and once more after a path was found. It sees the
/// whole grid and may return [ControlFlow::Break] to cancel; the search then stops before the next
/// expansion with [Outcome::Aborted] and leaves the grid as it is. A break after the last possible
/// expansion still ends in [Outcome::NotFound].
///
/// `start == end` yields a path of cost 0 without expanding anything.
///
/// # Errors
/// [GridError::PreconditionViolation] if an endpoint lies outside the grid, the start is a wall or
/// the grid still holds scores from an earlier search.
pub fn search<F>(grid: &mut GridModel, start: Point, end: Point, mut on_step: F) -> Result<Outcome>
where
    F: FnMut(&GridModel) -> ControlFlow<()>,
{
    let start_ix = grid.index_of(start).ok_or_else(|| {
        GridError::PreconditionViolation(format!("start {:?} is not on the grid", start))
    })?;
    let end_ix = grid.index_of(end).ok_or_else(|| {
        GridError::PreconditionViolation(format!("end {:?} is not on the grid", end))
    })?;
    if !grid.cell_at(start_ix).state().is_passable() {
        return Err(GridError::PreconditionViolation(format!(
            "start {:?} is a wall",
            start
        )));
    }
    if grid.has_search_scores() {
        return Err(GridError::PreconditionViolation(
            "grid holds scores of an earlier search".to_owned(),
        ));
    }
    info!("Searching from {:?} to {:?}", start, end);

    grid.cell_mut(start_ix).set_scores(0, 0);
    let mut frontier = Frontier::default();
    frontier.push(start_ix, 0);
    let mut expanded = 0usize;
    let mut cancelled = false;

    while let Some(FrontierEntry { f, index: current, .. }) = frontier.pop() {
        if cancelled {
            info!("Search aborted after {} expansions", expanded);
            return Ok(Outcome::Aborted);
        }
        if f > grid.cell_at(current).f() {
            // Superseded by an entry pushed when the cell improved
            continue;
        }

        if current == end_ix {
            let mut cells = reconstruct(grid, end_ix, start_ix);
            cells.reverse();
            // The end is reported as End whatever the caller left in it
            grid.mark(end_ix, CellState::End);
            let cost = grid.cell_at(end_ix).g();
            let _ = on_step(&*grid);
            info!("Path of cost {} found after {} expansions", cost, expanded);
            return Ok(Outcome::Found(GridPath {
                start,
                end,
                cells,
                cost,
            }));
        }

        let current_g = grid.cell_at(current).g();
        trace!("Expanding {:?} with g = {}", grid.point_at(current), current_g);
        for neighbor in grid.neighbor_indices(current) {
            // Every move costs 1
            let tentative_g = current_g + 1;
            let improved = tentative_g < grid.cell_at(neighbor).g();
            if improved {
                let h = manhattan(&grid.point_at(neighbor), &end);
                let cell = grid.cell_mut(neighbor);
                cell.set_scores(tentative_g, h);
                cell.set_predecessor(Some(current));
            }
            let f = grid.cell_at(neighbor).f();
            if frontier.push(neighbor, f) {
                if !grid.cell_at(neighbor).state().is_endpoint() {
                    grid.mark(neighbor, CellState::Open);
                }
            } else if improved {
                trace!("Reprioritising {:?} to f = {}", grid.point_at(neighbor), f);
                frontier.repush(neighbor, f);
            }
        }

        if current != start_ix {
            grid.mark(current, CellState::Closed);
        }
        expanded += 1;
        cancelled = on_step(&*grid).is_break();
    }

    debug!(
        "Frontier exhausted after {} expansions, {} cells discovered",
        expanded,
        frontier.members.len()
    );
    info!("No path from {:?} to {:?}", start, end);
    Ok(Outcome::NotFound)
}
