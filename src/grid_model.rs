use core::fmt;
use std::str::FromStr;

use grid_util::Point;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{cell_pos, Cell, CellState};
use crate::config::GridConfig;
use crate::error::{GridError, Result};

/// [GridModel] owns a fixed `rows` x `cols` arena of [Cell]s stored row-major. Cells are addressed
/// by [Point] (`x` is the column, `y` the row) or by their arena index, which is also what
/// predecessor links refer to.
///
/// In addition to the cells it maintains connected components of passable cells in a
/// [UnionFind] structure so that reachability can be queried without running a search.
#[derive(Clone, Debug)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl GridModel {
    /// Creates a grid of `rows * cols` cells in the [CellState::Default] state.
    pub fn new(rows: usize, cols: usize) -> Result<GridModel> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        debug!("Creating {}x{} grid", rows, cols);
        let cells = iproduct!(0..rows, 0..cols)
            .map(|(row, col)| Cell::new(row, col))
            .collect::<Vec<_>>();
        let mut grid = GridModel {
            rows,
            cols,
            cells,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn from_config(config: &GridConfig) -> Result<GridModel> {
        GridModel::new(config.rows(), config.cols())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.y as usize) < self.rows
            && (point.x as usize) < self.cols
    }

    /// Arena index of the cell at `point`.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.y as usize * self.cols + point.x as usize)
    }

    /// Position of the cell with arena index `ix`.
    pub fn point_at(&self, ix: usize) -> Point {
        cell_pos(ix / self.cols, ix % self.cols)
    }

    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.index_of(point).map(|ix| &self.cells[ix])
    }

    /// Cell with arena index `ix`, for following predecessor links.
    ///
    /// # Panics
    /// If `ix` is not smaller than [cell_count](Self::cell_count).
    pub fn cell_at(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }

    pub(crate) fn cell_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells[ix]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn state(&self, point: Point) -> Option<CellState> {
        self.cell(point).map(Cell::state)
    }

    /// Sets the state of exactly the cell at `point`. Does not clear a previous Start or End;
    /// keeping those unique is up to the caller.
    pub fn set_state(&mut self, point: Point, state: CellState) -> Result<()> {
        let ix = self.index_of(point).ok_or(GridError::OutOfBounds(point))?;
        let was_passable = self.cells[ix].state().is_passable();
        self.cells[ix].set_state(state);
        if was_passable && !state.is_passable() {
            // Blocking a cell may split a component
            self.components_dirty = true;
        } else if !was_passable && state.is_passable() {
            for n in self.neighbor_indices(ix) {
                self.components.union(ix, n);
            }
        }
        Ok(())
    }

    /// Search-state transitions, which never change passability.
    pub(crate) fn mark(&mut self, ix: usize, state: CellState) {
        debug_assert!(state.is_passable() && self.cells[ix].state().is_passable());
        self.cells[ix].set_state(state);
    }

    pub fn can_move_to(&self, point: Point) -> bool {
        self.cell(point)
            .map_or(false, |cell| cell.state().is_passable())
    }

    /// Passable cells adjacent to `point` in the fixed order down, up, right, left. A wall has no
    /// neighbours. Among equally good alternatives the search discovers cells in this order, so it decides which shortest
    /// path is produced.
    pub fn neighbors(&self, point: Point) -> SmallVec<[Point; 4]> {
        match self.index_of(point) {
            Some(ix) => self
                .neighbor_indices(ix)
                .into_iter()
                .map(|n| self.point_at(n))
                .collect(),
            None => SmallVec::new(),
        }
    }

    /// Arena indices of the passable neighbours of `ix`, in the order of [neighbors](Self::neighbors).
    pub(crate) fn neighbor_indices(&self, ix: usize) -> SmallVec<[usize; 4]> {
        let (row, col) = (ix / self.cols, ix % self.cols);
        let mut result = SmallVec::new();
        if !self.cells[ix].state().is_passable() {
            return result;
        }
        if row + 1 < self.rows {
            result.push(ix + self.cols);
        }
        if row > 0 {
            result.push(ix - self.cols);
        }
        if col + 1 < self.cols {
            result.push(ix + 1);
        }
        if col > 0 {
            result.push(ix - 1);
        }
        result.retain(|n: &mut usize| self.cells[*n].state().is_passable());
        result
    }

    /// First cell in row-major order holding `state`.
    pub fn find(&self, state: CellState) -> Option<Point> {
        self.cells
            .iter()
            .find(|cell| cell.state() == state)
            .map(Cell::pos)
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.state() == state)
            .count()
    }

    /// Whether any cell carries scores from a search.
    pub fn has_search_scores(&self) -> bool {
        self.cells.iter().any(Cell::is_reached)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&mut self, point: &Point) -> Option<usize> {
        self.update();
        let ix = self.index_of(*point)?;
        Some(self.components.find(ix))
    }

    /// Checks if start and goal are passable and on the same component. Regenerates the
    /// components first if walls were painted since they were last computed.
    pub fn reachable(&mut self, start: &Point, goal: &Point) -> bool {
        self.update();
        match (self.index_of(*start), self.index_of(*goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                self.cells[start_ix].state().is_passable()
                    && self.cells[goal_ix].state().is_passable()
                    && self.components.equiv(start_ix, goal_ix)
            }
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&mut self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if !self.cells[ix].state().is_passable() {
                continue;
            }
            // Linking down and right covers every edge once
            let below = ix + self.cols;
            if below < self.cells.len() && self.cells[below].state().is_passable() {
                self.components.union(ix, below);
            }
            if (ix + 1) % self.cols != 0 && self.cells[ix + 1].state().is_passable() {
                self.components.union(ix, ix + 1);
            }
        }
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|cell| cell.state().glyph())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the text form produced by [Display](fmt::Display): one line per row, one glyph per
/// cell. Blank lines and surrounding whitespace are ignored.
impl FromStr for GridModel {
    type Err = GridError;

    fn from_str(s: &str) -> Result<GridModel> {
        let lines = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect::<Vec<_>>();
        let cols = match lines.first() {
            Some((_, line)) => line.chars().count(),
            None => {
                return Err(GridError::Parse {
                    line: 1,
                    message: "empty grid".to_owned(),
                })
            }
        };
        let mut grid = GridModel::new(lines.len(), cols)?;
        for (row, (line_no, line)) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GridError::Parse {
                    line: *line_no,
                    message: format!("expected {} cells, found {}", cols, line.chars().count()),
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let state = CellState::from_glyph(glyph).ok_or_else(|| GridError::Parse {
                    line: *line_no,
                    message: format!("unknown cell glyph {:?}", glyph),
                })?;
                grid.cells[row * cols + col].set_state(state);
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}
