use grid_util::Point;

use crate::cell::cell_pos;
use crate::error::{GridError, Result};

const DEFAULT_WIDTH: usize = 1000;
const DEFAULT_HEIGHT: usize = 800;
const DEFAULT_CELL_SIZE: usize = 20;

/// Dimensions of a grid and the pixel size of one of its cells. Passed explicitly to everything
/// that builds a grid so independent grids can live side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    rows: usize,
    cols: usize,
    cell_size: usize,
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize, cell_size: usize) -> Result<GridConfig> {
        if cell_size == 0 {
            return Err(GridError::InvalidCellSize);
        }
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(GridConfig {
            rows,
            cols,
            cell_size,
        })
    }

    /// Fits as many whole cells of `cell_size` pixels as possible into a `width` by `height`
    /// window.
    pub fn from_window(width: usize, height: usize, cell_size: usize) -> Result<GridConfig> {
        if cell_size == 0 {
            return Err(GridError::InvalidCellSize);
        }
        GridConfig::new(height / cell_size, width / cell_size, cell_size)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Window size in pixels covered by the grid.
    pub fn extent(&self) -> (usize, usize) {
        (self.cols * self.cell_size, self.rows * self.cell_size)
    }

    /// Maps a pixel position to the cell drawn under it.
    pub fn pixel_to_cell(&self, x: usize, y: usize) -> Option<Point> {
        let row = y / self.cell_size;
        let col = x / self.cell_size;
        (row < self.rows && col < self.cols).then(|| cell_pos(row, col))
    }

    /// Top-left pixel of a cell.
    pub fn cell_origin(&self, point: Point) -> (usize, usize) {
        (
            point.x as usize * self.cell_size,
            point.y as usize * self.cell_size,
        )
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: DEFAULT_HEIGHT / DEFAULT_CELL_SIZE,
            cols: DEFAULT_WIDTH / DEFAULT_CELL_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}
