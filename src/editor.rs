//! The command surface an input layer drives: painting endpoints and walls, running the search
//! once, and resetting the board.
//!
//! Repainting the Start (or End) on another cell demotes the previous one to
//! [CellState::Default]; painting one endpoint over the other clears the overwritten handle. Once
//! a run has begun every edit is refused until [Editor::reset].
use grid_util::Point;
use log::{debug, info};
use std::ops::ControlFlow;

use crate::astar::{search, Outcome};
use crate::cell::CellState;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::grid_model::GridModel;

#[derive(Clone, Debug)]
pub struct Editor {
    config: GridConfig,
    grid: GridModel,
    start: Option<Point>,
    end: Option<Point>,
    started: bool,
}

impl Editor {
    pub fn new(config: GridConfig) -> Result<Editor> {
        Ok(Editor {
            grid: GridModel::from_config(&config)?,
            config,
            start: None,
            end: None,
            started: false,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }
    /// Whether a run has begun since the last reset.
    pub fn is_started(&self) -> bool {
        self.started
    }

    fn ensure_editable(&self, point: Point) -> Result<()> {
        if self.started {
            debug!("Refusing edit of {:?}: search already started", point);
            return Err(GridError::SearchStarted);
        }
        if !self.grid.in_bounds(point) {
            return Err(GridError::OutOfBounds(point));
        }
        Ok(())
    }

    /// Forgets whichever endpoint handle points at `point`.
    fn release(&mut self, point: Point) {
        if self.start == Some(point) {
            self.start = None;
        }
        if self.end == Some(point) {
            self.end = None;
        }
    }

    pub fn paint_start(&mut self, point: Point) -> Result<()> {
        self.ensure_editable(point)?;
        if let Some(previous) = self.start.filter(|p| *p != point) {
            self.grid.set_state(previous, CellState::Default)?;
        }
        self.release(point);
        self.grid.set_state(point, CellState::Start)?;
        self.start = Some(point);
        Ok(())
    }

    pub fn paint_end(&mut self, point: Point) -> Result<()> {
        self.ensure_editable(point)?;
        if let Some(previous) = self.end.filter(|p| *p != point) {
            self.grid.set_state(previous, CellState::Default)?;
        }
        self.release(point);
        self.grid.set_state(point, CellState::End)?;
        self.end = Some(point);
        Ok(())
    }

    /// Paints a wall. Start and End cells have to be erased first.
    pub fn paint_wall(&mut self, point: Point) -> Result<()> {
        self.ensure_editable(point)?;
        if self.start == Some(point) || self.end == Some(point) {
            return Err(GridError::Occupied(point));
        }
        self.grid.set_state(point, CellState::Wall)
    }

    /// Returns any cell, endpoints included, to [CellState::Default].
    pub fn erase(&mut self, point: Point) -> Result<()> {
        self.ensure_editable(point)?;
        self.release(point);
        self.grid.set_state(point, CellState::Default)
    }

    /// Primary button: the first click places the Start, the next one the End, and every further
    /// click a wall. Clicks on the Start or End cell after that do nothing. Returns the state
    /// painted, if any.
    pub fn click(&mut self, point: Point) -> Result<Option<CellState>> {
        self.ensure_editable(point)?;
        let painted = if self.start.is_none() {
            self.paint_start(point)?;
            Some(CellState::Start)
        } else if self.end.is_none() && self.start != Some(point) {
            self.paint_end(point)?;
            Some(CellState::End)
        } else if self.start != Some(point) && self.end != Some(point) {
            self.paint_wall(point)?;
            Some(CellState::Wall)
        } else {
            None
        };
        Ok(painted)
    }

    /// Secondary button: removes a wall. Any other cell is left alone. Returns whether a wall was
    /// removed.
    pub fn secondary_click(&mut self, point: Point) -> Result<bool> {
        self.ensure_editable(point)?;
        if self.grid.state(point) == Some(CellState::Wall) {
            self.erase(point)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Same as [click](Self::click) at the cell under a pixel. Clicks outside the grid are
    /// ignored.
    pub fn click_pixel(&mut self, x: usize, y: usize) -> Result<Option<CellState>> {
        match self.config.pixel_to_cell(x, y) {
            Some(point) => self.click(point),
            None => Ok(None),
        }
    }

    /// Runs the search between the placed endpoints. Only one run is allowed per board.
    pub fn run<F>(&mut self, on_step: F) -> Result<Outcome>
    where
        F: FnMut(&GridModel) -> ControlFlow<()>,
    {
        if self.started {
            return Err(GridError::SearchStarted);
        }
        let start = self.start.ok_or(GridError::MissingEndpoint("start"))?;
        let end = self.end.ok_or(GridError::MissingEndpoint("end"))?;
        self.started = true;
        search(&mut self.grid, start, end, on_step)
    }

    /// Replaces the board with a fresh one of the configured size.
    pub fn reset(&mut self) -> Result<()> {
        info!(
            "Resetting {}x{} grid",
            self.config.rows(),
            self.config.cols()
        );
        self.grid = GridModel::from_config(&self.config)?;
        self.start = None;
        self.end = None;
        self.started = false;
        Ok(())
    }
}
