//! # grid_astar
//!
//! A* search on a 4-connected, uniform-cost grid, written to be watched while it runs. Cells
//! carry their own search state ([CellState::Open], [CellState::Closed], [CellState::Path]) and
//! scores, and the engine calls back after every expansion so a front end can draw a frame or
//! cancel. The heuristic is the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), which is consistent on
//! such a grid, so the first path found is a shortest one. Among equally short paths the result is
//! fixed by the neighbour order (down, up, right, left) and first-in-first-out tie-breaking.
//!
//! [Editor] bundles the board editing, run and reset commands of an interactive front end.
//! Connected components are kept alongside the grid to answer reachability queries without a
//! search.
pub mod astar;
pub mod cell;
pub mod config;
pub mod editor;
pub mod error;
pub mod grid_model;
pub mod path;

pub use astar::{manhattan, search, GridPath, Outcome};
pub use cell::{cell_pos, Cell, CellState, Score, INFINITE};
pub use config::GridConfig;
pub use editor::Editor;
pub use error::{GridError, Result};
pub use grid_model::GridModel;
pub use path::reconstruct;

pub use grid_util::Point;
