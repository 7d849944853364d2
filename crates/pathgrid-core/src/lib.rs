//! **pathgrid-core**: grid occupancy model for the pathgrid pathfinder.
//!
//! This crate provides the leaf types shared by the search engine and the
//! hosting session: cell coordinates, half-open ranges, and a fixed-size grid
//! of open/blocked cells with bounds-checked wall editing.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{GridError, ParseGridError};
pub use geom::{Point, Range};
pub use grid::{CellState, Grid};
