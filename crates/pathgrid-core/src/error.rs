//! Error types for grid construction, queries and text map parsing.

use std::fmt;

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) construction and cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero or negative.
    InvalidDimension { width: i32, height: i32 },
    /// A coordinate outside `[0, width) × [0, height)` was used.
    OutOfBounds { pos: Point, size: Point },
    /// The cell buffer does not hold exactly `width * height` cells.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "grid: invalid dimensions {width}x{height}")
            }
            Self::OutOfBounds { pos, size } => {
                write!(f, "grid: {pos} is outside a {}x{} grid", size.x, size.y)
            }
            Self::CellCount { expected, found } => {
                write!(f, "grid: got {found} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input contained no rows.
    Empty,
    /// A row is wider or narrower than the first row.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.` or `#` was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("map: no rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseGridError {}
