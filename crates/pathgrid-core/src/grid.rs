//! A fixed-size occupancy grid of open and blocked cells.
//!
//! [`Grid`] owns its cells. Searches borrow it immutably, so walls cannot be
//! edited while a search over the same grid is still alive.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, ParseGridError};
use crate::geom::{Point, Range};

/// Text map character for an open cell.
pub const OPEN_CHAR: char = '.';
/// Text map character for a blocked cell.
pub const BLOCKED_CHAR: char = '#';

/// Occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Blocked,
}

impl CellState {
    /// The opposite state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Blocked,
            Self::Blocked => Self::Open,
        }
    }

    /// Text map character for this state.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Open => OPEN_CHAR,
            Self::Blocked => BLOCKED_CHAR,
        }
    }
}

/// A `width × height` grid of [`CellState`] values.
///
/// Dimensions are fixed at construction. Valid coordinates satisfy
/// `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridData", into = "GridData")
)]
pub struct Grid {
    cells: Vec<CellState>,
    bounds: Range,
}

/// Serialized form of a [`Grid`]. Checked on the way back in so that a
/// deserialized grid upholds the same invariants as [`Grid::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridData {
    width: i32,
    height: i32,
    cells: Vec<CellState>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, GridError> {
        let mut grid = Grid::new(data.width, data.height)?;
        if data.cells.len() != grid.cells.len() {
            return Err(GridError::CellCount {
                expected: grid.cells.len(),
                found: data.cells.len(),
            });
        }
        grid.cells = data.cells;
        Ok(grid)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridData {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells,
        }
    }
}

impl Grid {
    /// Create a new grid with every cell [`CellState::Open`].
    ///
    /// Fails with [`GridError::InvalidDimension`] if either dimension is
    /// zero or negative.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        Ok(Self {
            cells: vec![CellState::Open; bounds.len()],
            bounds,
        })
    }

    /// Returns the bounding range `[0, width) × [0, height)`.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is a valid coordinate for this grid.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn index(&self, p: Point) -> Result<usize, GridError> {
        self.bounds.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size(),
        })
    }

    /// Get the state at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<CellState> {
        self.bounds
            .index_of(p)
            .and_then(|i| self.cells.get(i).copied())
    }

    /// Set the state at a point.
    pub fn set(&mut self, p: Point, state: CellState) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Mark a cell as a wall.
    pub fn set_blocked(&mut self, p: Point) -> Result<(), GridError> {
        self.set(p, CellState::Blocked)
    }

    /// Mark a cell as open.
    pub fn clear_blocked(&mut self, p: Point) -> Result<(), GridError> {
        self.set(p, CellState::Open)
    }

    /// Flip a cell between open and blocked, returning the new state.
    pub fn toggle(&mut self, p: Point) -> Result<CellState, GridError> {
        let i = self.index(p)?;
        let state = self.cells[i].toggled();
        self.cells[i] = state;
        Ok(state)
    }

    /// Whether the cell at `p` is blocked.
    ///
    /// Fails with [`GridError::OutOfBounds`] for invalid coordinates.
    pub fn is_blocked(&self, p: Point) -> Result<bool, GridError> {
        let i = self.index(p)?;
        Ok(self.cells[i] == CellState::Blocked)
    }

    /// Whether `p` is inside the grid and open. Never fails.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p) == Some(CellState::Open)
    }

    /// Set every cell back to [`CellState::Open`].
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Open);
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::Blocked)
            .count()
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse a text map of `.` (open) and `#` (blocked) rows.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every row must have the same width.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseGridError::Empty);
        }
        let mut cells = Vec::with_capacity(s.len());
        let mut width = 0usize;
        let mut height = 0usize;
        for (y, line) in s.lines().enumerate() {
            let mut found = 0usize;
            for (x, ch) in line.chars().enumerate() {
                let state = match ch {
                    OPEN_CHAR => CellState::Open,
                    BLOCKED_CHAR => CellState::Blocked,
                    _ => {
                        return Err(ParseGridError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(state);
                found += 1;
            }
            if y == 0 {
                width = found;
            } else if found != width {
                return Err(ParseGridError::InconsistentWidth {
                    line: y + 1,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, state) in self.iter() {
            if p.x == 0 && p.y > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", state.as_char())?;
        }
        Ok(())
    }
}
