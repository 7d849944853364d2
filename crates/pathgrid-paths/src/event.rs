use pathgrid_core::Point;

/// One frontier pop, in the order the search performed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expansion {
    /// The expanded cell.
    pub pos: Point,
    /// 0-based position in the run's expansion sequence.
    pub order: usize,
    /// Steps from the start along the discovering chain (`g`).
    pub cost: i32,
    /// Manhattan estimate to the goal (`h`).
    pub estimate: i32,
}

/// Where a run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The frontier still has nodes to expand.
    Running,
    /// The goal was popped; a path is available.
    Found,
    /// The frontier emptied before reaching the goal. Not an error.
    Exhausted,
    /// A [`Context`](crate::Context) was cancelled before the run ended.
    Cancelled,
}

/// The outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Every expansion, in pop order.
    pub events: Vec<Expansion>,
    /// Start-to-goal path including both endpoints; empty if none was found.
    pub path: Vec<Point>,
    pub status: SearchStatus,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Number of expansions performed.
    #[inline]
    pub fn explored(&self) -> usize {
        self.events.len()
    }

    /// Iterate over the expanded cells in pop order.
    pub fn explored_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().map(|e| e.pos)
    }
}
