use std::fmt;

use pathgrid_core::GridError;

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A run was requested before a start cell was chosen.
    MissingStart,
    /// A run was requested before a goal cell was chosen.
    MissingGoal,
    /// A grid operation failed.
    Grid(GridError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("session: no start cell set"),
            Self::MissingGoal => f.write_str("session: no goal cell set"),
            Self::Grid(e) => write!(f, "session: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
