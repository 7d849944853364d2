//! The hosting session: one grid, two endpoints, and the last search result.
//!
//! A [`Session`] is what an interactive front end drives. It maps user actions
//! (pick start, pick goal, paint walls, run, clear) onto grid edits and
//! searches. Coordinates are cells; converting pointer positions is the
//! caller's job.

use log::{debug, info};
use pathgrid_core::{CellState, Grid, GridError, Point};
use pathgrid_paths::{Context, Pathfinder, SearchResult};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::playback::Playback;

/// How a cell should be presented, in drawing precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Open,
    Wall,
    Start,
    Goal,
    /// On the last found path. Drawn over every other state.
    Path,
}

/// Interactive pathfinding session state.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    pathfinder: Pathfinder,
    start: Option<Point>,
    goal: Option<Point>,
    result: Option<SearchResult>,
}

impl Session {
    /// Create a session with an all-open grid of the configured size.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self::with_grid(grid))
    }

    /// Create a session around an existing grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            pathfinder: Pathfinder::for_grid(&grid),
            grid,
            start: None,
            goal: None,
            result: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// The result of the last run, unless an edit has made it stale.
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    fn check(&self, p: Point) -> Result<(), SessionError> {
        if self.grid.contains(p) {
            Ok(())
        } else {
            Err(SessionError::Grid(GridError::OutOfBounds {
                pos: p,
                size: self.grid.size(),
            }))
        }
    }

    fn invalidate(&mut self) {
        self.result = None;
    }

    /// Choose the start cell. A wall cell is accepted.
    pub fn set_start(&mut self, p: Point) -> Result<(), SessionError> {
        self.check(p)?;
        debug!("session: start {p}");
        self.start = Some(p);
        self.invalidate();
        Ok(())
    }

    /// Choose the goal cell. A wall cell is accepted but cannot be reached.
    pub fn set_goal(&mut self, p: Point) -> Result<(), SessionError> {
        self.check(p)?;
        debug!("session: goal {p}");
        self.goal = Some(p);
        self.invalidate();
        Ok(())
    }

    /// Turn a cell into a wall.
    pub fn paint_wall(&mut self, p: Point) -> Result<(), SessionError> {
        self.grid.set_blocked(p)?;
        debug!("session: wall at {p}");
        self.invalidate();
        Ok(())
    }

    /// Remove a wall.
    pub fn erase_wall(&mut self, p: Point) -> Result<(), SessionError> {
        self.grid.clear_blocked(p)?;
        debug!("session: erased {p}");
        self.invalidate();
        Ok(())
    }

    /// Flip a cell between wall and open, returning the new state.
    pub fn toggle_wall(&mut self, p: Point) -> Result<CellState, SessionError> {
        let state = self.grid.toggle(p)?;
        debug!("session: {p} is now {state:?}");
        self.invalidate();
        Ok(state)
    }

    /// Search from the start cell to the goal cell.
    ///
    /// An unreachable goal is a successful run with an empty path.
    pub fn run(&mut self) -> Result<&SearchResult, SessionError> {
        self.run_with(&Context::new())
    }

    /// Like [`run`](Self::run), stopping early once `ctx` is cancelled.
    pub fn run_with(&mut self, ctx: &Context) -> Result<&SearchResult, SessionError> {
        let start = self.start.ok_or(SessionError::MissingStart)?;
        let goal = self.goal.ok_or(SessionError::MissingGoal)?;
        let result = self
            .pathfinder
            .find_path_with(&self.grid, start, goal, ctx)?;
        debug!(
            "session: run {start} -> {goal}: {:?}, {} explored, path {}",
            result.status,
            result.explored(),
            result.path.len()
        );
        let result: &SearchResult = self.result.insert(result);
        Ok(result)
    }

    /// Reset every cell to open and forget the endpoints and last result.
    pub fn clear(&mut self) {
        self.grid.reset();
        self.start = None;
        self.goal = None;
        self.result = None;
        info!("session: cleared");
    }

    /// Step-by-step cursor over the last run's exploration trace.
    pub fn playback(&self) -> Option<Playback<'_>> {
        self.result.as_ref().map(Playback::new)
    }

    /// Presentation state of `p`, or `None` if out of bounds.
    ///
    /// Walls win over endpoints, the start wins over the goal, and cells on
    /// the last found path are drawn over everything.
    pub fn view(&self, p: Point) -> Option<CellView> {
        let state = self.grid.at(p)?;
        if self.result.as_ref().is_some_and(|r| r.path.contains(&p)) {
            return Some(CellView::Path);
        }
        let view = if state == CellState::Blocked {
            CellView::Wall
        } else if self.start == Some(p) {
            CellView::Start
        } else if self.goal == Some(p) {
            CellView::Goal
        } else {
            CellView::Open
        };
        Some(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_paths::SearchStatus;

    fn small() -> Session {
        Session::new(SessionConfig {
            width: 3,
            height: 3,
        })
        .unwrap()
    }

    #[test]
    fn new_uses_configured_size() {
        let s = Session::new(SessionConfig::default()).unwrap();
        assert_eq!(s.grid().size(), Point::new(20, 20));
        assert_eq!(s.start(), None);
        assert_eq!(s.goal(), None);
        assert!(s.result().is_none());
    }

    #[test]
    fn new_rejects_bad_size() {
        let err = Session::new(SessionConfig {
            width: 0,
            height: 3,
        })
        .unwrap_err();
        assert_eq!(
            err,
            SessionError::Grid(GridError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn run_requires_both_endpoints() {
        let mut s = small();
        assert_eq!(s.run().unwrap_err(), SessionError::MissingStart);
        s.set_start(Point::ZERO).unwrap();
        assert_eq!(s.run().unwrap_err(), SessionError::MissingGoal);
        s.set_goal(Point::new(2, 2)).unwrap();
        let res = s.run().unwrap();
        assert_eq!(res.status, SearchStatus::Found);
        assert_eq!(res.path.len(), 5);
        assert!(s.result().is_some());
    }

    #[test]
    fn endpoints_are_bounds_checked() {
        let mut s = small();
        assert!(matches!(
            s.set_start(Point::new(3, 0)),
            Err(SessionError::Grid(GridError::OutOfBounds { .. }))
        ));
        assert!(s.set_goal(Point::new(0, -1)).is_err());
        assert!(s.paint_wall(Point::new(9, 9)).is_err());
        assert_eq!(s.start(), None);
        assert_eq!(s.goal(), None);
    }

    #[test]
    fn walls_change_the_route_and_drop_stale_results() {
        let mut s = small();
        s.set_start(Point::ZERO).unwrap();
        s.set_goal(Point::new(2, 2)).unwrap();
        let _ = s.run().unwrap();

        s.paint_wall(Point::new(0, 1)).unwrap();
        assert!(s.result().is_none());
        s.paint_wall(Point::new(1, 1)).unwrap();
        let res = s.run().unwrap();
        assert_eq!(
            res.path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );

        assert_eq!(s.toggle_wall(Point::new(2, 1)), Ok(CellState::Blocked));
        let res = s.run().unwrap();
        assert_eq!(res.status, SearchStatus::Exhausted);
        assert!(res.path.is_empty());

        s.erase_wall(Point::new(1, 1)).unwrap();
        assert!(s.run().unwrap().found());
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = small();
        s.set_start(Point::ZERO).unwrap();
        s.set_goal(Point::new(2, 0)).unwrap();
        s.paint_wall(Point::new(1, 1)).unwrap();
        let _ = s.run().unwrap();

        s.clear();
        assert_eq!(s.grid().blocked_count(), 0);
        assert_eq!(s.start(), None);
        assert_eq!(s.goal(), None);
        assert!(s.result().is_none());
        assert!(s.playback().is_none());
    }

    #[test]
    fn cancelled_run_is_recorded() {
        let mut s = small();
        s.set_start(Point::ZERO).unwrap();
        s.set_goal(Point::new(2, 2)).unwrap();
        let ctx = Context::new();
        ctx.cancel();
        let res = s.run_with(&ctx).unwrap();
        assert_eq!(res.status, SearchStatus::Cancelled);
        assert!(res.events.is_empty());
    }

    #[test]
    fn view_precedence() {
        let mut s = small();
        s.set_start(Point::ZERO).unwrap();
        s.set_goal(Point::new(2, 0)).unwrap();
        s.paint_wall(Point::new(1, 1)).unwrap();
        assert_eq!(s.view(Point::ZERO), Some(CellView::Start));
        assert_eq!(s.view(Point::new(2, 0)), Some(CellView::Goal));
        assert_eq!(s.view(Point::new(1, 1)), Some(CellView::Wall));
        assert_eq!(s.view(Point::new(1, 0)), Some(CellView::Open));
        assert_eq!(s.view(Point::new(5, 5)), None);

        // Walls win over endpoints.
        s.paint_wall(Point::new(2, 0)).unwrap();
        assert_eq!(s.view(Point::new(2, 0)), Some(CellView::Wall));
        s.erase_wall(Point::new(2, 0)).unwrap();

        let _ = s.run().unwrap();
        assert_eq!(s.view(Point::ZERO), Some(CellView::Path));
        assert_eq!(s.view(Point::new(1, 0)), Some(CellView::Path));
        assert_eq!(s.view(Point::new(2, 0)), Some(CellView::Path));
        assert_eq!(s.view(Point::new(0, 1)), Some(CellView::Open));
    }

    #[test]
    fn session_over_text_map() {
        let grid: Grid = "\
.#...
.#.#.
...#."
            .parse()
            .unwrap();
        let mut s = Session::with_grid(grid);
        s.set_start(Point::ZERO).unwrap();
        s.set_goal(Point::new(4, 2)).unwrap();
        let res = s.run().unwrap();
        assert!(res.found());
        assert_eq!(res.path.len(), 11);
    }
}
