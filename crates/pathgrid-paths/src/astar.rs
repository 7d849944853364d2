use log::{debug, trace};
use pathgrid_core::{Grid, GridError, Point};

use crate::context::Context;
use crate::distance::manhattan;
use crate::event::{Expansion, SearchResult, SearchStatus};
use crate::node::{NO_PARENT, Node};
use crate::pathfinder::Pathfinder;

/// Run A* from `start` to `goal` on `grid` with a fresh [`Pathfinder`].
///
/// Convenience wrapper around [`Pathfinder::find_path`] for one-off queries.
pub fn find_path(grid: &Grid, start: Point, goal: Point) -> Result<SearchResult, GridError> {
    Pathfinder::for_grid(grid).find_path(grid, start, goal)
}

impl Pathfinder {
    /// Run A* from `start` to `goal` to completion.
    ///
    /// Returns every expansion in pop order and, when the goal is reached,
    /// the start-to-goal path. An unreachable goal is a normal result with an
    /// empty path and [`SearchStatus::Exhausted`].
    ///
    /// Fails with [`GridError::OutOfBounds`] if either endpoint lies outside
    /// the grid.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult, GridError> {
        Ok(self.search(grid, start, goal)?.finish())
    }

    /// Like [`find_path`](Self::find_path), stopping early once `ctx` is
    /// cancelled.
    pub fn find_path_with(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
        ctx: &Context,
    ) -> Result<SearchResult, GridError> {
        Ok(self.search_with(grid, start, goal, ctx)?.finish())
    }

    /// Start a lazy A* run.
    ///
    /// The returned [`Search`] yields one [`Expansion`] per frontier pop. The
    /// grid stays borrowed until the search is dropped, so walls cannot change
    /// mid-run. Calling `search` again restarts from scratch and produces the
    /// same sequence for the same inputs.
    pub fn search<'a>(
        &'a mut self,
        grid: &'a Grid,
        start: Point,
        goal: Point,
    ) -> Result<Search<'a>, GridError> {
        self.start_search(grid, start, goal, None)
    }

    /// Start a lazy A* run that checks `ctx` before every expansion.
    pub fn search_with<'a>(
        &'a mut self,
        grid: &'a Grid,
        start: Point,
        goal: Point,
        ctx: &'a Context,
    ) -> Result<Search<'a>, GridError> {
        self.start_search(grid, start, goal, Some(ctx))
    }

    fn start_search<'a>(
        &'a mut self,
        grid: &'a Grid,
        start: Point,
        goal: Point,
        ctx: Option<&'a Context>,
    ) -> Result<Search<'a>, GridError> {
        for p in [start, goal] {
            if !grid.contains(p) {
                return Err(GridError::OutOfBounds {
                    pos: p,
                    size: grid.size(),
                });
            }
        }
        if grid.bounds() != self.rng {
            self.set_range(grid.bounds());
        } else {
            self.begin_run();
        }

        debug!(
            "astar: {start} -> {goal} on {}x{} grid",
            grid.width(),
            grid.height()
        );

        let mut search = Search {
            pf: self,
            grid,
            start,
            goal,
            ctx,
            status: SearchStatus::Running,
            order: 0,
            goal_node: None,
        };

        if start == goal {
            // Trivial path, reported before any expansion.
            search.status = SearchStatus::Found;
            debug!("astar: start equals goal {start}");
            return Ok(search);
        }

        // The start cell's own occupancy is deliberately not checked: only
        // neighbors are filtered on walls.
        let slot = search.slot(start)?;
        search.pf.push_node(
            slot,
            Node {
                pos: start,
                g: 0,
                h: manhattan(start, goal),
                parent: NO_PARENT,
            },
        );
        Ok(search)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A lazy, in-progress A* run.
///
/// Iterating yields [`Expansion`]s in pop order. Once iteration ends,
/// [`status`](Self::status) reports why and [`path`](Self::path) returns the
/// reconstructed path.
#[derive(Debug)]
pub struct Search<'a> {
    pf: &'a mut Pathfinder,
    grid: &'a Grid,
    start: Point,
    goal: Point,
    ctx: Option<&'a Context>,
    status: SearchStatus,
    order: usize,
    goal_node: Option<usize>,
}

impl Search<'_> {
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Current status. [`SearchStatus::Running`] until iteration ends.
    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of expansions yielded so far.
    #[inline]
    pub fn explored(&self) -> usize {
        self.order
    }

    /// Number of cells waiting in the frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.pf.open.len()
    }

    /// Cost from the start recorded for `p`, if this run has discovered it.
    pub fn cost_to(&self, p: Point) -> Option<i32> {
        let slot = self.pf.rng.index_of(p)?;
        let idx = self.pf.discovered(slot)?;
        self.pf.nodes.get(idx).map(|n| n.g)
    }

    /// Start-to-goal path, both endpoints included.
    ///
    /// Empty unless the status is [`SearchStatus::Found`].
    pub fn path(&self) -> Vec<Point> {
        if self.status != SearchStatus::Found {
            return Vec::new();
        }
        let Some(goal_node) = self.goal_node else {
            // Only reachable when start == goal.
            return vec![self.start];
        };
        let mut path = Vec::new();
        let mut ci = goal_node;
        while ci != NO_PARENT {
            let node = &self.pf.nodes[ci];
            path.push(node.pos);
            ci = node.parent;
        }
        path.reverse();
        path
    }

    /// Drive the search to the end and collect the events not yet yielded
    /// together with the path.
    pub fn finish(mut self) -> SearchResult {
        let events: Vec<Expansion> = self.by_ref().collect();
        SearchResult {
            path: self.path(),
            status: self.status,
            events,
        }
    }

    fn slot(&self, p: Point) -> Result<usize, GridError> {
        self.pf.rng.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.grid.size(),
        })
    }

    fn finish_with(&mut self, status: SearchStatus) {
        self.status = status;
        debug!(
            "astar: {:?} after {} expansions, {} nodes",
            status,
            self.order,
            self.pf.node_count()
        );
    }

    /// Discover the open neighbors of arena node `ci` that have no node yet.
    fn expand(&mut self, ci: usize) {
        let current = self.pf.nodes[ci];
        let grid = self.grid;
        let mut nbuf = std::mem::take(&mut self.pf.nbuf);

        for &np in nbuf.cardinal(current.pos, |q| grid.is_passable(q)) {
            let Some(slot) = self.pf.rng.index_of(np) else {
                continue;
            };
            if self.pf.discovered(slot).is_some() {
                // First discovery wins; no re-opening.
                continue;
            }
            self.pf.push_node(
                slot,
                Node {
                    pos: np,
                    g: current.g + 1,
                    h: manhattan(np, self.goal),
                    parent: ci,
                },
            );
        }

        self.pf.nbuf = nbuf;
    }
}

impl Iterator for Search<'_> {
    type Item = Expansion;

    fn next(&mut self) -> Option<Expansion> {
        if self.status != SearchStatus::Running {
            return None;
        }
        if self.ctx.is_some_and(Context::is_done) {
            self.finish_with(SearchStatus::Cancelled);
            return None;
        }
        let Some(current) = self.pf.open.pop() else {
            self.finish_with(SearchStatus::Exhausted);
            return None;
        };

        let node = self.pf.nodes[current.node];
        let event = Expansion {
            pos: node.pos,
            order: self.order,
            cost: node.g,
            estimate: node.h,
        };
        self.order += 1;
        trace!(
            "astar: expand #{} {} g={} h={}",
            event.order, node.pos, node.g, node.h
        );

        if node.pos == self.goal {
            self.goal_node = Some(current.node);
            self.finish_with(SearchStatus::Found);
        } else {
            self.expand(current.node);
        }
        Some(event)
    }
}
