//! Frame-independent playback of a search trace.
//!
//! [`Playback`] reveals a [`SearchResult`]'s expansions one at a time. It
//! carries no timing: the front end decides how often to call
//! [`step`](Playback::step).

use pathgrid_core::Point;
use pathgrid_paths::{Expansion, SearchResult};

/// Cursor over the expansions of a finished run.
#[derive(Debug, Clone, Copy)]
pub struct Playback<'a> {
    result: &'a SearchResult,
    shown: usize,
}

impl<'a> Playback<'a> {
    /// Start a playback with nothing revealed.
    pub fn new(result: &'a SearchResult) -> Self {
        Self { result, shown: 0 }
    }

    /// Reveal the next expansion. Returns `None` once everything is shown.
    pub fn step(&mut self) -> Option<&'a Expansion> {
        let e = self.result.events.get(self.shown)?;
        self.shown += 1;
        Some(e)
    }

    /// Hide the most recently revealed expansion and return it.
    pub fn back(&mut self) -> Option<&'a Expansion> {
        self.shown = self.shown.checked_sub(1)?;
        self.result.events.get(self.shown)
    }

    /// Reveal exactly `n` expansions (clamped to the trace length).
    pub fn seek(&mut self, n: usize) {
        self.shown = n.min(self.result.events.len());
    }

    /// Hide everything again.
    pub fn restart(&mut self) {
        self.shown = 0;
    }

    /// Expansions revealed so far, in order.
    pub fn visited(&self) -> &'a [Expansion] {
        &self.result.events[..self.shown]
    }

    /// Number of expansions revealed so far.
    pub fn position(&self) -> usize {
        self.shown
    }

    /// Total number of expansions in the trace.
    pub fn len(&self) -> usize {
        self.result.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.events.is_empty()
    }

    /// Whether every expansion has been revealed.
    pub fn is_finished(&self) -> bool {
        self.shown >= self.result.events.len()
    }

    /// The path, once every expansion has been revealed; empty before that.
    pub fn path(&self) -> &'a [Point] {
        if self.is_finished() {
            &self.result.path
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::Grid;
    use pathgrid_paths::find_path;

    fn result_3x3() -> SearchResult {
        let g = Grid::new(3, 3).unwrap();
        find_path(&g, Point::ZERO, Point::new(2, 2)).unwrap()
    }

    #[test]
    fn steps_through_events_then_reveals_path() {
        let res = result_3x3();
        let mut pb = Playback::new(&res);
        assert_eq!(pb.len(), 9);
        assert!(pb.path().is_empty());

        let first = pb.step().unwrap();
        assert_eq!(first.pos, Point::ZERO);
        assert_eq!(pb.visited().len(), 1);

        while pb.step().is_some() {}
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 9);
        assert_eq!(pb.visited(), res.events.as_slice());
        assert_eq!(pb.path(), res.path.as_slice());
        assert_eq!(pb.step(), None);
    }

    #[test]
    fn back_seek_and_restart() {
        let res = result_3x3();
        let mut pb = Playback::new(&res);
        assert_eq!(pb.back(), None);

        pb.seek(4);
        assert_eq!(pb.position(), 4);
        assert_eq!(pb.back().map(|e| e.order), Some(3));
        assert_eq!(pb.position(), 3);

        pb.seek(100);
        assert!(pb.is_finished());
        assert_eq!(pb.path().len(), 5);

        pb.restart();
        assert_eq!(pb.position(), 0);
        assert!(pb.visited().is_empty());
        assert!(pb.path().is_empty());
    }

    #[test]
    fn trivial_run_is_finished_immediately() {
        let g = Grid::new(2, 2).unwrap();
        let res = find_path(&g, Point::ZERO, Point::ZERO).unwrap();
        let pb = Playback::new(&res);
        assert!(pb.is_empty());
        assert!(pb.is_finished());
        assert_eq!(pb.path(), &[Point::ZERO]);
    }
}
