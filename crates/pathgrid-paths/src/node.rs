use pathgrid_core::Point;

/// Parent index of the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A cell discovered during one run, stored in the run's arena.
///
/// Created once per coordinate per run and never updated afterwards.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) pos: Point,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: usize,
}

impl Node {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Per-cell bookkeeping: which run last discovered the cell, and its arena
/// index in that run.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Slot {
    pub(crate) generation: u32,
    pub(crate) node: usize,
}

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// Smaller `f` pops first; equal `f` pops in insertion order (`seq`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) node: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn r(node: usize, f: i32, seq: u64) -> NodeRef {
        NodeRef { node, f, seq }
    }

    #[test]
    fn heap_pops_lowest_f_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(r(0, 6, 0));
        heap.push(r(1, 4, 3));
        heap.push(r(2, 4, 1));
        heap.push(r(3, 5, 2));
        heap.push(r(4, 4, 2));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|n| n.node).collect();
        assert_eq!(order, vec![2, 4, 1, 3, 0]);
    }
}
