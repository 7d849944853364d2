use std::collections::BinaryHeap;

use pathgrid_core::{Grid, Range};

use crate::neighbors::Neighbors;
use crate::node::{Node, NodeRef, Slot};

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable A* engine for grids of one size.
///
/// `Pathfinder` owns the node arena, the per-cell slot table and the frontier
/// so that repeated searches incur no allocations after warm-up. Nodes from a
/// previous run are invalidated by bumping a generation counter when the next
/// run starts.
#[derive(Debug)]
pub struct Pathfinder {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<Node>,
    pub(crate) slots: Vec<Slot>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) seq: u64,
    pub(crate) nbuf: Neighbors,
}

impl Pathfinder {
    /// Create a new `Pathfinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: Vec::new(),
            slots: vec![Slot::default(); rng.len()],
            generation: 0,
            open: BinaryHeap::new(),
            seq: 0,
            nbuf: Neighbors::new(),
        }
    }

    /// Create a `Pathfinder` sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Replace the underlying range, reallocating the slot table if it grew.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        if rng.len() > self.slots.len() {
            self.slots.clear();
            self.slots.resize(rng.len(), Slot::default());
            self.generation = 0;
        }
        self.begin_run();
    }

    /// Number of nodes created by the most recent run.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every node from the previous run and open a new generation.
    pub(crate) fn begin_run(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.seq = 0;
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale slots could alias the new generation.
            self.slots.fill(Slot::default());
            self.generation = 1;
        }
    }

    /// Append a node to the arena and the frontier.
    pub(crate) fn push_node(&mut self, slot: usize, node: Node) {
        let idx = self.nodes.len();
        self.slots[slot] = Slot {
            generation: self.generation,
            node: idx,
        };
        self.open.push(NodeRef {
            node: idx,
            f: node.f(),
            seq: self.seq,
        });
        self.seq += 1;
        self.nodes.push(node);
    }

    /// Arena index of the node for flat cell index `slot`, if this run has
    /// discovered it.
    #[inline]
    pub(crate) fn discovered(&self, slot: usize) -> Option<usize> {
        let s = self.slots.get(slot)?;
        (s.generation == self.generation).then_some(s.node)
    }
}
