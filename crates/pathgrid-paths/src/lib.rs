//! Deterministic A* search on 4-connected occupancy grids.
//!
//! The engine reports two things for every run:
//!
//! - the **exploration trace**: one [`Expansion`] per frontier pop, in order,
//!   suitable for step-by-step display;
//! - the **path**: start-to-goal cells, both endpoints included, or empty when
//!   the goal cannot be reached.
//!
//! Runs go through [`Pathfinder`], which owns and reuses its node arena and
//! frontier so that repeated queries incur no allocations after warm-up.
//! [`find_path`] is a one-shot shortcut.
//!
//! # Ordering rules
//!
//! | Rule | Value |
//! |---|---|
//! | Frontier key | `f = g + h`, smallest first |
//! | Tie-break | insertion order (FIFO) |
//! | Neighbor order | south, east, north, west ([`CARDINALS`]) |
//! | Heuristic | [`manhattan`] |
//!
//! A cell gets at most one node per run and that node is never updated, even
//! if a cheaper route to it appears later. The start cell's own occupancy is
//! not checked; a blocked goal is never discovered.

mod astar;
mod context;
mod distance;
mod event;
mod neighbors;
mod node;
mod pathfinder;

pub use astar::{Search, find_path};
pub use context::Context;
pub use distance::manhattan;
pub use event::{Expansion, SearchResult, SearchStatus};
pub use neighbors::{CARDINALS, Neighbors};
pub use pathfinder::Pathfinder;
