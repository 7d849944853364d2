//! Interactive session state for the pathgrid pathfinder.
//!
//! This crate holds everything between raw user input and the search engine:
//! a [`Session`] that tracks the grid, the chosen endpoints and the last
//! result, and a [`Playback`] cursor that lets a front end animate the
//! exploration trace at its own pace. Rendering and input polling stay with
//! the front end.

pub mod config;
pub mod error;
pub mod playback;
pub mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use playback::Playback;
pub use session::{CellView, Session};
