//! Layer move engine for cubeplay.
//!
//! A [`CubeSession`] owns a [`CubeScene`] and a [`MoveEngine`]. Each twist is
//! animated by grouping one layer of cubies under a pivot, awaiting the
//! pivot's rotation, and only then permuting the logical facelet state.

mod engine;
pub mod geometry;
mod headless;
mod scene;
mod scramble;
mod session;

#[cfg(test)]
mod tests;

pub use engine::{EngineError, MoveEngine, layer_cubies};
pub use geometry::Piece;
pub use headless::{HeadlessScene, Playback};
pub use scene::*;
pub use scramble::generate_scramble;
pub use session::{ActionOutcome, BusyFlag, BusyGuard, CubeSession, LogStatusSink, Status, StatusSink};
