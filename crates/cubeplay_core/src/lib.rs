//! Facelet state model for a 3x3x3 Rubik's cube.
//!
//! The cube is stored as six faces of nine color labels each. Twists permute
//! those labels using fixed lookup tables; nothing here knows about 3D
//! geometry or animation.

mod color;
mod face;
pub mod notation;
mod rgb;
mod sign;
mod state;
mod tables;
mod twist;


pub use color::Color;
pub use face::{Axis, Face};
pub use rgb::Rgb;
pub use sign::Sign;
pub use state::FaceletState;
pub use twist::{Twist, TwistDirection, TwistParseError};

/// Number of facelets on each face.
pub const FACELETS_PER_FACE: usize = 9;

/// Version string such as `cubeplay_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
