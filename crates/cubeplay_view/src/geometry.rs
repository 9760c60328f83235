//! Cube geometry: cubie lattice, layer membership, and sticker mapping.

use std::f32::consts::FRAC_PI_2;
use std::ops::Index;

use cgmath::{Rad, Vector3};
use cubeplay_core::{Axis, Face, Sign, Twist};

/// Edge length of a cubie.
pub const CUBIE_SIZE: f32 = 1.0;
/// Gap between adjacent cubies.
pub const CUBIE_SPACING: f32 = 0.05;
/// Distance between the centers of adjacent cubies.
pub const TOTAL_CUBIE_SIZE: f32 = CUBIE_SIZE + CUBIE_SPACING;
/// Coordinate of the outer layer along its axis.
pub const LAYER_OFFSET: f32 = TOTAL_CUBIE_SIZE;
/// Tolerance for comparing cubie coordinates.
pub const EPSILON: f32 = 0.01;

/// Location of a cubie in the 3x3x3 lattice, as a sign along each axis.
///
/// Each cubie keeps the piece it was constructed at for its whole lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece(pub [Sign; 3]);
impl Index<Axis> for Piece {
    type Output = Sign;

    fn index(&self, axis: Axis) -> &Sign {
        &self.0[axis.int()]
    }
}
impl Piece {
    /// Returns the piece at the center of the puzzle, which is not visible.
    pub const fn core() -> Self {
        Self([Sign::Zero; 3])
    }

    /// Returns the X coordinate of this piece.
    pub fn x(self) -> Sign {
        self[Axis::X]
    }
    /// Returns the Y coordinate of this piece.
    pub fn y(self) -> Sign {
        self[Axis::Y]
    }
    /// Returns the Z coordinate of this piece.
    pub fn z(self) -> Sign {
        self[Axis::Z]
    }

    /// Returns the number of stickers on this piece.
    pub fn sticker_count(self) -> usize {
        self.0.iter().filter(|s| s.is_nonzero()).count()
    }

    /// Returns the center of the piece when the cube is solved.
    pub fn home_position(self) -> Vector3<f32> {
        let [x, y, z] = self.0.map(|s| s.float() * TOTAL_CUBIE_SIZE);
        Vector3::new(x, y, z)
    }

    /// Returns an iterator over all 26 visible pieces, in X-major order.
    pub fn iter() -> impl Iterator<Item = Self> {
        Sign::iter()
            .flat_map(|x| Sign::iter().map(move |y| (x, y)))
            .flat_map(|(x, y)| Sign::iter().map(move |z| Self([x, y, z])))
            .filter(|&p| p != Self::core())
    }
}

/// Returns the unit vector along `axis`.
pub fn axis_vector(axis: Axis) -> Vector3<f32> {
    match axis {
        Axis::X => Vector3::unit_x(),
        Axis::Y => Vector3::unit_y(),
        Axis::Z => Vector3::unit_z(),
    }
}

/// Returns whether a cubie centered at `position` is in the outer layer of
/// `face`.
pub fn is_in_layer(position: Vector3<f32>, face: Face) -> bool {
    let layer = face.sign().float() * LAYER_OFFSET;
    (position[face.axis().int()] - layer).abs() < EPSILON
}

/// Returns the signed angle that the layer rotates through for `twist`.
///
/// Twists of U, R, and F rotate positively about their axis; D, L, and B
/// rotate negatively. Counterclockwise twists reverse this, and half turns
/// rotate through two quarter turns in the clockwise direction.
pub fn twist_angle(twist: Twist) -> Rad<f32> {
    let quarter_turns = f32::from(twist.direction.signed_quarter_turns());
    Rad(twist.axis_sign().float() * quarter_turns * FRAC_PI_2)
}

/// Returns the facelet index on `face` that shows the sticker of the cubie
/// constructed at `piece`.
///
/// The lookup always uses the construction-time piece, never the cubie's
/// current position.
pub fn sticker_facelet(face: Face, piece: Piece) -> usize {
    let [x, y, z] = piece.0;
    match face {
        Face::R => [2, 5, 8, 1, 4, 7, 0, 3, 6][z.idx() + (-y).idx() * 3],
        Face::L => [6, 3, 0, 7, 4, 1, 8, 5, 2][z.idx() + (-y).idx() * 3],
        Face::U => [0, 1, 2, 3, 4, 5, 6, 7, 8][x.idx() + z.idx() * 3],
        Face::D => [6, 7, 8, 3, 4, 5, 0, 1, 2][x.idx() + (-z).idx() * 3],
        Face::F => [0, 1, 2, 3, 4, 5, 6, 7, 8][x.idx() + (-y).idx() * 3],
        Face::B => [2, 1, 0, 5, 4, 3, 8, 7, 6][x.idx() + (-y).idx() * 3],
    }
}
