use std::fmt;
use std::ops::{Index, IndexMut};

use crate::tables::{FACE_RING, RING_SHIFT, neighbor_strips};
use crate::{Color, FACELETS_PER_FACE, Face, Twist};

/// Color labels of all 54 facelets, stored as nine row-major labels per face.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletState([[Color; FACELETS_PER_FACE]; 6]);
impl Default for FaceletState {
    fn default() -> Self {
        Self::solved()
    }
}
impl Index<Face> for FaceletState {
    type Output = [Color; FACELETS_PER_FACE];

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face.idx()]
    }
}
impl IndexMut<Face> for FaceletState {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face.idx()]
    }
}
impl FaceletState {
    /// Returns a solved cube, with every face its initial color.
    pub fn solved() -> Self {
        Self(Face::ALL.map(|face| [face.initial_color(); FACELETS_PER_FACE]))
    }

    /// Resets every facelet to its face's initial color.
    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    /// Returns whether every face is a single color matching its initial
    /// color.
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Returns the number of facelets of each color, indexed by
    /// [`Color::idx()`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.0.iter().flatten() {
            counts[color.idx()] += 1;
        }
        counts
    }

    /// Applies one clockwise quarter turn of `face`.
    ///
    /// The ring of eight non-center facelets on `face` is shifted by two steps
    /// and the four neighbor strips are cycled by one.
    pub fn rotate_face_quarter_turn(&mut self, face: Face) {
        let old = self[face];
        let ring_len = FACE_RING.len();
        for (i, &dst) in FACE_RING.iter().enumerate() {
            let src = FACE_RING[(i + ring_len - RING_SHIFT) % ring_len];
            self[face][dst] = old[src];
        }

        let strips = neighbor_strips(face);
        let (last_face, last_indices) = strips[3];
        let saved = last_indices.map(|i| self[last_face][i]);
        for i in (1..4).rev() {
            let (dst_face, dst_indices) = strips[i];
            let (src_face, src_indices) = strips[i - 1];
            for (dst, src) in std::iter::zip(dst_indices, src_indices) {
                self[dst_face][dst] = self[src_face][src];
            }
        }
        let (first_face, first_indices) = strips[0];
        for (dst, value) in std::iter::zip(first_indices, saved) {
            self[first_face][dst] = value;
        }
    }

    /// Applies a twist as a sequence of clockwise quarter turns.
    pub fn apply_twist(&mut self, twist: Twist) {
        log::trace!("applying {twist} to facelet state");
        for _ in 0..twist.direction.quarter_turns() {
            self.rotate_face_quarter_turn(twist.face);
        }
    }

    /// Applies a sequence of twists in order.
    pub fn apply_twists(&mut self, twists: impl IntoIterator<Item = Twist>) {
        for twist in twists {
            self.apply_twist(twist);
        }
    }
}

/// Prints the cube as an unfolded net, with U above and D below the row
/// `L F R B`.
impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |face: Face, r: usize| {
            let [a, b, c] = [0, 1, 2].map(|col| self[face][r * 3 + col]);
            format!("{a} {b} {c}")
        };
        for r in 0..3 {
            writeln!(f, "      {}", row(Face::U, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::L, r),
                row(Face::F, r),
                row(Face::R, r),
                row(Face::B, r),
            )?;
        }
        for r in 0..3 {
            writeln!(f, "      {}", row(Face::D, r))?;
        }
        Ok(())
    }
}
