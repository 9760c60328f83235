//! Permutation tables for quarter turns.
//!
//! These are lookup data and must not be derived from geometry: the neighbor
//! order and index triples determine exactly which facelets move where.

use crate::Face;

/// Facelet indices around the fixed center of a face, in the order that a
/// quarter turn cycles them.
pub(crate) const FACE_RING: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

/// Number of ring steps in one quarter turn.
pub(crate) const RING_SHIFT: usize = 2;

/// Facelet indices on one neighboring face that move with a quarter turn.
pub(crate) type NeighborStrip = (Face, [usize; 3]);

/// Returns the four neighbor strips of `face`, in cyclic order. During a
/// quarter turn, each strip receives the values of the strip before it.
pub(crate) const fn neighbor_strips(face: Face) -> [NeighborStrip; 4] {
    use Face::*;

    match face {
        U => [(F, [0, 1, 2]), (R, [0, 1, 2]), (B, [0, 1, 2]), (L, [0, 1, 2])],
        D => [(F, [6, 7, 8]), (L, [6, 7, 8]), (B, [6, 7, 8]), (R, [6, 7, 8])],
        F => [(U, [6, 7, 8]), (L, [2, 5, 8]), (D, [0, 1, 2]), (R, [0, 3, 6])],
        B => [(U, [0, 1, 2]), (R, [2, 5, 8]), (D, [6, 7, 8]), (L, [0, 3, 6])],
        L => [(U, [0, 3, 6]), (B, [2, 5, 8]), (D, [0, 3, 6]), (F, [0, 3, 6])],
        R => [(U, [2, 5, 8]), (F, [2, 5, 8]), (D, [2, 5, 8]), (B, [0, 3, 6])],
    }
}
