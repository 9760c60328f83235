//! Contract between the move engine and whatever displays the cube.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use cgmath::{Quaternion, Rad, Vector3};
use cubeplay_core::{Axis, Color, Face};
use cubeprefs::InterpolateFn;
use futures::channel::oneshot;

use crate::Piece;

/// Handle to a cubie in a scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubieId(pub usize);

/// Handle to a transient pivot group in a scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PivotId(pub usize);

/// Position and orientation of a cubie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    /// Center of the cubie.
    pub position: Vector3<f32>,
    /// Rotation of the cubie from its construction-time orientation.
    pub orientation: Quaternion<f32>,
}

/// Animated rotation of a pivot about one of the cube's axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerRotation {
    /// Axis of rotation.
    pub axis: Axis,
    /// Total signed angle to rotate through.
    pub angle: Rad<f32>,
    /// Time that the rotation should take.
    pub duration: Duration,
    /// Easing curve.
    pub interpolation: InterpolateFn,
}
impl LayerRotation {
    /// Returns the angle that the pivot should be at after fraction `t` of the
    /// duration has elapsed.
    pub fn angle_at(&self, t: f32) -> Rad<f32> {
        self.angle * self.interpolation.interpolate(t)
    }
}

/// Rendering collaborator that owns the cubies.
///
/// Cubies are created once with the scene and never destroyed. A layer twist
/// moves cubies from the main assembly into a pivot, rotates the pivot, and
/// then moves them back.
pub trait CubeScene {
    /// Returns all cubies in the scene.
    fn cubies(&self) -> Vec<CubieId>;
    /// Returns the piece that a cubie was constructed at. This never changes.
    fn original_piece(&self, cubie: CubieId) -> Piece;

    /// Creates an empty pivot group at the origin with no rotation.
    fn create_pivot(&mut self) -> PivotId;
    /// Moves a cubie from the main assembly into a pivot.
    fn attach_to_pivot(&mut self, pivot: PivotId, cubie: CubieId);
    /// Starts rotating a pivot and returns a future that resolves once the
    /// rotation is finished.
    fn animate_pivot(&mut self, pivot: PivotId, rotation: LayerRotation) -> AnimationDone;
    /// Returns the world transform of a cubie, whether it is in the main
    /// assembly or in a pivot.
    fn world_transform(&self, cubie: CubieId) -> Transform;
    /// Moves a cubie back into the main assembly with the given transform.
    fn attach_to_assembly(&mut self, cubie: CubieId, transform: Transform);
    /// Removes a pivot. The pivot must be empty.
    fn remove_pivot(&mut self, pivot: PivotId);

    /// Sets the color of the side of a cubie facing `face` in its
    /// construction-time orientation. `None` means the inner color.
    fn set_sticker_color(&mut self, cubie: CubieId, face: Face, color: Option<Color>);
}

/// Sending half of an animation completion signal, held by the scene.
#[derive(Debug)]
pub struct AnimationSignal(oneshot::Sender<()>);
impl AnimationSignal {
    /// Marks the animation as finished, waking whoever is awaiting it.
    pub fn complete(self) {
        // The receiver may have been dropped, in which case nobody cares.
        let _ = self.0.send(());
    }
}

/// Future that resolves when a pivot animation finishes.
///
/// Resolves to an error if the scene drops the [`AnimationSignal`] without
/// completing it.
#[derive(Debug)]
#[must_use = "animations must be awaited"]
pub struct AnimationDone(oneshot::Receiver<()>);
impl Future for AnimationDone {
    type Output = Result<(), AnimationInterrupted>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0)
            .poll(cx)
            .map_err(|_| AnimationInterrupted)
    }
}
impl AnimationDone {
    /// Returns a new completion signal and the future that it resolves.
    pub fn channel() -> (AnimationSignal, Self) {
        let (tx, rx) = oneshot::channel();
        (AnimationSignal(tx), Self(rx))
    }
}

/// Error returned when a scene abandons an animation.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("layer animation was interrupted")]
pub struct AnimationInterrupted;
