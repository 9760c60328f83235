//! Layer move engine.

use cubeplay_core::{Face, FaceletState, Twist};
use cubeprefs::AnimationPreferences;
use smallvec::SmallVec;

use crate::geometry::{is_in_layer, sticker_facelet, twist_angle};
use crate::{AnimationInterrupted, CubeScene, CubieId, LayerRotation};

/// Error returned by [`MoveEngine::apply_twist()`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The scene abandoned the layer animation. The facelet state was not
    /// changed.
    #[error(transparent)]
    AnimationInterrupted(#[from] AnimationInterrupted),
}

/// Applies twists to a scene and to the logical facelet state in lockstep.
#[derive(Debug, Default, Clone)]
pub struct MoveEngine {
    state: FaceletState,
    prefs: AnimationPreferences,
}
impl MoveEngine {
    /// Constructs an engine with a solved facelet state.
    pub fn new(prefs: AnimationPreferences) -> Self {
        Self {
            state: FaceletState::solved(),
            prefs,
        }
    }

    /// Returns the logical facelet state.
    pub fn state(&self) -> &FaceletState {
        &self.state
    }
    /// Resets the logical facelet state to solved. The scene is left alone.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Returns the animation preferences.
    pub fn prefs(&self) -> &AnimationPreferences {
        &self.prefs
    }
    /// Replaces the animation preferences. Takes effect on the next twist.
    pub fn set_prefs(&mut self, prefs: AnimationPreferences) {
        self.prefs = prefs;
    }

    /// Returns the pivot rotation used to animate `twist`.
    pub fn layer_rotation(&self, twist: Twist) -> LayerRotation {
        LayerRotation {
            axis: twist.face.axis(),
            angle: twist_angle(twist),
            duration: self.prefs.twist_duration(),
            interpolation: self.prefs.twist_interpolation,
        }
    }

    /// Animates `twist` in the scene, waits for the animation to finish, and
    /// then applies it to the facelet state.
    ///
    /// If the animation is interrupted, the layer's cubies are still returned
    /// to the main assembly but the facelet state is unchanged.
    pub async fn apply_twist<S: CubeScene + ?Sized>(
        &mut self,
        scene: &mut S,
        twist: Twist,
    ) -> Result<(), EngineError> {
        log::debug!("applying {twist}");

        let layer = layer_cubies(scene, twist.face);
        if layer.len() != 9 {
            log::warn!("layer {} has {} cubies", twist.face, layer.len());
        }

        let pivot = scene.create_pivot();
        for &cubie in &layer {
            scene.attach_to_pivot(pivot, cubie);
        }

        let result = scene.animate_pivot(pivot, self.layer_rotation(twist)).await;

        for &cubie in &layer {
            let transform = scene.world_transform(cubie);
            scene.attach_to_assembly(cubie, transform);
        }
        scene.remove_pivot(pivot);

        result?;

        for _ in 0..twist.direction.quarter_turns() {
            self.state.rotate_face_quarter_turn(twist.face);
        }
        Ok(())
    }

    /// Colors every sticker in the scene from the facelet state. Sides of
    /// cubies that are not on an outer layer get the inner color.
    pub fn paint_stickers<S: CubeScene + ?Sized>(&self, scene: &mut S) {
        for cubie in scene.cubies() {
            let position = scene.world_transform(cubie).position;
            let piece = scene.original_piece(cubie);
            for face in Face::ALL {
                let color = is_in_layer(position, face)
                    .then(|| self.state[face][sticker_facelet(face, piece)]);
                scene.set_sticker_color(cubie, face, color);
            }
        }
    }
}

/// Returns the cubies currently in the outer layer of `face`.
pub fn layer_cubies<S: CubeScene + ?Sized>(scene: &S, face: Face) -> SmallVec<[CubieId; 9]> {
    scene
        .cubies()
        .into_iter()
        .filter(|&cubie| is_in_layer(scene.world_transform(cubie).position, face))
        .collect()
}
