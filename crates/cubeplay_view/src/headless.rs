//! Scene graph that tracks cubie transforms without drawing anything.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use cgmath::{InnerSpace, One, Quaternion, Rotation, Rotation3};
use cubeplay_core::{Color, Face};
use cubeprefs::AnimationPreferences;
use parking_lot::Mutex;
use web_time::Instant;

use crate::geometry::{EPSILON, axis_vector};
use crate::{
    AnimationDone, AnimationSignal, CubeScene, CubieId, LayerRotation, Piece, PivotId, Transform,
};

/// How a [`HeadlessScene`] plays pivot animations.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Playback {
    /// Step through every frame immediately and complete the animation before
    /// returning.
    #[default]
    Instant,
    /// Animate on a background thread in real time, completing the animation
    /// once its duration has elapsed.
    Realtime,
}

#[derive(Debug, Clone)]
struct HeadlessCubie {
    piece: Piece,
    /// Pivot containing the cubie, or `None` if it is in the main assembly.
    parent: Option<PivotId>,
    /// Transform relative to the parent.
    local: Transform,
    stickers: [Option<Color>; 6],
}

#[derive(Debug, Clone)]
struct Pivot {
    rotation: Quaternion<f32>,
}

#[derive(Debug, Default)]
struct SceneGraph {
    cubies: Vec<HeadlessCubie>,
    pivots: HashMap<PivotId, Pivot>,
    next_pivot_id: usize,
    frames_drawn: u64,
}
impl SceneGraph {
    fn world_transform(&self, cubie: CubieId) -> Transform {
        let c = &self.cubies[cubie.0];
        match c.parent.and_then(|p| self.pivots.get(&p)) {
            Some(pivot) => Transform {
                position: pivot.rotation.rotate_vector(c.local.position),
                orientation: pivot.rotation * c.local.orientation,
            },
            None => c.local,
        }
    }

    fn set_pivot_progress(&mut self, pivot: PivotId, rotation: &LayerRotation, t: f32) {
        let Some(p) = self.pivots.get_mut(&pivot) else {
            log::warn!("animating nonexistent pivot {pivot:?}");
            return;
        };
        let angle = rotation.angle_at(t);
        p.rotation = Quaternion::from_axis_angle(axis_vector(rotation.axis), angle);
        self.frames_drawn += 1;
        log::trace!("pivot {pivot:?} at {:.3} rad (t={t:.3})", angle.0);
    }
}

/// Scene that keeps cubie positions and orientations in memory.
///
/// Cubies are positioned exactly as a renderer would position them, so the
/// move engine's layer selection works the same way against this scene as
/// against a real one.
#[derive(Debug)]
pub struct HeadlessScene {
    graph: Arc<Mutex<SceneGraph>>,
    playback: Playback,
    frame_rate: u32,
}
impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new(Playback::Instant, &AnimationPreferences::default())
    }
}
impl HeadlessScene {
    /// Constructs a scene with all 26 cubies in their home positions.
    pub fn new(playback: Playback, prefs: &AnimationPreferences) -> Self {
        let cubies = Piece::iter()
            .map(|piece| HeadlessCubie {
                piece,
                parent: None,
                local: Transform {
                    position: piece.home_position(),
                    orientation: Quaternion::one(),
                },
                stickers: [None; 6],
            })
            .collect();
        Self {
            graph: Arc::new(Mutex::new(SceneGraph {
                cubies,
                ..Default::default()
            })),
            playback,
            frame_rate: prefs.frame_rate.max(1),
        }
    }

    /// Returns the playback mode.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Returns the color of the side of a cubie that faced `face` when it was
    /// constructed.
    pub fn sticker_color(&self, cubie: CubieId, face: Face) -> Option<Color> {
        self.graph.lock().cubies[cubie.0].stickers[face.idx()]
    }

    /// Returns whether a cubie is at its construction-time position and
    /// orientation.
    pub fn is_home(&self, cubie: CubieId) -> bool {
        let graph = self.graph.lock();
        let home = graph.cubies[cubie.0].piece.home_position();
        let t = graph.world_transform(cubie);
        // `q` and `-q` are the same rotation.
        let identity = Quaternion::one();
        (t.position - home).magnitude() < EPSILON
            && (t.orientation.dot(identity).abs() - 1.0).abs() < EPSILON
    }

    /// Returns the number of pivots currently in the scene.
    pub fn pivot_count(&self) -> usize {
        self.graph.lock().pivots.len()
    }

    /// Returns the total number of animation frames drawn so far.
    pub fn frames_drawn(&self) -> u64 {
        self.graph.lock().frames_drawn
    }
}

impl CubeScene for HeadlessScene {
    fn cubies(&self) -> Vec<CubieId> {
        (0..self.graph.lock().cubies.len()).map(CubieId).collect()
    }
    fn original_piece(&self, cubie: CubieId) -> Piece {
        self.graph.lock().cubies[cubie.0].piece
    }

    fn create_pivot(&mut self) -> PivotId {
        let mut graph = self.graph.lock();
        let id = PivotId(graph.next_pivot_id);
        graph.next_pivot_id += 1;
        graph.pivots.insert(
            id,
            Pivot {
                rotation: Quaternion::one(),
            },
        );
        id
    }

    fn attach_to_pivot(&mut self, pivot: PivotId, cubie: CubieId) {
        let mut graph = self.graph.lock();
        let world = graph.world_transform(cubie);
        let Some(inverse) = graph.pivots.get(&pivot).map(|p| p.rotation.conjugate()) else {
            log::warn!("attaching {cubie:?} to nonexistent pivot {pivot:?}");
            return;
        };
        let c = &mut graph.cubies[cubie.0];
        c.parent = Some(pivot);
        c.local = Transform {
            position: inverse.rotate_vector(world.position),
            orientation: inverse * world.orientation,
        };
    }

    fn animate_pivot(&mut self, pivot: PivotId, rotation: LayerRotation) -> AnimationDone {
        let (signal, done) = AnimationDone::channel();
        match self.playback {
            Playback::Instant => {
                let frames = (rotation.duration.as_secs_f32() * self.frame_rate as f32)
                    .round()
                    .max(1.0) as u32;
                let mut graph = self.graph.lock();
                for i in 1..=frames {
                    graph.set_pivot_progress(pivot, &rotation, i as f32 / frames as f32);
                }
                signal.complete();
            }
            Playback::Realtime => {
                let graph = Arc::clone(&self.graph);
                let frame_interval = Duration::from_secs(1) / self.frame_rate;
                std::thread::spawn(move || {
                    run_realtime(&graph, pivot, rotation, frame_interval, signal);
                });
            }
        }
        done
    }

    fn world_transform(&self, cubie: CubieId) -> Transform {
        self.graph.lock().world_transform(cubie)
    }

    fn attach_to_assembly(&mut self, cubie: CubieId, transform: Transform) {
        let c = &mut self.graph.lock().cubies[cubie.0];
        c.parent = None;
        c.local = Transform {
            position: transform.position,
            orientation: transform.orientation.normalize(),
        };
    }

    fn remove_pivot(&mut self, pivot: PivotId) {
        let mut graph = self.graph.lock();
        if graph.cubies.iter().any(|c| c.parent == Some(pivot)) {
            log::warn!("removing nonempty pivot {pivot:?}");
        }
        graph.pivots.remove(&pivot);
    }

    fn set_sticker_color(&mut self, cubie: CubieId, face: Face, color: Option<Color>) {
        self.graph.lock().cubies[cubie.0].stickers[face.idx()] = color;
    }
}

fn run_realtime(
    graph: &Mutex<SceneGraph>,
    pivot: PivotId,
    rotation: LayerRotation,
    frame_interval: Duration,
    signal: AnimationSignal,
) {
    let start = Instant::now();
    let duration = rotation.duration.as_secs_f32();
    loop {
        let t = if duration > 0.0 {
            (start.elapsed().as_secs_f32() / duration).min(1.0)
        } else {
            1.0
        };
        graph.lock().set_pivot_progress(pivot, &rotation, t);
        if t >= 1.0 {
            break;
        }
        std::thread::sleep(frame_interval);
    }
    signal.complete();
}
