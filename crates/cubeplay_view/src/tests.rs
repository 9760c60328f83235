use std::collections::HashSet;
use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;
use std::time::Duration;

use cgmath::InnerSpace;
use cubeplay_core::notation::parse_twists;
use cubeplay_core::{Axis, Color, Face, FaceletState, Sign, Twist, TwistDirection};
use cubeprefs::{AnimationPreferences, InterpolateFn, Preferences};
use parking_lot::Mutex;
use pollster::block_on;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::geometry::{sticker_facelet, twist_angle};
use crate::*;

fn twists(s: &str) -> Vec<Twist> {
    parse_twists(s).collect::<Result<_, _>>().unwrap()
}

fn seeded_prefs(seed: u64) -> Preferences {
    let mut prefs = Preferences::default();
    prefs.scramble.seed = Some(seed);
    prefs
}

fn new_session(prefs: &Preferences) -> (CubeSession<HeadlessScene>, Arc<Mutex<Vec<Status>>>) {
    let statuses = Arc::new(Mutex::new(vec![]));
    let sink = {
        let statuses = Arc::clone(&statuses);
        move |status: &Status| statuses.lock().push(*status)
    };
    let scene = HeadlessScene::new(Playback::Instant, &prefs.animation);
    (CubeSession::new(scene, prefs, sink), statuses)
}

fn all_home(scene: &HeadlessScene) -> bool {
    scene.cubies().into_iter().all(|cubie| scene.is_home(cubie))
}

/// Scene whose animations never finish.
#[derive(Debug, Default)]
struct InterruptingScene(HeadlessScene);
impl CubeScene for InterruptingScene {
    fn cubies(&self) -> Vec<CubieId> {
        self.0.cubies()
    }
    fn original_piece(&self, cubie: CubieId) -> Piece {
        self.0.original_piece(cubie)
    }
    fn create_pivot(&mut self) -> PivotId {
        self.0.create_pivot()
    }
    fn attach_to_pivot(&mut self, pivot: PivotId, cubie: CubieId) {
        self.0.attach_to_pivot(pivot, cubie);
    }
    fn animate_pivot(&mut self, _pivot: PivotId, _rotation: LayerRotation) -> AnimationDone {
        let (_signal, done) = AnimationDone::channel();
        done
    }
    fn world_transform(&self, cubie: CubieId) -> Transform {
        self.0.world_transform(cubie)
    }
    fn attach_to_assembly(&mut self, cubie: CubieId, transform: Transform) {
        self.0.attach_to_assembly(cubie, transform);
    }
    fn remove_pivot(&mut self, pivot: PivotId) {
        self.0.remove_pivot(pivot);
    }
    fn set_sticker_color(&mut self, cubie: CubieId, face: Face, color: Option<Color>) {
        self.0.set_sticker_color(cubie, face, color);
    }
}

#[test]
fn test_piece_lattice() {
    assert_eq!(Piece::iter().count(), 26);
    assert!(Piece::iter().all(|p| p != Piece::core()));

    let sticker_counts = Piece::iter().fold([0; 4], |mut counts, p| {
        counts[p.sticker_count()] += 1;
        counts
    });
    // centers, edges, corners
    assert_eq!(sticker_counts, [0, 6, 12, 8]);
}

#[test]
fn test_layer_selection() {
    let scene = HeadlessScene::default();
    for face in Face::ALL {
        let layer = layer_cubies(&scene, face);
        assert_eq!(layer.len(), 9, "{face}");
        for cubie in layer {
            assert_eq!(scene.original_piece(cubie)[face.axis()], face.sign());
        }
    }
}

#[test]
fn test_twist_angle_signs() {
    let angle = |s: &str| twist_angle(s.parse().unwrap()).0;
    assert_eq!(angle("U"), FRAC_PI_2);
    assert_eq!(angle("R"), FRAC_PI_2);
    assert_eq!(angle("F"), FRAC_PI_2);
    assert_eq!(angle("D"), -FRAC_PI_2);
    assert_eq!(angle("L"), -FRAC_PI_2);
    assert_eq!(angle("B"), -FRAC_PI_2);
    assert_eq!(angle("R'"), -FRAC_PI_2);
    assert_eq!(angle("L'"), FRAC_PI_2);
    assert_eq!(angle("U2"), PI);
    assert_eq!(angle("D2"), -PI);
}

#[test]
fn test_layer_rotation() {
    let prefs = AnimationPreferences {
        twist_duration: 0.5,
        twist_interpolation: InterpolateFn::Cosine,
        frame_rate: 60,
    };
    let engine = MoveEngine::new(prefs);
    let rotation = engine.layer_rotation("B'".parse().unwrap());
    assert_eq!(rotation.axis, Axis::Z);
    assert_eq!(rotation.angle.0, FRAC_PI_2);
    assert_eq!(rotation.duration, Duration::from_millis(500));
    assert_eq!(rotation.interpolation, InterpolateFn::Cosine);
    assert_eq!(rotation.angle_at(0.0).0, 0.0);
    assert_eq!(rotation.angle_at(1.0).0, FRAC_PI_2);
}

#[test]
fn test_sticker_facelets_cover_each_face() {
    for face in Face::ALL {
        let facelets: HashSet<usize> = Piece::iter()
            .filter(|p| p[face.axis()] == face.sign())
            .map(|p| sticker_facelet(face, p))
            .collect();
        assert_eq!(facelets, (0..9).collect(), "{face}");
    }
    // Centers always show facelet 4.
    for face in Face::ALL {
        let mut center = Piece::core();
        center.0[face.axis().int()] = face.sign();
        assert_eq!(sticker_facelet(face, center), 4);
    }
}

#[test]
fn test_paint_stickers() {
    let (session, _) = new_session(&Preferences::default());
    let scene = session.scene();

    let mut color_counts = [0; 6];
    for cubie in scene.cubies() {
        let piece = scene.original_piece(cubie);
        let mut stickers = 0;
        for face in Face::ALL {
            if let Some(color) = scene.sticker_color(cubie, face) {
                assert_eq!(color, face.initial_color());
                color_counts[color.idx()] += 1;
                stickers += 1;
            }
        }
        assert_eq!(stickers, piece.sticker_count());
    }
    assert_eq!(color_counts, [9; 6]);
}

#[test]
fn test_twist_moves_layer() {
    let mut scene = HeadlessScene::default();
    let mut engine = MoveEngine::default();

    block_on(engine.apply_twist(&mut scene, "R".parse().unwrap())).unwrap();

    let mut expected = FaceletState::solved();
    expected.rotate_face_quarter_turn(Face::R);
    assert_eq!(*engine.state(), expected);
    assert_eq!(scene.pivot_count(), 0);

    for cubie in scene.cubies() {
        let piece = scene.original_piece(cubie);
        let position = scene.world_transform(cubie).position;
        if piece.x() == Sign::Pos {
            // Still in the R layer, and moved unless it is the center.
            assert!((position.x - geometry::LAYER_OFFSET).abs() < geometry::EPSILON);
            let moved = (position - piece.home_position()).magnitude() > geometry::EPSILON;
            assert_eq!(moved, piece.sticker_count() > 1);
            assert!(!scene.is_home(cubie));
        } else {
            assert!(scene.is_home(cubie));
        }
    }
    for face in Face::ALL {
        assert_eq!(layer_cubies(&scene, face).len(), 9, "{face}");
    }
}

#[test]
fn test_twist_then_inverse_restores_cubies() {
    let mut scene = HeadlessScene::default();
    let mut engine = MoveEngine::default();
    for twist in Twist::iter() {
        block_on(engine.apply_twist(&mut scene, twist)).unwrap();
        block_on(engine.apply_twist(&mut scene, twist.rev())).unwrap();
        assert!(all_home(&scene), "{twist}");
        assert!(engine.state().is_solved(), "{twist}");
    }
}

#[test]
fn test_twist_order() {
    let mut scene = HeadlessScene::default();
    let mut engine = MoveEngine::default();
    let twist = "F".parse().unwrap();
    for _ in 0..4 {
        block_on(engine.apply_twist(&mut scene, twist)).unwrap();
    }
    assert!(all_home(&scene));

    let twist = "D2".parse().unwrap();
    for _ in 0..2 {
        block_on(engine.apply_twist(&mut scene, twist)).unwrap();
    }
    assert!(all_home(&scene));
    assert!(engine.state().is_solved());
}

#[test]
fn test_instant_playback_frame_count() {
    let prefs = AnimationPreferences::default();
    let mut scene = HeadlessScene::new(Playback::Instant, &prefs);
    let mut engine = MoveEngine::new(prefs.clone());
    block_on(engine.apply_twist(&mut scene, "U".parse().unwrap())).unwrap();
    assert_eq!(scene.frames_drawn(), u64::from(prefs.frames_per_twist()));
}

#[test]
fn test_realtime_playback() {
    let prefs = AnimationPreferences {
        twist_duration: 0.02,
        twist_interpolation: InterpolateFn::Quadratic,
        frame_rate: 500,
    };
    let mut scene = HeadlessScene::new(Playback::Realtime, &prefs);
    let mut engine = MoveEngine::new(prefs);

    block_on(engine.apply_twist(&mut scene, "L".parse().unwrap())).unwrap();
    assert!(scene.frames_drawn() >= 1);
    assert!(!all_home(&scene));
    assert_eq!(scene.pivot_count(), 0);

    block_on(engine.apply_twist(&mut scene, "L'".parse().unwrap())).unwrap();
    assert!(all_home(&scene));
    assert!(engine.state().is_solved());
}

#[test]
fn test_interrupted_animation() {
    let mut scene = InterruptingScene::default();
    let mut engine = MoveEngine::default();

    let result = block_on(engine.apply_twist(&mut scene, "U".parse().unwrap()));
    assert_eq!(result, Err(EngineError::AnimationInterrupted(AnimationInterrupted)));
    assert!(engine.state().is_solved());
    assert_eq!(scene.0.pivot_count(), 0);
    assert!(all_home(&scene.0));

    let prefs = seeded_prefs(1);
    let mut session = CubeSession::new(InterruptingScene::default(), &prefs, LogStatusSink);
    assert!(block_on(session.scramble()).is_err());
    assert!(session.last_scramble().is_empty());
    assert!(!session.busy_flag().is_busy());
}

#[test]
fn test_generate_scramble() {
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let scramble = generate_scramble(&mut rng, 20);
    assert_eq!(scramble.len(), 20);
    for pair in scramble.windows(2) {
        assert_ne!(pair[0].face, pair[1].face);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(123);
    assert_eq!(generate_scramble(&mut rng, 20), scramble);

    assert!(generate_scramble(&mut rng, 0).is_empty());
}

#[test]
fn test_scramble_then_solve() {
    let prefs = seeded_prefs(2024);
    let (mut session, statuses) = new_session(&prefs);

    assert_eq!(block_on(session.scramble()), Ok(ActionOutcome::Completed));
    assert_eq!(session.last_scramble().len(), 20);
    let mut expected = FaceletState::solved();
    expected.apply_twists(session.last_scramble().iter().copied());
    assert_eq!(*session.state(), expected);
    assert!(!session.busy_flag().is_busy());

    assert_eq!(block_on(session.solve()), Ok(ActionOutcome::Completed));
    assert!(session.state().is_solved());
    assert!(session.last_scramble().is_empty());
    assert!(all_home(session.scene()));
    assert_eq!(session.scene().pivot_count(), 0);

    let statuses = statuses.lock();
    assert_eq!(statuses.len(), 42);
    assert_eq!(statuses[0], Status::Scrambling { current: 1, total: 20 });
    assert_eq!(statuses[19], Status::Scrambling { current: 20, total: 20 });
    assert_eq!(statuses[20], Status::ScrambleComplete);
    assert_eq!(statuses[21], Status::Solving { current: 1, total: 20 });
    assert_eq!(statuses[41], Status::Solved);
    assert_eq!(statuses[20].to_string(), "Scramble complete.");
    assert_eq!(statuses[21].to_string(), "Solving... (1/20)");
}

#[test]
fn test_seeded_scrambles_are_reproducible() {
    let prefs = seeded_prefs(99);
    let (mut a, _) = new_session(&prefs);
    let (mut b, _) = new_session(&prefs);
    block_on(a.scramble()).unwrap();
    block_on(b.scramble()).unwrap();
    assert_eq!(a.last_scramble(), b.last_scramble());
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_scramble_replaces_previous_scramble() {
    let mut prefs = seeded_prefs(5);
    prefs.scramble.length = 8;
    let (mut session, _) = new_session(&prefs);

    block_on(session.scramble()).unwrap();
    block_on(session.scramble()).unwrap();
    assert_eq!(session.last_scramble().len(), 8);

    // Solving only undoes the second scramble.
    block_on(session.solve()).unwrap();
    assert!(session.last_scramble().is_empty());
}

#[test]
fn test_solve_without_scramble() {
    let (mut session, statuses) = new_session(&Preferences::default());

    assert_eq!(block_on(session.solve()), Ok(ActionOutcome::NothingToSolve));
    assert!(session.state().is_solved());
    assert_eq!(session.scene().frames_drawn(), 0);
    assert!(!session.busy_flag().is_busy());
    assert_eq!(*statuses.lock(), vec![Status::ScrambleFirst]);
    assert_eq!(Status::ScrambleFirst.to_string(), "Scramble first!");
}

#[test]
fn test_busy_session_ignores_actions() {
    let (mut session, statuses) = new_session(&seeded_prefs(3));
    let busy = session.busy_flag();

    let guard = busy.try_acquire().unwrap();
    assert!(busy.is_busy());
    assert!(busy.try_acquire().is_none());

    assert_eq!(block_on(session.scramble()), Ok(ActionOutcome::Ignored));
    assert_eq!(block_on(session.solve()), Ok(ActionOutcome::Ignored));
    assert_eq!(
        block_on(session.apply_sequence(&twists("R U"))),
        Ok(ActionOutcome::Ignored),
    );
    assert_eq!(session.reset(), ActionOutcome::Ignored);
    assert!(statuses.lock().is_empty());
    assert!(session.state().is_solved());

    drop(guard);
    assert!(!busy.is_busy());
    assert_eq!(block_on(session.scramble()), Ok(ActionOutcome::Completed));
    assert!(!busy.is_busy());
}

#[test]
fn test_apply_sequence() {
    let (mut session, statuses) = new_session(&Preferences::default());
    let seq = twists("R U R' U' F2");

    assert_eq!(block_on(session.apply_sequence(&seq)), Ok(ActionOutcome::Completed));
    let mut expected = FaceletState::solved();
    expected.apply_twists(seq.iter().copied());
    assert_eq!(*session.state(), expected);
    assert!(session.last_scramble().is_empty());

    let statuses = statuses.lock();
    assert_eq!(statuses.len(), 6);
    assert_eq!(statuses[4].to_string(), "Applying... (5/5)");
    assert_eq!(statuses[5], Status::Done);
}

#[test]
fn test_reset() {
    let (mut session, _) = new_session(&seeded_prefs(8));
    block_on(session.scramble()).unwrap();

    assert_eq!(session.reset(), ActionOutcome::Completed);
    assert!(session.state().is_solved());
    assert!(session.last_scramble().is_empty());
    assert_eq!(block_on(session.solve()), Ok(ActionOutcome::NothingToSolve));
}

fn arb_twist() -> impl Strategy<Value = Twist> {
    (0..6_usize, 0..3_usize)
        .prop_map(|(f, d)| Twist::new(Face::ALL[f], TwistDirection::ALL[d]))
}

proptest! {
    #[test]
    fn proptest_layers_always_have_nine_cubies(seq in prop::collection::vec(arb_twist(), 0..12)) {
        let mut scene = HeadlessScene::default();
        let mut engine = MoveEngine::default();
        for twist in seq {
            block_on(engine.apply_twist(&mut scene, twist)).unwrap();
            for face in Face::ALL {
                prop_assert_eq!(layer_cubies(&scene, face).len(), 9);
            }
        }
    }

    #[test]
    fn proptest_scramble_then_solve(seed in any::<u64>(), length in 0..30_usize) {
        let mut prefs = seeded_prefs(seed);
        prefs.scramble.length = length;
        prefs.animation.frame_rate = 10;
        let (mut session, _) = new_session(&prefs);

        prop_assert_eq!(block_on(session.scramble()), Ok(ActionOutcome::Completed));
        for pair in session.last_scramble().windows(2) {
            prop_assert_ne!(pair[0].face, pair[1].face);
        }
        let expected = if length == 0 { ActionOutcome::NothingToSolve } else { ActionOutcome::Completed };
        prop_assert_eq!(block_on(session.solve()), Ok(expected));
        prop_assert!(session.state().is_solved());
        prop_assert!(all_home(session.scene()));
    }
}
