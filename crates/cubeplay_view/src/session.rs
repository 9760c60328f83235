//! Cube session: the one owner of all mutable cube state.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cubeplay_core::{FaceletState, Twist, notation::format_twists};
use cubeprefs::{Preferences, ScramblePreferences};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{CubeScene, EngineError, MoveEngine, generate_scramble};

/// Result of a user action on a [`CubeSession`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran to completion.
    Completed,
    /// Another action was in progress, so this one was ignored.
    Ignored,
    /// There was no recorded scramble to undo.
    NothingToSolve,
}

/// User-facing status message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Status {
    Scrambling { current: usize, total: usize },
    ScrambleComplete,
    Solving { current: usize, total: usize },
    Solved,
    ScrambleFirst,
    Applying { current: usize, total: usize },
    Done,
}
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Scrambling { current, total } => write!(f, "Scrambling... ({current}/{total})"),
            Status::ScrambleComplete => write!(f, "Scramble complete."),
            Status::Solving { current, total } => write!(f, "Solving... ({current}/{total})"),
            Status::Solved => write!(f, "Solved!"),
            Status::ScrambleFirst => write!(f, "Scramble first!"),
            Status::Applying { current, total } => write!(f, "Applying... ({current}/{total})"),
            Status::Done => write!(f, "Done."),
        }
    }
}

/// Receiver for status messages, such as a status bar.
pub trait StatusSink {
    /// Displays a new status, replacing the previous one.
    fn set_status(&mut self, status: &Status);
}
impl<F: FnMut(&Status)> StatusSink for F {
    fn set_status(&mut self, status: &Status) {
        self(status);
    }
}

/// Status sink that logs each status at the info level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogStatusSink;
impl StatusSink for LogStatusSink {
    fn set_status(&mut self, status: &Status) {
        log::info!("{status}");
    }
}

/// Flag that is set while an action is in progress.
///
/// Cloning the flag shares it, so a UI can hold a copy to poll.
#[derive(Debug, Default, Clone)]
pub struct BusyFlag(Arc<AtomicBool>);
impl BusyFlag {
    /// Returns whether an action is in progress.
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Sets the flag and returns a guard that clears it on drop, or returns
    /// `None` if the flag is already set.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(BusyGuard(self.clone()))
    }
}

/// Guard that clears a [`BusyFlag`] when dropped.
#[derive(Debug)]
#[must_use]
pub struct BusyGuard(BusyFlag);
impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.0.store(false, Ordering::Release);
    }
}

/// Interactive cube: a scene, its logical state, and the recorded scramble.
///
/// Actions are serialized by a busy flag. An action started while another is
/// in progress returns [`ActionOutcome::Ignored`] without doing anything.
pub struct CubeSession<S> {
    scene: S,
    engine: MoveEngine,
    last_scramble: Vec<Twist>,
    busy: BusyFlag,
    status: Box<dyn StatusSink + Send>,
    scramble_prefs: ScramblePreferences,
    rng: ChaCha8Rng,
}
impl<S: fmt::Debug> fmt::Debug for CubeSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubeSession")
            .field("scene", &self.scene)
            .field("engine", &self.engine)
            .field("last_scramble", &self.last_scramble)
            .field("busy", &self.busy)
            .finish_non_exhaustive()
    }
}
impl<S: CubeScene> CubeSession<S> {
    /// Constructs a session with a solved cube and paints the scene's
    /// stickers.
    pub fn new(mut scene: S, prefs: &Preferences, status: impl 'static + StatusSink + Send) -> Self {
        let rng = match prefs.scramble.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let engine = MoveEngine::new(prefs.animation.clone());
        engine.paint_stickers(&mut scene);
        Self {
            scene,
            engine,
            last_scramble: vec![],
            busy: BusyFlag::default(),
            status: Box::new(status),
            scramble_prefs: prefs.scramble.clone(),
            rng,
        }
    }

    /// Returns the logical facelet state.
    pub fn state(&self) -> &FaceletState {
        self.engine.state()
    }
    /// Returns the scene.
    pub fn scene(&self) -> &S {
        &self.scene
    }
    /// Returns the twists applied by the last scramble that have not been
    /// undone yet.
    pub fn last_scramble(&self) -> &[Twist] {
        &self.last_scramble
    }
    /// Returns a shared handle to the busy flag.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Scrambles the cube with a fresh random sequence and records it,
    /// replacing any previously recorded scramble.
    pub async fn scramble(&mut self) -> Result<ActionOutcome, EngineError> {
        let Some(_guard) = self.busy.try_acquire() else {
            log::debug!("busy; ignoring scramble");
            return Ok(ActionOutcome::Ignored);
        };

        let twists = generate_scramble(&mut self.rng, self.scramble_prefs.length);
        log::info!("scrambling: {}", format_twists(twists.iter().copied()));

        self.last_scramble.clear();
        let total = twists.len();
        for (i, twist) in twists.into_iter().enumerate() {
            self.status.set_status(&Status::Scrambling {
                current: i + 1,
                total,
            });
            self.engine.apply_twist(&mut self.scene, twist).await?;
            self.last_scramble.push(twist);
        }

        self.status.set_status(&Status::ScrambleComplete);
        Ok(ActionOutcome::Completed)
    }

    /// Undoes the recorded scramble by applying its inverse, then clears it.
    pub async fn solve(&mut self) -> Result<ActionOutcome, EngineError> {
        let Some(_guard) = self.busy.try_acquire() else {
            log::debug!("busy; ignoring solve");
            return Ok(ActionOutcome::Ignored);
        };

        if self.last_scramble.is_empty() {
            log::warn!("nothing to solve");
            self.status.set_status(&Status::ScrambleFirst);
            return Ok(ActionOutcome::NothingToSolve);
        }

        log::info!("solving {} twists", self.last_scramble.len());

        // Each twist is removed from the record only once its inverse has
        // been applied.
        let total = self.last_scramble.len();
        let mut current = 0;
        while let Some(&twist) = self.last_scramble.last() {
            current += 1;
            self.status.set_status(&Status::Solving { current, total });
            self.engine.apply_twist(&mut self.scene, twist.rev()).await?;
            self.last_scramble.pop();
        }

        self.status.set_status(&Status::Solved);
        Ok(ActionOutcome::Completed)
    }

    /// Applies a sequence of twists without recording them. A later
    /// [`Self::solve()`] does not undo them.
    pub async fn apply_sequence(&mut self, twists: &[Twist]) -> Result<ActionOutcome, EngineError> {
        let Some(_guard) = self.busy.try_acquire() else {
            log::debug!("busy; ignoring twist sequence");
            return Ok(ActionOutcome::Ignored);
        };

        log::info!("applying: {}", format_twists(twists.iter().copied()));

        let total = twists.len();
        for (i, &twist) in twists.iter().enumerate() {
            self.status.set_status(&Status::Applying {
                current: i + 1,
                total,
            });
            self.engine.apply_twist(&mut self.scene, twist).await?;
        }

        self.status.set_status(&Status::Done);
        Ok(ActionOutcome::Completed)
    }

    /// Resets the logical facelet state to solved and forgets the recorded
    /// scramble. Cubies in the scene are not moved.
    pub fn reset(&mut self) -> ActionOutcome {
        let Some(_guard) = self.busy.try_acquire() else {
            log::debug!("busy; ignoring reset");
            return ActionOutcome::Ignored;
        };
        log::info!("resetting cube state");
        self.engine.reset();
        self.last_scramble.clear();
        ActionOutcome::Completed
    }
}
