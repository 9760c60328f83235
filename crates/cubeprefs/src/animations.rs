use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

/// Layer rotation animation settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one layer rotation, in seconds. Half turns take the same
    /// time as quarter turns.
    pub twist_duration: f32,
    /// Easing curve for layer rotations.
    pub twist_interpolation: InterpolateFn,
    /// Number of animation frames per second.
    pub frame_rate: u32,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: 0.3,
            twist_interpolation: InterpolateFn::Quadratic,
            frame_rate: 60,
        }
    }
}
impl AnimationPreferences {
    /// Returns the duration of one layer rotation. Negative or non-finite
    /// durations are treated as zero.
    pub fn twist_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.twist_duration).unwrap_or(Duration::ZERO)
    }

    /// Returns the number of frames used to animate one layer rotation. This
    /// is always at least 1.
    pub fn frames_per_twist(&self) -> u32 {
        let frames = (self.twist_duration() * self.frame_rate).as_secs_f32().round();
        (frames as u32).max(1)
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize,
        Deserialize,
        Debug,
        Default,
        Copy,
        Clone,
        PartialEq,
        Eq,
        Hash,
        strum::VariantArray,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        /// Constant speed.
        Lerp,
        /// Quadratic ease-in-out.
        #[default]
        Quadratic,
        /// Cosine from 0 to PI.
        Cosine,
        /// Cubic smoothstep.
        Cubic,
        /// Two quarter circles.
        Circular,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1]. `t` is clamped first.
        pub fn interpolate(self, t: f32) -> f32 {
            let t = t.clamp(0.0, 1.0);
            match self {
                Self::Lerp => t,

                Self::Quadratic => {
                    if t < 0.5 {
                        2.0 * t * t
                    } else {
                        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                    }
                }

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::Cubic => (3.0 - 2.0 * t) * t * t,

                Self::Circular => {
                    if t < 0.5 {
                        (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) * 0.5
                    } else {
                        (1.0 + (1.0 - (-2.0 * t + 2.0).powi(2)).sqrt()) * 0.5
                    }
                }
            }
        }
    }
}
