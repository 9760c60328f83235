use serde::{Deserialize, Serialize};

/// Scramble generation settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of moves in a scramble.
    pub length: usize,
    /// Seed for the scramble generator. If `None`, the generator is seeded
    /// from the OS and scrambles are not reproducible.
    pub seed: Option<u64>,
}
impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: 20,
            seed: None,
        }
    }
}
