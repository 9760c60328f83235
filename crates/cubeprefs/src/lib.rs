//! User preferences for cubeplay.
//!
//! Preferences are merged from three sources, later ones taking priority:
//!
//! 1. Built-in defaults (`default.yaml`)
//! 2. A user preferences file in YAML
//! 3. Environment variables such as `CUBEPLAY_SCRAMBLE__LENGTH=30`

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

mod animations;
mod colors;
mod scramble;

pub use animations::*;
pub use colors::ColorScheme;
pub use scramble::ScramblePreferences;

#[macro_use]
extern crate lazy_static;

const PREFS_FILE_NAME: &str = "cubeplay";
const PREFS_FILE_EXTENSION: &str = "yaml";
const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBEPLAY";
const ENV_SEPARATOR: &str = "__";

lazy_static! {
    /// Default preferences, as written in `default.yaml`.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).unwrap_or_default();

    static ref PROJECT_DIRS: Option<ProjectDirs> = ProjectDirs::from("", "", "cubeplay");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Layer rotation animation.
    pub animation: AnimationPreferences,
    /// Scramble generation.
    pub scramble: ScramblePreferences,
    /// Sticker colors.
    pub colors: ColorScheme,
}
impl Preferences {
    /// Returns the path of the user preferences file in the platform config
    /// directory, or `None` if there is no home directory.
    pub fn default_path() -> Option<PathBuf> {
        let mut p = PROJECT_DIRS.as_ref()?.config_dir().to_owned();
        p.push(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}"));
        Some(p)
    }

    /// Loads preferences, merging the defaults, the user file at `path` (if
    /// it exists), and environment variables.
    pub fn try_load(path: Option<&Path>) -> eyre::Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = path {
            log::info!("Loading preferences from {}", path.display());
            config = config.add_source(config::File::from(path).required(false));
        }
        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );
        Ok(config.build()?.try_deserialize()?)
    }

    /// Loads preferences like [`Self::try_load()`], falling back to the
    /// defaults if anything goes wrong.
    pub fn load(path: Option<&Path>) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Saves preferences as YAML to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Returns the preferences serialized as YAML.
    pub fn to_yaml_string(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}
