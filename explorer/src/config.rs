//! Explorer settings, read from a TOML file.
//!
//! Every field is optional; missing ones take the defaults below.
//!
//! ```toml
//! branches = [1, 3, 5, 7]
//! degrees = [5, 6, 7, 8, 9]
//! top_relations = 10
//! chord_size = 3
//! best_chords = 10
//! focus_pitch_class = "7/4"
//! focus_mode_rank = 0
//! related_rank = 0
//! ```

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use serde::Deserialize;

static DEFAULT_BRANCHES: [u32; 4] = [1, 3, 5, 7];
static DEFAULT_DEGREES: [u32; 5] = [5, 6, 7, 8, 9];
static DEFAULT_TOP_RELATIONS: usize = 10;
static DEFAULT_CHORD_SIZE: usize = 3;
static DEFAULT_BEST_CHORDS: usize = 10;

/// Looked up in the working directory, if no path is given.
pub static CONFIG_FILE_NAME: &str = "primodality.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Can not read config file `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Can not parse config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub branches: BTreeSet<u32>,
    pub degrees: BTreeSet<u32>,
    /// How many of the closest mode pairs to print.
    pub top_relations: usize,
    pub chord_size: usize,
    pub best_chords: usize,
    /// `n/d`; the lowest pitch class is taken, if not set.
    pub focus_pitch_class: Option<String>,
    /// Which of the modes, containing the focus pitch class, to explore.
    pub focus_mode_rank: usize,
    /// Which of the related modes to compare with, 0 is the closest.
    pub related_rank: usize,
}
impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            branches: DEFAULT_BRANCHES.into_iter().collect(),
            degrees: DEFAULT_DEGREES.into_iter().collect(),
            top_relations: DEFAULT_TOP_RELATIONS,
            chord_size: DEFAULT_CHORD_SIZE,
            best_chords: DEFAULT_BEST_CHORDS,
            focus_pitch_class: None,
            focus_mode_rank: 0,
            related_rank: 0,
        }
    }
}

/// Parse config from TOML string.
pub fn parse_config(
    source: &str,
    path: &Path,
) -> Result<ExplorerConfig, ConfigError> {
    toml::from_str(source).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load config from the given file.
///
/// Without a path, [CONFIG_FILE_NAME] is used if it exists, otherwise
/// defaults.
pub fn load_config(path: Option<&Path>) -> Result<ExplorerConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            if !default.exists() {
                log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ExplorerConfig::default());
            }
            default
        }
    };
    let source =
        std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
    log::info!("loading config from {}", path.display());
    parse_config(&source, &path)
}
