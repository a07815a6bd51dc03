//! Configuration loading for the internship matcher.
//!
//! The file lives at `~/.pmis/config.toml` unless `PMIS_CONFIG` or an explicit
//! path says otherwise. Raw TOML structs keep every field optional; [`Settings`]
//! is the validated form the rest of the workspace consumes.
//!
//! ```toml
//! [storage]
//! data_dir = "${HOME}/pmis-data"
//! seed_sample_internships = true
//!
//! [matching]
//! top_n = 10
//! max_reasons = 5
//!
//! [matching.weights]
//! skills = 0.30
//! education = 0.20
//! ```

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use pmis_types::{MatchingSettings, Weights, WeightsError, ZeroTopN};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "PMIS_CONFIG";
pub const DEFAULT_DATA_DIR: &str = "data";

const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct PmisConfig {
    pub storage: Option<StorageConfig>,
    pub matching: Option<MatchingConfig>,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the JSON collections. `${VAR}` and a leading `~/` are expanded.
    pub data_dir: Option<String>,
    /// Seed the internship catalogue with the built-in listings when it is missing.
    #[serde(default = "default_true")]
    pub seed_sample_internships: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_sample_internships: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchingConfig {
    pub top_n: Option<usize>,
    pub max_reasons: Option<usize>,
    pub weights: Option<WeightsConfig>,
}

/// Weight overrides. Omitted components keep their built-in value; the
/// resolved set must still sum to 1.0.
#[derive(Debug, Default, Deserialize)]
pub struct WeightsConfig {
    pub skills: Option<f64>,
    pub education: Option<f64>,
    pub location: Option<f64>,
    pub interests: Option<f64>,
    pub cgpa: Option<f64>,
    pub affirmative_action: Option<f64>,
    pub past_participation: Option<f64>,
}

impl WeightsConfig {
    fn resolve(&self) -> Result<Weights, WeightsError> {
        let d = Weights::DEFAULT;
        Weights::new(
            self.skills.unwrap_or(d.skills()),
            self.education.unwrap_or(d.education()),
            self.location.unwrap_or(d.location()),
            self.interests.unwrap_or(d.interests()),
            self.cgpa.unwrap_or(d.cgpa()),
            self.affirmative_action.unwrap_or(d.affirmative_action()),
            self.past_participation.unwrap_or(d.past_participation()),
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [matching.weights]: {0}")]
    InvalidWeights(#[from] WeightsError),
    #[error("invalid [matching]: {0}")]
    InvalidTopN(#[from] ZeroTopN),
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::InvalidWeights(_) | ConfigError::InvalidTopN(_) => None,
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub seed_sample_internships: bool,
    pub matching: MatchingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed_sample_internships: true,
            matching: MatchingSettings::default(),
        }
    }
}

impl Settings {
    /// Load and resolve settings.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// optional and built-in defaults apply when it is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let raw = match explicit {
            Some(path) => Some(PmisConfig::read(path)?),
            None => PmisConfig::load()?,
        };
        raw.unwrap_or_default().resolve()
    }
}

impl PmisConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }
        Self::read(&path).map(Some)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn resolve(self) -> Result<Settings, ConfigError> {
        let storage = self.storage.unwrap_or_default();
        let matching = self.matching.unwrap_or_default();

        let data_dir = storage
            .data_dir
            .as_deref()
            .map(expand_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let weights = match &matching.weights {
            Some(raw) => raw.resolve()?,
            None => Weights::DEFAULT,
        };
        let matching = MatchingSettings::new(
            weights,
            matching.top_n.unwrap_or(MatchingSettings::DEFAULT_TOP_N),
            matching
                .max_reasons
                .unwrap_or(MatchingSettings::DEFAULT_MAX_REASONS),
        )?;

        Ok(Settings {
            data_dir,
            seed_sample_internships: storage.seed_sample_internships,
            matching,
        })
    }
}

/// `~/.pmis`, home of the default config file and logs.
#[must_use]
pub fn pmis_home() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pmis"))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(value) = env::var(CONFIG_ENV_VAR)
        && !value.trim().is_empty()
    {
        return Some(PathBuf::from(value));
    }
    pmis_home().map(|home| home.join("config.toml"))
}

/// Resolve a configured path.
///
/// `${VAR}` takes the variable's value (empty when unset) and an unclosed `${`
/// stays literal. A leading `~/` then resolves against the home directory.
fn expand_path(raw: &str) -> PathBuf {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some((before, after)) = rest.split_once("${") {
        expanded.push_str(before);
        let Some((name, tail)) = after.split_once('}') else {
            expanded.push_str("${");
            rest = after;
            break;
        };
        if !name.is_empty()
            && let Ok(value) = env::var(name)
        {
            expanded.push_str(&value);
        }
        rest = tail;
    }
    expanded.push_str(rest);

    if let Some(relative) = expanded.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(relative);
    }
    PathBuf::from(expanded)
}
