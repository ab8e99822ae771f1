//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PRAKRIYA__DATA__ENGINE=...` (a `.env` file in
//!    the working directory is loaded first)
//! 3. Config file: `--config FILE`, else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "PRAKRIYA";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input data locations.
    pub data: DataConfig,
    /// Output locations and terminal settings.
    pub output: OutputConfig,
}

/// Where derivations and lexicon entries come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Live vidyut derivations over a kosha directory.
    #[default]
    Vidyut,
    /// Recorded derivations and a JSON lexicon, for offline runs.
    Snapshot,
}

impl Engine {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vidyut => "vidyut",
            Self::Snapshot => "snapshot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub engine: Engine,
    /// vidyut kosha directory.
    pub kosha: PathBuf,
    /// Dhātupāṭha TSV for root glosses; roots show no meaning without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhatupatha: Option<PathBuf>,
    /// Lexicon JSON for the snapshot engine.
    pub lexicon: PathBuf,
    /// Derivation snapshot JSON.
    pub derivations: PathBuf,
    /// Sūtra TSV file or directory; rule texts show as `(??)` without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sutras: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root of every trace directory.
    pub base_dir: PathBuf,
    pub tinanta_dir: PathBuf,
    pub subanta_dir: PathBuf,
    pub krdanta_dir: PathBuf,
    /// Where Babylon dictionaries go; not under `base_dir`.
    pub dictionary_dir: PathBuf,
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig {
                engine: Engine::Vidyut,
                kosha: PathBuf::from("data/kosha"),
                dhatupatha: None,
                lexicon: PathBuf::from("data/kosha.json"),
                derivations: PathBuf::from("data/derivations.json"),
                sutras: None,
            },
            output: OutputConfig {
                base_dir: PathBuf::from("prakriyAH"),
                tinanta_dir: PathBuf::from("tiNantAni"),
                subanta_dir: PathBuf::from("subantAni"),
                krdanta_dir: PathBuf::from("kRdantAni"),
                dictionary_dir: PathBuf::from("dictionaries"),
                no_color: false,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// A file passed with `--config` must exist; the platform default is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = toml::to_string(&Self::default())?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };

        let config = Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.prakriya.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "prakriya", "prakriya")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".prakriya.toml"))
    }

    pub fn tinanta_out(&self) -> PathBuf {
        self.output.base_dir.join(&self.output.tinanta_dir)
    }

    pub fn subanta_out(&self) -> PathBuf {
        self.output.base_dir.join(&self.output.subanta_dir)
    }

    pub fn krdanta_out(&self) -> PathBuf {
        self.output.base_dir.join(&self.output.krdanta_dir)
    }

    pub fn dictionary_out(&self) -> &Path {
        &self.output.dictionary_dir
    }

    /// Value of a dotted key, or `None` if the key is unknown.
    pub fn get(&self, key: &str) -> Option<String> {
        let path = |p: &Path| p.display().to_string();
        Some(match key {
            "data.engine" => self.data.engine.as_str().to_string(),
            "data.kosha" => path(&self.data.kosha),
            "data.dhatupatha" => self.data.dhatupatha.as_deref().map(path).unwrap_or_default(),
            "data.lexicon" => path(&self.data.lexicon),
            "data.derivations" => path(&self.data.derivations),
            "data.sutras" => self.data.sutras.as_deref().map(path).unwrap_or_default(),
            "output.base_dir" => path(&self.output.base_dir),
            "output.tinanta_dir" => path(&self.output.tinanta_dir),
            "output.subanta_dir" => path(&self.output.subanta_dir),
            "output.krdanta_dir" => path(&self.output.krdanta_dir),
            "output.dictionary_dir" => path(&self.output.dictionary_dir),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        })
    }
}
