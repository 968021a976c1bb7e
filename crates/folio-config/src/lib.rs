//! Configuration and portfolio content for folio.
//!
//! Everything shown on screen comes from a TOML file at
//! `<config dir>/folio/config.toml`, or the path in `FOLIO_CONFIG`. Every
//! field is optional; anything left out falls back to the built-in
//! portfolio.

mod content;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::ColorTheme;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use content::{Certificate, Contact, Link, Profile, Project, SkillCategory, Stat, TimelineEntry};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Animation and appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Target frames per second for the background.
    pub frame_rate: u32,
    /// Whether the particle background starts enabled.
    pub background: bool,
    /// Upper bound on particle count.
    pub particle_cap: usize,
    /// Initial accent palette.
    pub theme: ColorTheme,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30,
            background: true,
            particle_cap: 300,
            theme: ColorTheme::default(),
        }
    }
}

impl AnimationConfig {
    pub const MAX_FRAME_RATE: u32 = 120;
    pub const MAX_PARTICLES: usize = 300;

    /// Clamp values into their supported ranges.
    pub fn validated(mut self) -> Self {
        self.frame_rate = self.frame_rate.clamp(1, Self::MAX_FRAME_RATE);
        self.particle_cap = self.particle_cap.clamp(1, Self::MAX_PARTICLES);
        self
    }
}

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation: AnimationConfig,
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub journey: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub contact: Contact,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            profile: Profile::default(),
            skills: content::default_skills(),
            journey: content::default_journey(),
            projects: content::default_projects(),
            certificates: content::default_certificates(),
            contact: Contact::default(),
        }
    }
}

impl Config {
    /// Default config file location, if a home directory can be found.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolve the config path: `FOLIO_CONFIG` first, then the default location.
    pub fn resolve_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path)
    }

    /// Load configuration from the resolved path.
    ///
    /// A missing file yields the built-in configuration.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::resolve_path() {
            Some(path) => Self::load_from(&path),
            None => {
                info!("no config directory available, using built-in content");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("config file {} not found, using built-in content", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(text)?;
        config.animation = config.animation.validated();
        Ok(config)
    }
}
