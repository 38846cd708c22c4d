//! User settings at ~/.config/sunsetrise/config.toml, overridable through
//! `SUNSETRISE_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use sunsetrise_core::Lang;

static DEFAULT_CALENDAR_DIR: &str = "~/calendar";

fn default_calendar_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CALENDAR_DIR)
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// IANA zone name used when `--tz` is not given.
    pub timezone: Option<String>,

    #[serde(default)]
    pub language: Lang,

    /// Where `ics` and `csv` write when no `--output` is given.
    #[serde(default = "default_calendar_dir")]
    pub calendar_dir: PathBuf,
}

impl Settings {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("sunsetrise");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::from_sources(&config_path, Environment::with_prefix("SUNSETRISE"))
    }

    fn from_sources(path: &Path, env: Environment) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read config at {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// `calendar_dir` with `~` expanded.
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.calendar_dir.to_string_lossy()).into_owned())
    }

    /// Create a default config file with every option commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# sunsetrise configuration

# Location used when --lat/--lon are not given:
# latitude = 40.7128
# longitude = -74.0060

# Zone for local times (defaults to the system zone):
# timezone = \"America/New_York\"

# Language for titles and descriptions (en or es):
# language = \"en\"

# Where .ics and .csv files are written by default:
# calendar_dir = \"{DEFAULT_CALENDAR_DIR}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Could not create config directory at {}", parent.display())
            })?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write config file at {}", path.display()))?;

        Ok(())
    }
}
