//! Tunables for the viewer, loaded from `life.toml` with env overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "life.toml";
pub const MIN_STEP_INTERVAL_MS: u64 = 1;
pub const MAX_STEP_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pixels per cell at zoom 1
    pub grid_size: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Fraction of the current zoom added or removed per wheel notch
    pub zoom_step: f64,
    /// Time between generations while running
    pub step_interval_ms: u64,
    /// Populations above this run on rayon under `Strategy::Auto`
    pub parallel_threshold: usize,
    /// Fill probability for random soups
    pub random_density: f64,
    /// Snapshot loaded at start-up and on reload
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 50.0,
            min_zoom: 0.3,
            max_zoom: 4.0,
            zoom_step: 0.25,
            step_interval_ms: 20,
            parallel_threshold: 4096,
            random_density: 0.3,
            snapshot_path: None,
        }
    }
}

impl Config {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    pub fn from_toml(txt: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(txt)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Ok(Self::default());
        }
        let txt = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&txt)
    }

    /// `LIFE_CONFIG` (or `life.toml`), then `LIFE_SNAPSHOT` / `LIFE_STEP_MS` overrides
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = std::env::var_os("LIFE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut cfg = Self::load(&path)?;

        if let Some(p) = std::env::var_os("LIFE_SNAPSHOT") {
            cfg.snapshot_path = Some(PathBuf::from(p));
        }
        if let Ok(v) = std::env::var("LIFE_STEP_MS") {
            match v.parse() {
                Ok(ms) => cfg.step_interval_ms = ms,
                Err(_) => log::warn!("ignoring LIFE_STEP_MS={v:?}: not a number"),
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if !(self.grid_size > 0.0) {
            return invalid(format!("grid_size must be positive, got {}", self.grid_size));
        }
        if !(self.min_zoom > 0.0) {
            return invalid(format!("min_zoom must be positive, got {}", self.min_zoom));
        }
        if !(self.min_zoom <= self.max_zoom) {
            return invalid(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            ));
        }
        if !(self.zoom_step > 0.0 && self.zoom_step < 1.0) {
            return invalid(format!("zoom_step must be in (0, 1), got {}", self.zoom_step));
        }
        if !(MIN_STEP_INTERVAL_MS..=MAX_STEP_INTERVAL_MS).contains(&self.step_interval_ms) {
            return invalid(format!(
                "step_interval_ms must be in {MIN_STEP_INTERVAL_MS}..={MAX_STEP_INTERVAL_MS}, got {}",
                self.step_interval_ms
            ));
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return invalid(format!(
                "random_density must be in [0, 1], got {}",
                self.random_density
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg = Config::from_toml("grid_size = 20.0\nsnapshot_path = \"glider.json\"").unwrap();
        assert_eq!(cfg.grid_size, 20.0);
        assert_eq!(cfg.max_zoom, 4.0);
        assert_eq!(cfg.snapshot_path, Some(PathBuf::from("glider.json")));
    }

    #[test]
    fn test_rejects_inverted_zoom_bounds() {
        let err = Config::from_toml("min_zoom = 5.0\nmax_zoom = 2.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_zoom_step() {
        assert!(Config::from_toml("zoom_step = 0.0").is_err());
        assert!(Config::from_toml("zoom_step = 1.0").is_err());
    }

    #[test]
    fn test_rejects_step_interval_out_of_range() {
        assert!(Config::from_toml("step_interval_ms = 0").is_err());
        assert!(Config::from_toml("step_interval_ms = 1001").is_err());
        assert!(Config::from_toml("step_interval_ms = 9223372036854775807").is_err());
        assert!(Config::from_toml("step_interval_ms = 1000").is_ok());
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(matches!(Config::from_toml("grid_size = ["), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let cfg = Config::load("/nonexistent/life.toml").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_step_interval() {
        assert_eq!(Config::default().step_interval(), Duration::from_millis(20));
    }
}
