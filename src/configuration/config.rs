//! YAML settings for window size, physics constants and spawn colors.
//!
//! Sections of a settings file:
//!
//! - [`SurfaceConfig`]    – drawing surface / window size in pixels
//! - [`ParametersConfig`] – physical constants, spawn growth and tick rate
//! - [`GravitronConfig`]  – top-level wrapper, also holds the palette and seed
//!
//! Every field has a default, so any section (or the whole file) may be left
//! out.
//!
//! # YAML format
//!
//! ```yaml
//! surface:
//!   width: 800.0
//!   height: 600.0
//!
//! parameters:
//!   G: 10.0              # gravitational constant
//!   max_force: 5.0       # pairwise force cap
//!   softening: 0.1       # added to every distance
//!   min_radius: 5.0      # radius of a fresh body
//!   growth: 1.0          # radius gained per tick while held
//!   tick_ms: 16          # fixed tick interval
//!   max_catch_up: 4      # overdue ticks allowed per frame
//!
//! palette:               # RGBA, one picked per spawn
//!   - [255, 255, 0, 179]
//!   - [31, 48, 240, 179]
//!   - [233, 15, 15, 189]
//!
//! seed: 42               # optional, fixes the color sequence
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::configuration::error::ConfigError;
use crate::simulation::params::{
    Parameters, DEFAULT_G, DEFAULT_GROWTH, DEFAULT_MAX_CATCH_UP, DEFAULT_MAX_FORCE,
    DEFAULT_MIN_RADIUS, DEFAULT_SOFTENING, DEFAULT_TICK_MS,
};
use crate::simulation::states::BodyColor;

/// Yellow, blue and red at roughly 70% opacity
pub const DEFAULT_PALETTE: [BodyColor; 3] = [
    BodyColor::rgba(255, 255, 0, 179),
    BodyColor::rgba(31, 48, 240, 179),
    BodyColor::rgba(233, 15, 15, 189),
];

/// Size of the drawing surface, read once at startup
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Physical and scheduling parameters
#[allow(non_snake_case)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,            // gravitational constant
    pub max_force: f64,    // force cap
    pub softening: f64,    // distance softening
    pub min_radius: f64,   // spawn radius
    pub growth: f64,       // radius per tick while staged
    pub tick_ms: u64,      // tick interval in milliseconds
    pub max_catch_up: u32, // overdue ticks per host frame
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: DEFAULT_G,
            max_force: DEFAULT_MAX_FORCE,
            softening: DEFAULT_SOFTENING,
            min_radius: DEFAULT_MIN_RADIUS,
            growth: DEFAULT_GROWTH,
            tick_ms: DEFAULT_TICK_MS,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }
}

impl ParametersConfig {
    /// Map to the runtime [`Parameters`]
    pub fn to_runtime(&self) -> Parameters {
        Parameters {
            G: self.G,
            max_force: self.max_force,
            softening: self.softening,
            min_radius: self.min_radius,
            growth: self.growth,
            tick: Duration::from_millis(self.tick_ms),
            max_catch_up: self.max_catch_up,
        }
    }
}

/// Top-level configuration loaded from YAML
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GravitronConfig {
    pub surface: SurfaceConfig,
    pub parameters: ParametersConfig,
    pub palette: Vec<BodyColor>,
    pub seed: Option<u64>, // deterministic palette draws when set
}

impl Default for GravitronConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            parameters: ParametersConfig::default(),
            palette: DEFAULT_PALETTE.to_vec(),
            seed: None,
        }
    }
}

impl GravitronConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GravitronConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let cfg: GravitronConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.surface;
        if !(s.width > 0.0 && s.height > 0.0 && s.width.is_finite() && s.height.is_finite()) {
            return Err(ConfigError::InvalidParameter(format!(
                "surface must be positive and finite, got {}x{}",
                s.width, s.height
            )));
        }

        let p = &self.parameters;
        if !(p.G >= 0.0 && p.G.is_finite()) {
            return Err(invalid("G", p.G));
        }
        if !(p.max_force > 0.0) {
            return Err(invalid("max_force", p.max_force));
        }
        if !(p.softening > 0.0 && p.softening.is_finite()) {
            return Err(invalid("softening", p.softening));
        }
        if !(p.min_radius > 0.0 && p.min_radius.is_finite()) {
            return Err(invalid("min_radius", p.min_radius));
        }
        if !(p.growth >= 0.0 && p.growth.is_finite()) {
            return Err(invalid("growth", p.growth));
        }
        if p.tick_ms == 0 {
            return Err(ConfigError::InvalidParameter("tick_ms must be at least 1".into()));
        }
        if p.max_catch_up == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_catch_up must be at least 1".into(),
            ));
        }

        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

fn invalid(name: &str, value: f64) -> ConfigError {
    ConfigError::InvalidParameter(format!("{name} out of range: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_default_toy() {
        let cfg = GravitronConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, GravitronConfig::default());
        let p = cfg.parameters.to_runtime();
        assert_eq!(p, Parameters::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = GravitronConfig::from_yaml_str(
            "parameters:\n  G: 2.5\n  tick_ms: 33\nsurface:\n  width: 320.0\nseed: 7\n",
        )
        .unwrap();
        assert_eq!(cfg.parameters.G, 2.5);
        assert_eq!(cfg.parameters.tick_ms, 33);
        assert_eq!(cfg.parameters.max_force, DEFAULT_MAX_FORCE);
        assert_eq!(cfg.surface.width, 320.0);
        assert_eq!(cfg.surface.height, 600.0);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.palette.len(), 3);
    }

    #[test]
    fn palette_entries_are_rgba_quads() {
        let cfg = GravitronConfig::from_yaml_str("palette:\n  - [1, 2, 3, 4]\n").unwrap();
        assert_eq!(cfg.palette, vec![BodyColor::rgba(1, 2, 3, 4)]);
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = GravitronConfig::default();
        cfg.parameters.softening = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidParameter(_))));

        let mut cfg = GravitronConfig::default();
        cfg.palette.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyPalette)));

        let mut cfg = GravitronConfig::default();
        cfg.surface.height = -1.0;
        assert!(cfg.validate().is_err());

        assert!(matches!(
            GravitronConfig::from_yaml_str("parameters:\n  tick_ms: 0\n"),
            Err(ConfigError::InvalidParameter(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        assert!(matches!(
            GravitronConfig::from_yaml_str("parameters: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
