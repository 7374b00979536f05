//! Configuration for drivers that sample and export eigenfunctions.
//!
//! Every field is optional; the defaults reproduce the reference plot (level
//! 0 of a natural-units oscillator, 500 points over [-5, 5], levels bounded by
//! 10).
//!
//! ```toml
//! level = 3
//! max_level = 10
//!
//! [params]
//! mass = 1.0
//! omega = 1.0
//! hbar = 1.0
//!
//! [grid]
//! xmin = -5.0
//! xmax = 5.0
//! points = 500
//! ```

use std::path::Path;
use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{ error::ConfigError, units::Params };

pub type ConfigResult<T> = Result<T, ConfigError>;

/// An evenly spaced position grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    /// Left endpoint.
    pub xmin: f64,
    /// Right endpoint.
    pub xmax: f64,
    /// Number of samples, including both endpoints.
    pub points: usize,
}

impl Default for Grid {
    fn default() -> Self { Self { xmin: -5.0, xmax: 5.0, points: 500 } }
}

impl Grid {
    /// Check that both endpoints are finite.
    pub fn check(&self) -> ConfigResult<()> {
        (self.xmin.is_finite() && self.xmax.is_finite())
            .then_some(())
            .ok_or(ConfigError::BadGrid(self.xmin, self.xmax))
    }

    /// Generate the sample coordinates.
    pub fn coords(&self) -> nd::Array1<f64> {
        nd::Array1::linspace(self.xmin, self.xmax, self.points)
    }

    /// Grid spacing, or 0 if there are fewer than two points.
    pub fn dx(&self) -> f64 {
        if self.points < 2 {
            0.0
        } else {
            (self.xmax - self.xmin) / (self.points - 1) as f64
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quantum number to evaluate.
    pub level: usize,
    /// Largest quantum number accepted from user input.
    pub max_level: usize,
    /// Physical parameters.
    pub params: Params,
    /// Position grid.
    pub grid: Grid,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: 0,
            max_level: 10,
            params: Params::natural(),
            grid: Grid::default(),
        }
    }
}

impl Config {
    /// Parse from a TOML string, without validation.
    pub fn from_toml_str(s: &str, path: &Path) -> ConfigResult<Self> {
        toml::from_str(s)
            .map_err(|source| {
                ConfigError::Parse { path: path.to_path_buf(), source }
            })
    }

    /// Read a TOML file and validate its contents.
    pub fn read_toml<P>(path: P) -> ConfigResult<Self>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|source| {
                ConfigError::Read { path: path.to_path_buf(), source }
            })?;
        let config = Self::from_toml_str(&s, path)?;
        config.check()?;
        Ok(config)
    }

    /// Check that a requested level lies within `0..=max_level`.
    pub fn check_level(&self, level: usize) -> ConfigResult<()> {
        (level <= self.max_level)
            .then_some(())
            .ok_or(ConfigError::BadLevel { level, max: self.max_level })
    }

    /// Validate all fields.
    pub fn check(&self) -> ConfigResult<()> {
        self.params.check()?;
        self.grid.check()?;
        self.check_level(self.level)?;
        Ok(())
    }
}
