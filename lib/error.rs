//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::path::PathBuf;
use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from eigenfunction evaluation.
///
/// The `Bad*` variants are all raised before any computation begins and
/// indicate invalid input parameters.
#[derive(Debug, Error)]
pub enum QError {
    /// Returned when a quantum number is negative, fractional, or not finite.
    #[error("quantum number must be a non-negative integer; got {0}")]
    BadQuantumNumber(f64),

    /// Returned when a non-positive or non-finite mass is encountered.
    #[error("mass must be finite and greater than 0; got {0}")]
    BadMass(f64),

    /// Returned when a non-positive or non-finite angular frequency is
    /// encountered.
    #[error("angular frequency must be finite and greater than 0; got {0}")]
    BadOmega(f64),

    /// Returned when a non-positive or non-finite reduced Planck constant is
    /// encountered.
    #[error("reduced Planck constant must be finite and greater than 0; got {0}")]
    BadHbar(f64),

    /// Returned when individually valid parameters combine into an inverse
    /// length scale `√(m ω / ħ)` that is zero or not finite.
    #[error("inverse length scale must be finite and greater than 0; got {0}")]
    BadScale(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl QError {
    fn check_positive(val: f64, err: fn(f64) -> Self) -> Result<(), Self> {
        (val.is_finite() && val > 0.0).then_some(()).ok_or(err(val))
    }

    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        Self::check_positive(mass, Self::BadMass)
    }

    pub(crate) fn check_omega(omega: f64) -> Result<(), Self> {
        Self::check_positive(omega, Self::BadOmega)
    }

    pub(crate) fn check_hbar(hbar: f64) -> Result<(), Self> {
        Self::check_positive(hbar, Self::BadHbar)
    }

    pub(crate) fn check_scale(alpha: f64) -> Result<(), Self> {
        Self::check_positive(alpha, Self::BadScale)
    }

    /// Return `true` if `self` was raised by parameter validation.
    pub fn is_invalid_parameter(&self) -> bool {
        !matches!(self, Self::Length(_))
    }
}

/// Returned from loading and validating a [`Config`][crate::config::Config].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a config file could not be read.
    #[error("unable to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Returned when a config file is not valid TOML or has the wrong shape.
    #[error("unable to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Returned when grid bounds are not finite.
    #[error("grid bounds must be finite; got [{0}, {1}]")]
    BadGrid(f64, f64),

    /// Returned when the requested level exceeds the configured maximum.
    #[error("level must be at most {max}; got {level}")]
    BadLevel { level: usize, max: usize },

    /// [`QError`]
    #[error("parameter error: {0}")]
    Params(#[from] QError),
}
