//! Physical parameters and the quantum number, in natural units.
//!
//! See [`docs/units`][crate::docs#units] for more information.

use std::f64::consts::PI;
use serde::{ Deserialize, Serialize };
use crate::error::QError;

pub type QResult<T> = Result<T, QError>;

/// Mass, angular frequency, and reduced Planck constant of an oscillator.
///
/// Fields are public so that parameters can be filled in directly (or
/// deserialized); every evaluator function re-validates them before use.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Particle mass.
    pub mass: f64,
    /// Angular frequency of the trap.
    pub omega: f64,
    /// Reduced Planck constant.
    pub hbar: f64,
}

impl Default for Params {
    fn default() -> Self { Self::natural() }
}

impl Params {
    /// Construct from explicit values, checking that all are finite and
    /// strictly positive.
    pub fn new(mass: f64, omega: f64, hbar: f64) -> QResult<Self> {
        let params = Self { mass, omega, hbar };
        params.check()?;
        Ok(params)
    }

    /// Natural units: `mass = omega = hbar = 1`.
    pub const fn natural() -> Self {
        Self { mass: 1.0, omega: 1.0, hbar: 1.0 }
    }

    /// Check that all parameters are finite and strictly positive.
    pub fn check(&self) -> QResult<()> {
        QError::check_mass(self.mass)?;
        QError::check_omega(self.omega)?;
        QError::check_hbar(self.hbar)?;
        QError::check_scale(self.alpha())?;
        Ok(())
    }

    /// Inverse length scale `√(m ω / ħ)`.
    ///
    /// Falls back to taking each root separately when `m ω / ħ` leaves the
    /// normal range, so that only an inverse length that is itself
    /// unrepresentable comes out as 0 or ∞.
    pub fn alpha(&self) -> f64 {
        let ratio = self.mass * self.omega / self.hbar;
        if ratio.is_normal() {
            ratio.sqrt()
        } else {
            self.mass.sqrt() * self.omega.sqrt() / self.hbar.sqrt()
        }
    }

    /// Characteristic length of the ground state, `√(ħ / m ω)`.
    pub fn length(&self) -> f64 { self.alpha().recip() }

    /// Energy of the `n`-th level, `ħ ω (n + 1/2)`.
    pub fn energy(&self, n: usize) -> f64 {
        self.hbar * self.omega * (n as f64 + 0.5)
    }

    /// Position of the classical turning point of the `n`-th level,
    /// `√(2 n + 1) / α`.
    pub fn turning_point(&self, n: usize) -> f64 {
        (2.0 * n as f64 + 1.0).sqrt() / self.alpha()
    }

    /// Ground-state peak amplitude, `(α² / π)^¼`.
    pub fn peak(&self) -> f64 {
        self.alpha().sqrt() * PI.powf(-0.25)
    }
}

/// A validated, non-negative integer quantum number.
///
/// Typed APIs take a plain `usize`; this exists to validate quantum numbers
/// that arrive as signed or floating-point values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantumNumber(usize);

impl QuantumNumber {
    pub fn get(self) -> usize { self.0 }
}

impl From<usize> for QuantumNumber {
    fn from(n: usize) -> Self { Self(n) }
}

impl From<QuantumNumber> for usize {
    fn from(n: QuantumNumber) -> Self { n.0 }
}

impl TryFrom<i64> for QuantumNumber {
    type Error = QError;

    fn try_from(n: i64) -> QResult<Self> {
        usize::try_from(n)
            .map(Self)
            .map_err(|_| QError::BadQuantumNumber(n as f64))
    }
}

impl TryFrom<f64> for QuantumNumber {
    type Error = QError;

    fn try_from(n: f64) -> QResult<Self> {
        let valid = n.is_finite()
            && n >= 0.0
            && n.fract() == 0.0
            && n < usize::MAX as f64;
        valid.then(|| Self(n as usize)).ok_or(QError::BadQuantumNumber(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_units() {
        let params = Params::default();
        assert_eq!(params, Params::natural());
        assert_eq!(params.alpha(), 1.0);
        assert_eq!(params.energy(0), 0.5);
        assert_eq!(params.energy(3), 3.5);
        assert_eq!(params.turning_point(4), 3.0);
        assert!((params.peak() - 0.751_125_544_5).abs() < 1e-9);
    }

    #[test]
    fn scaled_params() {
        let params = Params::new(2.0, 8.0, 1.0).unwrap();
        assert_eq!(params.alpha(), 4.0);
        assert_eq!(params.length(), 0.25);
        assert_eq!(params.energy(1), 12.0);
    }

    #[test]
    fn rejects_bad_params() {
        assert!(matches!(Params::new(0.0, 1.0, 1.0), Err(QError::BadMass(_))));
        assert!(matches!(Params::new(1.0, -1.0, 1.0), Err(QError::BadOmega(_))));
        assert!(matches!(Params::new(1.0, 1.0, f64::NAN), Err(QError::BadHbar(_))));
        assert!(matches!(
            Params::new(f64::INFINITY, 1.0, 1.0),
            Err(QError::BadMass(_)),
        ));
        let err = Params::new(-2.0, 1.0, 1.0).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn extreme_but_valid_params() {
        let params = Params::new(1e200, 1e200, 1.0).unwrap();
        assert!((params.alpha() / 1e200 - 1.0).abs() < 1e-14);
        let params = Params::new(1.0, 1.0, 1e-310).unwrap();
        assert!(params.alpha().is_finite() && params.alpha() > 1e154);
        let params = Params::new(1e-200, 1e-200, 1.0).unwrap();
        assert!((params.alpha() / 1e-200 - 1.0).abs() < 1e-14);
        assert!(params.peak().is_finite() && params.peak() > 0.0);
    }

    #[test]
    fn rejects_unrepresentable_scale() {
        assert!(matches!(
            Params::new(1e300, 1e300, 1e-300),
            Err(QError::BadScale(_)),
        ));
        assert!(matches!(
            Params::new(1e-300, 1e-300, 1e300),
            Err(QError::BadScale(_)),
        ));
        let err = Params::new(1e300, 1e300, 1e-300).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn quantum_number_validation() {
        assert_eq!(QuantumNumber::try_from(3_i64).unwrap().get(), 3);
        assert_eq!(QuantumNumber::try_from(7.0_f64).unwrap().get(), 7);
        assert!(QuantumNumber::try_from(-1_i64).is_err());
        assert!(QuantumNumber::try_from(-1.0_f64).is_err());
        assert!(QuantumNumber::try_from(2.5_f64).is_err());
        assert!(QuantumNumber::try_from(2.0_f64.powi(64)).is_err());
        assert!(QuantumNumber::try_from(2.0_f64.powi(53)).is_ok());
        assert!(QuantumNumber::try_from(f64::NAN).is_err());
        assert!(QuantumNumber::try_from(f64::INFINITY).is_err());
        assert_eq!(usize::from(QuantumNumber::from(4)), 4);
    }
}
