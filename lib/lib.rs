//! Provides numerically hardened evaluation of the stationary states of the
//! one-dimensional quantum harmonic oscillator,
//! ```text
//!            1        ⎛ α  ⎞¼     -α² x²/2
//! ψ[n](x) = ------- · ⎜ -- ⎟  · e          · H[n](α x),    α = √(m ω / ħ)
//!           √(2ⁿ n!)  ⎝ √π ⎠
//! ```
//! over arbitrary position grids, along with the associated probability
//! densities.
//!
//! Provides implementations for the following numerical routines:
//! - Physicists' Hermite polynomials via three-term recurrence
//! - Normalized Hermite functions via a log-scaled three-term recurrence
//!   (overflow-free at any order)
//! - Log-space normalization coefficients for the closed-form product
//! - Trapezoidal norms/inner products and node location for sampled
//!   wavefunctions
//!
//! See [`docs`] for theoretical background.

pub mod config;
pub mod eigen;
pub mod error;
pub mod hermite;
pub mod interp;
pub mod units;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
