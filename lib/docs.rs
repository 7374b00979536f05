//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Numerical evaluation](#numerical-evaluation)
//! - [Properties](#properties)
//!
//! # Background
//! The one-dimensional quantum harmonic oscillator is described by the
//! time-independent Schrödinger equation
//! ```text
//!    ħ² ∂²ψ    1
//! - --- --- + --- m ω² x² ψ(x) = E ψ(x)
//!   2 m ∂x²    2
//! ```
//! whose bound solutions are indexed by a single quantum number *n* ∊ {0, 1,
//! ...}, with energies *E*<sub>*n*</sub> = *ħ* *ω* (*n* + 1/2). Introducing
//! the inverse length α = √(*m* *ω* / *ħ*), the normalized solutions are
//! ```text
//!            1        ⎛ α  ⎞¼     -α² x²/2
//! ψ[n](x) = ------- · ⎜ -- ⎟  · e          · H[n](α x)
//!           √(2ⁿ n!)  ⎝ √π ⎠
//! ```
//! where *H*<sub>*n*</sub> is the *n*-th Hermite polynomial in the
//! physicists' convention,
//! ```text
//!                         ∂ⁿ
//! H[n](t) = (-1)ⁿ exp(t²) --- exp(-t²)
//!                         ∂tⁿ
//! ```
//! The probability density of finding the particle at *x* is
//! |ψ<sub>*n*</sub>(*x*)|², which for these real-valued states is simply the
//! square of the wavefunction.
//!
//! # Units
//! All quantities are taken in a consistent but otherwise arbitrary unit
//! system; *m*, *ω*, and *ħ* are explicit inputs to every evaluator function
//! through [`Params`][crate::units::Params]. The natural choice *m* = *ω* =
//! *ħ* = 1 sets α = 1, so that positions are measured in units of the
//! ground-state width √(*ħ* / *m* *ω*) and energies in units of *ħ* *ω*. A
//! general parameter set only rescales the position axis,
//! ```text
//! ψ[n](x; m, ω, ħ) = √α φ[n](α x)
//! ```
//! where φ<sub>*n*</sub> is the normalized Hermite function described below.
//!
//! # Numerical evaluation
//! Taken literally, the closed form above is a poor recipe for computation:
//! - 2ⁿ *n*! exceeds the range of a double for *n* ≳ 170, and long before
//!   that the normalization coefficient and *H*<sub>*n*</sub>(α *x*) are
//!   huge numbers of opposite scale whose product is of order 1.
//! - The explicit coefficient expansion of *H*<sub>*n*</sub> alternates in
//!   sign with terms much larger than the sum, so precision is lost to
//!   cancellation at moderate *n*.
//!
//! The polynomials themselves are stable under the three-term recurrence
//! ```text
//! H[0](t) = 1
//! H[1](t) = 2 t
//! H[k + 1](t) = 2 t H[k](t) - 2 k H[k - 1](t)
//! ```
//! ([`hermite`][crate::hermite::hermite]). Folding the normalization and the
//! Gaussian into each order gives the normalized Hermite functions
//! ```text
//!                     1
//! φ[n](t) = ------------------ H[n](t) exp(-t²/2)
//!           √(2ⁿ n! √π)
//! ```
//! which obey a recurrence of the same shape,
//! ```text
//! φ[0](t) = π^(-1/4) exp(-t²/2)
//! φ[1](t) = √2 t φ[0](t)
//!                 ⎛  2  ⎞½              ⎛  k  ⎞½
//! φ[k + 1](t) =   ⎜ --- ⎟  t φ[k](t) -  ⎜ --- ⎟  φ[k - 1](t)
//!                 ⎝k + 1⎠               ⎝k + 1⎠
//! ```
//! ([`hermite_fn`][crate::hermite::hermite_fn]). Every φ<sub>*n*</sub> is
//! bounded by 1 in magnitude, but in the classically forbidden region (|*t*|
//! > √(2 *n* + 1)) the recurrence starts from a tiny Gaussian and grows by
//! many orders of magnitude. To keep both ends representable, the Gaussian
//! factor is carried as a separate log-scale exponent, and whenever the
//! running value exceeds √(max) it is divided out into the same exponent. The
//! sign and log-magnitude are combined once at the end, so the result only
//! ever underflows (cleanly, to zero) in the far tails.
//!
//! For comparison at moderate *n*,
//! [`psi_closed_form`][crate::eigen::psi_closed_form] evaluates the product
//! directly with the coefficient accumulated in log space,
//! ```text
//! ln c[n] = -(n ln 2 + Σ ln k) / 2 + (ln α) / 2 - (ln π) / 4
//! ```
//!
//! # Properties
//! The following hold for the exact eigenfunctions and are checked against
//! the sampled ones:
//! - Normalization: ∫ |ψ<sub>*n*</sub>|² d*x* = 1, and more generally
//!   ⟨ψ<sub>*j*</sub>|ψ<sub>*k*</sub>⟩ = δ<sub>*jk*</sub>.
//! - Parity: ψ<sub>*n*</sub>(-*x*) = (-1)ⁿ ψ<sub>*n*</sub>(*x*).
//! - Nodes: ψ<sub>*n*</sub> has exactly *n* real zeros, all within the
//!   classical turning points ±√(2 *n* + 1) / α.
//! - Ground state: ψ<sub>0</sub> is a Gaussian with a single maximum
//!   (α² / π)<sup>¼</sup> at the origin.
