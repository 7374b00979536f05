//! Evaluation of the quantum harmonic oscillator eigenfunctions
//! ```text
//!            1        ⎛ α  ⎞¼     -α² x²/2
//! ψ[n](x) = ------- · ⎜ -- ⎟  · e          · H[n](α x)
//!           √(2ⁿ n!)  ⎝ √π ⎠
//! ```
//! with α = √(*m* *ω* / *ħ*), over arbitrary position grids.
//!
//! The evaluator never forms 2ⁿ, *n*!, or the raw polynomial: it runs the
//! recurrence for normalized Hermite functions (see [`hermite_fn`]), so it is
//! free of overflow and cancellation at any order. [`psi_closed_form`] keeps
//! the textbook product (with its coefficient computed in log space) for
//! comparison at moderate order.
//!
//! ```
//! use ndarray as nd;
//! use qho::{ eigen, units::Params };
//!
//! let x = nd::array![0.0];
//! let psi0 = eigen::psi(0, &Params::natural(), &x).unwrap();
//! assert!((psi0[0] - 0.7511255444649425).abs() < 1e-15);
//! let psi1 = eigen::psi(1, &Params::natural(), &x).unwrap();
//! assert_eq!(psi1[0], 0.0);
//! ```

use ndarray as nd;
use log::{ debug, trace };
use crate::{
    Arr1,
    hermite::{ hermite, hermite_fn, hermite_fn_seq },
    interp,
    units::{ Params, QResult },
    utils,
};

/// A single eigenstate sampled over a position grid.
///
/// This struct is usually only returned by [`eigenstate`]; the position grid
/// itself is not stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Eigenstate {
    /// Quantum number
    pub n: usize,
    /// Energy
    pub e: f64,
    /// Wavefunction
    pub psi: nd::Array1<f64>,
}

impl Eigenstate {
    /// Probability density, `|ψ|²`.
    pub fn density(&self) -> nd::Array1<f64> { utils::density(&self.psi) }

    /// Norm of the sampled wavefunction for grid spacing `dx`.
    pub fn norm(&self, dx: f64) -> f64 { utils::wf_norm(&self.psi, dx) }

    /// Parity of the state, `(-1)ⁿ`.
    pub fn parity(&self) -> f64 {
        if self.n % 2 == 0 { 1.0 } else { -1.0 }
    }

    /// Locations of the nodes of the sampled wavefunction; `x` must be the
    /// grid it was evaluated on.
    pub fn nodes<S>(&self, x: &Arr1<S>) -> QResult<Vec<f64>>
    where S: nd::Data<Elem = f64>
    {
        Ok(interp::find_nodes(x, &self.psi)?)
    }
}

/// Evaluate the `n`-th eigenfunction at every position in `x`.
///
/// Parameters are validated before any computation. An empty grid returns an
/// empty array. Values far in the tails underflow to 0; positions at ±∞ give
/// 0 and NaN positions give NaN.
pub fn psi<S>(n: usize, params: &Params, x: &Arr1<S>)
    -> QResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    params.check()?;
    if x.is_empty() {
        debug!("eigen::psi: empty position grid for n = {n}");
        return Ok(nd::Array1::zeros(0));
    }
    let alpha = params.alpha();
    let amp = alpha.sqrt();
    trace!("eigen::psi: n = {n}, alpha = {alpha:.6e}, {} samples", x.len());
    Ok(x.mapv(|xk| amp * hermite_fn(n, alpha * xk)))
}

/// Evaluate the `n`-th eigenfunction at a single position.
pub fn psi_at(n: usize, params: &Params, x: f64) -> QResult<f64> {
    params.check()?;
    let alpha = params.alpha();
    Ok(alpha.sqrt() * hermite_fn(n, alpha * x))
}

/// Evaluate every eigenfunction with quantum number `0..=n_max` at every
/// position in `x`, sharing a single recurrence pass per position.
///
/// Row `k` of the returned array is `ψ[k]` over `x`.
pub fn psi_levels<S>(n_max: usize, params: &Params, x: &Arr1<S>)
    -> QResult<nd::Array2<f64>>
where S: nd::Data<Elem = f64>
{
    params.check()?;
    let alpha = params.alpha();
    let amp = alpha.sqrt();
    let mut wfs: nd::Array2<f64> = nd::Array2::zeros((n_max + 1, x.len()));
    for (mut col, &xj) in wfs.columns_mut().into_iter().zip(x) {
        let seq = hermite_fn_seq(n_max, alpha * xj);
        col.iter_mut().zip(seq)
            .for_each(|(wk, phik)| { *wk = amp * phik; });
    }
    trace!(
        "eigen::psi_levels: n_max = {n_max}, alpha = {alpha:.6e}, {} samples",
        x.len(),
    );
    Ok(wfs)
}

/// Compute the probability density from sampled eigenfunction values.
pub fn density<S>(psi: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    utils::density(psi)
}

/// Natural log of the normalization coefficient
/// ```text
/// ln[(2ⁿ n!)^(-1/2) (α / √π)^(1/2)]
/// ```
pub fn ln_norm_coeff(n: usize, params: &Params) -> QResult<f64> {
    use std::f64::consts::{ LN_2, PI };
    params.check()?;
    let ln_fact: f64 = (2..=n).map(|k| (k as f64).ln()).sum();
    Ok(
        -0.5 * (n as f64 * LN_2 + ln_fact)
        + 0.5 * params.alpha().ln()
        - 0.25 * PI.ln()
    )
}

/// Normalization coefficient of the `n`-th eigenfunction, computed in log
/// space.
///
/// Underflows to 0 only for quantum numbers in the hundreds.
pub fn norm_coeff(n: usize, params: &Params) -> QResult<f64> {
    ln_norm_coeff(n, params).map(f64::exp)
}

/// Evaluate the `n`-th eigenfunction as the direct product of the
/// normalization coefficient, the Gaussian, and the raw Hermite polynomial.
///
/// This is accurate only while the coefficient and `H[n](α x)` stay
/// representable, roughly `n ≲ 150` on grids of moderate width; use [`psi`]
/// for anything else.
pub fn psi_closed_form<S>(n: usize, params: &Params, x: &Arr1<S>)
    -> QResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    let coeff = norm_coeff(n, params)?;
    let alpha = params.alpha();
    Ok(
        x.mapv(|xk| {
            let t = alpha * xk;
            coeff * (-t * t / 2.0).exp() * hermite(n, t)
        })
    )
}

/// Evaluate the `n`-th eigenstate over `x`, bundled with its energy.
pub fn eigenstate<S>(n: usize, params: &Params, x: &Arr1<S>)
    -> QResult<Eigenstate>
where S: nd::Data<Elem = f64>
{
    let psi = psi(n, params, x)?;
    let e = params.energy(n);
    debug!("eigen::eigenstate: n = {n}, e = {e:.6e}");
    Ok(Eigenstate { n, e, psi })
}

#[cfg(test)]
mod tests {
    use ndarray as nd;
    use crate::error::QError;
    use super::*;

    fn grid() -> (nd::Array1<f64>, f64) {
        let x: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 2001);
        let dx = x[1] - x[0];
        (x, dx)
    }

    #[test]
    fn reference_points() {
        let params = Params::natural();
        let x = nd::array![0.0];
        let psi0 = psi(0, &params, &x).unwrap();
        assert!((psi0[0] - (1.0 / std::f64::consts::PI).powf(0.25)).abs() < 1e-15);
        assert!((psi0[0] - 0.7511).abs() < 1e-4);
        let psi1 = psi(1, &params, &x).unwrap();
        assert_eq!(psi1[0], 0.0);
        assert_eq!(psi_at(0, &params, 0.0).unwrap(), psi0[0]);
    }

    #[test]
    fn empty_grid() {
        let x: nd::Array1<f64> = nd::Array1::zeros(0);
        let psi = psi(3, &Params::natural(), &x).unwrap();
        assert!(psi.is_empty());
        let levels = psi_levels(3, &Params::natural(), &x).unwrap();
        assert_eq!(levels.shape(), &[4, 0]);
    }

    #[test]
    fn invalid_params_checked_first() {
        let bad = Params { mass: 1.0, omega: 0.0, hbar: 1.0 };
        let empty: nd::Array1<f64> = nd::Array1::zeros(0);
        assert!(matches!(psi(0, &bad, &empty), Err(QError::BadOmega(_))));
        assert!(matches!(psi_at(0, &bad, 1.0), Err(QError::BadOmega(_))));
        assert!(psi_levels(2, &bad, &empty).is_err());
        assert!(norm_coeff(2, &bad).is_err());
        assert!(eigenstate(2, &bad, &empty).is_err());
    }

    #[test]
    fn extreme_params_stay_finite() {
        let x = nd::array![-1.0, 0.0, 1.0];
        for params in [
            Params::new(1e200, 1e200, 1.0).unwrap(),
            Params::new(1.0, 1.0, 1e-310).unwrap(),
            Params::new(1e-200, 1e-200, 1.0).unwrap(),
        ] {
            let psi = psi(0, &params, &x).unwrap();
            assert!(psi.iter().all(|v| v.is_finite()), "{params:?}: {psi}");
            assert!(psi[1] > 0.0);
            assert!((psi[1] - params.peak()).abs() <= 1e-14 * params.peak());
        }
        let bad = Params { mass: 1e300, omega: 1e300, hbar: 1e-300 };
        assert!(matches!(psi(0, &bad, &x), Err(QError::BadScale(_))));
        assert!(matches!(psi_at(0, &bad, 0.0), Err(QError::BadScale(_))));
    }

    #[test]
    fn matches_closed_form() {
        let params = Params::new(1.7, 0.6, 0.9).unwrap();
        let x: nd::Array1<f64> = nd::Array1::linspace(-6.0, 6.0, 241);
        for n in 0..=30 {
            let rec = psi(n, &params, &x).unwrap();
            let direct = psi_closed_form(n, &params, &x).unwrap();
            let maxdiff = rec.iter().zip(&direct)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            assert!(maxdiff < 1e-10, "n = {n}: max difference {maxdiff}");
        }
    }

    #[test]
    fn norm_coeff_small_n() {
        let params = Params::natural();
        // n = 2: 1 / √8 · π^(-1/4)
        let expected = (1.0 / 8.0_f64).sqrt() * params.peak();
        assert!((norm_coeff(2, &params).unwrap() - expected).abs() < 1e-15);
        assert!(norm_coeff(170, &params).unwrap() > 0.0);
    }

    #[test]
    fn levels_match_single() {
        let params = Params::new(2.0, 0.5, 1.0).unwrap();
        let (x, _) = grid();
        let levels = psi_levels(12, &params, &x).unwrap();
        assert_eq!(levels.shape(), &[13, x.len()]);
        for (n, row) in levels.rows().into_iter().enumerate() {
            let single = psi(n, &params, &x).unwrap();
            let maxdiff = row.iter().zip(&single)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            assert!(maxdiff < 1e-14, "n = {n}: max difference {maxdiff}");
        }
    }

    #[test]
    fn orthonormal() {
        let params = Params::natural();
        let (x, dx) = grid();
        let levels = psi_levels(8, &params, &x).unwrap();
        for (j, rj) in levels.rows().into_iter().enumerate() {
            for (k, rk) in levels.rows().into_iter().enumerate() {
                let dot = utils::wf_dot(&rj, &rk, dx);
                let expected = if j == k { 1.0 } else { 0.0 };
                assert!(
                    (dot - expected).abs() < 1e-6,
                    "<{j}|{k}> = {dot}",
                );
            }
        }
    }

    #[test]
    fn eigenstate_bundle() {
        let params = Params::new(1.0, 2.0, 1.0).unwrap();
        let (x, dx) = grid();
        let state = eigenstate(3, &params, &x).unwrap();
        assert_eq!(state.n, 3);
        assert_eq!(state.e, 7.0);
        assert_eq!(state.parity(), -1.0);
        assert!((state.norm(dx) - 1.0).abs() < 1e-6);
        assert!(state.density().iter().all(|rho| *rho >= 0.0));
        let nodes = state.nodes(&x).unwrap();
        assert_eq!(nodes.len(), 3);
        // zeros of H_3(t) are 0 and ±√(3/2), with t = √2 x here
        let expected = [-(0.75_f64.sqrt()), 0.0, 0.75_f64.sqrt()];
        for (node, exp) in nodes.into_iter().zip(expected) {
            assert!((node - exp).abs() < 1e-6, "node {node} vs {exp}");
        }
        let short = nd::array![0.0, 1.0];
        assert!(state.nodes(&short).is_err());
    }

    #[test]
    fn non_finite_positions() {
        let x = nd::array![f64::NEG_INFINITY, f64::NAN, f64::INFINITY];
        let psi = psi(4, &Params::natural(), &x).unwrap();
        assert_eq!(psi[0], 0.0);
        assert!(psi[1].is_nan());
        assert_eq!(psi[2], 0.0);
    }
}
