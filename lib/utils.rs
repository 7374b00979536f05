//! Miscellaneous tools for sampled wavefunctions.
//!
//! All functions here treat arrays as samples over an evenly spaced grid with
//! step `dx`, and integrate using the trapezoidal rule. Arrays with fewer than
//! two samples integrate to zero.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the norm (integral of the square) of a real wavefunction.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len();
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner = q.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, qk| acc + qk.powi(2));
    (dx / two) * (q[0].powi(2) + two * inner + q[n - 1].powi(2))
}

/// Calculate the inner product of two real wavefunctions.
///
/// Only the first `min(q.len(), p.len())` samples are used.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len().min(p.len());
    if n < 2 { return A::zero(); }
    let two = A::one() + A::one();
    let inner = q.iter().zip(p).skip(1).take(n - 2)
        .fold(A::zero(), |acc, (qk, pk)| acc + *qk * *pk);
    (dx / two) * (q[0] * p[0] + two * inner + q[n - 1] * p[n - 1])
}

/// Return a normalized copy of a wavefunction.
///
/// A wavefunction with zero norm is returned unchanged.
pub fn wf_normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, dx).sqrt();
    if norm == A::zero() { return q.to_owned(); }
    q.mapv(|qk| qk / norm)
}

/// Compute the probability density of a real wavefunction, i.e. the
/// elementwise square.
pub fn density<S, A>(q: &nd::ArrayBase<S, Ix1>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    q.mapv(|qk| qk * qk)
}
