//! Functions to find nodes (sign changes) in array-sampled wavefunctions via
//! Lagrange interpolation.
//!
//! ```
//! use ndarray as nd;
//! use qho::interp::find_nodes;
//!
//! let x: nd::Array1<f64> = nd::Array::linspace(-5.0, 5.0, 1000);
//! let y = x.mapv(|xk| (xk + 3.0) * (xk - 0.5) * (xk - 2.0));
//! let nodes = find_nodes(&x, &y).unwrap();
//! assert_eq!(nodes.len(), 3);
//! assert!(
//!     [-3.0, 0.5, 2.0].into_iter()
//!         .zip(nodes)
//!         .all(|(expected, computed)| (computed - expected).abs() < 1e-6)
//! )
//! ```

use std::cmp;
use ndarray as nd;
use num_traits::Float;
use crate::error::LengthError;

pub type InterpResult<T> = Result<T, LengthError>;

/// Compute the value of a sampled function via a Lagrange polynomial.
pub fn lagrange<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    x: A,
) -> InterpResult<A>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    LengthError::check(data_x, data_y)?;
    let res: A
        = data_x.iter().zip(data_y).enumerate()
        .map(|(j, (xj, yj))| {
            let xj = *xj;
            let inner
                = data_x.iter().enumerate()
                .filter(|(m, _)| *m != j)
                .map(|(_, xm)| (x - *xm) / (xj - *xm))
                .fold(A::one(), |acc, f| acc * f);
            *yj * inner
        })
        .fold(A::zero(), |acc, term| acc + term);
    Ok(res)
}

fn strictly_monotonic<A>(vals: &[A]) -> bool
where A: Float
{
    vals.windows(2).all(|w| w[1] > w[0])
        || vals.windows(2).all(|w| w[1] < w[0])
}

// locate the zero between adjacent samples `j` and `j + 1`, which have
// opposite signs
//
// inverse interpolation over up to four points around the crossing is used
// when the samples there are strictly monotonic; otherwise (or if the
// interpolant lands outside the bracket) fall back to a straight line
fn refine<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    j: usize,
) -> InterpResult<A>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let (x0, x1) = (data_x[j], data_x[j + 1]);
    let (y0, y1) = (data_y[j], data_y[j + 1]);
    let linear = x0 - y0 * (x1 - x0) / (y1 - y0);

    let il = j.saturating_sub(1);
    let ir = cmp::min(data_y.len(), j + 3);
    let wy = data_y.slice(nd::s![il..ir]);
    let wx = data_x.slice(nd::s![il..ir]);
    let monotonic = wy.as_slice()
        .map(strictly_monotonic)
        .unwrap_or_else(|| strictly_monotonic(&wy.to_vec()));
    if !monotonic { return Ok(linear); }

    let interp = lagrange(&wy, &wx, A::zero())?;
    let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    if interp.is_finite() && lo <= interp && interp <= hi {
        Ok(interp)
    } else {
        Ok(linear)
    }
}

/// Return the positions of all nodes (sign changes) in a sampled function.
///
/// Exactly-zero and NaN samples are skipped when comparing signs, so that a
/// sample landing precisely on a node counts once and a tail that underflows
/// to zero does not count at all. A node bracketed by a run of exact zeros is
/// placed at the middle of the run.
///
/// The function must be locally invertible on the scale of a few grid points
/// for the refined positions to be accurate.
pub fn find_nodes<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
) -> InterpResult<Vec<A>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    LengthError::check(data_x, data_y)?;
    let two = A::one() + A::one();
    let z = A::zero();
    let mut last: Option<usize> = None;
    let mut nodes: Vec<A> = Vec::new();
    for (i, yi) in data_y.iter().enumerate() {
        if *yi == z || yi.is_nan() { continue; }
        if let Some(j) = last {
            if (data_y[j] > z) != (*yi > z) {
                let node
                    = if i - j > 1 {
                        (data_x[j + 1] + data_x[i - 1]) / two
                    } else {
                        refine(data_x, data_y, j)?
                    };
                nodes.push(node);
            }
        }
        last = Some(i);
    }
    Ok(nodes)
}

/// Count the sign changes in a sampled function, skipping exactly-zero and
/// NaN samples.
pub fn count_nodes<S, A>(data_y: &nd::ArrayBase<S, nd::Ix1>) -> usize
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let z = A::zero();
    data_y.iter()
        .filter(|yk| **yk != z && !yk.is_nan())
        .map(|yk| *yk > z)
        .fold((None, 0), |(prev, count), pos| {
            match prev {
                Some(p) if p != pos => (Some(pos), count + 1),
                _ => (Some(pos), count),
            }
        })
        .1
}
