//! Physicists' Hermite polynomials and normalized Hermite functions.
//!
//! Both families are evaluated through their three-term recurrences rather
//! than explicit coefficient expansions, which lose all precision to
//! cancellation between large alternating terms at moderate order.
//!
//! ```
//! use qho::hermite::{ hermite, hermite_fn };
//!
//! // H_3(t) = 8t³ - 12t
//! assert_eq!(hermite(3, 2.0_f64), 40.0);
//!
//! // φ_0(0) = π^(-1/4)
//! assert!((hermite_fn(0, 0.0_f64) - 0.7511255444649425).abs() < 1e-15);
//! ```

use num_traits::{ Float, FloatConst };

/// Evaluate the physicists' Hermite polynomial *H*<sub>*n*</sub>(*t*).
///
/// Uses the recurrence
/// ```text
/// H[0](t) = 1
/// H[1](t) = 2 t
/// H[k + 1](t) = 2 t H[k](t) - 2 k H[k - 1](t)
/// ```
/// The raw polynomial grows like (2 *t*)<sup>*n*</sup>; prefer [`hermite_fn`]
/// when the result will be multiplied by a Gaussian and a normalization
/// constant anyway.
pub fn hermite<A>(n: usize, t: A) -> A
where A: Float
{
    let two = A::one() + A::one();
    let mut hprev = A::zero();
    let mut h = A::one();
    let mut twok = A::zero();
    for _ in 0..n {
        let hnext = two * t * h - twok * hprev;
        hprev = h;
        h = hnext;
        twok = twok + two;
    }
    h
}

/// Evaluate *H*<sub>0</sub>(*t*), ..., *H*<sub>`n_max`</sub>(*t*) in a single
/// pass of the recurrence.
pub fn hermite_seq<A>(n_max: usize, t: A) -> Vec<A>
where A: Float
{
    let two = A::one() + A::one();
    let mut acc: Vec<A> = Vec::with_capacity(n_max + 1);
    acc.push(A::one());
    let mut hprev = A::zero();
    let mut h = A::one();
    let mut twok = A::zero();
    for _ in 0..n_max {
        let hnext = two * t * h - twok * hprev;
        hprev = h;
        h = hnext;
        twok = twok + two;
        acc.push(h);
    }
    acc
}

// state of the normalized recurrence
//
// the current normalized Hermite function is `cur * exp(log_scale)`; the
// Gaussian factor starts out in `log_scale` and any growth of `cur` past
// `sqrt(max_value)` is moved into it as well, so that neither the polynomial
// part nor the Gaussian part can overflow or underflow on its own
#[derive(Copy, Clone, Debug)]
struct Scaled<A> {
    prev: A,
    cur: A,
    log_scale: A,
    k: A,
}

impl<A> Scaled<A>
where A: Float + FloatConst
{
    fn new(t: A) -> Self {
        let two = A::one() + A::one();
        let four = two + two;
        Self {
            prev: A::zero(),
            cur: A::one(),
            log_scale: -t * t / two - A::PI().ln() / four,
            k: A::zero(),
        }
    }

    // φ[k + 1] = √(2 / (k + 1)) t φ[k] - √(k / (k + 1)) φ[k - 1]
    fn step(&mut self, t: A) {
        let two = A::one() + A::one();
        let kp1 = self.k + A::one();
        let next
            = (two / kp1).sqrt() * t * self.cur
            - (self.k / kp1).sqrt() * self.prev;
        self.prev = self.cur;
        self.cur = next;
        self.k = kp1;
        let big = A::max_value().sqrt();
        if self.cur.abs() > big {
            self.prev = self.prev / big;
            self.cur = self.cur / big;
            self.log_scale = self.log_scale + big.ln();
        }
    }

    fn value(&self) -> A {
        if self.cur == A::zero() { return A::zero(); }
        self.cur.signum() * (self.cur.abs().ln() + self.log_scale).exp()
    }
}

// `None` if the recurrence is unnecessary: NaN passes through, and arguments
// whose square overflows are deep enough in the Gaussian tail to be 0
fn trivial<A>(t: A) -> Option<A>
where A: Float
{
    if t.is_nan() {
        Some(t)
    } else if (t * t).is_infinite() {
        Some(A::zero())
    } else {
        None
    }
}

/// Evaluate the normalized Hermite function
/// ```text
///                     1
/// φ[n](t) = ------------------ H[n](t) exp(-t²/2)
///           √(2ⁿ n! √π)
/// ```
/// via its own normalized three-term recurrence, with the Gaussian factor and
/// all rescaling carried in log space. The result is finite for every `n` and
/// every finite `t`; it underflows cleanly to 0 far into the tails.
pub fn hermite_fn<A>(n: usize, t: A) -> A
where A: Float + FloatConst
{
    if let Some(val) = trivial(t) { return val; }
    let mut state = Scaled::new(t);
    for _ in 0..n {
        state.step(t);
    }
    state.value()
}

/// Evaluate φ<sub>0</sub>(*t*), ..., φ<sub>`n_max`</sub>(*t*) (see
/// [`hermite_fn`]) in a single pass of the recurrence.
pub fn hermite_fn_seq<A>(n_max: usize, t: A) -> Vec<A>
where A: Float + FloatConst
{
    if let Some(val) = trivial(t) { return vec![val; n_max + 1]; }
    let mut acc: Vec<A> = Vec::with_capacity(n_max + 1);
    let mut state = Scaled::new(t);
    acc.push(state.value());
    for _ in 0..n_max {
        state.step(t);
        acc.push(state.value());
    }
    acc
}
