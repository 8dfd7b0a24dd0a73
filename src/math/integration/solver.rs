use std::convert::Infallible;

use tracing::{
    debug,
    warn
};

use crate::math::function::realfunction::RealFunction;
use crate::math::integration::integrationerror::{
    BoxedError,
    IntegrationError
};

// ─────────────────────────────────────────────────────────────────────────────
// Solver - composite Simpson's rule
// ─────────────────────────────────────────────────────────────────────────────
//
//   ∫_a^b f(x) dx ≈ h/3 · [ f(x_0) + 4 Σ_odd f(x_i) + 2 Σ_even f(x_i) + f(x_n) ]
//
//   h = (b - a) / n,  x_i = a + i·h,  n > 0 and even
//
// Exact for polynomials up to degree 3. f is evaluated exactly n + 1 times,
// at x_0 = a, x_1, ..., x_n = b in that order.

pub struct Solver;

impl Solver {
    /// Rejects step counts that are not positive and even.
    pub fn check_steps(steps: i64) -> Result<(), IntegrationError> {
        if steps <= 0 || steps % 2 != 0 {
            return Err(IntegrationError::InvalidArgument { steps });
        }
        Ok(())
    }

    /// Integrates `f` over `[a, b]` with `steps` subintervals.
    ///
    /// `a > b` yields the negated integral over `[b, a]`, and `a == b`
    /// yields `0`. Non-finite values produced by `f` are not rejected; they
    /// flow into the sum and show up in the result.
    ///
    /// # Errors
    /// [`IntegrationError::InvalidArgument`] when `steps` is not positive
    /// and even. `f` is not called in that case.
    pub fn integrate<F>(f: &F, a: f64, b: f64, steps: i64) -> Result<f64, IntegrationError> where
        F: RealFunction + ?Sized {
        Self::try_integrate(|x| Ok::<f64, Infallible>(f.value(x)), a, b, steps)
    }

    /// Same as [`Solver::integrate`] for an integrand that can fail.
    ///
    /// Samples run from `a` to `b`. The first error returned by `f` aborts
    /// the computation and is reported as [`IntegrationError::CallableFault`]
    /// carrying the sample point; the remaining points are not evaluated.
    pub fn try_integrate<F, E>(mut f: F, a: f64, b: f64, steps: i64) -> Result<f64, IntegrationError> where
        F: FnMut(f64) -> Result<f64, E>,
        E: Into<BoxedError> {
        Self::check_steps(steps)?;

        let h = (b - a) / steps as f64;
        debug!(a, b, steps, h, "simpson integration");

        let mut sample = |x: f64| f(x).map_err(|error| IntegrationError::CallableFault {
            x,
            source: error.into()
        });

        let mut sum = sample(a)?;
        for i in 1..steps {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * sample(a + i as f64 * h)?;
        }
        sum += sample(b)?;

        let result = sum * h / 3.0;
        if !result.is_finite() {
            warn!(a, b, steps, result, "integral is not finite");
        }
        Ok(result)
    }
}
