//! Solves the linear dispersion relation for surface gravity waves,
//!
//! ```text
//! w² = g k tanh(k h)
//! ```
//!
//! for the wavenumber k given the water depth h and angular frequency w.
//! Newton-Raphson iteration is started from the shallow-water wavenumber,
//! which lies below the root for every k h > 0.

use {
    crate::{
        constants::{DEEP_WATER_KH, GRAVITY, MAX_ITERATIONS, TOLERANCE},
        error::SolveError,
        parameters::Parameters,
    },
    log::{debug, trace},
};

/// Shallow-water approximation of the wavenumber, k0 = w / sqrt(g h)
pub fn initial_guess(h: f64, w: f64) -> f64 {
    w / (GRAVITY * h).sqrt()
}

/// Solves for the wavenumber from the seed `k0` with the default iteration cap
pub fn solve(k0: f64, h: f64, w: f64, error: f64) -> Result<f64, SolveError> {
    DispersionSolver {
        tolerance: error,
        ..DispersionSolver::default()
    }
    .solve(k0, h, w)
    .map(|solution| solution.wavenumber)
}

/// Converged wavenumber and the number of Newton-Raphson updates taken to reach it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub wavenumber: f64,
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionSolver {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for DispersionSolver {
    fn default() -> Self {
        DispersionSolver {
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl From<&Parameters> for DispersionSolver {
    fn from(params: &Parameters) -> Self {
        DispersionSolver {
            tolerance: params.solver.tolerance,
            max_iterations: params.solver.max_iterations,
        }
    }
}

impl DispersionSolver {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        DispersionSolver {
            tolerance,
            max_iterations,
        }
    }

    /// Iterates k <- k - f(k)/f'(k) until successive estimates differ by no more than the
    /// tolerance, returning the last (refined) estimate.
    pub fn solve(&self, k0: f64, h: f64, w: f64) -> Result<Solution, SolveError> {
        let wsq = w * w;
        let mut k = k0;

        for iteration in 1..=self.max_iterations {
            let k_next = k - residual(k, h, wsq) / derivative(k, h);

            trace!("iteration {}: k = {:e}, k_next = {:e}", iteration, k, k_next);

            if !k_next.is_finite() {
                return Err(SolveError::NoConvergence {
                    iterations: iteration,
                    last_estimate: k,
                });
            }

            if (k_next - k).abs() <= self.tolerance {
                debug!(
                    "Converged to k = {:e} after {} iteration(s) (h = {}, w = {})",
                    k_next, iteration, h, w
                );

                return Ok(Solution {
                    wavenumber: k_next,
                    iterations: iteration,
                });
            }

            k = k_next;
        }

        Err(SolveError::NoConvergence {
            iterations: self.max_iterations,
            last_estimate: k,
        })
    }
}

/// f(k) = g k tanh(k h) - w²
fn residual(k: f64, h: f64, wsq: f64) -> f64 {
    GRAVITY * k * (k * h).tanh() - wsq
}

/// f'(k) = g (tanh(k h) + k h sech²(k h))
fn derivative(k: f64, h: f64) -> f64 {
    let kh = k * h;
    GRAVITY * (kh.tanh() + kh * sech_squared(kh))
}

/// sech²(x), taken as zero past the deep-water limit where cosh(x)² would otherwise overflow
fn sech_squared(x: f64) -> f64 {
    if x.abs() > DEEP_WATER_KH {
        0.0
    } else {
        let sech = 1.0 / x.cosh();
        sech * sech
    }
}
