//! Super-Gaussian peak as a curve-function plugin.
//!
//! A flat-topped peak, used to locate the beam in a coarse spatial scan
//! before the edge fit:
//!
//! ```text
//! y = amplitude * exp(-(0.5 * ((x - mu) / sigma)^2)^n)
//! ```
//!
//! `n = 1` is an ordinary Gaussian; larger `n` flattens the top.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

use nlf_abi::{CurveFunction, GuessError, GuessOptions, InputParameters, check_samples};
use tracing::debug;

/// Index of each parameter in `a`.
pub mod param {
    /// Peak height.
    pub const AMPLITUDE: usize = 0;
    /// Peak center.
    pub const MU: usize = 1;
    /// Peak width.
    pub const SIGMA: usize = 2;
    /// Flatness order.
    pub const ORDER: usize = 3;
}

/// The `f2` super-Gaussian.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperGaussian;

impl CurveFunction for SuperGaussian {
    const NAME: &'static str = "f2: SuperGaussian f2=amplitude*exp(-(0.5*((x-mu)/sigma)^2)^n)";
    const VARIABLES: &'static [&'static str] = &["x"];
    const PARAMETERS: &'static [&'static str] = &["amplitude", "mu", "sigma", "n"];

    fn value(x: &[f64], a: &[f64]) -> Option<f64> {
        match (x, a) {
            ([x], [amplitude, mu, sigma, n]) => Some(super_gaussian(*x, *amplitude, *mu, *sigma, *n)),
            _ => None,
        }
    }
}

/// Closed form of the peak, IEEE-754 throughout.
#[must_use]
pub fn super_gaussian(x: f64, amplitude: f64, mu: f64, sigma: f64, n: f64) -> f64 {
    let z = (x - mu) / sigma;
    amplitude * libm::exp(-libm::pow(0.5 * z * z, n))
}

impl SuperGaussian {
    /// Estimate starting parameters from a scan.
    ///
    /// Height is the largest sample and the center the mean of `x`. Width
    /// and order come from `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`GuessError`] for empty, mismatched or non-finite samples.
    pub fn guess(
        x: &[f64],
        y: &[f64],
        options: &GuessOptions,
    ) -> Result<InputParameters, GuessError> {
        check_samples(x, y)?;

        let amplitude = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let count = x.len() as f64;
        let mu = x.iter().map(|&xi| xi / count).sum::<f64>();
        let sigma = options.sigma;
        let n = options.exponent;

        debug!(amplitude, mu, sigma, n, samples = x.len(), "guessed peak parameters");

        Ok(InputParameters::from_pairs(
            Self::PARAMETERS.iter().copied().zip([amplitude, mu, sigma, n]),
        ))
    }
}

nlf_abi::export_curve_function!(SuperGaussian);
