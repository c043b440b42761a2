//! Gaussian cumulative distribution function as a curve-function plugin.
//!
//! Models a smoothed step, the edge profile seen when a knife edge or slit
//! is scanned across a Gaussian beam:
//!
//! ```text
//! y = amplitude / 2 * (1 + erf((x - mu) / (sigma * sqrt(2)))) + offset
//! ```
//!
//! The cdylib build exports the host entry points (`GetFunctionName`,
//! `GetFunctionValue`, `GetNumParameters`, `GetNumVariables`) plus the checked
//! pair from [`nlf_abi::export_curve_function!`]. The rlib build exposes the
//! same function to Rust through [`CurveFunction`].
//!
//! ```
//! use nlf_abi::CurveFunction;
//! use nlf_gaussian_cdf::GaussianCdf;
//!
//! let y = GaussianCdf::evaluate(&[0.0], &[2.0, 0.0, 1.0, 1.0])?;
//! assert!((y - 2.0).abs() < 1e-12);
//! # Ok::<(), nlf_abi::FunctionError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

use core::f64::consts::SQRT_2;

use nlf_abi::CurveFunction;

mod guess;

/// Index of each parameter in `a`.
pub mod param {
    /// Step height.
    pub const AMPLITUDE: usize = 0;
    /// Edge position.
    pub const MU: usize = 1;
    /// Edge width.
    pub const SIGMA: usize = 2;
    /// Baseline below the edge.
    pub const OFFSET: usize = 3;
}

/// The `f1` Gaussian CDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianCdf;

impl CurveFunction for GaussianCdf {
    const NAME: &'static str =
        "f1: GaussianCDF f1=amplitude/2*(1+erf((x-mu)/(sigma*sqrt(2))))+offset";
    const VARIABLES: &'static [&'static str] = &["x"];
    const PARAMETERS: &'static [&'static str] = &["amplitude", "mu", "sigma", "offset"];

    fn value(x: &[f64], a: &[f64]) -> Option<f64> {
        match (x, a) {
            ([x], [amplitude, mu, sigma, offset]) => {
                Some(gaussian_cdf(*x, *amplitude, *mu, *sigma, *offset))
            }
            _ => None,
        }
    }
}

/// Closed form of the edge.
///
/// `sigma == 0` follows IEEE-754: the erf argument is `±inf` away from `mu`
/// (a hard step) and `0/0 = NaN` at `mu`.
#[must_use]
pub fn gaussian_cdf(x: f64, amplitude: f64, mu: f64, sigma: f64, offset: f64) -> f64 {
    0.5 * amplitude * (1.0 + libm::erf((x - mu) / (sigma * SQRT_2))) + offset
}

nlf_abi::export_curve_function!(GaussianCdf);
