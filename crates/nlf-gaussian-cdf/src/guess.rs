//! Starting parameters from a scanned edge.

use nlf_abi::{CurveFunction, GuessError, GuessOptions, InputParameters, check_samples};
use tracing::debug;

use crate::GaussianCdf;

impl GaussianCdf {
    /// Estimate starting parameters from a scan.
    ///
    /// The baseline is the lowest sample and the step height the sample
    /// range. The edge sits at the first `x` whose `y` is nearest the
    /// half-height level. `sigma` comes from `options`.
    ///
    /// ```
    /// use nlf_abi::GuessOptions;
    /// use nlf_gaussian_cdf::GaussianCdf;
    ///
    /// let x = [0.0, 1.0, 2.0, 3.0];
    /// let y = [1.0, 1.5, 2.5, 3.0];
    /// let params = GaussianCdf::guess(&x, &y, &GuessOptions::default())?;
    /// assert_eq!(params.values(), vec![2.0, 1.0, 0.1, 1.0]);
    /// # Ok::<(), nlf_abi::GuessError>(())
    /// ```
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

        let (low, high) = y
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let amplitude = high - low;
        let offset = low;
        let half = low.midpoint(high);

        let mu = x
            .iter()
            .zip(y)
            .min_by(|(_, a), (_, b)| (*a - half).abs().total_cmp(&(*b - half).abs()))
            .map(|(&xi, _)| xi)
            .ok_or(GuessError::Empty)?;
        let sigma = options.sigma;

        debug!(amplitude, mu, sigma, offset, samples = x.len(), "guessed edge parameters");

        Ok(InputParameters::from_pairs(
            Self::PARAMETERS
                .iter()
                .copied()
                .zip([amplitude, mu, sigma, offset]),
        ))
    }
}
