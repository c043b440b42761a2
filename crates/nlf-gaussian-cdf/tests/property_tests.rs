//! Property-based tests for the Gaussian CDF.

use nlf_abi::{CurveFunction, GuessOptions};
use nlf_gaussian_cdf::{GaussianCdf, gaussian_cdf};
use nlf_test_helpers::prelude::*;
use proptest::prelude::*;

fn amplitude() -> impl Strategy<Value = f64> {
    0.0f64..1e3
}

fn location() -> impl Strategy<Value = f64> {
    -1e3f64..1e3
}

fn width() -> impl Strategy<Value = f64> {
    1e-3f64..1e2
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_half_step_at_mu(
        amplitude in amplitude(),
        mu in location(),
        sigma in width(),
        offset in location(),
    ) {
        let y = gaussian_cdf(mu, amplitude, mu, sigma, offset);
        let expected = amplitude / 2.0 + offset;
        prop_assert!((y - expected).abs() <= 1e-12 * (1.0 + expected.abs()));
    }

    #[test]
    fn prop_non_decreasing_in_x(
        amplitude in amplitude(),
        mu in location(),
        sigma in width(),
        offset in location(),
        x1 in location(),
        x2 in location(),
    ) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let a = [amplitude, mu, sigma, offset];
        let y_lo = GaussianCdf::value(&[lo], &a);
        let y_hi = GaussianCdf::value(&[hi], &a);
        prop_assert!(y_lo <= y_hi, "f({lo}) = {y_lo:?} > f({hi}) = {y_hi:?}");
    }

    #[test]
    fn prop_bounded_by_offset_and_step(
        amplitude in amplitude(),
        mu in location(),
        sigma in width(),
        offset in location(),
        x in location(),
    ) {
        let y = gaussian_cdf(x, amplitude, mu, sigma, offset);
        prop_assert!(y >= offset - 1e-9 * (1.0 + offset.abs()));
        prop_assert!(y <= amplitude + offset + 1e-9 * (1.0 + (amplitude + offset).abs()));
    }

    #[test]
    fn prop_point_symmetric_about_center(
        amplitude in amplitude(),
        mu in -10.0f64..10.0,
        sigma in width(),
        offset in -10.0f64..10.0,
        d in 0.0f64..10.0,
    ) {
        let above = gaussian_cdf(mu + d, amplitude, mu, sigma, offset);
        let below = gaussian_cdf(mu - d, amplitude, mu, sigma, offset);
        let sum = amplitude + 2.0 * offset;
        prop_assert!((above + below - sum).abs() <= 1e-9 * (1.0 + amplitude + offset.abs()));
    }

    #[test]
    fn prop_evaluate_rejects_wrong_parameter_count(n in 0usize..8) {
        prop_assume!(n != 4);
        let a = vec![1.0; n];
        prop_assert!(GaussianCdf::evaluate(&[0.0], &a).is_err());
    }
}

#[test]
fn test_far_tails_reach_limits() {
    let a = [2.0, 0.0, 1.0, 0.5];
    assert_approx_eq!(GaussianCdf::value(&[50.0], &a).unwrap_or(f64::NAN), 2.5, 0.0);
    assert_approx_eq!(GaussianCdf::value(&[-50.0], &a).unwrap_or(f64::NAN), 0.5, 0.0);
}

#[test]
fn test_grid_is_sorted() -> TestResult {
    let xs = linspace(-5.0, 5.0, 100);
    let ys = GaussianCdf::evaluate_grid(&xs, &[1.0, 0.0, 0.7, 0.0])?;
    assert_eq!(ys.len(), 100);
    assert_sorted!(&ys);
    assert_monotonic!(ys.get(30..70).unwrap_or_default());
    Ok(())
}

#[test]
fn test_negative_amplitude_is_falling_edge() -> TestResult {
    let xs = linspace(-1.0, 1.0, 21);
    let ys = GaussianCdf::evaluate_grid(&xs, &[-1.0, 0.0, 0.5, 1.0])?;
    assert_monotonic_desc!(&ys);
    Ok(())
}

#[test]
fn test_guess_recovers_synthetic_edge() -> TestResult {
    let xs = linspace(-1.0, 1.0, 101);
    let ys = sample(&xs, |x| gaussian_cdf(x, 2.0, 0.3, 0.05, 0.5));

    let params = GaussianCdf::guess(&xs, &ys, &GuessOptions::default())?;
    let [amplitude, mu, sigma, offset] = params.values()[..] else {
        return Err("expected four parameters".into());
    };

    assert_approx_eq!(amplitude, 2.0, 1e-9);
    assert_approx_eq!(mu, 0.3, 0.02);
    assert_approx_eq!(sigma, 0.1, 0.0);
    assert_approx_eq!(offset, 0.5, 1e-9);
    Ok(())
}

#[test]
fn test_guess_then_evaluate_uses_parameter_order() -> TestResult {
    let xs = [0.0, 1.0, 2.0, 3.0];
    let ys = [1.0, 1.5, 2.5, 3.0];
    let params = GaussianCdf::guess(&xs, &ys, &GuessOptions { sigma: 0.5, ..GuessOptions::default() })?;
    let y = GaussianCdf::evaluate(&[1.0], &params.values())?;
    assert_approx_eq!(y, 2.0, 1e-12);
    Ok(())
}
