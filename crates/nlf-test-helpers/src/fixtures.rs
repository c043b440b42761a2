//! Sample grids and synthetic scan data.

/// `n` evenly spaced points from `start` to `stop`, both included.
///
/// Returns an empty vector for `n == 0` and `[start]` for `n == 1`.
///
/// ```rust
/// use nlf_test_helpers::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Evaluate `f` at every point of `xs`.
///
/// Used to build synthetic `(x, y)` scans for guess tests.
#[must_use]
pub fn sample(xs: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
    xs.iter().map(|&x| f(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(-1.0, 1.0, 3), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_linspace_hits_stop_exactly() {
        let xs = linspace(0.0, 0.3, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs.last().copied(), Some(0.3));
    }

    #[test]
    fn test_sample() {
        let xs = [0.0, 1.0, 2.0];
        assert_eq!(sample(&xs, |x| x * x), vec![0.0, 1.0, 4.0]);
    }
}
