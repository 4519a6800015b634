//! Geometric Brownian Motion parameters and the simulated path matrix.

use serde::{Deserialize, Serialize};

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// The underlying follows `dS = r S dt + σ S dW` under the risk-neutral
/// measure, simulated with the exact log-space update
///
/// ```text
/// S(t+dt) = S(t) · exp((r − ½σ²)·dt + σ·√dt·Z)
/// ```
///
/// which preserves positivity of every simulated price.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Returns `true` if all parameters are finite and in range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.spot > 0.0
            && self.spot.is_finite()
            && self.rate.is_finite()
            && self.volatility >= 0.0
            && self.volatility.is_finite()
            && self.maturity > 0.0
            && self.maturity.is_finite()
    }

    /// Closed-form mean of the terminal price, `E[S_T] = S·e^{rT}`.
    #[inline]
    pub fn terminal_mean(&self) -> f64 {
        self.spot * (self.rate * self.maturity).exp()
    }

    /// Closed-form lognormal variance of the terminal price,
    /// `Var(S_T) = S²·e^{2rT}·(e^{Tσ²} − 1)`.
    #[inline]
    pub fn terminal_variance(&self) -> f64 {
        let s = self.spot;
        let two_rt = 2.0 * self.rate * self.maturity;
        s * s * two_rt.exp() * ((self.maturity * self.volatility * self.volatility).exp() - 1.0)
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.03,
            volatility: 0.25,
            maturity: 1.0 / 12.0,
        }
    }
}

/// A `(n_steps + 1) × n_paths` matrix of simulated underlying prices.
///
/// # Memory Layout
///
/// Step-major contiguous storage: `data[step * n_paths + path]`. Row 0
/// holds the initial spot for every path (column); each later row is one
/// multiplicative GBM step. After simulation every entry is positive.
#[derive(Clone, Debug)]
pub struct PathMatrix {
    data: Vec<f64>,
    n_steps: usize,
    n_paths: usize,
}

impl PathMatrix {
    /// Allocates a matrix with row 0 set to `spot` and all later rows zero.
    pub fn with_spot(n_steps: usize, n_paths: usize, spot: f64) -> Self {
        let mut data = vec![0.0; (n_steps + 1) * n_paths];
        data[..n_paths].fill(spot);
        Self {
            data,
            n_steps,
            n_paths,
        }
    }

    /// Number of time steps (the matrix has `n_steps + 1` rows).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of simulated paths (columns).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Price of `path` at time `step`.
    #[inline]
    pub fn get(&self, step: usize, path: usize) -> f64 {
        self.data[step * self.n_paths + path]
    }

    /// Sets the price of `path` at time `step`.
    #[inline]
    pub fn set(&mut self, step: usize, path: usize, value: f64) {
        self.data[step * self.n_paths + path] = value;
    }

    /// All prices at a given time step, one per path.
    #[inline]
    pub fn row(&self, step: usize) -> &[f64] {
        let offset = step * self.n_paths;
        &self.data[offset..offset + self.n_paths]
    }

    /// Terminal prices, one per path.
    #[inline]
    pub fn terminal(&self) -> &[f64] {
        self.row(self.n_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gbm_params_validation() {
        assert!(GbmParams::default().is_valid());
        assert!(!GbmParams::new(0.0, 0.03, 0.25, 1.0).is_valid());
        assert!(!GbmParams::new(-100.0, 0.03, 0.25, 1.0).is_valid());
        assert!(!GbmParams::new(100.0, 0.03, -0.25, 1.0).is_valid());
        assert!(!GbmParams::new(100.0, 0.03, 0.25, 0.0).is_valid());
        assert!(!GbmParams::new(f64::NAN, 0.03, 0.25, 1.0).is_valid());
    }

    #[test]
    fn test_terminal_moments() {
        let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
        assert_relative_eq!(params.terminal_mean(), 100.0 * 0.05_f64.exp(), epsilon = 1e-12);
        let expected_var = 100.0 * 100.0 * (0.1_f64).exp() * ((0.04_f64).exp() - 1.0);
        assert_relative_eq!(params.terminal_variance(), expected_var, max_relative = 1e-12);
    }

    #[test]
    fn test_with_spot_initialises_first_row() {
        let matrix = PathMatrix::with_spot(3, 5, 100.0);
        assert_eq!(matrix.row(0), &[100.0; 5]);
        for step in 1..=3 {
            assert_eq!(matrix.row(step), &[0.0; 5]);
        }
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut matrix = PathMatrix::with_spot(2, 3, 1.0);
        matrix.set(2, 1, 42.0);
        assert_eq!(matrix.get(2, 1), 42.0);
        assert_eq!(matrix.terminal(), &[0.0, 42.0, 0.0]);
    }
}
