//! Recombining short-rate lattice construction.

use pricer_core::types::PricingError;
use serde::{Deserialize, Serialize};

/// Parameters for short-rate lattice construction.
///
/// # Model
///
/// Node placement is the symmetric displacement
/// `rate(i, j) = r0 + (2j − i)·dx` with `dx = σ·√(T/N)`. The lattice is
/// recombining: step `i` carries exactly `i + 1` states.
///
/// `mean_reversion` is carried for interface compatibility with the
/// Hull-White parameterisation but is unused in node placement (see the
/// crate-level documentation).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticeParams {
    /// Initial short rate r(0).
    pub r0: f64,
    /// Mean reversion speed (a). Accepted but unused in node placement.
    pub mean_reversion: f64,
    /// Short-rate volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
    /// Number of time steps (N). `0` yields a single terminal node.
    pub n_steps: usize,
}

impl LatticeParams {
    /// Creates new lattice parameters.
    ///
    /// # Arguments
    ///
    /// * `r0` - Initial short rate
    /// * `mean_reversion` - Mean reversion speed (unused in node placement)
    /// * `volatility` - Short-rate volatility (annualised)
    /// * `maturity` - Time to maturity (years)
    /// * `n_steps` - Number of lattice steps
    #[inline]
    pub fn new(
        r0: f64,
        mean_reversion: f64,
        volatility: f64,
        maturity: f64,
        n_steps: usize,
    ) -> Self {
        Self {
            r0,
            mean_reversion,
            volatility,
            maturity,
            n_steps,
        }
    }

    /// Validates the parameters for use at a caller boundary.
    ///
    /// The pricing kernel itself is a total function and does not call
    /// this; invalid numeric inputs simply propagate as non-finite
    /// arithmetic. Front-ends use this to reject inputs early.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] when any of `r0`,
    /// `volatility`, or `maturity` is non-finite, or when `volatility`
    /// is negative or `maturity` is non-positive.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.r0.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "initial short rate must be finite, got {}",
                self.r0
            )));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "volatility must be finite and non-negative, got {}",
                self.volatility
            )));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "maturity must be finite and positive, got {}",
                self.maturity
            )));
        }
        Ok(())
    }
}

/// A recombining triangular short-rate lattice.
///
/// Rates are stored in a flat triangular buffer; the node `(i, j)` with
/// `j ∈ [0, i]` lives at offset `i·(i+1)/2 + j`. The lattice is built
/// fresh per pricing call and discarded afterwards.
#[derive(Clone, Debug)]
pub struct RateLattice {
    /// Triangular node storage, `(n_steps+1)(n_steps+2)/2` entries.
    rates: Vec<f64>,
    /// Number of time steps (final step index).
    n_steps: usize,
    /// Time increment per step, `T/N`.
    dt: f64,
    /// Spatial increment per state, `σ·√dt`.
    dx: f64,
}

impl RateLattice {
    /// Builds the lattice for the given parameters.
    ///
    /// For `n_steps == 0` the time increment degenerates to the full
    /// maturity and the lattice holds the single node `r0`.
    pub fn build(params: &LatticeParams) -> Self {
        let n = params.n_steps;
        // N = 0 keeps dt finite so that discounting stays well-defined.
        let dt = if n == 0 {
            params.maturity
        } else {
            params.maturity / n as f64
        };
        let dx = params.volatility * dt.sqrt();

        let mut rates = Vec::with_capacity((n + 1) * (n + 2) / 2);
        for i in 0..=n {
            for j in 0..=i {
                rates.push(params.r0 + (2.0 * j as f64 - i as f64) * dx);
            }
        }

        Self {
            rates,
            n_steps: n,
            dt,
            dx,
        }
    }

    /// Returns the short rate at node `(step, state)`.
    ///
    /// # Panics
    ///
    /// Panics if `step > n_steps` or `state > step`.
    #[inline]
    pub fn rate(&self, step: usize, state: usize) -> f64 {
        debug_assert!(step <= self.n_steps);
        assert!(state <= step, "state {} out of range at step {}", state, step);
        self.rates[step * (step + 1) / 2 + state]
    }

    /// Returns all rates at a given step, lowest state first.
    #[inline]
    pub fn level(&self, step: usize) -> &[f64] {
        let offset = step * (step + 1) / 2;
        &self.rates[offset..offset + step + 1]
    }

    /// Number of time steps (the terminal step index).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Time increment per step.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Spatial increment between adjacent states.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn params(n_steps: usize) -> LatticeParams {
        LatticeParams::new(0.03, 0.1, 0.01, 1.0, n_steps)
    }

    #[test]
    fn test_level_counts() {
        let lattice = RateLattice::build(&params(5));
        for i in 0..=5 {
            assert_eq!(lattice.level(i).len(), i + 1);
        }
    }

    #[test]
    fn test_increments() {
        let p = params(4);
        let lattice = RateLattice::build(&p);
        assert_relative_eq!(lattice.dt(), 0.25, epsilon = 1e-15);
        assert_relative_eq!(lattice.dx(), 0.01 * 0.25_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_node_placement() {
        let p = params(2);
        let lattice = RateLattice::build(&p);
        let dx = lattice.dx();
        assert_relative_eq!(lattice.rate(0, 0), 0.03, epsilon = 1e-15);
        assert_relative_eq!(lattice.rate(1, 0), 0.03 - dx, epsilon = 1e-15);
        assert_relative_eq!(lattice.rate(1, 1), 0.03 + dx, epsilon = 1e-15);
        assert_relative_eq!(lattice.rate(2, 0), 0.03 - 2.0 * dx, epsilon = 1e-15);
        assert_relative_eq!(lattice.rate(2, 1), 0.03, epsilon = 1e-15);
        assert_relative_eq!(lattice.rate(2, 2), 0.03 + 2.0 * dx, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_steps_single_node() {
        let p = params(0);
        let lattice = RateLattice::build(&p);
        assert_eq!(lattice.n_steps(), 0);
        assert_eq!(lattice.level(0), &[0.03]);
        // dt degenerates to the full maturity
        assert_relative_eq!(lattice.dt(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        assert!(params(10).validate().is_ok());
        assert!(LatticeParams::new(f64::NAN, 0.1, 0.01, 1.0, 10)
            .validate()
            .is_err());
        assert!(LatticeParams::new(0.03, 0.1, -0.01, 1.0, 10)
            .validate()
            .is_err());
        assert!(LatticeParams::new(0.03, 0.1, 0.01, 0.0, 10)
            .validate()
            .is_err());
    }

    proptest! {
        // rate(i, j) is symmetric around r0 whenever i is even.
        #[test]
        fn prop_even_steps_symmetric_around_r0(
            r0 in -0.05_f64..0.10,
            sigma in 0.001_f64..0.2,
            maturity in 0.1_f64..10.0,
            n in 1_usize..30,
        ) {
            let p = LatticeParams::new(r0, 0.1, sigma, maturity, n);
            let lattice = RateLattice::build(&p);
            for i in (0..=n).filter(|i| i % 2 == 0) {
                let level = lattice.level(i);
                for j in 0..=i {
                    let lo = level[j] - r0;
                    let hi = level[i - j] - r0;
                    prop_assert!((lo + hi).abs() < 1e-12);
                }
            }
        }

        // Recombination: state count grows linearly, not exponentially.
        #[test]
        fn prop_level_count_is_step_plus_one(n in 0_usize..50) {
            let lattice = RateLattice::build(&LatticeParams::new(0.02, 0.1, 0.01, 2.0, n));
            for i in 0..=n {
                prop_assert_eq!(lattice.level(i).len(), i + 1);
            }
        }
    }
}
