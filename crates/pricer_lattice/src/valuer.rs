//! Backward-induction valuation on the short-rate lattice.

use pricer_core::types::{BarrierSpec, ExerciseStyle, OptionKind};
use serde::{Deserialize, Serialize};

use crate::lattice::{LatticeParams, RateLattice};

/// Risk-neutral up/down probability of the symmetric lattice.
const RISK_NEUTRAL_P: f64 = 0.5;

/// Contract terms of a rate option on the lattice.
///
/// # Examples
/// ```
/// use pricer_core::types::{BarrierSpec, BarrierType, ExerciseStyle, OptionKind};
/// use pricer_lattice::RateOptionSpec;
///
/// let vanilla = RateOptionSpec::vanilla(OptionKind::Put, ExerciseStyle::Bermudan, 0.03);
/// assert!(vanilla.barrier.is_none());
///
/// let knocked = vanilla.with_barrier(BarrierSpec::new(BarrierType::UpOut, 0.05));
/// assert!(knocked.barrier.is_some());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateOptionSpec {
    /// Call or put.
    pub kind: OptionKind,
    /// European or Bermudan exercise.
    pub style: ExerciseStyle,
    /// Strike rate.
    pub strike: f64,
    /// Optional barrier, applied node-locally at every step.
    pub barrier: Option<BarrierSpec>,
}

impl RateOptionSpec {
    /// Creates a vanilla (barrier-free) option specification.
    #[inline]
    pub fn vanilla(kind: OptionKind, style: ExerciseStyle, strike: f64) -> Self {
        Self {
            kind,
            style,
            strike,
            barrier: None,
        }
    }

    /// Returns a copy of this specification with a barrier attached.
    #[inline]
    pub fn with_barrier(mut self, barrier: BarrierSpec) -> Self {
        self.barrier = Some(barrier);
        self
    }

    /// Applies the barrier knock policy, if any, at the observed rate.
    #[inline]
    fn knock(&self, value: f64, rate: f64) -> f64 {
        match &self.barrier {
            Some(spec) => spec.apply(value, rate),
            None => value,
        }
    }
}

/// Prices a rate option by backward induction on the lattice.
///
/// # Algorithm
///
/// 1. Build the recombining lattice for `params`.
/// 2. Terminal step: intrinsic value `max(sign·(rate − strike), 0)` per
///    state, then the barrier knock policy against the terminal rate.
/// 3. Steps `N−1 .. 0`: continuation value
///    `exp(−rate·dt) · (½·up + ½·down)`; Bermudan exercise takes
///    `max(continuation, intrinsic)`; the barrier policy is re-applied
///    against the node's own rate.
/// 4. The price is the value at the root node `(0, 0)`.
///
/// The barrier test carries no path memory: each node is knocked on its
/// own rate alone (see [`BarrierSpec`] for the exact semantics).
///
/// # Returns
///
/// A non-negative price: every retained value is either a `max(·, 0)` or
/// a discounted average of non-negatives. With `n_steps == 0` the result
/// is the bare intrinsic (after any knock) at the root.
///
/// The kernel raises no domain errors; non-finite inputs propagate as
/// non-finite arithmetic. Use [`LatticeParams::validate`] at caller
/// boundaries.
pub fn price(params: &LatticeParams, spec: &RateOptionSpec) -> f64 {
    let lattice = RateLattice::build(params);
    let n = lattice.n_steps();
    let dt = lattice.dt();

    // Square (N+1)×(N+1) value grid; only entries with state ≤ step are
    // meaningful. Row-major: values[step * (n+1) + state].
    let width = n + 1;
    let mut values = vec![0.0_f64; width * width];

    // Terminal payoffs.
    for (state, &rate) in lattice.level(n).iter().enumerate() {
        let intrinsic = spec.kind.intrinsic(rate, spec.strike);
        values[n * width + state] = spec.knock(intrinsic, rate);
    }

    // Backward induction to the root.
    for step in (0..n).rev() {
        for (state, &rate) in lattice.level(step).iter().enumerate() {
            let up = values[(step + 1) * width + state + 1];
            let down = values[(step + 1) * width + state];
            let discount = (-rate * dt).exp();
            let mut value = discount * (RISK_NEUTRAL_P * up + (1.0 - RISK_NEUTRAL_P) * down);
            if spec.style.allows_early_exercise() {
                value = value.max(spec.kind.intrinsic(rate, spec.strike));
            }
            values[step * width + state] = spec.knock(value, rate);
        }
    }

    values[0]
}
