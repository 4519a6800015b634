//! Control-variate path simulation.

use pricer_core::types::OptionKind;

use crate::error::{validate_dims, validate_market, ConfigError};
use crate::paths::{GbmParams, PathMatrix};
use crate::rng::SimRng;

/// Simulates GBM paths and prices a European option with a terminal-price
/// control variable.
///
/// # Algorithm
///
/// 1. **Pilot run**: `n_pilot` auxiliary paths are simulated purely to
///    estimate the optimal coefficient
///    `c = −Cov(S_T, payoff) / Var(S_T)`, where the covariance is the
///    sample covariance over the pilot set and `Var(S_T)` is the
///    closed-form lognormal variance `S²·e^{2rT}·(e^{Tσ²} − 1)`.
/// 2. **Pricing run**: `n_paths` fresh paths are simulated; payoffs are
///    discounted and the estimator is shifted by the control term
///    `c·(S − E[S_T])` with the known mean `E[S_T] = S·e^{rT}`:
///
///    ```text
///    price = mean(e^{−rT}·max(sign·(S_T − K), 0)) + c·(S − S·e^{rT})
///    ```
///
/// The terminal price is a control variable with known mean; shifting the
/// estimator by a scaled deviation from that mean offsets the premium the
/// payoff inherits from drift in the underlying. The shift uses the known
/// mean rather than per-path terminals, exactly as in the reference
/// model.
///
/// # Arguments
///
/// * `kind` - Call or put
/// * `params` - GBM market parameters
/// * `strike` - Strike price (K)
/// * `n_steps` - Time steps per path
/// * `n_paths` - Number of pricing paths
/// * `n_pilot` - Number of auxiliary paths for the coefficient estimate
/// * `rng` - Seeded draw source
///
/// # Returns
///
/// The path matrix of the **pricing** sample set (the pilot paths are
/// discarded) and the adjusted discounted mean payoff.
///
/// # Errors
///
/// Returns [`ConfigError`] if any dimension is zero or above its limit,
/// or if the market parameters are out of range.
pub fn simulate_control_variate(
    kind: OptionKind,
    params: &GbmParams,
    strike: f64,
    n_steps: usize,
    n_paths: usize,
    n_pilot: usize,
    rng: &mut SimRng,
) -> Result<(PathMatrix, f64), ConfigError> {
    validate_dims(n_steps, n_paths)?;
    validate_dims(n_steps, n_pilot)?;
    validate_market(params)?;

    let pilot = generate_plain_paths(params, n_steps, n_pilot, rng);
    let pilot_payoffs: Vec<f64> = pilot
        .terminal()
        .iter()
        .map(|&s_t| kind.intrinsic(s_t, strike))
        .collect();

    let covariance = sample_covariance(pilot.terminal(), &pilot_payoffs);
    let coefficient = -covariance / params.terminal_variance();

    let paths = generate_plain_paths(params, n_steps, n_paths, rng);
    let discount = (-params.rate * params.maturity).exp();
    let mean_discounted_payoff = paths
        .terminal()
        .iter()
        .map(|&s_t| discount * kind.intrinsic(s_t, strike))
        .sum::<f64>()
        / n_paths as f64;

    let control_shift = coefficient * (params.spot - params.terminal_mean());

    Ok((paths, mean_discounted_payoff + control_shift))
}

/// Generates plain (independently driven) GBM paths.
fn generate_plain_paths(
    params: &GbmParams,
    n_steps: usize,
    n_paths: usize,
    rng: &mut SimRng,
) -> PathMatrix {
    let dt = params.maturity / n_steps as f64;
    let drift_dt = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    let mut paths = PathMatrix::with_spot(n_steps, n_paths, params.spot);
    for path in 0..n_paths {
        for step in 0..n_steps {
            let z = rng.gen_normal();
            let next = paths.get(step, path) * (drift_dt + vol_sqrt_dt * z).exp();
            paths.set(step + 1, path, next);
        }
    }
    paths
}

/// Unbiased sample covariance of two equal-length samples.
///
/// Returns `0.0` for samples shorter than two observations.
fn sample_covariance(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    if n < 2 {
        return 0.0;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;
    let sum = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (x - mean_x) * (y - mean_y))
        .sum::<f64>();
    sum / (n - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_params() -> GbmParams {
        GbmParams::new(100.0, 0.03, 0.25, 1.0 / 12.0)
    }

    #[test]
    fn test_sample_covariance_known_values() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        // cov = 2 · var(xs), var(xs) = 5/3
        assert_relative_eq!(sample_covariance(&xs, &ys), 10.0 / 3.0, epsilon = 1e-12);
        assert_eq!(sample_covariance(&[1.0], &[2.0]), 0.0);
    }

    #[test]
    fn test_covariance_of_uncorrelated_is_small() {
        let mut rng = SimRng::from_seed(5);
        let xs: Vec<f64> = (0..20_000).map(|_| rng.gen_normal()).collect();
        let ys: Vec<f64> = (0..20_000).map(|_| rng.gen_normal()).collect();
        assert!(sample_covariance(&xs, &ys).abs() < 0.05);
    }

    #[test]
    fn test_rejects_zero_pilot_count() {
        let mut rng = SimRng::from_seed(1);
        assert!(matches!(
            simulate_control_variate(OptionKind::Call, &base_params(), 110.0, 10, 10, 0, &mut rng),
            Err(ConfigError::InvalidPathCount(0))
        ));
    }

    #[test]
    fn test_returns_pricing_sample_dimensions() {
        let mut rng = SimRng::from_seed(11);
        let (paths, _) = simulate_control_variate(
            OptionKind::Call,
            &base_params(),
            110.0,
            25,
            40,
            60,
            &mut rng,
        )
        .unwrap();
        assert_eq!(paths.n_paths(), 40);
        assert_eq!(paths.n_steps(), 25);
    }

    #[test]
    fn test_first_row_is_spot_and_entries_positive() {
        let mut rng = SimRng::from_seed(21);
        let (paths, _) = simulate_control_variate(
            OptionKind::Put,
            &base_params(),
            110.0,
            20,
            100,
            100,
            &mut rng,
        )
        .unwrap();
        assert!(paths.row(0).iter().all(|&s| s == 100.0));
        for step in 0..=paths.n_steps() {
            assert!(paths.row(step).iter().all(|&s| s > 0.0));
        }
    }

    #[test]
    fn test_reproducible_by_seed() {
        let run = || {
            let mut rng = SimRng::from_seed(2024);
            simulate_control_variate(
                OptionKind::Call,
                &base_params(),
                110.0,
                50,
                500,
                500,
                &mut rng,
            )
            .unwrap()
            .1
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_call_coefficient_shifts_price_down() {
        // For a call, payoff and S_T are positively correlated, so c < 0
        // and the control term c·(S − S·e^{rT}) is a small positive shift
        // when rates are positive; the estimate must stay near the plain
        // MC estimate for a large sample.
        let mut rng = SimRng::from_seed(8);
        let (_, adjusted) = simulate_control_variate(
            OptionKind::Call,
            &base_params(),
            110.0,
            50,
            20_000,
            5_000,
            &mut rng,
        )
        .unwrap();
        assert!(adjusted.is_finite());
        assert!(adjusted >= 0.0);
    }
}
