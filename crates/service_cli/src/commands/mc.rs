//! Monte Carlo pricing command.

use pricer_core::types::OptionKind;
use pricer_mc::{simulate_antithetic, simulate_control_variate, GbmParams, SimRng};
use serde::Serialize;
use tracing::info;

use crate::Result;

/// Resolved arguments for the Monte Carlo command.
pub struct McArgs {
    /// Use the control-variate scheme instead of antithetic variates.
    pub control_variate: bool,
    /// Spot price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Call or put.
    pub kind: OptionKind,
    /// Risk-free rate.
    pub rate: f64,
    /// Volatility.
    pub volatility: f64,
    /// Maturity in years.
    pub maturity: f64,
    /// Time steps per path.
    pub steps: usize,
    /// Number of pricing paths.
    pub paths: usize,
    /// Pilot paths for the control-variate coefficient.
    pub pilot: usize,
    /// RNG seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Emit JSON instead of plain text.
    pub json: bool,
}

/// JSON result payload for the Monte Carlo command.
#[derive(Serialize)]
struct McResult {
    price: f64,
    method: &'static str,
    seed: u64,
    n_steps: usize,
    n_paths: usize,
    min_terminal: f64,
    max_terminal: f64,
}

/// Run the mc command
pub fn run(args: McArgs) -> Result<()> {
    let params = GbmParams::new(args.spot, args.rate, args.volatility, args.maturity);
    let mut rng = match args.seed {
        Some(seed) => SimRng::from_seed(seed),
        None => SimRng::from_entropy(),
    };
    let seed = rng.seed();
    info!(seed, paths = args.paths, steps = args.steps, "starting simulation");

    let (matrix, value) = if args.control_variate {
        simulate_control_variate(
            args.kind,
            &params,
            args.strike,
            args.steps,
            args.paths,
            args.pilot,
            &mut rng,
        )?
    } else {
        simulate_antithetic(
            args.kind,
            &params,
            args.strike,
            args.steps,
            args.paths,
            &mut rng,
        )?
    };

    let method = if args.control_variate {
        "control-variate"
    } else {
        "antithetic"
    };
    let terminal = matrix.terminal();
    let min_terminal = terminal.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_terminal = terminal.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if args.json {
        let result = McResult {
            price: value,
            method,
            seed,
            n_steps: matrix.n_steps(),
            n_paths: matrix.n_paths(),
            min_terminal,
            max_terminal,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Method: {} (seed {})", method, seed);
        println!(
            "Terminal price range: [{:.4}, {:.4}] over {} paths",
            min_terminal,
            max_terminal,
            matrix.n_paths()
        );
        println!("Option price: {:.6}", value);
    }
    Ok(())
}
