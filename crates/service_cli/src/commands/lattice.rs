//! Lattice pricing command.

use adapter_rates::{get_rate, RateQuote, StaticRateSource};
use pricer_core::types::{BarrierSpec, ExerciseStyle, OptionKind};
use pricer_lattice::{price, LatticeParams, RateOptionSpec};
use serde::Serialize;
use tracing::info;

use crate::Result;

/// Resolved arguments for the lattice command.
pub struct LatticeArgs {
    /// Underlying curve identifier for the rate provider.
    pub underlying: String,
    /// Caller-supplied initial rate, bypassing the provider.
    pub r0: Option<f64>,
    /// Mean reversion speed (a).
    pub mean_reversion: f64,
    /// Short-rate volatility.
    pub volatility: f64,
    /// Maturity in years.
    pub maturity: f64,
    /// Lattice step count.
    pub steps: usize,
    /// Strike rate.
    pub strike: f64,
    /// Call or put.
    pub kind: OptionKind,
    /// Exercise style.
    pub style: ExerciseStyle,
    /// Optional barrier.
    pub barrier: Option<BarrierSpec>,
    /// Emit JSON instead of plain text.
    pub json: bool,
}

/// JSON result payload for the lattice command.
#[derive(Serialize)]
struct LatticeResult<'a> {
    price: f64,
    r0: f64,
    disclaimer: &'a str,
    params: &'a LatticeParams,
    spec: &'a RateOptionSpec,
}

/// Run the lattice command
pub fn run(args: LatticeArgs) -> Result<()> {
    let quote = match args.r0 {
        Some(rate) => RateQuote::new(rate, "User-supplied rate"),
        None => get_rate(&StaticRateSource::new(), &args.underlying),
    };
    info!(rate = quote.rate, disclaimer = %quote.disclaimer, "initial short rate resolved");

    let params = LatticeParams::new(
        quote.rate,
        args.mean_reversion,
        args.volatility,
        args.maturity,
        args.steps,
    );
    params.validate()?;

    let mut spec = RateOptionSpec::vanilla(args.kind, args.style, args.strike);
    if let Some(barrier) = args.barrier {
        spec = spec.with_barrier(barrier);
    }

    let value = price(&params, &spec);

    if args.json {
        let result = LatticeResult {
            price: value,
            r0: quote.rate,
            disclaimer: &quote.disclaimer,
            params: &params,
            spec: &spec,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Disclaimer: {}", quote.disclaimer);
        println!("Option price: {:.6}", value);
    }
    Ok(())
}
