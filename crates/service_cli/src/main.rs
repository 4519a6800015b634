//! shortrate CLI - command line front-end for the pricing kernels.
//!
//! # Commands
//!
//! - `shortrate lattice` - price an interest-rate option on the short-rate lattice
//! - `shortrate mc` - price an equity option by Monte Carlo simulation
//! - `shortrate rates` - query the market rate provider for a curve
//!
//! The CLI is the external caller the pricing cores assume: it gathers
//! parameters, fetches the initial rate where needed, invokes a pricer
//! synchronously, and prints the scalar result.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Short-rate and Monte Carlo option pricing CLI
#[derive(Parser)]
#[command(name = "shortrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Human-readable line output
    Plain,
    /// Machine-readable JSON
    Json,
}

/// Call or put, as a CLI argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl From<KindArg> for pricer_core::types::OptionKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Call => pricer_core::types::OptionKind::Call,
            KindArg::Put => pricer_core::types::OptionKind::Put,
        }
    }
}

/// Exercise style, as a CLI argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    /// Exercise at maturity only
    European,
    /// Exercise at every lattice date
    Bermudan,
}

impl From<StyleArg> for pricer_core::types::ExerciseStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::European => pricer_core::types::ExerciseStyle::European,
            StyleArg::Bermudan => pricer_core::types::ExerciseStyle::Bermudan,
        }
    }
}

/// Barrier flavour, as a CLI argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum BarrierArg {
    /// Down-and-In
    DownIn,
    /// Down-and-Out
    DownOut,
    /// Up-and-In
    UpIn,
    /// Up-and-Out
    UpOut,
}

impl From<BarrierArg> for pricer_core::types::BarrierType {
    fn from(value: BarrierArg) -> Self {
        match value {
            BarrierArg::DownIn => pricer_core::types::BarrierType::DownIn,
            BarrierArg::DownOut => pricer_core::types::BarrierType::DownOut,
            BarrierArg::UpIn => pricer_core::types::BarrierType::UpIn,
            BarrierArg::UpOut => pricer_core::types::BarrierType::UpOut,
        }
    }
}

/// Monte Carlo variance-reduction scheme, as a CLI argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodArg {
    /// Antithetic variates
    Antithetic,
    /// Control variate on the terminal price
    ControlVariate,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an interest-rate option on the short-rate lattice
    Lattice {
        /// Underlying curve for the initial rate (ignored when --r0 is given)
        #[arg(short, long, default_value = "US LIBOR")]
        underlying: String,

        /// Initial short rate; overrides the rate provider
        #[arg(long)]
        r0: Option<f64>,

        /// Mean reversion speed (a)
        #[arg(short = 'a', long, default_value = "0.1")]
        mean_reversion: f64,

        /// Short-rate volatility (sigma), annualised
        #[arg(short = 's', long, default_value = "0.01")]
        volatility: f64,

        /// Maturity in years
        #[arg(short = 'T', long, default_value = "5.0")]
        maturity: f64,

        /// Number of lattice steps
        #[arg(short = 'n', long, default_value = "50")]
        steps: usize,

        /// Strike rate
        #[arg(short = 'k', long, default_value = "0.02")]
        strike: f64,

        /// Call or put
        #[arg(long, value_enum, default_value_t = KindArg::Call)]
        kind: KindArg,

        /// Exercise style
        #[arg(long, value_enum, default_value_t = StyleArg::European)]
        style: StyleArg,

        /// Barrier flavour; omit for a vanilla option
        #[arg(long, value_enum)]
        barrier: Option<BarrierArg>,

        /// Barrier level (required with --barrier)
        #[arg(long, default_value = "0.015")]
        barrier_level: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },

    /// Price an equity option by Monte Carlo simulation
    Mc {
        /// Variance-reduction scheme
        #[arg(short, long, value_enum, default_value_t = MethodArg::Antithetic)]
        method: MethodArg,

        /// Spot price of the underlying
        #[arg(long, default_value = "100.0")]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long, default_value = "110.0")]
        strike: f64,

        /// Call or put
        #[arg(long, value_enum, default_value_t = KindArg::Call)]
        kind: KindArg,

        /// Risk-free rate, annualised
        #[arg(short = 'r', long, default_value = "0.03")]
        rate: f64,

        /// Volatility, annualised
        #[arg(short = 's', long, default_value = "0.25")]
        volatility: f64,

        /// Maturity in years
        #[arg(short = 'T', long, default_value_t = 1.0 / 12.0)]
        maturity: f64,

        /// Time steps per path
        #[arg(short = 'n', long, default_value = "500")]
        steps: usize,

        /// Number of simulated paths
        #[arg(short = 'p', long, default_value = "500")]
        paths: usize,

        /// Pilot paths for the control-variate coefficient
        #[arg(long, default_value = "500")]
        pilot: usize,

        /// RNG seed; omitted means a fresh entropy seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },

    /// Query the market rate provider for a curve
    Rates {
        /// Underlying curve identifier
        #[arg(short, long, default_value = "US LIBOR")]
        underlying: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Lattice {
            underlying,
            r0,
            mean_reversion,
            volatility,
            maturity,
            steps,
            strike,
            kind,
            style,
            barrier,
            barrier_level,
            format,
        } => commands::lattice::run(commands::lattice::LatticeArgs {
            underlying,
            r0,
            mean_reversion,
            volatility,
            maturity,
            steps,
            strike,
            kind: kind.into(),
            style: style.into(),
            barrier: barrier.map(|b| {
                pricer_core::types::BarrierSpec::new(b.into(), barrier_level)
            }),
            json: matches!(format, OutputFormat::Json),
        }),
        Commands::Mc {
            method,
            spot,
            strike,
            kind,
            rate,
            volatility,
            maturity,
            steps,
            paths,
            pilot,
            seed,
            format,
        } => commands::mc::run(commands::mc::McArgs {
            control_variate: matches!(method, MethodArg::ControlVariate),
            spot,
            strike,
            kind: kind.into(),
            rate,
            volatility,
            maturity,
            steps,
            paths,
            pilot,
            seed,
            json: matches!(format, OutputFormat::Json),
        }),
        Commands::Rates { underlying } => commands::rates::run(&underlying),
    }
}
