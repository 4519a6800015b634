//! # pricer_mc: Monte Carlo Equity Option Pricer
//!
//! Simulates geometric Brownian motion paths for the underlying and prices
//! European options as the discounted mean terminal payoff, with two
//! variance-reduction schemes:
//!
//! - [`simulate_antithetic`]: paired paths driven by negated normal draws
//! - [`simulate_control_variate`]: terminal-price control variable with a
//!   pilot run to estimate the optimal coefficient
//!
//! Both simulators return the full path matrix of the pricing sample set
//! alongside the scalar price, so callers can inspect or plot the paths.
//!
//! # Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionKind;
//! use pricer_mc::{simulate_antithetic, GbmParams, SimRng};
//!
//! let params = GbmParams::new(100.0, 0.03, 0.25, 1.0 / 12.0);
//! let mut rng = SimRng::from_seed(42);
//! let (paths, price) =
//!     simulate_antithetic(OptionKind::Call, &params, 110.0, 50, 1_000, &mut rng).unwrap();
//!
//! assert_eq!(paths.n_paths(), 1_000);
//! assert!(price >= 0.0);
//! ```
//!
//! # Concurrency
//!
//! Simulation is single-threaded and synchronous. Calls share no state
//! beyond the caller-supplied RNG and may run concurrently on independent
//! RNG instances.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod antithetic;
mod control_variate;
mod error;
mod paths;
mod rng;

pub use antithetic::simulate_antithetic;
pub use control_variate::simulate_control_variate;
pub use error::{ConfigError, MAX_PATHS, MAX_STEPS};
pub use paths::{GbmParams, PathMatrix};
pub use rng::SimRng;
