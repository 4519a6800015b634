//! # pricer_lattice: Short-Rate Lattice Pricer
//!
//! Prices interest-rate options on a recombining binomial short-rate
//! lattice with backward induction, supporting European and Bermudan
//! exercise and the four standard barrier flavours.
//!
//! # Model
//!
//! The lattice uses a simplified symmetric-displacement placement derived
//! from Hull-White dynamics:
//!
//! ```text
//! rate(i, j) = r0 + (2j − i) · dx,   dx = σ·√(T/N),   j ∈ [0, i]
//! ```
//!
//! The mean-reversion speed `a` is accepted as a model parameter but does
//! not enter node placement; true Hull-White drift recombination is not
//! implemented. This is a deliberate modelling simplification, kept for
//! compatibility with the reference model, not an omission to be repaired.
//!
//! # Usage Example
//!
//! ```rust
//! use pricer_core::types::{ExerciseStyle, OptionKind};
//! use pricer_lattice::{price, LatticeParams, RateOptionSpec};
//!
//! let params = LatticeParams::new(0.03, 0.1, 0.01, 1.0, 2);
//! let spec = RateOptionSpec::vanilla(OptionKind::Call, ExerciseStyle::European, 0.03);
//! let value = price(&params, &spec);
//! assert!(value > 0.0);
//! ```
//!
//! # Concurrency
//!
//! Every pricing call is synchronous, side-effect-free, and touches no
//! shared state; calls may be issued concurrently from any number of
//! threads. Callers that need a responsive front-end should run the call
//! on a worker and deliver the scalar result back themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod lattice;
mod valuer;

pub use lattice::{LatticeParams, RateLattice};
pub use valuer::{price, RateOptionSpec};
