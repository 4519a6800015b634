//! Shared contract and error types.
//!
//! This module provides:
//! - [`OptionKind`] / [`ExerciseStyle`]: vanilla contract descriptors
//! - [`BarrierType`] / [`BarrierSpec`]: knock-in/knock-out specifications
//! - [`PricingError`]: structured errors for pricing operations

mod barrier;
mod error;
mod option;

pub use barrier::{BarrierSpec, BarrierType};
pub use error::PricingError;
pub use option::{ExerciseStyle, OptionKind};
