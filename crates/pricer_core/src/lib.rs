//! # pricer_core: Foundation Types for shortrate-rs
//!
//! ## Layer Role
//!
//! pricer_core is the bottom layer of the workspace, providing the shared
//! vocabulary of the two pricing kernels:
//!
//! - Option contract types: `OptionKind`, `ExerciseStyle` (`types::option`)
//! - Barrier specifications: `BarrierType`, `BarrierSpec` (`types::barrier`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate depends on no other workspace crate, with minimal external
//! dependencies:
//! - num-traits: generic numeric traits
//! - thiserror: structured error derivation
//! - serde: serialisation of contract types
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{BarrierSpec, BarrierType, OptionKind};
//!
//! // Intrinsic value of a call on a 3% strike
//! let intrinsic = OptionKind::Call.intrinsic(0.045, 0.03);
//! assert!((intrinsic - 0.015).abs() < 1e-12);
//!
//! // A down-and-out barrier at 2% knocks out low rates
//! let spec = BarrierSpec::new(BarrierType::DownOut, 0.02);
//! assert_eq!(spec.apply(1.0, 0.015), 0.0);
//! assert_eq!(spec.apply(1.0, 0.025), 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
