//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod lattice;
pub mod mc;
pub mod rates;
