//! CLI error type and result alias.

use thiserror::Error;

/// Errors surfaced to the CLI user.
///
/// The GUI-level caller of the original model was responsible for
/// catching pricing failures and showing them to the user; this type is
/// that boundary for the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument combination the pricers cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Parameter validation failed in the pricing layer.
    #[error(transparent)]
    Pricing(#[from] pricer_core::types::PricingError),

    /// Simulation configuration was rejected.
    #[error(transparent)]
    Simulation(#[from] pricer_mc::ConfigError),

    /// Result serialisation failed.
    #[error("Serialisation failed: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
