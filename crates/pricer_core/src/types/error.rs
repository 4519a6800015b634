//! Error types for structured error handling.

use thiserror::Error;

/// Categorised pricing errors.
///
/// The numeric kernels themselves are total functions over their inputs;
/// these errors arise at the boundaries where callers hand over parameters
/// or market data.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative maturity".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: negative maturity");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PricingError::InvalidInput("zero volatility".to_string());
        assert!(err.to_string().contains("zero volatility"));

        let err = PricingError::NumericalInstability("overflow in discounting".to_string());
        assert!(err.to_string().starts_with("Numerical instability"));
    }
}
