//! Error types for the Monte Carlo simulators.

use thiserror::Error;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Configuration error raised before any simulation work starts.
///
/// The simulation loops themselves raise no errors; all validation happens
/// up front against the requested dimensions and market parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside the valid range `[1, MAX_PATHS]`.
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside the valid range `[1, MAX_STEPS]`.
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// Invalid market parameter with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Validates market parameters shared by both simulators.
pub(crate) fn validate_market(params: &crate::paths::GbmParams) -> Result<(), ConfigError> {
    if !params.is_valid() {
        return Err(ConfigError::InvalidParameter {
            name: "gbm",
            value: format!(
                "spot {}, rate {}, volatility {}, maturity {} (all must be finite, spot and maturity positive, volatility non-negative)",
                params.spot, params.rate, params.volatility, params.maturity
            ),
        });
    }
    Ok(())
}

/// Validates simulation dimensions shared by both simulators.
pub(crate) fn validate_dims(n_steps: usize, n_paths: usize) -> Result<(), ConfigError> {
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(ConfigError::InvalidStepCount(n_steps));
    }
    if n_paths == 0 || n_paths > MAX_PATHS {
        return Err(ConfigError::InvalidPathCount(n_paths));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dims_bounds() {
        assert!(validate_dims(1, 1).is_ok());
        assert!(validate_dims(MAX_STEPS, MAX_PATHS).is_ok());
        assert!(matches!(
            validate_dims(0, 100),
            Err(ConfigError::InvalidStepCount(0))
        ));
        assert!(matches!(
            validate_dims(100, 0),
            Err(ConfigError::InvalidPathCount(0))
        ));
        assert!(validate_dims(MAX_STEPS + 1, 100).is_err());
        assert!(validate_dims(100, MAX_PATHS + 1).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidParameter {
            name: "volatility",
            value: "must be finite".to_string(),
        };
        assert!(err.to_string().contains("volatility"));
    }
}
