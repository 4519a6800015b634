//! The rate quote contract and the never-failing retrieval front.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::FeedError;

/// Fallback short rate used whenever retrieval fails.
pub const DEFAULT_RATE: f64 = 0.025;

/// A retrieved short rate with provenance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// The short rate, as a decimal fraction (0.03 = 3%).
    pub rate: f64,
    /// Human-readable provenance or fallback explanation.
    pub disclaimer: String,
}

impl RateQuote {
    /// Creates a new quote.
    #[inline]
    pub fn new(rate: f64, disclaimer: impl Into<String>) -> Self {
        Self {
            rate,
            disclaimer: disclaimer.into(),
        }
    }
}

/// A source of short-rate observations for named underlying curves.
///
/// Sources are fallible; the fallback policy lives in [`get_rate`], not
/// in the sources themselves.
pub trait RateSource {
    /// Retrieves the current short rate for the given curve identifier.
    fn quote(&self, underlying: &str) -> Result<RateQuote, FeedError>;
}

/// Retrieves a rate, falling back to [`DEFAULT_RATE`] on any failure.
///
/// This is the only retrieval entry point the pricing layer uses. It
/// never fails: a source error is logged and converted into the default
/// rate with a disclaimer naming the failure.
pub fn get_rate<S: RateSource>(source: &S, underlying: &str) -> RateQuote {
    match source.quote(underlying) {
        Ok(quote) => quote,
        Err(err) => {
            warn!(underlying, error = %err, "rate retrieval failed, using default rate");
            RateQuote::new(
                DEFAULT_RATE,
                format!("Data retrieval failed ({}), using default rate", err),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl RateSource for FailingSource {
        fn quote(&self, underlying: &str) -> Result<RateQuote, FeedError> {
            Err(FeedError::NoData {
                underlying: underlying.to_string(),
                reason: "feed offline".to_string(),
            })
        }
    }

    struct FixedSource;

    impl RateSource for FixedSource {
        fn quote(&self, _underlying: &str) -> Result<RateQuote, FeedError> {
            Ok(RateQuote::new(0.04, "fixed test rate"))
        }
    }

    #[test]
    fn test_success_passes_through() {
        let quote = get_rate(&FixedSource, "anything");
        assert_eq!(quote.rate, 0.04);
        assert_eq!(quote.disclaimer, "fixed test rate");
    }

    #[test]
    fn test_failure_falls_back_with_disclaimer() {
        let quote = get_rate(&FailingSource, "US LIBOR");
        assert_eq!(quote.rate, DEFAULT_RATE);
        assert!(quote.disclaimer.contains("using default rate"));
        assert!(quote.disclaimer.contains("feed offline"));
    }
}
