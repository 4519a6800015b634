//! Error types for rate retrieval.

use thiserror::Error;

/// Errors a [`RateSource`](crate::RateSource) may raise.
///
/// These never escape [`get_rate`](crate::get_rate); they exist so that
/// sources can report what went wrong before the fallback takes over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The requested underlying curve is not known to the source.
    #[error("Unknown underlying curve: {0}")]
    UnknownUnderlying(String),

    /// The source had no usable observation for the curve.
    #[error("No data available for {underlying}: {reason}")]
    NoData {
        /// The curve that was queried.
        underlying: String,
        /// Why no observation was available.
        reason: String,
    },
}
