//! # adapter_rates: Market Rate Provider
//!
//! Supplies the initial short rate for a named underlying curve, together
//! with a human-readable disclaimer describing where the number came from.
//!
//! The provider contract the pricing layer relies on: [`get_rate`] never
//! fails. Any retrieval error from the underlying [`RateSource`] is
//! converted into the fixed default rate plus an explanatory disclaimer,
//! and logged at warn level. The pricing layer performs no retries and
//! treats the result as a plain data point.
//!
//! # Usage Example
//!
//! ```rust
//! use adapter_rates::{get_rate, StaticRateSource};
//!
//! let source = StaticRateSource::new();
//! let quote = get_rate(&source, "IOS curve");
//! assert!((quote.rate - 0.03).abs() < 1e-12);
//!
//! // Unknown curves fall back rather than fail.
//! let fallback = get_rate(&source, "no such curve");
//! assert!((fallback.rate - adapter_rates::DEFAULT_RATE).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod quote;
mod static_source;

pub use error::FeedError;
pub use quote::{get_rate, RateQuote, RateSource, DEFAULT_RATE};
pub use static_source::StaticRateSource;
