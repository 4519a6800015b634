//! Static snapshot source for the supported underlying curves.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::FeedError;
use crate::quote::{RateQuote, RateSource};

/// A rate source backed by a fixed snapshot table.
///
/// Stands in for a live market-data transport, which is out of scope for
/// the pricing workspace. The default table carries the two curves the
/// original front-end exposed:
///
/// - `"US LIBOR"` - overnight USD rate snapshot, stamped with the current date
/// - `"IOS curve"` - a fixed dummy curve level
pub struct StaticRateSource {
    /// Curve identifier to (rate, disclaimer template).
    curves: HashMap<String, CurveEntry>,
}

/// One snapshot table entry.
struct CurveEntry {
    rate: f64,
    disclaimer: Disclaimer,
}

/// How the disclaimer string for an entry is produced.
enum Disclaimer {
    /// "Data as of YYYY-MM-DD" with today's date.
    AsOfToday,
    /// A fixed explanatory string.
    Fixed(&'static str),
}

impl StaticRateSource {
    /// Creates the source with the default curve table.
    pub fn new() -> Self {
        let mut curves = HashMap::new();
        curves.insert(
            "US LIBOR".to_string(),
            CurveEntry {
                rate: 0.025,
                disclaimer: Disclaimer::AsOfToday,
            },
        );
        curves.insert(
            "IOS curve".to_string(),
            CurveEntry {
                rate: 0.03,
                disclaimer: Disclaimer::Fixed("Using dummy IOS curve rate"),
            },
        );
        Self { curves }
    }

    /// Adds or replaces a curve with a fixed rate and disclaimer.
    pub fn with_curve(mut self, underlying: impl Into<String>, rate: f64) -> Self {
        self.curves.insert(
            underlying.into(),
            CurveEntry {
                rate,
                disclaimer: Disclaimer::Fixed("Static snapshot rate"),
            },
        );
        self
    }

    /// Identifiers of all curves in the table, unordered.
    pub fn known_curves(&self) -> Vec<&str> {
        self.curves.keys().map(String::as_str).collect()
    }
}

impl Default for StaticRateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for StaticRateSource {
    fn quote(&self, underlying: &str) -> Result<RateQuote, FeedError> {
        let entry = self
            .curves
            .get(underlying)
            .ok_or_else(|| FeedError::UnknownUnderlying(underlying.to_string()))?;
        let disclaimer = match &entry.disclaimer {
            Disclaimer::AsOfToday => {
                format!("Data as of {}", Utc::now().format("%Y-%m-%d"))
            }
            Disclaimer::Fixed(text) => (*text).to_string(),
        };
        Ok(RateQuote::new(entry.rate, disclaimer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{get_rate, DEFAULT_RATE};

    #[test]
    fn test_libor_snapshot_with_as_of_date() {
        let source = StaticRateSource::new();
        let quote = source.quote("US LIBOR").unwrap();
        assert_eq!(quote.rate, 0.025);
        assert!(quote.disclaimer.starts_with("Data as of "));
    }

    #[test]
    fn test_ios_curve_is_fixed_dummy() {
        let source = StaticRateSource::new();
        let quote = source.quote("IOS curve").unwrap();
        assert_eq!(quote.rate, 0.03);
        assert_eq!(quote.disclaimer, "Using dummy IOS curve rate");
    }

    #[test]
    fn test_unknown_curve_errors_then_falls_back() {
        let source = StaticRateSource::new();
        assert!(matches!(
            source.quote("SONIA"),
            Err(FeedError::UnknownUnderlying(_))
        ));
        let quote = get_rate(&source, "SONIA");
        assert_eq!(quote.rate, DEFAULT_RATE);
    }

    #[test]
    fn test_with_curve_extends_table() {
        let source = StaticRateSource::new().with_curve("SONIA", 0.045);
        assert_eq!(source.quote("SONIA").unwrap().rate, 0.045);
        assert!(source.known_curves().contains(&"SONIA"));
    }
}
