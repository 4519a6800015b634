//! Rate provider query command.

use adapter_rates::{get_rate, StaticRateSource};

use crate::Result;

/// Run the rates command
pub fn run(underlying: &str) -> Result<()> {
    let quote = get_rate(&StaticRateSource::new(), underlying);
    println!("{}: {:.4} ({})", underlying, quote.rate, quote.disclaimer);
    Ok(())
}
