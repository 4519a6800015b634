//! Vanilla option contract descriptors.

use serde::{Deserialize, Serialize};

/// Direction of a vanilla option payoff.
///
/// # Variants
/// - `Call`: pays max(underlying − strike, 0)
/// - `Put`: pays max(strike − underlying, 0)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// assert_eq!(OptionKind::Call.sign(), 1.0);
/// assert_eq!(OptionKind::Put.sign(), -1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// Call option: max(underlying − strike, 0)
    Call,
    /// Put option: max(strike − underlying, 0)
    Put,
}

impl OptionKind {
    /// Returns the payoff sign: +1 for a call, −1 for a put.
    ///
    /// Both pricing kernels express the intrinsic value as
    /// `max(sign × (underlying − strike), 0)`.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Intrinsic value against the given underlying level and strike.
    ///
    /// # Arguments
    /// * `underlying` - Current underlying level (short rate or spot price)
    /// * `strike` - Strike level
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionKind;
    ///
    /// assert!((OptionKind::Put.intrinsic(90.0, 100.0) - 10.0).abs() < 1e-12);
    /// assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, underlying: f64, strike: f64) -> f64 {
        (self.sign() * (underlying - strike)).max(0.0)
    }

    /// Returns true for the call direction.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

/// Exercise style of an option.
///
/// # Variants
/// - `European`: exercisable at maturity only
/// - `Bermudan`: exercisable at every lattice date; valued via
///   max(continuation, intrinsic) during backward induction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseStyle {
    /// Exercise at maturity only.
    European,
    /// Exercise at every discrete valuation date.
    Bermudan,
}

impl ExerciseStyle {
    /// Returns true if early exercise is permitted at intermediate dates.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(self, ExerciseStyle::Bermudan)
    }
}
