//! Barrier option specifications.
//!
//! The four standard barrier flavours are supported:
//!
//! - **Down-and-In**: value retained only while the level is at or below the barrier
//! - **Up-and-In**: value retained only while the level is at or above the barrier
//! - **Down-and-Out**: value removed once the level is at or below the barrier
//! - **Up-and-Out**: value removed once the level is at or above the barrier
//!
//! # Node-Local Semantics
//!
//! The knock condition is evaluated against a single observed level with no
//! path memory. On a recombining lattice without auxiliary state this means
//! "in" barriers only retain value at nodes that currently breach the
//! barrier, and "out" barriers zero every node that breaches it, regardless
//! of the path taken to reach the node. This is a structural approximation
//! of true (path-tracked) barrier options and is the intended behaviour of
//! the lattice pricer.

use serde::{Deserialize, Serialize};

/// Barrier type enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarrierType {
    /// Down-and-In: retained only at levels at or below the barrier
    DownIn,
    /// Down-and-Out: removed at levels at or below the barrier
    DownOut,
    /// Up-and-In: retained only at levels at or above the barrier
    UpIn,
    /// Up-and-Out: removed at levels at or above the barrier
    UpOut,
}

impl BarrierType {
    /// Returns true if this is an "up" barrier (breached from below).
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::UpOut)
    }

    /// Returns true if this is an "in" barrier (knock-in).
    #[inline]
    pub fn is_in(&self) -> bool {
        matches!(self, BarrierType::DownIn | BarrierType::UpIn)
    }
}

/// A barrier specification: flavour plus level.
///
/// # Examples
/// ```
/// use pricer_core::types::{BarrierSpec, BarrierType};
///
/// let spec = BarrierSpec::new(BarrierType::UpOut, 0.05);
/// // Level below the barrier: value survives
/// assert_eq!(spec.apply(0.7, 0.03), 0.7);
/// // Level at or above the barrier: value is knocked out
/// assert_eq!(spec.apply(0.7, 0.05), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarrierSpec {
    /// Barrier flavour (direction × knock mode).
    pub barrier_type: BarrierType,
    /// Barrier level, in the same units as the observed underlying.
    pub level: f64,
}

impl BarrierSpec {
    /// Creates a new barrier specification.
    #[inline]
    pub fn new(barrier_type: BarrierType, level: f64) -> Self {
        Self {
            barrier_type,
            level,
        }
    }

    /// Returns true if an option value is retained at the observed level.
    ///
    /// The breach test is inclusive: a level exactly at the barrier counts
    /// as touching it.
    #[inline]
    pub fn retains(&self, observed: f64) -> bool {
        let breached = if self.barrier_type.is_up() {
            observed >= self.level
        } else {
            observed <= self.level
        };
        // "In" retains only where breached; "out" retains only where not.
        breached == self.barrier_type.is_in()
    }

    /// Applies the node-local knock policy to a value.
    ///
    /// Returns `value` unchanged when [`retains`](Self::retains) holds for
    /// the observed level, `0.0` otherwise.
    #[inline]
    pub fn apply(&self, value: f64, observed: f64) -> f64 {
        if self.retains(observed) {
            value
        } else {
            0.0
        }
    }
}
