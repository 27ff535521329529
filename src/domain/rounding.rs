//! Explicit rounding direction for integer division.

/// Rounding direction for division on domain types.
///
/// Every division in the engine names its rounding direction explicitly.
/// The accounting rule is uniform: round in the pool's favour, so integer
/// truncation can lose value for the caller but never create it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}
