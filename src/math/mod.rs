//! Integer arithmetic helpers for liquidity accounting.
//!
//! Two primitives cover all of the engine's share and pricing math:
//! [`isqrt`] for bootstrap share issuance and [`mul_div`] for every
//! proportional `a * b / c` computation with an explicit
//! [`Rounding`](crate::domain::Rounding) direction.

mod mul_div;
mod sqrt;

pub use mul_div::mul_div;
pub use sqrt::isqrt;
