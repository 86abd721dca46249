//! # Number types
//!
//! Capacities, residual capacities and costs all live in the same space: a signed, bounded
//! integer type. This module defines that space.
//!
//! Costs need to be signed because every arc implies a reverse arc with the negated cost.
//! Arithmetic on these values is checked; the algorithms report an overflow instead of wrapping.
pub mod traits;
