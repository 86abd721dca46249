//! # Network representation
//!
//! Capacitated networks with a cost per unit of flow on every arc, stored together with their
//! residual capacities.
pub mod residual;
