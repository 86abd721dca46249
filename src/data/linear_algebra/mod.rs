//! # Linear algebra primitives
//!
//! The network is small and dense: every pair of vertices has a slot for a capacity, a residual
//! capacity and a cost. A dense square matrix is the only primitive needed.

pub mod matrix;
