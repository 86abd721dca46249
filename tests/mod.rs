//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! Networks are read from the `problem_files` directory next to each module.

mod invalid;
mod valid;
