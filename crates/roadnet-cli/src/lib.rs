//! Road network CLI library.
//!
//! This crate provides the output formatting used by the `roadnet-cli`
//! binary so that rendering can be exercised without spawning processes.

pub mod output;
