//! # memsim-cli
//!
//! Presentation layer for the memory pool simulator: colored pool map,
//! statistics rendering, and JSON output. Consumes only the core's public
//! entry points and never mutates the pool.
#![warn(missing_docs)]

pub mod output;
pub mod presenter;
