//! memsim library — application logic for the memory pool simulator.

pub mod app;
pub mod config;
pub mod errors;
