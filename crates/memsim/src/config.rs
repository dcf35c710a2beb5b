//! Application configuration from CLI flags and environment.

use clap::Parser;

use memsim_core::{FitStrategy, PoolResult};

/// memsim — interactive memory pool allocation simulator.
#[derive(Parser, Debug)]
#[command(name = "memsim", version, about)]
pub struct AppConfig {
    /// Total pool capacity in abstract units.
    #[arg(short, long, default_value = "640", env = "MEMSIM_CAPACITY")]
    pub capacity: u64,

    /// Per-block metadata overhead, in the same units.
    #[arg(short, long, default_value = "1", env = "MEMSIM_OVERHEAD")]
    pub overhead: u64,

    /// Default fit strategy for alloc commands that omit one: first, best, or worst.
    #[arg(short, long, default_value = "first", env = "MEMSIM_STRATEGY")]
    pub strategy: String,

    /// Emit maps and statistics as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (bare values only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Stop at the first failed command with a mapped exit code.
    #[arg(long)]
    pub strict: bool,

    /// Print the pool map after every successful alloc or free.
    #[arg(long)]
    pub auto_map: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve the configured default strategy.
    pub fn default_strategy(&self) -> PoolResult<FitStrategy> {
        self.strategy.parse()
    }
}
