//! Fit strategies for selecting a free block during allocation.
//!
//! All three policies run inside the same single traversal of the chain;
//! the strategy only decides whether a later candidate displaces the one
//! already held. Ties never displace, which resolves them in favor of the
//! lowest address.

use std::fmt;
use std::str::FromStr;

use crate::error::PoolError;

/// Placement policy for choosing among qualifying free blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStrategy {
    /// First qualifying block in address order.
    FirstFit,
    /// Qualifying block of minimum size.
    BestFit,
    /// Qualifying block of maximum size.
    WorstFit,
}

impl FitStrategy {
    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FitStrategy::FirstFit => "first-fit",
            FitStrategy::BestFit => "best-fit",
            FitStrategy::WorstFit => "worst-fit",
        }
    }

    /// Whether a candidate of `candidate` units displaces the incumbent of
    /// `incumbent` units. Strict comparisons keep the first-encountered
    /// block on ties.
    pub(crate) fn prefers(self, candidate: u64, incumbent: u64) -> bool {
        match self {
            FitStrategy::FirstFit => false,
            FitStrategy::BestFit => candidate < incumbent,
            FitStrategy::WorstFit => candidate > incumbent,
        }
    }
}

impl fmt::Display for FitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FitStrategy {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first-fit" => Ok(FitStrategy::FirstFit),
            "best" | "best-fit" => Ok(FitStrategy::BestFit),
            "worst" | "worst-fit" => Ok(FitStrategy::WorstFit),
            other => Err(PoolError::UnknownStrategy(other.to_string())),
        }
    }
}
