//! Pool map and statistics presenter.

use console::style;

use memsim_core::{BlockView, MemoryPool, PoolError};

use crate::output::{format_units, render_bar, render_stats, state_label};

/// Renders pool state to stdout; errors go to stderr.
pub struct PoolPresenter {
    quiet: bool,
    json: bool,
}

impl PoolPresenter {
    /// Create a presenter. `quiet` suppresses decorations and bars,
    /// `json` switches map and stats output to JSON.
    #[must_use]
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Print the block map in address order.
    pub fn present_map(&self, pool: &MemoryPool) {
        if self.json {
            let blocks: Vec<BlockView> = pool.blocks().collect();
            if let Ok(text) = serde_json::to_string_pretty(&blocks) {
                println!("{text}");
            }
            return;
        }

        if !self.quiet {
            println!("{}", style("Pool map:").bold());
            println!("{:<10} {:>8}  {:<9}  map", "address", "size", "state");
        }
        for block in pool.blocks() {
            if self.quiet {
                println!(
                    "{} {} {}",
                    block.address,
                    block.size,
                    state_label(block.state)
                );
            } else {
                println!(
                    "{:<10} {:>8}  {:<9}  {}",
                    block.address,
                    format_units(block.size),
                    state_label(block.state),
                    render_bar(block.size, block.state)
                );
            }
        }
    }

    /// Print the statistics snapshot.
    pub fn present_stats(&self, pool: &MemoryPool) {
        let stats = pool.stats();
        if self.json {
            if let Ok(text) = serde_json::to_string_pretty(&stats) {
                println!("{text}");
            }
        } else if self.quiet {
            println!(
                "{} {} {} {} {}",
                stats.free, stats.used, stats.metadata, stats.user_total, stats.capacity
            );
        } else {
            println!("{}", render_stats(&stats));
        }
    }

    /// Report a successful allocation.
    pub fn present_allocated(&self, address: u64, size: u64) {
        if self.quiet {
            println!("{address}");
        } else {
            println!(
                "allocated {} units at address {}",
                format_units(size),
                format_units(address)
            );
        }
    }

    /// Report a successful free.
    pub fn present_freed(&self, address: u64) {
        if !self.quiet {
            println!("freed block at address {}", format_units(address));
        }
    }

    /// Report a failed operation. The caller's loop continues.
    pub fn present_error(&self, error: &PoolError) {
        eprintln!("{} {error}", style("error:").red().bold());
    }
}
