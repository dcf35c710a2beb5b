//! Output formatting for the pool map and statistics.

use console::style;

use memsim_core::{BlockState, PoolStats};

/// Format a unit count with thousand separators.
#[must_use]
pub fn format_units(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Bar length for a block of `size` units: one cell per 10 units,
/// clamped to 1..=20 so tiny and huge blocks both stay readable.
#[must_use]
pub fn bar_length(size: u64) -> usize {
    usize::try_from(size / 10).unwrap_or(20).clamp(1, 20)
}

/// Render a block's bar, green for free and red for allocated.
#[must_use]
pub fn render_bar(size: u64, state: BlockState) -> String {
    let bar = "\u{2588}".repeat(bar_length(size));
    if state.is_free() {
        style(bar).green().to_string()
    } else {
        style(bar).red().to_string()
    }
}

/// Display label for a block state.
#[must_use]
pub fn state_label(state: BlockState) -> &'static str {
    if state.is_free() {
        "free"
    } else {
        "allocated"
    }
}

/// Render the statistics block as plain text.
#[must_use]
pub fn render_stats(stats: &PoolStats) -> String {
    format!(
        "Pool statistics:\n\
         \x20 free (user-available): {} units\n\
         \x20 used (user data):      {} units\n\
         \x20 metadata overhead:     {} units\n\
         \x20 total user capacity:   {} units\n\
         \x20 pool capacity:         {} units\n\
         \x20 blocks:                {} ({} free, largest free {})\n\
         \x20 fragmentation:         {:.1}%",
        format_units(stats.free),
        format_units(stats.used),
        format_units(stats.metadata),
        format_units(stats.user_total),
        format_units(stats.capacity),
        stats.blocks,
        stats.free_blocks,
        format_units(stats.largest_free),
        stats.fragmentation() * 100.0,
    )
}
