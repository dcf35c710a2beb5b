//! Application entry point and the interactive command loop.
//!
//! The loop reads one command per line from stdin: `alloc`, `free`,
//! `map`, `stats`, `help`, `quit`. Failed commands are reported and the
//! loop continues (strict mode instead exits with a mapped code), so the
//! pool survives every recoverable error.

use std::io::{self, BufRead};

use anyhow::{Context, Result};

use memsim_cli::presenter::PoolPresenter;
use memsim_core::{FitStrategy, MemoryPool, PoolError};

use crate::config::AppConfig;
use crate::errors::exit_code;

#[derive(Debug)]
enum Flow {
    Continue,
    Quit,
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let default_strategy = config.default_strategy()?;
    let mut pool = MemoryPool::new(config.capacity, config.overhead)
        .context("failed to initialize pool")?;
    let presenter = PoolPresenter::new(config.quiet, config.json);

    if !config.quiet {
        println!(
            "memsim: pool of {} units, {} per-block overhead (type 'help' for commands)",
            config.capacity, config.overhead
        );
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        match dispatch(&line, &mut pool, &presenter, default_strategy, config) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => {
                if let Some(pool_err) = err.downcast_ref::<PoolError>() {
                    presenter.present_error(pool_err);
                    if config.strict {
                        std::process::exit(exit_code(pool_err));
                    }
                } else {
                    eprintln!("error: {err}");
                    if config.strict {
                        std::process::exit(1);
                    }
                }
            }
        }
    }
    Ok(())
}

/// Parse and execute one command line.
fn dispatch(
    line: &str,
    pool: &mut MemoryPool,
    presenter: &PoolPresenter,
    default_strategy: FitStrategy,
    config: &AppConfig,
) -> Result<Flow> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Flow::Continue);
    };

    match command.to_ascii_lowercase().as_str() {
        "alloc" | "a" => {
            let size: u64 = parts
                .next()
                .context("usage: alloc <size> [first|best|worst]")?
                .parse()
                .context("size must be an unsigned integer")?;
            let strategy = match parts.next() {
                Some(name) => name.parse::<FitStrategy>()?,
                None => default_strategy,
            };
            let address = pool.allocate(size, strategy)?;
            presenter.present_allocated(address, size);
            if config.auto_map {
                presenter.present_map(pool);
            }
        }
        "free" | "f" => {
            let address: u64 = parts
                .next()
                .context("usage: free <address>")?
                .parse()
                .context("address must be an unsigned integer")?;
            pool.free(address)?;
            presenter.present_freed(address);
            if config.auto_map {
                presenter.present_map(pool);
            }
        }
        "map" | "m" => presenter.present_map(pool),
        "stats" | "s" => presenter.present_stats(pool),
        "help" | "h" | "?" => print_help(),
        "quit" | "q" | "exit" => return Ok(Flow::Quit),
        other => anyhow::bail!("unknown command {other:?}; type 'help'"),
    }
    Ok(Flow::Continue)
}

fn print_help() {
    println!(
        "commands:\n\
         \x20 alloc <size> [first|best|worst]  allocate <size> units\n\
         \x20 free <address>                   release the block at <address>\n\
         \x20 map                              show the pool map\n\
         \x20 stats                            show usage statistics\n\
         \x20 help                             show this help\n\
         \x20 quit                             exit"
    );
}
