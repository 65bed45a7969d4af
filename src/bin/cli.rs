//! logkv CLI harness
//!
//! Reads textual commands from stdin and drives a [`Store`].
//!
//! Input format: a line holding the total command count, then one command
//! per line:
//!
//! ```text
//! ADD <key> <value>
//! UPDATE <key> <value>
//! DELETE <key>
//! PRINT <key>
//! ```
//!
//! `PRINT` writes `<key> <value>` to stdout; any command that fails
//! logically (or at all) prints `ERROR` instead. The log file is removed on
//! exit unless `--keep` is given.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use logkv::{Config, Result, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// logkv command harness
#[derive(Parser, Debug)]
#[command(name = "logkv-cli")]
#[command(about = "Minimal single-file log-structured key-value store")]
#[command(version)]
struct Args {
    /// Log file path
    #[arg(short, long, default_value = "./storage.db")]
    file: String,

    /// Write buffer capacity in records
    #[arg(short, long, default_value = "1000")]
    buffer_size: usize,

    /// Keep the log file on exit instead of removing it
    #[arg(short, long)]
    keep: bool,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,logkv=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("logkv v{}", logkv::VERSION);

    let config = Config::builder()
        .log_path(&args.file)
        .buffer_capacity(args.buffer_size)
        .build();

    let mut store = match Store::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("failed to open store: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let run_result = run_commands(&mut store);

    // Flush (and by default remove) the log before exiting, even after a
    // command-loop failure
    let shutdown_result = if args.keep {
        store.flush()
    } else {
        store.cleanup()
    };

    if let Err(e) = run_result {
        tracing::error!("command loop failed: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = shutdown_result {
        tracing::error!("shutdown failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Read the command count, then execute one command per line
fn run_commands(store: &mut Store) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let total: usize = match lines.next() {
        Some(line) => match line?.trim().parse() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("expected a positive command count");
                return Ok(());
            }
        },
        None => return Ok(()),
    };

    for _ in 0..total {
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        // Blank lines consume a slot but produce no output
        if line.trim().is_empty() {
            continue;
        }

        if !execute_line(store, &line) {
            println!("ERROR");
        }
    }

    Ok(())
}

/// Execute one command line; `false` means the caller prints the error marker
fn execute_line(store: &mut Store, line: &str) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let outcome = match parts.as_slice() {
        ["ADD", key, value] => store.add(key, value),
        ["UPDATE", key, value] => store.update(key, value),
        ["DELETE", key] => Ok(store.delete(key)),
        ["PRINT", key] => match store.show(key) {
            Ok(Some((key, value))) => {
                println!("{} {}", key, value);
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => Err(e),
        },
        // Unknown command or wrong arity
        _ => Ok(false),
    };

    match outcome {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!("command failed: {}", e);
            false
        }
    }
}
