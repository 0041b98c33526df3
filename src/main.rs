//! walkstat binary entry point.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

/// Report the energy burned during indoor walks.
///
/// Reads `export.xml` (an Apple Health export) from the current directory
/// and writes one `start,end,kcal` line per indoor walking workout to
/// stdout. Takes no arguments; diagnostics go to stderr and can be tuned
/// with RUST_LOG.
#[derive(Parser, Debug)]
#[command(name = "walkstat", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = commands::report::handle_report(&mut out) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Diagnostics on stderr, warnings by default, RUST_LOG overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
