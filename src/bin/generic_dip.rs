//! Generic calculator demo.
//!
//! Run with: cargo run --bin generic_dip [RUN_FILE]
//! Without a run file the two built-in scenarios are used.

use colored::Colorize;
use generic_dip::{DemoError, RunFile};
use std::env;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), DemoError> {
    let runs = match env::args().nth(1) {
        Some(path) => RunFile::load(Path::new(&path))?,
        None => RunFile::builtin(),
    };

    println!("\n  {}", "-- generic DIP demo --".bold());
    for outcome in runs.execute_all()? {
        println!("\n  {}", outcome.to_string().cyan());
        println!("  saved result: {}", outcome.saved.to_string().green());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("\n  {} {}", "error:".bold().red(), err.to_string().red());
        process::exit(1);
    }
    println!("\n  That's all Folks!\n");
}
