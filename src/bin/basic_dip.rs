//! Basic dependency inversion demo with self-announcing parts.
//!
//! Run with: cargo run --bin basic_dip

use colored::Colorize;
use generic_dip::{First, Say, SayDemo, Second};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn show<T: Say>(id: u16) {
    let mut demo = SayDemo::<T>::new();
    demo.set_id(id);
    debug!(id, "announcing");
    for line in demo.say_it().lines() {
        println!("  {}", line);
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("\n  {}\n", "-- basic DIP demo --".bold());
    show::<First>(1);
    show::<Second>(2);
    println!("  That's all Folks!\n");
}
