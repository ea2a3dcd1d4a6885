//! CLI module
//!
//! Command-line interface for running simulations.
//!
//! # Commands
//!
//! - `run` - Execute one partition simulation
//! - `validate` - Validate a request file
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::serve;
