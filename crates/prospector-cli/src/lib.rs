//! Prospector CLI library.
//!
//! This library provides the core functionality for the Prospector command-line interface,
//! including configuration management, command execution, output formatting and export.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod sink;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use sink::JsonLinesSink;
