//! CLI module for toolmaps - command-line interface.
//!
//! Provides the argument parser and the usage-error exit policy.

pub mod args;

pub use args::{Cli, USAGE_EXIT_CODE};
