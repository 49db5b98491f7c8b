//! Unified-log triage CLI library.
//!
//! This crate provides the CLI interface over the obslog-core pipeline.

mod cli;
pub mod commands;

pub use cli::{Cli, Commands, TimeArgs};
