//! # skill-cli
//!
//! Local host for the sound board skill: argument parsing and envelope input. Dispatch lives in skill-host.

pub mod cli;

pub use cli::{format_output, read_envelope, Cli, Commands};
