//! CLI parser and envelope input.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "soundboard")]
#[command(about = "Sound board voice skill: invoke handlers on request envelopes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dispatch one request envelope (JSON from FILE or stdin) and print the response envelope.
    Invoke {
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Pretty-print the response JSON.
        #[arg(long)]
        pretty: bool,
    },
}

/// Reads the raw envelope from `file`, or from `stdin` when no file is given.
pub fn read_envelope(file: Option<&Path>, stdin: &mut impl Read) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request envelope from {}", path.display())),
        None => {
            let mut raw = String::new();
            stdin
                .read_to_string(&mut raw)
                .context("failed to read request envelope from stdin")?;
            Ok(raw)
        }
    }
}

/// Re-indents compact response JSON when `pretty` is set.
pub fn format_output(raw: &str, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(raw.to_string());
    }
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
