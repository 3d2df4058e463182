//! soundboard CLI: dispatch a request envelope through the skill and print the response envelope.
//! Config from env (and `.env`); logs go to stderr so stdout carries only JSON.

use anyhow::{Context, Result};
use clap::Parser;
use skill_cli::{format_output, read_envelope, Cli, Commands};
use skill_core::init_tracing;
use skill_host::{build_soundboard_chain, SkillAdapter, SkillConfig};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SkillConfig::from_env().context("invalid skill configuration")?;
    init_tracing(config.log_file.as_deref())?;

    match cli.command {
        Commands::Invoke { file, pretty } => handle_invoke(&config, file.as_deref(), pretty),
    }
}

fn handle_invoke(config: &SkillConfig, file: Option<&std::path::Path>, pretty: bool) -> Result<()> {
    let chain = build_soundboard_chain(config).context("failed to assemble skill")?;
    let adapter = SkillAdapter::new(chain, config);

    let raw = read_envelope(file, &mut std::io::stdin().lock())?;
    let out = adapter.invoke_json(&raw).context("skill invocation failed")?;
    info!(bytes = out.len(), "Response envelope ready");

    println!("{}", format_output(&out, pretty)?);
    Ok(())
}
