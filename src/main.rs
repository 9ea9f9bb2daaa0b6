//! rift-site - the RIFT programming language website
//! Docs, examples, comparisons and a playground with a simulated Run button

mod cli;
mod code_block;
mod config;
mod content;
mod error;
mod highlighter;
mod lexer;
mod pages;
mod playground;
mod scripts;
mod token;
mod web_server;

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::from_args();
    let config = cli.config().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.log).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cli::run_cli(cli, config).await.context("rift-site failed")
}
