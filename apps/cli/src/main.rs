mod cli;
mod commands;
mod config;
mod domain_events;
mod main_lib;

use std::io;

use clap::Parser;
use cli::Cli;
use config::Config;
use main_lib::{build_context, init_tracing};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_format);

    let cli = Cli::parse();
    let data_file = cli
        .data_file
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    let ctx = build_context(&data_file);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &ctx, &config, &mut out)
}
