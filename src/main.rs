mod cli;

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ciphercraft::config::ServerConfig;
use ciphercraft::engine::{self, Direction, TransformRequest};
use ciphercraft::format::FormatOptions;
use ciphercraft::server;

use cli::{Cli, Commands, TransformArgs};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 if matches!(cli.command, Commands::Serve { .. }) => "info",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Encode(args) => run_transform(Direction::Encode, args),
        Commands::Decode(args) => run_transform(Direction::Decode, args),
        Commands::Serve { bind, steps, group } => run_serve(bind, steps, group).await,
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_transform(direction: Direction, args: TransformArgs) -> anyhow::Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read text from stdin")?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let options = FormatOptions {
        show_steps: args.steps,
        group_size: args.group,
    };
    let request = TransformRequest::new(direction, args.algorithm, args.key, text);
    let result = engine::run_with(&request, &options)?;

    for step in result.steps.iter().flatten() {
        eprintln!("{step}");
    }
    println!("{}", result.result);
    Ok(())
}

async fn run_serve(
    bind: Option<std::net::SocketAddr>,
    steps: bool,
    group: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env_or_file()?;
    if let Some(addr) = bind {
        config.bind_addr = addr;
    }
    config.show_steps |= steps;
    if group.is_some() {
        config.group_size = group.filter(|&n| n > 0);
    }
    server::serve(&config).await
}
