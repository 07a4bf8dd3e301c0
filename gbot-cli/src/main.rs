//! gbot CLI: run the channel-to-completion bridge. Config from env (`.env`
//! supported) with optional CLI overrides.

use anyhow::Result;
use clap::Parser;
use gbot_telegram::run_bridge;

mod config;
use config::{load_config, Overrides};

#[derive(Parser)]
#[command(name = "gbot")]
#[command(about = "Channel-to-completion bridge: forwards chat messages to a completion API", long_about = None)]
#[command(version)]
struct Cli {
    /// Bot token (overrides BOT_TOKEN).
    #[arg(short, long)]
    token: Option<String>,

    /// Numeric chat id to listen on (overrides CHANNEL_ID).
    #[arg(long)]
    channel_id: Option<i64>,

    /// Chat name to listen on (overrides CHANNEL_NAME).
    #[arg(long)]
    channel_name: Option<String>,

    /// Completion model (overrides MODEL).
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_config(Overrides {
        token: cli.token,
        channel_id: cli.channel_id,
        channel_name: cli.channel_name,
        model: cli.model,
    })?;

    run_bridge(config).await?;
    Ok(())
}
