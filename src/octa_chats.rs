use anyhow::{Context, Result};
use clap::Parser;
use octa_chats::{logging, Config, OctaClient, BUILD_TIME, GIT_HASH, VERSION};
use tracing::info;

/// Print the newest page of Octadesk chats as raw JSON.
#[derive(Parser, Debug)]
#[command(name = "octa-chats", version)]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.json_logs);
    info!("octa-chats {} (built {}, git {})", VERSION, BUILD_TIME.trim(), GIT_HASH);

    let config = Config::load().context("Error loading .env file")?;
    config.validate()?;

    let client = OctaClient::new(&config.octa)?;
    let body = client
        .list_chats_raw()
        .await
        .context("Error fetching chats")?;

    println!("{}", body);
    Ok(())
}
