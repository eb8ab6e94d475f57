use anyhow::{Context, Result};
use clap::Parser;
use octa_chats::scan::DEFAULT_CHAT_LIMIT;
use octa_chats::{
    collect_latest, logging, AdminClient, ChatApi, Config, OctaClient, ScanOptions, BUILD_TIME,
    GIT_HASH, VERSION,
};
use tracing::{info, warn};

/// List recent Octadesk chats and print `(chatId, time)` for each chat's
/// latest message.
#[derive(Parser, Debug)]
#[command(name = "clean-octa-chats", version)]
struct Cli {
    /// Stop after this many chats have been fetched successfully
    #[arg(long, default_value_t = DEFAULT_CHAT_LIMIT)]
    limit: usize,

    /// Print the tuples after the scan and trigger the admin export for each
    #[arg(long)]
    export: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.json_logs);
    info!(
        "clean-octa-chats {} (built {}, git {})",
        VERSION,
        BUILD_TIME.trim(),
        GIT_HASH
    );

    let config = Config::load().context("Error loading .env file")?;
    config.validate()?;

    let client = OctaClient::new(&config.octa)?;
    let chats = client.list_chats().await.context("Error fetching chats")?;
    info!("Fetched {} chats", chats.len());

    let options = ScanOptions {
        limit: cli.limit,
        print_immediately: !cli.export,
    };
    let outcome = collect_latest(&client, &chats, options, |info| println!("{}", info)).await;

    if !outcome.failed.is_empty() {
        warn!("Skipped chats: {}", outcome.failed.join(", "));
    }

    if cli.export {
        let admin = AdminClient::new(&config)?;
        info!("Exporting through {}", admin.url());
        for item in &outcome.items {
            println!("{}", item);
            let body = admin
                .export()
                .await
                .with_context(|| format!("Error making export request for chat {}", item.chat_id))?;
            println!("{}", body);
        }
    }

    Ok(())
}
