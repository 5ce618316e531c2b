use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use backon::{ExponentialBuilder, Retryable};
use dotenvy::dotenv;
use teloxide::prelude::*;

use qrbot::cli::{Cli, Commands};
use qrbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use qrcore::admin::AdminSet;
use qrcore::config;
use qrcore::logging::init_logger;
use qrcore::render::{PngRenderer, QrRenderer};
use qrcore::{AppState, HexColor};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_bot().await,
        Commands::Render {
            url,
            fill,
            back,
            output,
        } => render_to_file(&url, &fill, &back, &output),
    }
}

/// Renders a QR code with the bot's settings and writes it to `output`
fn render_to_file(url: &str, fill: &HexColor, back: &HexColor, output: &Path) -> Result<()> {
    let png = PngRenderer.render(url, fill, back)?;
    fs_err::write(output, &png)?;
    log::info!(
        "QR code for {} ({} on {}) written to {} ({} bytes)",
        url,
        fill,
        back,
        output.display(),
        png.len()
    );
    Ok(())
}

async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    // Fatal without BOT_TOKEN
    let bot = create_bot()?;

    // Bot API may still be starting (local server), retry before giving up
    let me = (|| {
        let bot = bot.clone();
        async move { bot.get_me().await }
    })
    .retry(ExponentialBuilder::default().with_max_times(config::network::STARTUP_MAX_RETRIES))
    .notify(|err: &teloxide::RequestError, dur: Duration| {
        log::warn!("Bot API not ready: {}. Retrying in {:?}", err, dur);
    })
    .await
    .map_err(|e| anyhow::anyhow!("Failed to connect to Bot API: {}", e))?;
    log::info!("Bot username: {:?}, Bot ID: {}", me.user.username, me.user.id);

    setup_bot_commands(&bot).await?;

    let admins = AdminSet::from_config();
    if admins.is_empty() {
        log::warn!("ADMIN_IDS is not set; /admin is disabled");
    } else {
        log::info!("Loaded {} admin id(s)", admins.len());
    }

    let state = Arc::new(AppState::new(admins));
    let handler = schema(HandlerDeps::new(state));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
