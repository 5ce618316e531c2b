//! Bot initialization and command registration

use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use teloxide::prelude::*;
use teloxide::types::BotCommand as TelegramCommand;
use teloxide::utils::command::BotCommands;
use unic_langid::LanguageIdentifier;

use qrcore::config;
use qrcore::i18n;
use qrcore::router::BotCommand;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Я умею:")]
pub enum Command {
    #[command(description = "показать приветствие и меню")]
    Start,
    #[command(description = "настроить цвета QR-кода")]
    Design,
    #[command(description = "сбросить настройки дизайна")]
    Reset,
    #[command(description = "панель администратора")]
    Admin,
}

impl From<Command> for BotCommand {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Start => BotCommand::Start,
            Command::Design => BotCommand::Design,
            Command::Reset => BotCommand::Reset,
            Command::Admin => BotCommand::Admin,
        }
    }
}

/// Command names and their description keys, in menu order
const COMMANDS: &[(&str, &str)] = &[
    ("start", "command-start"),
    ("design", "command-design"),
    ("reset", "command-reset"),
    ("admin", "command-admin"),
];

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Missing token or invalid BOT_API_URL
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::bot_token()?;
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token.expose_secret(), client);

    // Check if local Bot API server is configured
    let bot = if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        bot.set_api_url(url)
    } else {
        bot
    };

    Ok(bot)
}

/// Localized command list for the Telegram UI
pub fn command_list(lang: &LanguageIdentifier) -> Vec<TelegramCommand> {
    COMMANDS
        .iter()
        .map(|(name, key)| TelegramCommand::new(*name, i18n::t(lang, key)))
        .collect()
}

/// Sets up bot commands in Telegram UI: the default list in Russian plus
/// one list per supported language
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(command_list(&i18n::default_lang())).await?;

    for (code, _) in i18n::SUPPORTED_LANGS {
        bot.set_my_commands(command_list(&i18n::lang_from_code(Some(*code))))
            .language_code(*code)
            .await?;
    }

    log::info!("Bot commands registered for {} languages", i18n::SUPPORTED_LANGS.len());
    Ok(())
}
