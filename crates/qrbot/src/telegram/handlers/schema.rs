//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use qrcore::router::Input;
use qrcore::{handle_event, Incoming};

use super::types::{incoming_from_callback, incoming_from_message, HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::messenger::TelegramMessenger;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Commands are matched first, then plain text, then inline button presses.
/// Every branch converts the update into an [`Incoming`] event and hands it
/// to `qrcore`.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(command_handler(deps.clone()))
        .branch(message_handler(deps.clone()))
        .branch(callback_handler(deps))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);
                let event = incoming_from_message(&msg, Input::Command(cmd.into()));
                dispatch(bot, &deps, event).await
            }
        },
    ))
}

/// Plain text, including reply-keyboard button labels
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_map(|msg: Message| msg.text().map(str::to_owned))
        .endpoint(move |bot: Bot, msg: Message, text: String| {
            let deps = deps.clone();
            async move {
                let event = incoming_from_message(&msg, Input::from_text(&text));
                dispatch(bot, &deps, event).await
            }
        })
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            // Stop the button spinner whatever the outcome
            if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
                log::warn!("Failed to answer callback query: {}", e);
            }

            match incoming_from_callback(&q) {
                Some(event) => dispatch(bot, &deps, event).await,
                None => {
                    log::debug!("Ignoring callback {:?} from user {}", q.data, q.from.id);
                    Ok(())
                }
            }
        }
    })
}

async fn dispatch(bot: Bot, deps: &HandlerDeps, event: Incoming) -> Result<(), HandlerError> {
    let user_id = event.user_id;
    let messenger = TelegramMessenger::new(bot);

    match handle_event(&deps.state, &messenger, event).await {
        Ok(route) => log::debug!("✅ Handled {:?} for user {}", route, user_id),
        Err(e) => log::error!("❌ Handler failed for user {}: {}", user_id, e),
    }
    Ok(())
}
