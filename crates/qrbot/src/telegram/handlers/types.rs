//! Handler types, dependencies and update conversion

use std::sync::Arc;

use teloxide::types::{CallbackQuery, Message, User};

use qrcore::i18n;
use qrcore::router::{CallbackAction, Input};
use qrcore::{AppState, Incoming};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub state: Arc<AppState>,
}

impl HandlerDeps {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

fn user_id(user: &User) -> Option<i64> {
    i64::try_from(user.id.0).ok()
}

/// Builds an event from a message. Falls back to the chat id when the
/// sender is unknown (channel posts).
pub fn incoming_from_message(msg: &Message, input: Input) -> Incoming {
    let from = msg.from.as_ref();
    Incoming {
        user_id: from.and_then(user_id).unwrap_or(msg.chat.id.0),
        chat_id: msg.chat.id.0,
        lang: i18n::lang_from_code(from.and_then(|u| u.language_code.as_deref())),
        input,
    }
}

/// Builds an event from a button press, `None` when the data is not ours or
/// the message is gone
pub fn incoming_from_callback(q: &CallbackQuery) -> Option<Incoming> {
    let action = q.data.as_deref().and_then(CallbackAction::parse)?;
    let message = q.message.as_ref()?;
    Some(Incoming {
        user_id: user_id(&q.from)?,
        chat_id: message.chat().id.0,
        lang: i18n::lang_from_code(q.from.language_code.as_deref()),
        input: Input::Callback {
            action,
            message_id: message.id().0,
        },
    })
}
