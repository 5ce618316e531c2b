//! Recording messenger: keeps every outbound call instead of sending it

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;
use qrcore::keyboard::{InlineRows, Markup};
use qrcore::{AppError, AppResult, Messenger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
        markup: Option<Markup>,
    },
    Photo {
        chat_id: i64,
        png: Vec<u8>,
        caption: String,
        markup: Option<Markup>,
    },
    Edit {
        chat_id: i64,
        message_id: i32,
        text: String,
        markup: Option<InlineRows>,
    },
    Delete {
        chat_id: i64,
        message_id: i32,
    },
}

impl Sent {
    pub fn chat_id(&self) -> i64 {
        match self {
            Self::Text { chat_id, .. }
            | Self::Photo { chat_id, .. }
            | Self::Edit { chat_id, .. }
            | Self::Delete { chat_id, .. } => *chat_id,
        }
    }

    /// Message text, photo caption or edited text
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } | Self::Edit { text, .. } => Some(text),
            Self::Photo { caption, .. } => Some(caption),
            Self::Delete { .. } => None,
        }
    }
}

/// Messenger double. Sends to chats listed in `blocked` fail like a user who
/// blocked the bot.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    blocked: BTreeSet<i64>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocking(chats: impl IntoIterator<Item = i64>) -> Self {
        Self {
            sent: Mutex::default(),
            blocked: chats.into_iter().collect(),
        }
    }

    /// Drains everything recorded so far
    pub fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    /// Texts of everything recorded so far, drained
    pub fn take_texts(&self) -> Vec<String> {
        self.take()
            .iter()
            .filter_map(|sent| sent.text().map(str::to_string))
            .collect()
    }

    fn record(&self, chat_id: i64, sent: Sent) -> AppResult<()> {
        if self.blocked.contains(&chat_id) {
            return Err(AppError::Messaging(format!("chat {} blocked the bot", chat_id)));
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: i64, text: &str, markup: Option<Markup>) -> AppResult<()> {
        self.record(
            chat_id,
            Sent::Text {
                chat_id,
                text: text.to_string(),
                markup,
            },
        )
    }

    async fn send_photo(&self, chat_id: i64, png: Vec<u8>, caption: &str, markup: Option<Markup>) -> AppResult<()> {
        self.record(
            chat_id,
            Sent::Photo {
                chat_id,
                png,
                caption: caption.to_string(),
                markup,
            },
        )
    }

    async fn edit_text(&self, chat_id: i64, message_id: i32, text: &str, markup: Option<InlineRows>) -> AppResult<()> {
        self.record(
            chat_id,
            Sent::Edit {
                chat_id,
                message_id,
                text: text.to_string(),
                markup,
            },
        )
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> AppResult<()> {
        self.record(chat_id, Sent::Delete { chat_id, message_id })
    }
}
