//! Outbound side of the bot
//!
//! Handlers never talk to Telegram directly; they reply through a
//! [`Messenger`]. The bot binary implements it over `teloxide::Bot`, tests
//! implement it with a recorder.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::keyboard::{InlineRows, Markup};

#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str, markup: Option<Markup>) -> AppResult<()>;

    async fn send_photo(&self, chat_id: i64, png: Vec<u8>, caption: &str, markup: Option<Markup>) -> AppResult<()>;

    /// Replaces the text (and inline keyboard) of a message the bot sent
    async fn edit_text(&self, chat_id: i64, message_id: i32, text: &str, markup: Option<InlineRows>) -> AppResult<()>;

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> AppResult<()>;
}
