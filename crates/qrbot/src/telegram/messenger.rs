//! [`Messenger`] over the Telegram Bot API

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, InputFile, KeyboardButton, KeyboardMarkup, MessageId, ReplyMarkup,
};

use qrcore::config::qr::FILE_NAME;
use qrcore::keyboard::{Button, InlineRows, Markup};
use qrcore::{AppResult, Messenger};

pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn inline_button(button: Button) -> InlineKeyboardButton {
    match button {
        Button::Callback { text, data } => InlineKeyboardButton::callback(text, data.as_ref()),
        Button::Url { text, url } => InlineKeyboardButton::url(text, url),
    }
}

pub(crate) fn inline_keyboard(rows: InlineRows) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        rows.into_iter()
            .map(|row| row.into_iter().map(inline_button).collect::<Vec<_>>()),
    )
}

pub(crate) fn reply_markup(markup: Markup) -> ReplyMarkup {
    match markup {
        Markup::Menu(rows) => ReplyMarkup::Keyboard(
            KeyboardMarkup::new(
                rows.into_iter()
                    .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>()),
            )
            .resize_keyboard(),
        ),
        Markup::Inline(rows) => ReplyMarkup::InlineKeyboard(inline_keyboard(rows)),
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: i64, text: &str, markup: Option<Markup>) -> AppResult<()> {
        let mut request = self.bot.send_message(ChatId(chat_id), text);
        if let Some(markup) = markup {
            request = request.reply_markup(reply_markup(markup));
        }
        request.await?;
        Ok(())
    }

    async fn send_photo(&self, chat_id: i64, png: Vec<u8>, caption: &str, markup: Option<Markup>) -> AppResult<()> {
        let mut request = self
            .bot
            .send_photo(ChatId(chat_id), InputFile::memory(png).file_name(FILE_NAME))
            .caption(caption);
        if let Some(markup) = markup {
            request = request.reply_markup(reply_markup(markup));
        }
        request.await?;
        Ok(())
    }

    async fn edit_text(&self, chat_id: i64, message_id: i32, text: &str, markup: Option<InlineRows>) -> AppResult<()> {
        let mut request = self
            .bot
            .edit_message_text(ChatId(chat_id), MessageId(message_id), text);
        if let Some(rows) = markup {
            request = request.reply_markup(inline_keyboard(rows));
        }
        request.await?;
        Ok(())
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> AppResult<()> {
        self.bot
            .delete_message(ChatId(chat_id), MessageId(message_id))
            .await?;
        Ok(())
    }
}
