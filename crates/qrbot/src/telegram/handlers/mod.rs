//! Telegram update handlers
//!
//! Only the conversion from `teloxide` updates lives here; the bot logic is
//! in `qrcore::handlers`.

mod schema;
mod types;

pub use schema::schema;
pub use types::{incoming_from_callback, incoming_from_message, HandlerDeps, HandlerError};
