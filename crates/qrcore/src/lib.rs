//! qrcore: everything behind the QR design bot that does not need Telegram
//!
//! Colors, per-user stores, the dialog router, the QR renderer, the admin
//! aggregates and the handlers. Handlers reply through the [`Messenger`]
//! trait; the `qrbot` binary plugs `teloxide` in behind it.

pub mod admin;
pub mod clock;
pub mod color;
pub mod config;
pub mod dialog;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod keyboard;
pub mod logging;
pub mod messenger;
pub mod render;
pub mod router;
pub mod storage;

pub use color::HexColor;
pub use error::{AppError, AppResult};
pub use handlers::{handle_event, AppState, Incoming};
pub use messenger::Messenger;
