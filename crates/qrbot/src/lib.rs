//! qrbot: Telegram front end for `qrcore`

pub mod cli;
pub mod telegram;
