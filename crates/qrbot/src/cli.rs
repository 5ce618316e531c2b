use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qrcore::config::qr::FILE_NAME;
use qrcore::HexColor;

#[derive(Parser)]
#[command(name = "qrbot")]
#[command(author, version, about = "Telegram bot that turns links into colored QR codes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling). Default when no command is given
    Run,

    /// Render a QR code to a PNG file without Telegram
    Render {
        /// Text or link to encode
        url: String,

        /// Fill color in HEX format
        #[arg(long, default_value = "#000000", value_parser = HexColor::parse)]
        fill: HexColor,

        /// Background color in HEX format
        #[arg(long, default_value = "#FFFFFF", value_parser = HexColor::parse)]
        back: HexColor,

        /// Output file
        #[arg(short, long, default_value = FILE_NAME)]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
