//! HEX color parsing for QR fill/background colors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated `RRGGBB` color.
///
/// Stored as six uppercase hex digits without the leading `#`, displayed
/// with it (`#FF5733`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

/// Returned when user input is not a 6-digit HEX color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid HEX color: {0:?}")]
pub struct InvalidColor(pub String);

impl HexColor {
    /// Default fill color
    pub fn black() -> Self {
        Self("000000".to_string())
    }

    /// Default background color
    pub fn white() -> Self {
        Self("FFFFFF".to_string())
    }

    /// Parses user input: surrounding whitespace is trimmed and one leading
    /// `#` is optional. Exactly six hex digits, any case.
    pub fn parse(input: &str) -> Result<Self, InvalidColor> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(digits.to_ascii_uppercase()))
        } else {
            Err(InvalidColor(input.to_string()))
        }
    }

    /// Six uppercase hex digits, no `#`
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels
    pub fn rgb(&self) -> [u8; 3] {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        [channel(0), channel(2), channel(4)]
    }
}

/// Checks that `input` is a valid HEX color (`FF5733` or `#ff5733`)
pub fn is_valid_hex(input: &str) -> bool {
    HexColor::parse(input).is_ok()
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}
