//! Transport-neutral keyboards
//!
//! Handlers describe buttons with these types; the Telegram layer turns them
//! into `teloxide` markup.

use unic_langid::LanguageIdentifier;
use url::Url;

use crate::i18n;
use crate::router::{menu_button_keys, CallbackAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    Callback { text: String, data: CallbackAction },
    Url { text: String, url: Url },
}

impl Button {
    pub fn callback(lang: &LanguageIdentifier, key: &str, data: CallbackAction) -> Self {
        Self::Callback {
            text: i18n::t(lang, key),
            data,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Callback { text, .. } | Self::Url { text, .. } => text,
        }
    }
}

pub type InlineRows = Vec<Vec<Button>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Persistent reply keyboard under the input field
    Menu(Vec<Vec<String>>),
    /// Buttons attached to a message
    Inline(InlineRows),
}

impl Markup {
    /// Callback payloads present in an inline keyboard
    pub fn callbacks(&self) -> Vec<CallbackAction> {
        match self {
            Self::Menu(_) => Vec::new(),
            Self::Inline(rows) => rows
                .iter()
                .flatten()
                .filter_map(|button| match button {
                    Button::Callback { data, .. } => Some(*data),
                    Button::Url { .. } => None,
                })
                .collect(),
        }
    }
}

/// Main reply keyboard: one shortcut per row
pub fn main_menu(lang: &LanguageIdentifier) -> Markup {
    Markup::Menu(menu_button_keys().map(|key| vec![i18n::t(lang, key)]).collect())
}

/// Buttons under a generated QR code
pub fn qr_actions(lang: &LanguageIdentifier) -> Markup {
    Markup::Inline(vec![
        vec![
            Button::callback(lang, "button-regenerate", CallbackAction::QrRegenerate),
            Button::callback(lang, "button-redesign", CallbackAction::QrRedesign),
        ],
        vec![Button::callback(lang, "button-share", CallbackAction::QrShare)],
    ])
}

/// Single button opening Telegram's share dialog for `link`
pub fn share(lang: &LanguageIdentifier, link: &str) -> Option<Markup> {
    let url = Url::parse_with_params("https://t.me/share/url", &[("url", link)]).ok()?;
    Some(Markup::Inline(vec![vec![Button::Url {
        text: i18n::t(lang, "button-share-open"),
        url,
    }]]))
}

pub fn admin_panel(lang: &LanguageIdentifier) -> InlineRows {
    vec![
        vec![
            Button::callback(lang, "admin-button-stats", CallbackAction::AdminStats),
            Button::callback(lang, "admin-button-users", CallbackAction::AdminUsers),
        ],
        vec![Button::callback(lang, "admin-button-broadcast", CallbackAction::AdminBroadcast)],
        vec![Button::callback(lang, "admin-button-clear-cache", CallbackAction::AdminClearCache)],
        vec![Button::callback(lang, "admin-button-close", CallbackAction::AdminClose)],
    ]
}

pub fn admin_back(lang: &LanguageIdentifier) -> InlineRows {
    vec![vec![Button::callback(lang, "admin-button-back", CallbackAction::AdminBack)]]
}
