//! Transition table: (dialog state, input) -> route
//!
//! Every incoming update is first turned into an [`Input`], then [`route`]
//! decides which handler runs. Commands win over dialog state, so `/reset`
//! and friends work from anywhere.

use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

use crate::dialog::DialogState;
use crate::i18n;

/// Bot commands understood by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Design,
    Reset,
    Admin,
}

/// Inline keyboard callback payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CallbackAction {
    QrRegenerate,
    QrRedesign,
    QrShare,
    AdminStats,
    AdminBroadcast,
    AdminUsers,
    AdminClearCache,
    AdminClose,
    AdminBack,
}

impl CallbackAction {
    /// Parses callback data, `None` for anything we did not send
    pub fn parse(data: &str) -> Option<Self> {
        data.parse().ok()
    }

    /// Whether the action belongs to the admin panel
    pub fn is_admin(self) -> bool {
        self.as_ref().starts_with("admin_")
    }
}

/// An update reduced to what the router cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(BotCommand),
    Text(String),
    Callback { action: CallbackAction, message_id: i32 },
}

impl Input {
    /// Classifies plain message text. Menu button labels in any supported
    /// language map to the command they mirror.
    pub fn from_text(text: &str) -> Self {
        match menu_button_command(text) {
            Some(command) => Self::Command(command),
            None => Self::Text(text.to_string()),
        }
    }
}

/// Reply-keyboard shortcuts and the commands they mirror
const MENU_BUTTONS: &[(&str, BotCommand)] = &[
    ("menu-design", BotCommand::Design),
    ("menu-reset", BotCommand::Reset),
    ("menu-help", BotCommand::Start),
];

fn menu_button_command(text: &str) -> Option<BotCommand> {
    let text = text.trim();
    i18n::all_langs().iter().find_map(|lang| {
        MENU_BUTTONS
            .iter()
            .find(|(key, _)| i18n::t(lang, key) == text)
            .map(|(_, command)| *command)
    })
}

/// Menu button localization keys, row by row
pub fn menu_button_keys() -> impl Iterator<Item = &'static str> {
    MENU_BUTTONS.iter().map(|(key, _)| *key)
}

/// What the handler layer should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Welcome,
    BeginDesign,
    Reset,
    OpenAdminPanel,
    FillColor(String),
    BackColor(String),
    BroadcastText(String),
    GenerateQr(String),
    RejectNotUrl,
    Regenerate,
    Share,
    Admin { action: CallbackAction, message_id: i32 },
}

/// Accepted link prefixes; nothing beyond the prefix is validated
pub const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

pub fn is_url(text: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
}

/// The dialog transition table
pub fn route(state: DialogState, input: &Input) -> Route {
    match (state, input) {
        (_, Input::Command(BotCommand::Start)) => Route::Welcome,
        (_, Input::Command(BotCommand::Design)) => Route::BeginDesign,
        (_, Input::Command(BotCommand::Reset)) => Route::Reset,
        (_, Input::Command(BotCommand::Admin)) => Route::OpenAdminPanel,

        (DialogState::AwaitingFillColor, Input::Text(text)) => Route::FillColor(text.clone()),
        (DialogState::AwaitingBackColor, Input::Text(text)) => Route::BackColor(text.clone()),
        (DialogState::AwaitingBroadcastText, Input::Text(text)) => Route::BroadcastText(text.clone()),
        (DialogState::Idle, Input::Text(text)) if is_url(text) => Route::GenerateQr(text.clone()),
        (DialogState::Idle, Input::Text(_)) => Route::RejectNotUrl,

        (_, Input::Callback { action: CallbackAction::QrRedesign, .. }) => Route::BeginDesign,
        (_, Input::Callback { action: CallbackAction::QrRegenerate, .. }) => Route::Regenerate,
        (_, Input::Callback { action: CallbackAction::QrShare, .. }) => Route::Share,
        (_, Input::Callback { action, message_id }) => Route::Admin {
            action: *action,
            message_id: *message_id,
        },
    }
}

/// Every callback payload the bot emits
pub fn all_callbacks() -> impl Iterator<Item = CallbackAction> {
    CallbackAction::iter()
}
