//! Handler state, incoming events and the per-event context

use std::sync::Arc;

use fluent_templates::fluent_bundle::FluentArgs;
use unic_langid::LanguageIdentifier;

use crate::admin::AdminSet;
use crate::clock::{Clock, SystemClock};
use crate::dialog::DialogStore;
use crate::error::AppResult;
use crate::i18n;
use crate::keyboard::Markup;
use crate::messenger::Messenger;
use crate::render::{PngRenderer, QrRenderer};
use crate::router::Input;
use crate::storage::{SettingsStore, StatsStore};

/// Process-wide state shared by every handler.
///
/// The bot wraps it in an `Arc` and injects it into the dispatcher; tests
/// build their own with a stub renderer and a fixed clock.
pub struct AppState {
    pub settings: SettingsStore,
    pub stats: StatsStore,
    pub dialogs: DialogStore,
    pub admins: AdminSet,
    pub renderer: Arc<dyn QrRenderer>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Empty stores, PNG renderer and wall clock
    pub fn new(admins: AdminSet) -> Self {
        Self {
            settings: SettingsStore::new(),
            stats: StatsStore::new(),
            dialogs: DialogStore::new(),
            admins,
            renderer: Arc::new(PngRenderer),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn QrRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// One update from one user
#[derive(Debug, Clone)]
pub struct Incoming {
    pub user_id: i64,
    pub chat_id: i64,
    pub lang: LanguageIdentifier,
    pub input: Input,
}

/// Everything a handler needs to answer the current event
pub(crate) struct Context<'a> {
    pub state: &'a AppState,
    pub messenger: &'a dyn Messenger,
    pub user_id: i64,
    pub chat_id: i64,
    pub lang: &'a LanguageIdentifier,
}

impl Context<'_> {
    pub fn t(&self, key: &str) -> String {
        i18n::t(self.lang, key)
    }

    pub fn t_args(&self, key: &str, args: &FluentArgs) -> String {
        i18n::t_args(self.lang, key, args)
    }

    pub fn is_admin(&self) -> bool {
        self.state.admins.is_admin(self.user_id)
    }

    /// Sends a localized message to the current chat
    pub async fn reply(&self, key: &str) -> AppResult<()> {
        self.messenger.send_text(self.chat_id, &self.t(key), None).await
    }

    pub async fn reply_with(&self, text: &str, markup: Option<Markup>) -> AppResult<()> {
        self.messenger.send_text(self.chat_id, text, markup).await
    }
}
