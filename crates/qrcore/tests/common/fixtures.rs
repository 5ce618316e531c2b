//! State, clock, renderer and event builders shared by the handler tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use qrcode::types::QrError;
use qrcore::admin::AdminSet;
use qrcore::clock::Clock;
use qrcore::i18n;
use qrcore::render::{QrRenderer, RenderError};
use qrcore::router::{BotCommand, CallbackAction, Input};
use qrcore::{AppState, HexColor, Incoming};

pub const ADMIN_ID: i64 = 1000;
pub const PANEL_MESSAGE_ID: i32 = 77;

/// Clock that only moves when told to
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self { now: Mutex::new(now) })
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Renderer that remembers what it was asked to draw
#[derive(Default)]
pub struct SpyRenderer {
    calls: Mutex<Vec<(String, HexColor, HexColor)>>,
}

impl SpyRenderer {
    pub fn calls(&self) -> Vec<(String, HexColor, HexColor)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_colors(&self) -> Option<(String, String)> {
        self.calls()
            .last()
            .map(|(_, fill, back)| (fill.hex().to_string(), back.hex().to_string()))
    }
}

impl QrRenderer for SpyRenderer {
    fn render(&self, text: &str, fill: &HexColor, back: &HexColor) -> Result<Vec<u8>, RenderError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), fill.clone(), back.clone()));
        Ok(b"\x89PNG fake".to_vec())
    }
}

/// Renderer that always fails to encode
pub struct FailingRenderer;

impl QrRenderer for FailingRenderer {
    fn render(&self, _text: &str, _fill: &HexColor, _back: &HexColor) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Encode(QrError::DataTooLong))
    }
}

pub fn noon(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, day, 12, 0, 0).unwrap()
}

pub struct TestEnvironment {
    pub state: AppState,
    pub renderer: Arc<SpyRenderer>,
    pub clock: Arc<FixedClock>,
}

impl TestEnvironment {
    /// One admin, spy renderer, clock pinned to 2026-10-18 noon
    pub fn new() -> Self {
        let renderer = Arc::new(SpyRenderer::default());
        let clock = FixedClock::at(noon(18));
        let state = AppState::new(AdminSet::new([ADMIN_ID]))
            .with_renderer(renderer.clone())
            .with_clock(clock.clone());
        Self { state, renderer, clock }
    }
}

pub fn event(user_id: i64, input: Input) -> Incoming {
    Incoming {
        user_id,
        chat_id: user_id,
        lang: i18n::lang_from_code(Some("en")),
        input,
    }
}

pub fn text(user_id: i64, text: &str) -> Incoming {
    event(user_id, Input::from_text(text))
}

pub fn command(user_id: i64, command: BotCommand) -> Incoming {
    event(user_id, Input::Command(command))
}

pub fn callback(user_id: i64, action: CallbackAction) -> Incoming {
    event(
        user_id,
        Input::Callback {
            action,
            message_id: PANEL_MESSAGE_ID,
        },
    )
}

/// English text for `key`
pub fn en(key: &str) -> String {
    i18n::t(&i18n::lang_from_code(Some("en")), key)
}
