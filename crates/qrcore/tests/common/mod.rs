//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fixtures;
pub mod recorder;

#[allow(unused_imports)]
pub use fixtures::{
    callback, command, en, event, noon, text, FailingRenderer, FixedClock, SpyRenderer, TestEnvironment, ADMIN_ID,
    PANEL_MESSAGE_ID,
};
#[allow(unused_imports)]
pub use recorder::{RecordingMessenger, Sent};
