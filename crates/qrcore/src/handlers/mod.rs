//! Update handlers
//!
//! [`handle_event`] is the single entry point: it looks up the user's dialog
//! state, asks the router what to do and runs the matching handler.

mod admin;
mod design;
mod qr;
mod types;

pub use types::{AppState, Incoming};

use crate::error::AppResult;
use crate::messenger::Messenger;
use crate::router::{self, Route};
use types::Context;

/// Handles one incoming event and returns the route it took
pub async fn handle_event(state: &AppState, messenger: &dyn Messenger, event: Incoming) -> AppResult<Route> {
    let dialog = state.dialogs.get(event.user_id);
    let route = router::route(dialog, &event.input);
    log::debug!(
        "User {} (chat {}, {}) in state {}: {:?}",
        event.user_id,
        event.chat_id,
        event.lang,
        dialog,
        route
    );

    let ctx = Context {
        state,
        messenger,
        user_id: event.user_id,
        chat_id: event.chat_id,
        lang: &event.lang,
    };

    match &route {
        Route::Welcome => design::welcome(&ctx).await?,
        Route::BeginDesign => design::begin(&ctx).await?,
        Route::Reset => design::reset(&ctx).await?,
        Route::FillColor(text) => design::fill_color(&ctx, text).await?,
        Route::BackColor(text) => design::back_color(&ctx, text).await?,
        Route::GenerateQr(url) => qr::generate(&ctx, url).await?,
        Route::RejectNotUrl => qr::reject_not_url(&ctx).await?,
        Route::Regenerate => qr::regenerate(&ctx).await?,
        Route::Share => qr::share(&ctx).await?,
        Route::OpenAdminPanel => admin::open_panel(&ctx).await?,
        Route::Admin { action, message_id } => admin::on_callback(&ctx, *action, *message_id).await?,
        Route::BroadcastText(text) => admin::broadcast(&ctx, text).await?,
    }

    Ok(route)
}
