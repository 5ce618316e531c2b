//! Admin panel: stats, users, broadcast, clear cache

use fluent_templates::fluent_bundle::FluentArgs;
use itertools::Itertools;

use super::types::Context;
use crate::admin::AdminStats;
use crate::config::panel::RECENT_USERS_LIMIT;
use crate::dialog::DialogState;
use crate::error::AppResult;
use crate::keyboard::{self, Markup};
use crate::router::CallbackAction;

async fn deny(ctx: &Context<'_>) -> AppResult<()> {
    log::warn!("⛔ User {} tried to access the admin panel without permission", ctx.user_id);
    ctx.reply("admin-denied").await
}

/// Handle /admin command
pub(super) async fn open_panel(ctx: &Context<'_>) -> AppResult<()> {
    if !ctx.is_admin() {
        return deny(ctx).await;
    }

    log::info!("🔧 Admin {} opened the panel", ctx.user_id);
    ctx.reply_with(
        &ctx.t("admin-panel"),
        Some(Markup::Inline(keyboard::admin_panel(ctx.lang))),
    )
    .await
}

/// Handle an `admin_*` button press on the panel message `message_id`
pub(super) async fn on_callback(ctx: &Context<'_>, action: CallbackAction, message_id: i32) -> AppResult<()> {
    if !ctx.is_admin() {
        return deny(ctx).await;
    }

    log::info!("🔧 Admin {} pressed {}", ctx.user_id, action.as_ref());
    let back = Some(keyboard::admin_back(ctx.lang));

    match action {
        CallbackAction::AdminStats => {
            let today = ctx.state.clock.now().date_naive();
            let stats = AdminStats::compute(&ctx.state.stats, &ctx.state.admins, today);
            let mut args = FluentArgs::new();
            args.set("users", stats.users_count.to_string());
            args.set("qr", stats.qr_total.to_string());
            args.set("today", stats.active_today.to_string());
            args.set("admins", stats.admins_count.to_string());
            ctx.messenger
                .edit_text(ctx.chat_id, message_id, &ctx.t_args("admin-stats", &args), back)
                .await
        }
        CallbackAction::AdminUsers => {
            let text = users_text(ctx);
            ctx.messenger.edit_text(ctx.chat_id, message_id, &text, back).await
        }
        CallbackAction::AdminBroadcast => {
            ctx.state.dialogs.set(ctx.user_id, DialogState::AwaitingBroadcastText);
            let mut args = FluentArgs::new();
            args.set("recipients", ctx.state.stats.len().to_string());
            ctx.messenger
                .edit_text(
                    ctx.chat_id,
                    message_id,
                    &ctx.t_args("admin-broadcast-prompt", &args),
                    back,
                )
                .await
        }
        CallbackAction::AdminClearCache => {
            let removed = ctx.state.settings.clear();
            log::info!("🧹 Admin {} cleared {} settings entries", ctx.user_id, removed);
            let mut args = FluentArgs::new();
            args.set("count", removed.to_string());
            ctx.messenger
                .edit_text(ctx.chat_id, message_id, &ctx.t_args("admin-cache-cleared", &args), back)
                .await
        }
        CallbackAction::AdminClose => {
            cancel_broadcast(ctx);
            ctx.messenger.delete_message(ctx.chat_id, message_id).await
        }
        CallbackAction::AdminBack => {
            cancel_broadcast(ctx);
            ctx.messenger
                .edit_text(
                    ctx.chat_id,
                    message_id,
                    &ctx.t("admin-panel"),
                    Some(keyboard::admin_panel(ctx.lang)),
                )
                .await
        }
        CallbackAction::QrRegenerate | CallbackAction::QrRedesign | CallbackAction::QrShare => {
            log::warn!("Non-admin callback {} reached the admin panel", action.as_ref());
            Ok(())
        }
    }
}

fn users_text(ctx: &Context<'_>) -> String {
    let recent = ctx.state.stats.recent(RECENT_USERS_LIMIT);
    if recent.is_empty() {
        return ctx.t("admin-users-empty");
    }

    let lines = recent
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let mut args = FluentArgs::new();
            args.set("index", (i + 1).to_string());
            args.set("id", user.user_id.to_string());
            args.set("count", user.qr_count.to_string());
            args.set("last", user.last_active.format("%Y-%m-%d %H:%M").to_string());
            ctx.t_args("admin-users-line", &args)
        })
        .join("\n");
    format!("{}\n\n{}", ctx.t("admin-users-title"), lines)
}

fn cancel_broadcast(ctx: &Context<'_>) {
    if ctx.state.dialogs.get(ctx.user_id) == DialogState::AwaitingBroadcastText {
        ctx.state.dialogs.clear(ctx.user_id);
        log::info!("📨 Admin {} cancelled the broadcast", ctx.user_id);
    }
}

/// Sends `text` to every user in the stats store and reports the tally
pub(super) async fn broadcast(ctx: &Context<'_>, text: &str) -> AppResult<()> {
    let recipients = ctx.state.stats.user_ids();
    log::info!("📨 Admin {} broadcasting to {} users", ctx.user_id, recipients.len());

    let mut sent = 0usize;
    let mut failed = 0usize;
    for user_id in recipients {
        match ctx.messenger.send_text(user_id, text, None).await {
            Ok(()) => sent += 1,
            Err(e) => {
                failed += 1;
                log::warn!("📨 Broadcast to {} failed: {}", user_id, e);
            }
        }
    }

    ctx.state.dialogs.clear(ctx.user_id);
    log::info!("📨 Broadcast finished: {} sent, {} failed", sent, failed);

    let mut args = FluentArgs::new();
    args.set("sent", sent.to_string());
    args.set("failed", failed.to_string());
    ctx.reply_with(&ctx.t_args("admin-broadcast-done", &args), None).await
}
