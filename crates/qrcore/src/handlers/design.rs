//! Color design dialog, /start and /reset

use super::types::Context;
use crate::color::HexColor;
use crate::dialog::DialogState;
use crate::error::AppResult;
use crate::keyboard;

pub(super) async fn welcome(ctx: &Context<'_>) -> AppResult<()> {
    ctx.reply_with(&ctx.t("welcome"), Some(keyboard::main_menu(ctx.lang)))
        .await
}

/// Enters the color flow from any state
pub(super) async fn begin(ctx: &Context<'_>) -> AppResult<()> {
    ctx.state.dialogs.set(ctx.user_id, DialogState::AwaitingFillColor);
    ctx.reply("design-fill-prompt").await
}

pub(super) async fn fill_color(ctx: &Context<'_>, text: &str) -> AppResult<()> {
    let Ok(fill) = HexColor::parse(text) else {
        log::debug!("User {} sent invalid fill color {:?}", ctx.user_id, text);
        return ctx.reply("design-fill-invalid").await;
    };

    log::info!("🎨 User {} picked fill color {}", ctx.user_id, fill);
    ctx.state.settings.start_design(ctx.user_id, fill);
    ctx.state.dialogs.set(ctx.user_id, DialogState::AwaitingBackColor);
    ctx.reply("design-back-prompt").await
}

pub(super) async fn back_color(ctx: &Context<'_>, text: &str) -> AppResult<()> {
    let Ok(back) = HexColor::parse(text) else {
        log::debug!("User {} sent invalid background color {:?}", ctx.user_id, text);
        return ctx.reply("design-back-invalid").await;
    };

    log::info!("🎨 User {} picked background color {}", ctx.user_id, back);
    ctx.state.settings.set_back_color(ctx.user_id, back);
    ctx.state.dialogs.clear(ctx.user_id);
    ctx.reply_with(&ctx.t("design-saved"), Some(keyboard::main_menu(ctx.lang)))
        .await
}

/// Drops the user's colors and any pending dialog
pub(super) async fn reset(ctx: &Context<'_>) -> AppResult<()> {
    let had_settings = ctx.state.settings.remove(ctx.user_id);
    let previous = ctx.state.dialogs.clear(ctx.user_id);
    log::info!(
        "🔄 User {} reset design (had settings: {}, was {})",
        ctx.user_id,
        had_settings,
        previous
    );
    ctx.reply_with(&ctx.t("design-reset"), Some(keyboard::main_menu(ctx.lang)))
        .await
}
