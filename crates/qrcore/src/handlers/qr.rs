//! QR generation and the buttons under a generated code

use fluent_templates::fluent_bundle::FluentArgs;

use super::types::Context;
use crate::error::AppResult;
use crate::keyboard;

/// Longest link echoed back in a photo caption (Telegram caps captions at 1024)
const CAPTION_URL_LIMIT: usize = 800;

pub(super) async fn generate(ctx: &Context<'_>, url: &str) -> AppResult<()> {
    let settings = ctx.state.settings.get(ctx.user_id);
    let effective = settings.clone().unwrap_or_default();

    ctx.reply("qr-generating").await?;

    let png = match ctx
        .state
        .renderer
        .render(url, &effective.fill_color, &effective.back_color)
    {
        Ok(png) => png,
        Err(e) => {
            log::warn!("❌ QR render failed for user {}: {}", ctx.user_id, e);
            let mut args = FluentArgs::new();
            args.set("error", e.to_string());
            return ctx.reply_with(&ctx.t_args("qr-error", &args), None).await;
        }
    };

    let stats = ctx
        .state
        .stats
        .record_generation(ctx.user_id, ctx.state.clock.now(), url);
    log::info!(
        "✅ QR for user {} ({} bytes, total {}): {}",
        ctx.user_id,
        png.len(),
        stats.qr_count,
        url
    );

    // Colors the user never chose are shown by name
    let (fill, back) = match &settings {
        Some(s) => (s.fill_color.to_string(), s.back_color.to_string()),
        None => (ctx.t("color-black"), ctx.t("color-white")),
    };
    let mut args = FluentArgs::new();
    args.set("url", truncate_chars(url, CAPTION_URL_LIMIT));
    args.set("fill", fill);
    args.set("back", back);

    ctx.messenger
        .send_photo(
            ctx.chat_id,
            png,
            &ctx.t_args("qr-caption", &args),
            Some(keyboard::qr_actions(ctx.lang)),
        )
        .await
}

pub(super) async fn reject_not_url(ctx: &Context<'_>) -> AppResult<()> {
    log::debug!("User {} sent text that is not a link", ctx.user_id);
    ctx.reply("qr-invalid-url").await
}

/// Renders the last link again with the current colors
pub(super) async fn regenerate(ctx: &Context<'_>) -> AppResult<()> {
    match ctx.state.stats.last_url(ctx.user_id) {
        Some(url) => generate(ctx, &url).await,
        None => ctx.reply("qr-no-link").await,
    }
}

pub(super) async fn share(ctx: &Context<'_>) -> AppResult<()> {
    let Some(url) = ctx.state.stats.last_url(ctx.user_id) else {
        return ctx.reply("qr-no-link").await;
    };

    let mut args = FluentArgs::new();
    args.set("url", truncate_chars(&url, CAPTION_URL_LIMIT));
    ctx.reply_with(&ctx.t_args("qr-share", &args), keyboard::share(ctx.lang, &url))
        .await
}

/// Cuts `text` to at most `max_len` characters, marking the cut with "..."
fn truncate_chars(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut result: String = text.chars().take(max_len.saturating_sub(3)).collect();
    result.push_str("...");
    result
}
