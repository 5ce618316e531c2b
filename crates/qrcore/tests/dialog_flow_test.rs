//! Color design dialog driven through `handle_event`

mod common;

use common::*;
use pretty_assertions::assert_eq;
use qrcore::dialog::DialogState;
use qrcore::keyboard::Markup;
use qrcore::router::{BotCommand, CallbackAction, Route};
use qrcore::storage::UserSettings;
use qrcore::{handle_event, HexColor};

const USER: i64 = 42;

#[tokio::test]
async fn test_design_flow_saves_colors_and_next_generation_uses_them() {
    let env = TestEnvironment::new();
    let bot = RecordingMessenger::new();

    handle_event(&env.state, &bot, command(USER, BotCommand::Design)).await.unwrap();
    assert_eq!(env.state.dialogs.get(USER), DialogState::AwaitingFillColor);

    handle_event(&env.state, &bot, text(USER, "FF5733")).await.unwrap();
    assert_eq!(env.state.dialogs.get(USER), DialogState::AwaitingBackColor);

    handle_event(&env.state, &bot, text(USER, "#ffffff")).await.unwrap();
    assert_eq!(env.state.dialogs.get(USER), DialogState::Idle);
    assert_eq!(
        env.state.settings.get(USER),
        Some(UserSettings {
            fill_color: HexColor::parse("FF5733").unwrap(),
            back_color: HexColor::parse("FFFFFF").unwrap(),
        })
    );

    let texts = bot.take_texts();
    assert_eq!(
        texts,
        vec![en("design-fill-prompt"), en("design-back-prompt"), en("design-saved")]
    );

    handle_event(&env.state, &bot, text(USER, "https://example.com")).await.unwrap();
    assert_eq!(
        env.renderer.last_colors(),
        Some(("FF5733".to_string(), "FFFFFF".to_string()))
    );
    let sent = bot.take();
    let caption = sent.last().and_then(Sent::text).unwrap();
    assert!(caption.contains("#FF5733"), "caption: {caption}");
    assert!(caption.contains("#FFFFFF"), "caption: {caption}");
}

#[tokio::test]
async fn test_invalid_color_reprompts_without_state_change() {
    let env = TestEnvironment::new();
    let bot = RecordingMessenger::new();

    handle_event(&env.state, &bot, command(USER, BotCommand::Design)).await.unwrap();
    for bad in ["red", "#FFF", "GGGGGG", "#12345", "1234567", "https://example.com"] {
        handle_event(&env.state, &bot, text(USER, bad)).await.unwrap();
        assert_eq!(env.state.dialogs.get(USER), DialogState::AwaitingFillColor, "input {bad:?}");
    }
    assert_eq!(env.state.settings.get(USER), None);

    handle_event(&env.state, &bot, text(USER, "#00ff00")).await.unwrap();
    handle_event(&env.state, &bot, text(USER, "nope")).await.unwrap();
    assert_eq!(env.state.dialogs.get(USER), DialogState::AwaitingBackColor);

    let texts = bot.take_texts();
    assert_eq!(texts.last(), Some(&en("design-back-invalid")));
    assert_eq!(texts.iter().filter(|t| **t == en("design-fill-invalid")).count(), 6);
}

#[tokio::test]
async fn test_fill_step_resets_background_to_white() {
    let env = TestEnvironment::new();
    let bot = RecordingMessenger::new();

    for input in ["/design", "#111111", "#222222"] {
        let event = if input == "/design" {
            command(USER, BotCommand::Design)
        } else {
            text(USER, input)
        };
        handle_event(&env.state, &bot, event).await.unwrap();
    }

    handle_event(&env.state, &bot, command(USER, BotCommand::Design)).await.unwrap();
    handle_event(&env.state, &bot, text(USER, "#333333")).await.unwrap();
    assert_eq!(
        env.state.settings.get(USER),
        Some(UserSettings {
            fill_color: HexColor::parse("333333").unwrap(),
            back_color: HexColor::white(),
        })
    );
}

#[tokio::test]
async fn test_reset_from_every_state_returns_to_defaults() {
    for setup in [
        Vec::new(),
        vec!["#FF0000"],
        vec!["#FF0000", "#00FF00"],
    ] {
        let env = TestEnvironment::new();
        let bot = RecordingMessenger::new();

        handle_event(&env.state, &bot, command(USER, BotCommand::Design)).await.unwrap();
        for input in &setup {
            handle_event(&env.state, &bot, text(USER, input)).await.unwrap();
        }

        let route = handle_event(&env.state, &bot, command(USER, BotCommand::Reset)).await.unwrap();
        assert_eq!(route, Route::Reset);
        assert_eq!(env.state.dialogs.get(USER), DialogState::Idle);
        assert_eq!(env.state.settings.get(USER), None);

        bot.take();
        handle_event(&env.state, &bot, text(USER, "https://example.com")).await.unwrap();
        assert_eq!(
            env.renderer.last_colors(),
            Some(("000000".to_string(), "FFFFFF".to_string()))
        );
        let sent = bot.take();
        let caption = sent.last().and_then(Sent::text).unwrap();
        assert!(caption.contains(&en("color-black")), "caption: {caption}");
        assert!(caption.contains(&en("color-white")), "caption: {caption}");
    }
}

#[tokio::test]
async fn test_reset_menu_button_works_mid_dialog() {
    let env = TestEnvironment::new();
    let bot = RecordingMessenger::new();

    handle_event(&env.state, &bot, text(USER, "🎨 Design")).await.unwrap();
    assert_eq!(env.state.dialogs.get(USER), DialogState::AwaitingFillColor);

    // Russian label works for an English-speaking user too
    handle_event(&env.state, &bot, text(USER, "🔄 Сбросить дизайн")).await.unwrap();
    assert_eq!(env.state.dialogs.get(USER), DialogState::Idle);

    let sent = bot.take();
    assert!(matches!(
        sent.last(),
        Some(Sent::Text { markup: Some(Markup::Menu(_)), .. })
    ));
}

#[tokio::test]
async fn test_start_shows_menu_without_touching_state() {
    let env = TestEnvironment::new();
    let bot = RecordingMessenger::new();

    handle_event(&env.state, &bot, command(USER, BotCommand::Design)).await.unwrap();
    bot.take();

    handle_event(&env.state, &bot, command(USER, BotCommand::Start)).await.unwrap();
    assert_eq!(env.state.dialogs.get(USER), DialogState::AwaitingFillColor);

    let sent = bot.take();
    assert_eq!(sent.len(), 1);
    let Sent::Text { text, markup, .. } = &sent[0] else {
        panic!("expected a text message, got {:?}", sent[0]);
    };
    assert_eq!(text, &en("welcome"));
    assert!(matches!(markup, Some(Markup::Menu(rows)) if rows.len() == 3));
}

#[tokio::test]
async fn test_redesign_button_starts_color_flow() {
    let env = TestEnvironment::new();
    let bot = RecordingMessenger::new();

    let route = handle_event(&env.state, &bot, callback(USER, CallbackAction::QrRedesign)).await.unwrap();
    assert_eq!(route, Route::BeginDesign);
    assert_eq!(env.state.dialogs.get(USER), DialogState::AwaitingFillColor);
    assert_eq!(bot.take_texts(), vec![en("design-fill-prompt")]);
}
