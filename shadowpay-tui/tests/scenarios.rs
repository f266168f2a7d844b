mod common;

use std::sync::Arc;

use common::{connected_app, disconnected_app, press, run_command, type_text, FakeApi};
use shadowpay_tui::message::{AppMessage, Key};
use shadowpay_tui::model::{Severity, View};
use shadowpay_tui::operations::SETTLE_NOTICE;
use shadowpay_tui::update::{update, CLIENT_REQUIRED};

// ---- navigation ----

#[test]
fn down_three_times_then_enter_opens_authorization() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    press(&mut app, &[Key::Down, Key::Down, Key::Down, Key::Enter]);

    assert_eq!(app.view, View::Authorization);
    assert_eq!(app.cursor, 0);
    assert!(app.status.is_none());
}

#[test]
fn domain_view_requires_api_key() {
    let mut app = disconnected_app();
    press(&mut app, &[Key::Down, Key::Enter]);

    assert_eq!(app.view, View::MainMenu);
    let status = app.status.as_ref().unwrap();
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(status.text, CLIENT_REQUIRED);
}

#[test]
fn settings_is_reachable_without_api_key() {
    let mut app = disconnected_app();
    press(&mut app, &[Key::Down; 7]);
    press(&mut app, &[Key::Enter]);
    assert_eq!(app.view, View::Settings);

    press(&mut app, &[Key::Esc]);
    assert_eq!(app.view, View::MainMenu);
    assert_eq!(app.cursor, 0);
}

#[test]
fn back_item_returns_to_main_menu() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    // Webhooks，然后移到最后的 Back
    press(&mut app, &[Key::Down; 5]);
    press(&mut app, &[Key::Enter]);
    assert_eq!(app.view, View::Webhook);
    press(&mut app, &[Key::Down; 10]);
    assert_eq!(app.cursor, 6);
    press(&mut app, &[Key::Enter]);

    assert_eq!(app.view, View::MainMenu);
    assert_eq!(app.cursor, 0);
}

#[test]
fn q_in_sub_view_goes_back_and_quits_on_main_menu() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    press(&mut app, &[Key::Enter]);
    assert_eq!(app.view, View::Payment);

    press(&mut app, &[Key::Char('q')]);
    assert_eq!(app.view, View::MainMenu);
    assert!(!app.should_quit);

    press(&mut app, &[Key::Char('q')]);
    assert!(app.should_quit);
}

#[test]
fn settle_payment_shows_notice_without_command() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    press(&mut app, &[Key::Enter]);
    press(&mut app, &[Key::Down; 5]);
    let cmd = press(&mut app, &[Key::Enter]);

    assert!(cmd.is_none());
    assert!(app.form.is_none());
    let status = app.status.as_ref().unwrap();
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(status.text, SETTLE_NOTICE);
}

// ---- forms ----

#[tokio::test]
async fn two_field_form_submits_values_in_order() {
    let api = Arc::new(FakeApi::default());
    let mut app = connected_app(api.clone());

    // Privacy Pool → Deposit to Pool
    press(&mut app, &[Key::Down, Key::Enter, Key::Down, Key::Enter]);
    assert_eq!(app.form.as_ref().unwrap().fields.len(), 2);

    press(&mut app, &[Key::Tab]);
    type_text(&mut app, "5");
    let cmd = press(&mut app, &[Key::Enter]).expect("last field submits");
    assert!(app.form.is_none());

    let delivered = run_command(&mut app, cmd).await;
    assert_eq!(
        delivered.first(),
        Some(&AppMessage::Loading("Creating pool deposit".into()))
    );
    assert_eq!(api.calls(), vec!["pool_deposit  5000000000".to_string()]);
    assert_eq!(app.status.as_ref().unwrap().severity, Severity::Success);
    assert!(app.loading.is_none());
}

#[test]
fn invalid_amount_keeps_view_and_reports_error() {
    let api = Arc::new(FakeApi::default());
    let mut app = connected_app(api.clone());

    press(&mut app, &[Key::Down, Key::Enter, Key::Down, Key::Enter]);
    type_text(&mut app, "wallet");
    press(&mut app, &[Key::Tab]);
    type_text(&mut app, "lots");
    let cmd = press(&mut app, &[Key::Enter]);

    assert!(cmd.is_none());
    assert!(api.calls().is_empty());
    assert_eq!(app.view, View::Pool);
    let status = app.status.as_ref().unwrap();
    assert_eq!(status.severity, Severity::Error);
    assert!(status.text.starts_with("Error: invalid amount:"));
}

#[test]
fn esc_cancels_form_without_submitting() {
    let api = Arc::new(FakeApi::default());
    let mut app = connected_app(api.clone());

    press(&mut app, &[Key::Down, Key::Enter, Key::Enter]);
    assert!(app.form.is_some());
    type_text(&mut app, "abc");
    press(&mut app, &[Key::Esc]);

    assert!(app.form.is_none());
    assert_eq!(app.view, View::Pool);
    assert!(api.calls().is_empty());
}

// ---- command results ----

#[tokio::test]
async fn failing_command_sets_error_status() {
    let api = Arc::new(FakeApi::failing("insufficient balance"));
    let mut app = connected_app(api.clone());

    // Privacy Pool → Check Balance
    press(&mut app, &[Key::Down, Key::Enter, Key::Enter]);
    type_text(&mut app, "wallet1");
    let cmd = press(&mut app, &[Key::Enter]).unwrap();
    run_command(&mut app, cmd).await;

    assert_eq!(api.calls(), vec!["pool_balance wallet1".to_string()]);
    assert_eq!(app.view, View::Pool);
    assert!(app.form.is_none());
    assert!(app.loading.is_none());
    let status = app.status.as_ref().unwrap();
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(status.text, "Error: shadowpay: insufficient balance (status 400)");
}

#[tokio::test]
async fn balance_is_formatted_in_sol() {
    let api = Arc::new(FakeApi::with_balance(1_500_000_000));
    let mut app = connected_app(api);

    press(&mut app, &[Key::Down, Key::Enter, Key::Enter]);
    type_text(&mut app, "wallet1");
    let cmd = press(&mut app, &[Key::Enter]).unwrap();
    run_command(&mut app, cmd).await;

    let status = app.status.as_ref().unwrap();
    assert_eq!(status.severity, Severity::Success);
    assert!(status.text.starts_with("Pool Balance: 1.5000 SOL (1500000000 lamports)"));
}

#[tokio::test]
async fn run_action_executes_immediately() {
    let api = Arc::new(FakeApi::default());
    let mut app = connected_app(api.clone());

    // ShadowID → Get Tree Root
    press(&mut app, &[Key::Down; 6]);
    press(&mut app, &[Key::Enter]);
    assert_eq!(app.view, View::ShadowId);
    let cmd = press(&mut app, &[Key::Down, Key::Down, Key::Down, Key::Enter]).unwrap();
    run_command(&mut app, cmd).await;

    assert_eq!(api.calls(), vec!["tree_root".to_string()]);
    assert!(app.status.as_ref().unwrap().text.starts_with("Merkle Tree Root:"));
}

#[test]
fn entering_a_view_clears_previous_result() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    update(&mut app, AppMessage::Success("done".into()));
    assert!(app.status.is_some());

    press(&mut app, &[Key::Enter]);
    assert_eq!(app.view, View::Payment);
    assert!(app.status.is_none());
}

#[test]
fn loading_is_dropped_while_form_is_open() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    press(&mut app, &[Key::Down, Key::Enter, Key::Enter]);
    assert!(app.form.is_some());

    update(&mut app, AppMessage::Loading("late".into()));
    assert!(app.loading.is_none());
    assert!(app.form.is_some());
}
