//! Rendering smoke tests against ratatui's in-memory backend.

mod common;

use std::sync::Arc;

use common::{connected_app, disconnected_app, press, FakeApi};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shadowpay_tui::message::{AppMessage, Key};
use shadowpay_tui::model::{App, View};
use shadowpay_tui::update::update;
use shadowpay_tui::view;

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| view::render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn main_menu_lists_every_section() {
    let app = connected_app(Arc::new(FakeApi::default()));
    let screen = draw(&app, 100, 30);

    assert!(screen.contains("ShadowPay Console"));
    for label in ["ZK Payments", "Privacy Pool", "Webhooks", "Settings", "Exit"] {
        assert!(screen.contains(label), "missing {label}:\n{screen}");
    }
    assert!(screen.contains("Connected"));
}

#[test]
fn disconnected_main_menu_asks_for_key() {
    let app = disconnected_app();
    let screen = draw(&app, 100, 30);
    assert!(screen.contains("Not Connected"));
}

#[test]
fn settings_page_shows_missing_key() {
    let mut app = disconnected_app();
    app.navigate(View::Settings);
    let screen = draw(&app, 100, 30);
    assert!(screen.contains("API Key not set"));
}

#[test]
fn open_form_is_drawn_over_menu() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    app.navigate(View::Pool);
    press(&mut app, &[Key::Enter]);
    assert!(app.form.is_some());

    let screen = draw(&app, 100, 30);
    assert!(screen.contains("Check Pool Balance"), "{screen}");
    assert!(screen.contains("Wallet Address"));
}

#[test]
fn loading_overlay_shows_label() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    let _ = update(&mut app, AppMessage::Loading("Fetching tree root".into()));

    let screen = draw(&app, 100, 30);
    assert!(screen.contains("Processing..."));
    assert!(screen.contains("Fetching tree root"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = connected_app(Arc::new(FakeApi::default()));
    let _ = update(&mut app, AppMessage::Error("insufficient balance".into()));
    draw(&app, 10, 4);
    draw(&app, 1, 1);
}
