//! 底部状态栏组件：当前上下文的快捷键提示

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, View};
use crate::view::theme::Styles;

pub type Hints = &'static [(&'static str, &'static str)];

pub const FORM_HINTS: Hints = &[
    ("tab/shift+tab", "navigate"),
    ("enter", "submit"),
    ("esc", "cancel"),
];
const MAIN_MENU_HINTS: Hints = &[("↑/↓", "navigate"), ("enter", "select"), ("q", "quit")];
const SUB_VIEW_HINTS: Hints = &[("↑/↓", "navigate"), ("enter", "select"), ("esc", "back")];
const SETTINGS_HINTS: Hints = &[("esc", "back to main menu")];

/// 根据当前状态生成快捷键提示
pub fn hints(app: &App) -> Hints {
    if app.loading.is_some() {
        return &[];
    }
    if app.form.is_some() {
        return FORM_HINTS;
    }
    match app.view {
        View::MainMenu => MAIN_MENU_HINTS,
        View::Settings => SETTINGS_HINTS,
        _ => SUB_VIEW_HINTS,
    }
}

/// 提示的纯文本形式：`key: desc • key: desc`
pub fn help_text(hints: Hints) -> String {
    hints
        .iter()
        .map(|(key, desc)| format!("{key}: {desc}"))
        .collect::<Vec<_>>()
        .join(" • ")
}

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Styles::hint_desc()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::styled(format!(": {desc}"), Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}
