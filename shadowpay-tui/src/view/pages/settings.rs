//! 设置页面视图

use std::path::Path;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, Session, View};
use crate::view::theme::Styles;

/// 标签列宽（基于显示宽度）
const LABEL_WIDTH: usize = 12;

/// API Key 状态行
pub fn key_line(session: &Session) -> Line<'static> {
    match session.masked_key() {
        Some(masked) => Line::from(vec![
            Span::styled("✓ API Key: ", Styles::success()),
            Span::raw(masked),
        ]),
        None => Line::styled("⚠ API Key not set", Styles::error()),
    }
}

/// 标签按显示宽度补齐
fn setting_row(label: &str, value: String) -> Line<'static> {
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(format!("{label}{}", " ".repeat(padding)), Styles::label()),
        Span::styled(value, Styles::menu_item()),
    ])
}

/// 设置 API Key 的说明
pub fn instructions(config_path: Option<&Path>) -> Vec<String> {
    let mut lines = vec![
        "To set your API key, run:".to_string(),
        "export SHADOWPAY_API_KEY=your_key_here".to_string(),
    ];
    if let Some(path) = config_path {
        lines.push(String::new());
        lines.push("Or add \"api_key\" to the config file:".to_string());
        lines.push(path.display().to_string());
    }
    lines
}

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let session = &app.session;

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 标题 + 空行
            Constraint::Length(3), // API Key 状态框
            Constraint::Length(1),
            Constraint::Length(2), // Base URL / 配置文件
            Constraint::Length(1),
            Constraint::Min(0), // 说明
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(View::Settings.title(), Styles::title())),
        sections[0],
    );

    let status_box = Paragraph::new(key_line(session)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::info_border()),
    );
    frame.render_widget(status_box, sections[1]);

    let config = session
        .config_path
        .as_ref()
        .map_or_else(|| "(unavailable)".to_string(), |p| p.display().to_string());
    let rows = vec![
        setting_row("Base URL", session.base_url.clone()),
        setting_row("Config", config),
    ];
    frame.render_widget(Paragraph::new(rows), sections[3]);

    let help: Vec<Line> = instructions(session.config_path.as_deref())
        .into_iter()
        .map(|text| Line::styled(text, Styles::help()))
        .collect();
    frame.render_widget(Paragraph::new(help), sections[5]);
}
