//! 菜单页：主菜单与各业务视图
//!
//! 自上而下：标题 / 连接状态或视图说明 / 菜单 / 结果信息框

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::model::{App, View};
use crate::view::components::{menu, message};
use crate::view::theme::Styles;

/// 业务视图菜单上方的小节标题
fn section_header(view: View) -> Option<&'static str> {
    match view {
        View::Payment | View::Pool => Some("Select an operation:"),
        View::Token => Some("Manage SPL tokens:"),
        View::Authorization => Some("Manage bot permissions:"),
        View::Merchant => Some("Merchant operations:"),
        View::Webhook => Some("Webhook operations:"),
        View::ShadowId => Some("ShadowID operations:"),
        View::MainMenu | View::Settings => None,
    }
}

/// 主菜单的连接状态行
pub fn connection_line(app: &App) -> Line<'static> {
    if app.session.is_connected() {
        Line::styled("✓ Connected", Styles::success())
    } else {
        Line::styled("✗ Not Connected (Set API Key)", Styles::error())
    }
}

fn len(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let view = app.view;
    let items = app.items();
    let description = view.description();

    // 说明框：文字行数 + 边框
    let description_height = description.map_or(0, |d| len(d.lines().count()) + 2);
    let header_height = match (view, section_header(view)) {
        (View::MainMenu, _) => 2,
        (_, Some(_)) => 1,
        _ => 0,
    };
    let message_height = app.status.as_ref().map_or(0, message::height);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                  // 标题 + 空行
            Constraint::Length(description_height), // 视图说明
            Constraint::Length(header_height),      // 连接状态 / 小节标题
            Constraint::Length(len(items.len())),   // 菜单
            Constraint::Length(1),                  // 空行
            Constraint::Length(message_height),     // 结果信息框
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(view.title(), Styles::title())),
        sections[0],
    );

    if let Some(text) = description {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::info_border());
        frame.render_widget(Paragraph::new(text).block(block), sections[1]);
    }

    if view == View::MainMenu {
        frame.render_widget(Paragraph::new(connection_line(app)), sections[2]);
    } else if let Some(header) = section_header(view) {
        frame.render_widget(
            Paragraph::new(Line::styled(header, Styles::header())),
            sections[2],
        );
    }

    frame.render_widget(Paragraph::new(menu::lines(items, app.cursor)), sections[3]);

    if let Some(status) = &app.status {
        message::render(status, frame, sections[5]);
    }
}
