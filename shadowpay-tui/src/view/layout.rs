//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, View};

use super::components;
use super::pages;
use super::theme::colors;

/// 内容列的最大宽度
const CONTENT_WIDTH: u16 = 72;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    let content_area = content_column(main_layout[1]);
    match app.view {
        View::Settings => pages::settings::render(app, frame, content_area),
        _ => pages::menu::render(app, frame, content_area),
    }

    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗（在最上层）：请求进行中优先于表单
    if let Some(label) = &app.loading {
        components::loading::render(label, frame);
    } else if let Some(form) = &app.form {
        components::form::render(form, frame);
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let host = app.session.base_url.as_str();
    let title = Paragraph::new(format!(
        " ShadowPay Console v{} │ {host}",
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.primary).fg(c.fg));
    frame.render_widget(title, area);
}

/// 水平居中的内容列
fn content_column(area: Rect) -> Rect {
    let width = area.width.min(CONTENT_WIDTH);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height.min(1),
        width,
        area.height.saturating_sub(1),
    )
}

/// 在 `area` 中居中一个 `width` x `height` 的矩形
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(50, 10, area), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn content_column_is_capped_and_centered() {
        let column = content_column(Rect::new(0, 1, 120, 30));
        assert_eq!(column.width, CONTENT_WIDTH);
        assert_eq!(column.x, 24);
        assert_eq!(column.y, 2);
    }
}
