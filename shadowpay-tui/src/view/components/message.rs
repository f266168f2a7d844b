//! 操作结果信息框

use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{Severity, StatusMessage};
use crate::view::theme::Styles;

/// 信息框需要的高度（含边框）
pub fn height(status: &StatusMessage) -> u16 {
    let lines = status.text.lines().count().max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

pub fn render(status: &StatusMessage, frame: &mut Frame, area: Rect) {
    let style = match status.severity {
        Severity::Success => Styles::success(),
        Severity::Error => Styles::error(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::info_border());

    let paragraph = Paragraph::new(status.text.as_str())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
