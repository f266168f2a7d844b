//! 请求进行中的弹窗

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::view::layout::centered_rect;
use crate::view::theme::{colors, Styles};

const SPINNER: &str = "⠋";

pub fn render(label: &str, frame: &mut Frame) {
    let progress = format!("{SPINNER} {label}");
    let width = u16::try_from(progress.width() + 8)
        .unwrap_or(u16::MAX)
        .max(36);
    let area = centered_rect(width, 7, frame.area());

    frame.render_widget(Clear, area);

    let lines = vec![
        Line::styled("Processing...", Styles::title()),
        Line::from(""),
        Line::from(Span::styled(
            progress,
            Style::default()
                .fg(colors().secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::styled("Please wait...", Styles::help()),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::modal_border());

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
