//! 菜单列表组件

use ratatui::text::{Line, Span};

use crate::model::MenuItem;
use crate::view::theme::Styles;

/// 菜单项渲染为行，选中项带 `❯` 前缀
pub fn lines(items: &[MenuItem], cursor: usize) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = format!("{} {}", item.icon, item.label);
            if i == cursor {
                Line::from(vec![
                    Span::styled("❯ ", Styles::selected()),
                    Span::styled(text, Styles::selected()),
                ])
            } else {
                Line::from(vec![Span::raw("  "), Span::styled(text, Styles::menu_item())])
            }
        })
        .collect()
}
