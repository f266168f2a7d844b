//! 输入表单弹窗

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::model::{Field, InputForm};
use crate::view::components::statusbar::{help_text, FORM_HINTS};
use crate::view::layout::centered_rect;
use crate::view::theme::Styles;

const FORM_WIDTH: u16 = 64;

/// 光标
const CURSOR: &str = "▎";

/// 保留能放进 `max` 列的末尾部分，保证光标附近的输入可见
pub fn visible_tail(value: &str, max: usize) -> &str {
    let mut width = 0;
    let mut start = value.len();
    for (i, c) in value.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max {
            break;
        }
        start = i;
    }
    &value[start..]
}

fn field_line(field: &Field, inner_width: usize) -> Line<'static> {
    let prompt_style = if field.focused {
        Styles::selected()
    } else {
        Styles::help()
    };
    let mut spans = vec![Span::styled("> ", prompt_style)];

    if field.value.is_empty() {
        if field.focused {
            spans.push(Span::styled(CURSOR, Styles::selected()));
        }
        spans.push(Span::styled(field.label.clone(), Styles::placeholder()));
    } else {
        // 预留提示符与光标的宽度
        let shown = visible_tail(&field.value, inner_width.saturating_sub(3)).to_string();
        if field.focused {
            spans.push(Span::styled(shown, Styles::menu_item()));
            spans.push(Span::styled(CURSOR, Styles::selected()));
        } else {
            spans.push(Span::styled(shown, Styles::help()));
        }
    }

    Line::from(spans)
}

pub fn render(form: &InputForm, frame: &mut Frame) {
    let n = u16::try_from(form.fields.len()).unwrap_or(u16::MAX);
    // 边框(2) + 空行(1) + 字段与间隔(2n-1) + 空行(1) + 提示(1)
    let height = 2 + 1 + n.saturating_mul(2).saturating_sub(1) + 1 + 1;
    let area = centered_rect(FORM_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", form.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::modal_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner_width = usize::from(inner.width);
    let mut lines = vec![Line::from("")];
    for (i, field) in form.fields.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(field_line(field, inner_width));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        help_text(FORM_HINTS),
        Styles::help(),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
