//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 主题颜色
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub primary: Color,
    pub secondary: Color,
    pub fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub border: Color,
}

impl ThemeColors {
    /// ShadowPay 配色（深色终端）
    pub const fn shadowpay() -> Self {
        Self {
            primary: Color::Rgb(125, 86, 244),
            secondary: Color::Rgb(0, 217, 255),
            fg: Color::White,
            success: Color::Rgb(0, 255, 135),
            warning: Color::Rgb(255, 215, 0),
            error: Color::Rgb(255, 95, 135),
            muted: Color::Rgb(98, 98, 98),
            border: Color::Rgb(62, 62, 62),
        }
    }
}

/// 获取颜色方案
pub const fn colors() -> ThemeColors {
    ThemeColors::shadowpay()
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 视图标题
    pub fn title() -> Style {
        Style::default()
            .fg(colors().primary)
            .add_modifier(Modifier::BOLD)
    }

    /// 小节标题（"Select an operation:" 等）
    pub fn header() -> Style {
        Style::default()
            .fg(colors().secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn menu_item() -> Style {
        Style::default().fg(colors().fg)
    }

    /// 选中项样式
    pub fn selected() -> Style {
        Style::default()
            .fg(colors().primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(colors().success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(colors().error)
            .add_modifier(Modifier::BOLD)
    }

    /// 帮助文字
    pub fn help() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::ITALIC)
    }

    /// 表单字段标签
    pub fn label() -> Style {
        Style::default()
            .fg(colors().secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// 空字段的占位提示
    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// 信息框边框
    pub fn info_border() -> Style {
        Style::default().fg(colors().secondary)
    }

    /// 弹窗边框
    pub fn modal_border() -> Style {
        Style::default().fg(colors().primary)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().primary).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(220, 220, 220))
    }
}
