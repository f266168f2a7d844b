use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::message::Key;

/// 快捷键绑定（任一按键命中即匹配）
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub keys: &'static [Key],
}

impl KeyBinding {
    pub const fn new(keys: &'static [Key]) -> Self {
        Self { keys }
    }

    /// 检查按键是否匹配此快捷键绑定
    pub fn matches(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::new(&[Key::Char('q'), Key::Ctrl('c')]);
    pub const BACK: KeyBinding = KeyBinding::new(&[Key::Esc]);

    // 菜单导航
    pub const NAV_UP: KeyBinding = KeyBinding::new(&[Key::Up, Key::Char('k')]);
    pub const NAV_DOWN: KeyBinding = KeyBinding::new(&[Key::Down, Key::Char('j')]);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::new(&[Key::Enter]);

    // 表单
    pub const FORM_CANCEL: KeyBinding = KeyBinding::new(&[Key::Esc, Key::Ctrl('c')]);
}

/// 将 crossterm 按键事件翻译为 `Key`
///
/// Alt 组合键、功能键和表单不支持的编辑键（左右、Home/End、Delete）直接丢弃。
pub fn translate_key(event: &KeyEvent) -> Option<Key> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char(c) => Some(Key::Ctrl(c.to_ascii_lowercase())),
            _ => None,
        };
    }

    if event.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        // Shift+Tab 在多数终端上报告为 BackTab + SHIFT
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Esc,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => return None,
    };
    Some(key)
}
