/// 与终端后端无关的按键
///
/// 由 `event::keymap::translate_key` 从 crossterm 事件翻译而来，
/// 测试中可直接构造。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// 可打印字符
    Char(char),
    /// Ctrl + 字符（统一为小写）
    Ctrl(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Esc,
    Up,
    Down,
}
