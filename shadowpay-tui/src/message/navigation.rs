use crate::event::keymap::DefaultKeymap;

use super::Key;

/// 菜单导航消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 确认选择
    Confirm,
    /// 返回主菜单
    Back,
    /// 退出（仅主菜单生效，其余视图等同于 Back）
    Quit,
}

impl NavigationMessage {
    /// 将按键映射为导航消息，未绑定的按键返回 `None`
    pub fn from_key(key: Key) -> Option<Self> {
        if DefaultKeymap::NAV_UP.matches(key) {
            Some(Self::SelectPrevious)
        } else if DefaultKeymap::NAV_DOWN.matches(key) {
            Some(Self::SelectNext)
        } else if DefaultKeymap::NAV_CONFIRM.matches(key) {
            Some(Self::Confirm)
        } else if DefaultKeymap::BACK.matches(key) {
            Some(Self::Back)
        } else if DefaultKeymap::QUIT.matches(key) {
            Some(Self::Quit)
        } else {
            None
        }
    }
}
