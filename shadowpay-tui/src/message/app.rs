use super::Key;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 操作成功完成，携带结果文本
    Success(String),

    /// 操作失败，携带错误文本
    Error(String),

    /// 操作进行中（进度标签）
    Loading(String),

    /// 终端尺寸变化
    Resize { width: u16, height: u16 },

    /// 键盘输入
    KeyInput(Key),
}
