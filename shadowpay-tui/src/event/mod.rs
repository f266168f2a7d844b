//! 事件层
//!
//! 负责读取终端事件并翻译为 `AppMessage`，投递到消息总线。
//! 只处理 Press 类型的按键事件和窗口尺寸变化。

mod handler;
pub mod keymap;

pub use handler::{handle_event, spawn_input_reader};
pub use keymap::translate_key;
