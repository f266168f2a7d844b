//! 消息层
//!
//! 所有进入主循环的事件都被翻译成 `AppMessage`：
//!
//! ```text
//!   终端输入 ──▶ event::handler ──┐
//!                                 ├──▶ MessageBus ──▶ update::update(app, msg)
//!   Command 结果 ──▶ Scheduler ───┘
//! ```
//!
//! `AppMessage` 是封闭枚举，`update()` 对其做穷尽匹配。

mod app;
mod key;
mod navigation;

pub use app::AppMessage;
pub use key::Key;
pub use navigation::NavigationMessage;
