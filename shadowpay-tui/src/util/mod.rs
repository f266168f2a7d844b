//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关的代码：
//! - `terminal`：终端初始化、恢复与 panic hook
//! - `logging`：文件日志
//!
//! 启动顺序（见 main.rs）：
//!
//! ```text
//! init_logging()          // 先装日志，后续步骤的失败都能落盘
//! install_panic_hook()
//! init_terminal()         // raw mode + 备用屏幕
//! app::run()
//! restore_terminal()      // 无论 run 成功与否都执行
//! ```

mod logging;
mod terminal;

pub use logging::{init_logging, log_file_path};
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
