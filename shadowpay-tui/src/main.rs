//! ShadowPay Console 程序入口
//!
//! ```text
//! fn main() {
//!
//!     LocalConfigService::load()  // 配置文件 + 环境变量
//!     init_logging()              // 文件日志（stdout 归 TUI）
//!     build_session()             // 有 API Key 时创建客户端
//!     init_terminal()             // raw mode + 备用屏幕
//!     app::run()                  // 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//! ```

use anyhow::{Context, Result};

use shadowpay_tui::backend::{build_session, ConfigService, LocalConfigService};
use shadowpay_tui::command::MessageBus;
use shadowpay_tui::model::App;
use shadowpay_tui::util::{init_logging, init_terminal, install_panic_hook, restore_terminal};
use shadowpay_tui::app;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载配置
    let config_service = LocalConfigService::new();
    let config = config_service.load().context("failed to load configuration")?;

    // 2. 初始化日志
    let log_path = init_logging(&config.log_filter)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = ?log_path,
        "starting ShadowPay console"
    );

    // 3. 创建会话
    let session = build_session(&config)?
        .with_config_path(config_service.path().map(std::path::Path::to_path_buf));

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut app = App::new(session);
    let result = app::run(&mut terminal, &mut app, MessageBus::new()).await;

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("ShadowPay console exited");
    result
}
