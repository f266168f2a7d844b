//!
//! app.rs
//! 应用主循环
//!
//!
//! ```text
//! 启动时：
//!     Scheduler::new(bus.sender())        // 命令调度器，结果回送到消息总线
//!     spawn_input_reader(bus.sender())    // 终端输入任务，按键翻译为 KeyInput
//!
//! 主循环：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }                // 检查 APP 是否应该退出
//!     let msg = bus.recv().await                  // 等待下一条消息（按键 / 命令结果 / 进度）
//!     if let Some(cmd) = update(&mut app, msg) {  // 单线程修改状态
//!         scheduler.schedule(cmd)                 // 异步操作交给调度器
//!     }
//! }
//! ```
//!
//! 消息总线一次只投递一条消息，`App` 只在这里被修改，不需要锁。

use anyhow::Result;

use crate::command::{MessageBus, Scheduler};
use crate::event::spawn_input_reader;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub async fn run(terminal: &mut Term, app: &mut App, mut bus: MessageBus) -> Result<()> {
    let scheduler = Scheduler::new(bus.sender());
    let input = spawn_input_reader(bus.sender());

    // 初始尺寸
    let size = terminal.size()?;
    update::update(
        app,
        AppMessage::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let result = event_loop(terminal, app, &mut bus, &scheduler).await;

    input.abort();
    result
}

async fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    bus: &mut MessageBus,
    scheduler: &Scheduler,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待消息；所有发送端都关闭时退出
        let Some(msg) = bus.recv().await else {
            log::warn!("message bus closed, exiting");
            break;
        };

        // 4. 更新状态，必要时调度命令
        if let Some(cmd) = update::update(app, msg) {
            scheduler.schedule(cmd);
        }
    }

    Ok(())
}
