//! 命令层
//!
//! `Command` 是延迟执行的异步操作：`update()` 返回它，主循环交给
//! `Scheduler` 在独立的 tokio 任务上运行，结果以 `Success` / `Error`
//! 消息的形式回到消息总线。

pub mod bus;
mod scheduler;

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

pub use bus::MessageBus;
pub use scheduler::Scheduler;

/// 命令执行结果：`Ok` 为成功文本，`Err` 为错误文本
pub type CommandResult = Result<String, String>;

/// 延迟执行的操作，只会被消费一次
pub struct Command {
    /// 进度标签，调度前先以 `Loading` 消息投递
    pub label: Option<String>,
    pub body: BoxFuture<'static, CommandResult>,
}

impl Command {
    /// 带进度标签的命令
    pub fn new<F>(label: impl Into<String>, body: F) -> Self
    where
        F: Future<Output = CommandResult> + Send + 'static,
    {
        Self {
            label: Some(label.into()),
            body: body.boxed(),
        }
    }

    /// 不显示进度的命令
    pub fn silent<F>(body: F) -> Self
    where
        F: Future<Output = CommandResult> + Send + 'static,
    {
        Self {
            label: None,
            body: body.boxed(),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
