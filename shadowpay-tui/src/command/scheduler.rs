use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::message::AppMessage;

use super::Command;

/// 命令调度器
///
/// 每条命令运行在独立的 tokio 任务上，恰好产生一条结果消息；
/// 命令体 panic 时同样以 `Error` 消息报告。
#[derive(Clone)]
pub struct Scheduler {
    tx: UnboundedSender<AppMessage>,
}

impl Scheduler {
    pub fn new(tx: UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }

    /// 调度命令
    ///
    /// 有进度标签时先投递 `Loading`，再启动任务。
    pub fn schedule(&self, command: Command) -> JoinHandle<()> {
        let Command { label, body } = command;

        if let Some(label) = label {
            log::debug!("scheduling command: {label}");
            // 总线关闭只会发生在退出阶段，此时丢弃即可
            let _ = self.tx.send(AppMessage::Loading(label));
        }

        let tx = self.tx.clone();
        tokio::spawn(async move {
            let msg = match AssertUnwindSafe(body).catch_unwind().await {
                Ok(Ok(text)) => AppMessage::Success(text),
                Ok(Err(text)) => AppMessage::Error(text),
                Err(payload) => {
                    let reason = panic_message(payload.as_ref());
                    log::error!("command panicked: {reason}");
                    AppMessage::Error(format!("operation failed unexpectedly: {reason}"))
                }
            };

            if tx.send(msg).is_err() {
                log::debug!("message bus closed, dropping command result");
            }
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_from_str_and_string() {
        let a: Box<dyn Any + Send> = Box::new("static");
        let b: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let c: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(a.as_ref()), "static");
        assert_eq!(panic_message(b.as_ref()), "owned");
        assert_eq!(panic_message(c.as_ref()), "unknown panic");
    }
}
