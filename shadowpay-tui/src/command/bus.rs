use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::AppMessage;

/// 消息总线
///
/// 输入任务与命令任务通过 `sender()` 投递，主循环独占 `recv()`，
/// 保证消息按到达顺序逐条处理。
pub struct MessageBus {
    tx: UnboundedSender<AppMessage>,
    rx: UnboundedReceiver<AppMessage>,
}

impl MessageBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// 获取一个投递端
    pub fn sender(&self) -> UnboundedSender<AppMessage> {
        self.tx.clone()
    }

    /// 等待下一条消息
    pub async fn recv(&mut self) -> Option<AppMessage> {
        self.rx.recv().await
    }

    /// 非阻塞地取出一条已到达的消息
    pub fn try_recv(&mut self) -> Option<AppMessage> {
        self.rx.try_recv().ok()
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}
