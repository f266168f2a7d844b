use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::event::keymap::translate_key;
use crate::message::AppMessage;

/// 处理终端事件，返回对应的消息
pub fn handle_event(event: Event) -> Option<AppMessage> {
    match event {
        // 重要：只处理 Press 事件，忽略 Release 和 Repeat
        // 避免 Windows 终端上按键重复问题的发生
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            translate_key(&key).map(AppMessage::KeyInput)
        }
        Event::Resize(width, height) => Some(AppMessage::Resize { width, height }),
        _ => None,
    }
}

/// 启动输入任务，把终端事件持续转发到消息总线
///
/// 总线关闭或终端读取出错时任务结束。
pub fn spawn_input_reader(tx: UnboundedSender<AppMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut events = EventStream::new();

        while let Some(event) = events.next().await {
            let event = match event {
                Ok(event) => event,
                Err(e) => {
                    log::error!("terminal input error: {e}");
                    break;
                }
            };

            if let Some(msg) = handle_event(event) {
                if tx.send(msg).is_err() {
                    break;
                }
            }
        }

        log::debug!("input reader stopped");
    })
}
