//! 更新层
//!
//! `update(app, msg)` 是唯一修改 `App` 的入口，对 `AppMessage` 做穷尽匹配。
//! 需要异步执行的操作以 `Command` 返回，由主循环交给调度器。
//!
//! ```text
//! KeyInput ──┬── 表单激活 ──▶ form::update
//!            └── 否则     ──▶ navigation::update
//! Success / Error ──▶ 关闭表单与进度，设置状态
//! Loading         ──▶ 设置进度（表单激活时丢弃）
//! Resize          ──▶ 记录尺寸
//! ```

mod form;
mod navigation;

use crate::command::Command;
use crate::message::AppMessage;
use crate::model::{App, Severity};

pub use navigation::CLIENT_REQUIRED;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::KeyInput(key) => {
            if app.form.is_some() {
                form::update(app, key)
            } else {
                navigation::update(app, key)
            }
        }

        AppMessage::Resize { width, height } => {
            app.width = width;
            app.height = height;
            None
        }

        AppMessage::Success(text) => {
            app.finish(Severity::Success, text);
            None
        }

        AppMessage::Error(text) => {
            app.fail(&text);
            None
        }

        AppMessage::Loading(label) => {
            // 表单与进行中的操作互斥
            if app.form.is_none() {
                app.loading = Some(label);
            }
            None
        }
    }
}
