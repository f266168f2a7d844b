use crate::command::Command;
use crate::event::keymap::DefaultKeymap;
use crate::message::Key;
use crate::model::{App, FormOutcome};

/// 表单激活时的按键处理
pub(super) fn update(app: &mut App, key: Key) -> Option<Command> {
    // Esc / Ctrl+C：取消表单
    if DefaultKeymap::FORM_CANCEL.matches(key) {
        app.form = None;
        app.clear_status();
        return None;
    }

    let outcome = app.form.as_mut()?.handle_key(key);

    let FormOutcome::Submit(values) = outcome else {
        return None;
    };

    // 提交时表单被消费
    let form = app.form.take()?;
    let title = form.title.clone();

    match form.submit(values) {
        Ok(command) => Some(command),
        Err(text) => {
            log::warn!("{title}: rejected input: {text}");
            app.fail(&text);
            None
        }
    }
}
