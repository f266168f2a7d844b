//! 输入表单引擎
//!
//! 多字段文本输入，负责焦点循环与提交；不做任何校验，
//! 校验由提交回调完成。

use std::fmt;

use crate::command::Command;
use crate::message::Key;

/// 单个字段最多容纳的字符数
pub const CHAR_LIMIT: usize = 156;

/// 提交回调：接收全部字段值（按声明顺序），返回命令或输入错误
pub type SubmitCallback = Box<dyn FnOnce(Vec<String>) -> Result<Command, String> + Send>;

/// 表单字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// 标签，同时作为空值时的占位提示
    pub label: String,
    pub value: String,
    pub focused: bool,
}

/// 按键处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Continue,
    Submit(Vec<String>),
}

/// 输入表单
pub struct InputForm {
    pub title: String,
    pub fields: Vec<Field>,
    focus: usize,
    submit: SubmitCallback,
}

impl InputForm {
    /// 每个标签对应一个空字段，焦点位于第一个字段
    pub fn new<F>(title: impl Into<String>, labels: &[&str], submit: F) -> Self
    where
        F: FnOnce(Vec<String>) -> Result<Command, String> + Send + 'static,
    {
        let fields = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Field {
                label: (*label).to_string(),
                value: String::new(),
                focused: i == 0,
            })
            .collect();

        Self {
            title: title.into(),
            fields,
            focus: 0,
            submit: Box::new(submit),
        }
    }

    /// 当前焦点字段索引
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// 全部字段值（按声明顺序）
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// 处理按键
    pub fn handle_key(&mut self, key: Key) -> FormOutcome {
        let n = self.fields.len();
        if n == 0 {
            return match key {
                Key::Enter => FormOutcome::Submit(Vec::new()),
                _ => FormOutcome::Continue,
            };
        }

        match key {
            Key::Char(c) => {
                let field = &mut self.fields[self.focus];
                if field.value.chars().count() < CHAR_LIMIT {
                    field.value.push(c);
                }
            }
            Key::Backspace => {
                self.fields[self.focus].value.pop();
            }
            Key::Tab | Key::Down => self.set_focus((self.focus + 1) % n),
            Key::BackTab | Key::Up => self.set_focus((self.focus + n - 1) % n),
            Key::Enter => {
                if self.focus == n - 1 {
                    return FormOutcome::Submit(self.values());
                }
                self.set_focus(self.focus + 1);
            }
            _ => {}
        }

        FormOutcome::Continue
    }

    /// 消费表单，执行提交回调
    pub fn submit(self, values: Vec<String>) -> Result<Command, String> {
        (self.submit)(values)
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == index;
        }
    }
}

impl fmt::Debug for InputForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputForm")
            .field("title", &self.title)
            .field("fields", &self.fields)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(labels: &[&str]) -> InputForm {
        InputForm::new("Test", labels, |_| Err("unused".to_string()))
    }

    fn type_str(form: &mut InputForm, s: &str) {
        for c in s.chars() {
            form.handle_key(Key::Char(c));
        }
    }

    // ---- construction ----

    #[test]
    fn new_focuses_first_field() {
        let f = form(&["Wallet Address", "Amount (SOL)"]);
        assert_eq!(f.focus(), 0);
        assert!(f.fields[0].focused);
        assert!(!f.fields[1].focused);
        assert_eq!(f.values(), vec![String::new(), String::new()]);
    }

    // ---- editing ----

    #[test]
    fn typing_goes_to_focused_field() {
        let mut f = form(&["A", "B"]);
        type_str(&mut f, "abc");
        f.handle_key(Key::Tab);
        type_str(&mut f, "1.5");
        assert_eq!(f.values(), vec!["abc".to_string(), "1.5".to_string()]);
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut f = form(&["A"]);
        type_str(&mut f, "✓ok");
        f.handle_key(Key::Backspace);
        assert_eq!(f.fields[0].value, "✓o");
        f.handle_key(Key::Backspace);
        f.handle_key(Key::Backspace);
        f.handle_key(Key::Backspace);
        assert_eq!(f.fields[0].value, "");
    }

    #[test]
    fn char_limit_enforced() {
        let mut f = form(&["A"]);
        type_str(&mut f, &"x".repeat(CHAR_LIMIT + 10));
        assert_eq!(f.fields[0].value.chars().count(), CHAR_LIMIT);
    }

    // ---- focus ----

    #[test]
    fn forward_wraps() {
        let mut f = form(&["A", "B", "C"]);
        f.handle_key(Key::Tab);
        f.handle_key(Key::Down);
        assert_eq!(f.focus(), 2);
        f.handle_key(Key::Tab);
        assert_eq!(f.focus(), 0);
    }

    #[test]
    fn backward_wraps() {
        let mut f = form(&["A", "B", "C"]);
        f.handle_key(Key::BackTab);
        assert_eq!(f.focus(), 2);
        f.handle_key(Key::Up);
        assert_eq!(f.focus(), 1);
        assert_eq!(f.fields.iter().filter(|x| x.focused).count(), 1);
    }

    // ---- submit ----

    #[test]
    fn enter_advances_then_submits() {
        let mut f = form(&["A", "B"]);
        assert_eq!(f.handle_key(Key::Enter), FormOutcome::Continue);
        assert_eq!(f.focus(), 1);
        type_str(&mut f, "5");
        assert_eq!(
            f.handle_key(Key::Enter),
            FormOutcome::Submit(vec![String::new(), "5".to_string()])
        );
    }

    #[test]
    fn single_field_submits_immediately() {
        let mut f = form(&["Access Token"]);
        type_str(&mut f, "jwt");
        assert_eq!(
            f.handle_key(Key::Enter),
            FormOutcome::Submit(vec!["jwt".to_string()])
        );
    }

    #[test]
    fn submit_runs_callback_with_values() {
        let f = InputForm::new("T", &["A"], |values| {
            Err(format!("got {}", values.join(",")))
        });
        let err = f.submit(vec!["x".to_string()]).unwrap_err();
        assert_eq!(err, "got x");
    }

    #[test]
    fn empty_form_is_safe() {
        let mut f = form(&[]);
        assert_eq!(f.handle_key(Key::Tab), FormOutcome::Continue);
        assert_eq!(f.handle_key(Key::Enter), FormOutcome::Submit(vec![]));
    }
}
