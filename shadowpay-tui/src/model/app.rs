use shadowpay_client::DEFAULT_BASE_URL;

use super::{InputForm, MenuItem, Session, View};

/// 操作失败消息的前缀
pub const FAILURE_PREFIX: &str = "Error: ";

/// 状态消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// 状态消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前视图
    pub view: View,

    /// 菜单光标
    pub cursor: usize,

    /// 状态消息
    pub status: Option<StatusMessage>,

    /// 激活中的输入表单
    pub form: Option<InputForm>,

    /// 进行中操作的标签
    pub loading: Option<String>,

    /// 终端尺寸
    pub width: u16,
    pub height: u16,

    /// API 会话
    pub session: Session,
}

impl App {
    /// 创建新的应用实例
    pub fn new(session: Session) -> Self {
        Self {
            should_quit: false,
            view: View::MainMenu,
            cursor: 0,
            status: None,
            form: None,
            loading: None,
            width: 0,
            height: 0,
            session,
        }
    }

    /// 当前视图的菜单项
    pub fn items(&self) -> &'static [MenuItem] {
        self.view.items()
    }

    /// 光标所在的菜单项
    pub fn selected_item(&self) -> Option<&'static MenuItem> {
        self.items().get(self.cursor)
    }

    /// 切换视图，光标归零并清除状态消息
    pub fn navigate(&mut self, view: View) {
        self.view = view;
        self.cursor = 0;
        self.clear_status();
    }

    /// 打开表单（与进行中的操作互斥）
    pub fn open_form(&mut self, form: InputForm) {
        self.loading = None;
        self.form = Some(form);
    }

    /// 命令完成：关闭表单与进度，设置状态消息
    pub fn finish(&mut self, severity: Severity, text: impl Into<String>) {
        self.form = None;
        self.loading = None;
        self.set_status(severity, text);
    }

    /// 操作失败（输入校验或远端调用）：同 `finish`，文本带 `Error: ` 前缀
    ///
    /// 路由层的提示（缺少 API Key、Settle）走 `set_error`，不带前缀。
    pub fn fail(&mut self, text: &str) {
        self.finish(Severity::Error, format!("{FAILURE_PREFIX}{text}"));
    }

    /// 设置状态消息
    pub fn set_status(&mut self, severity: Severity, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            severity,
            text: text.into(),
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_status(Severity::Error, text);
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Session::disconnected(DEFAULT_BASE_URL))
    }
}
