//! 模型层
//!
//! `App` 是唯一的可变状态，只在主循环中经由 `update()` 修改。
//!
//! ```text
//! App {
//!     should_quit: false,
//!     view: View::MainMenu,          // 当前视图
//!     cursor: 0,                      // 菜单光标，始终 < 当前视图菜单项数
//!     status: None,                   // 状态消息（Success / Error）
//!     form: None,                     // 激活中的输入表单
//!     loading: None,                  // 进行中的操作标签
//!     session: Session { .. },        // API 客户端与密钥
//! }
//! ```
//!
//! 表单与进行中的操作互斥：打开表单会清除 `loading`，表单打开期间
//! 到达的 `Loading` 消息被丢弃。

mod app;
mod form;
mod menu;
mod session;
mod view;

pub use app::{App, Severity, StatusMessage, FAILURE_PREFIX};
pub use form::{Field, FormOutcome, InputForm, SubmitCallback, CHAR_LIMIT};
pub use menu::{FormSpec, MenuAction, MenuItem, RunFn, SharedClient, SubmitFn};
pub use session::Session;
pub use view::View;
