//!
//! src/view/mod.rs
//! View 层：从 Model 渲染界面
//!
//! View 层是纯函数：只读取 `App`，不修改任何状态。
//!
//! ```text
//! view::render(&app, frame)
//!     │
//!     ├── 标题栏
//!     ├── 内容区
//!     │     ├── pages::menu       主菜单与各业务视图
//!     │     └── pages::settings   设置页
//!     ├── 状态栏 (components::statusbar)
//!     │
//!     └── 弹窗（最上层，二选一）
//!           ├── components::loading   请求进行中
//!           └── components::form      输入表单
//! ```
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use components::statusbar::{help_text, hints};
pub use layout::render;
