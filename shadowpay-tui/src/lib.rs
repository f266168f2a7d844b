//! ShadowPay Console
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Command**: 异步操作与调度 (`command/`)
//! - **Operations**: 各业务视图的菜单、表单与结果格式 (`operations/`)
//! - **Backend**: 配置与会话 (`backend/`)

pub mod app;
pub mod backend;
pub mod command;
pub mod event;
pub mod message;
pub mod model;
pub mod operations;
pub mod update;
pub mod util;
pub mod view;
