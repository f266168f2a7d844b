//! 页面视图

pub mod menu;
pub mod settings;
