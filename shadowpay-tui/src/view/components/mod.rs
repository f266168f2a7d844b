//! 可复用的界面组件

pub mod form;
pub mod loading;
pub mod menu;
pub mod message;
pub mod statusbar;
