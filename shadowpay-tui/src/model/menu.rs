use std::sync::Arc;

use shadowpay_client::ShadowPayApi;

use super::View;
use crate::command::Command;

/// 共享的 API 客户端句柄
pub type SharedClient = Arc<dyn ShadowPayApi>;

/// 表单提交函数：校验输入并构造命令，输入错误以文本返回
pub type SubmitFn = fn(SharedClient, Vec<String>) -> Result<Command, String>;

/// 无需输入、直接执行的操作
pub type RunFn = fn(SharedClient) -> Command;

/// 表单描述
#[derive(Debug, Clone, Copy)]
pub struct FormSpec {
    pub title: &'static str,
    /// 字段标签（同时作为占位提示）
    pub fields: &'static [&'static str],
    pub submit: SubmitFn,
}

/// 菜单项被确认时的动作
#[derive(Debug, Clone, Copy)]
pub enum MenuAction {
    /// 进入子视图
    Enter(View),
    /// 退出程序
    Exit,
    /// 打开输入表单
    Form(FormSpec),
    /// 直接执行命令
    Run(RunFn),
    /// 显示一条错误提示，不执行任何操作
    Notice(&'static str),
    /// 返回主菜单
    Back,
}

/// 菜单项
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}
