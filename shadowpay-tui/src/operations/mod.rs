//! 操作表
//!
//! 每个业务视图一个模块，包含：
//! - `ITEMS`：视图的菜单项，`(view, index)` 到 `MenuAction` 的映射
//! - 表单描述与提交函数：校验输入，构造 `Command`
//! - 结果格式化：把 API 响应渲染为状态文本
//!
//! 提交函数只做输入解析；网络调用在 `Command` 体内执行。

mod authorization;
mod merchant;
pub mod parse;
mod payment;
mod pool;
mod shadowid;
mod token;
mod webhook;

use shadowpay_client::ClientError;

use crate::model::{MenuAction, MenuItem, View};

pub use payment::SETTLE_NOTICE;

/// 所有子视图末尾的返回项
pub const BACK: MenuItem = MenuItem {
    icon: "◀",
    label: "Back",
    action: MenuAction::Back,
};

static MAIN_MENU: &[MenuItem] = &[
    MenuItem {
        icon: "💸",
        label: "ZK Payments",
        action: MenuAction::Enter(View::Payment),
    },
    MenuItem {
        icon: "🏊",
        label: "Privacy Pool",
        action: MenuAction::Enter(View::Pool),
    },
    MenuItem {
        icon: "🪙",
        label: "Token Management",
        action: MenuAction::Enter(View::Token),
    },
    MenuItem {
        icon: "🤖",
        label: "Bot Authorization",
        action: MenuAction::Enter(View::Authorization),
    },
    MenuItem {
        icon: "💰",
        label: "Merchant Tools",
        action: MenuAction::Enter(View::Merchant),
    },
    MenuItem {
        icon: "🔔",
        label: "Webhooks",
        action: MenuAction::Enter(View::Webhook),
    },
    MenuItem {
        icon: "👤",
        label: "ShadowID",
        action: MenuAction::Enter(View::ShadowId),
    },
    MenuItem {
        icon: "⚙️ ",
        label: "Settings",
        action: MenuAction::Enter(View::Settings),
    },
    MenuItem {
        icon: "🚪",
        label: "Exit",
        action: MenuAction::Exit,
    },
];

static SETTINGS: &[MenuItem] = &[BACK];

/// 视图对应的菜单项
pub fn menu(view: View) -> &'static [MenuItem] {
    match view {
        View::MainMenu => MAIN_MENU,
        View::Payment => payment::ITEMS,
        View::Pool => pool::ITEMS,
        View::Token => token::ITEMS,
        View::Authorization => authorization::ITEMS,
        View::Merchant => merchant::ITEMS,
        View::Webhook => webhook::ITEMS,
        View::ShadowId => shadowid::ITEMS,
        View::Settings => SETTINGS,
    }
}

/// 记录 API 失败并转为状态文本
///
/// 预期内的失败（4xx、密钥被拒）记为 warn，其余记为 error。
pub(crate) fn report(operation: &str, err: ClientError) -> String {
    if err.is_expected() {
        log::warn!("{operation} failed: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
    err.to_string()
}

/// 成功/失败标记
pub(crate) fn status_word(success: bool) -> &'static str {
    if success {
        "Success ✓"
    } else {
        "Failed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_order() {
        let labels: Vec<&str> = MAIN_MENU.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec![
                "ZK Payments",
                "Privacy Pool",
                "Token Management",
                "Bot Authorization",
                "Merchant Tools",
                "Webhooks",
                "ShadowID",
                "Settings",
                "Exit",
            ]
        );
    }

    #[test]
    fn report_uses_display() {
        let err = ClientError::Api {
            status: 400,
            message: "insufficient balance".into(),
            error: None,
        };
        assert_eq!(
            report("pool withdraw", err),
            "shadowpay: insufficient balance (status 400)"
        );
    }
}
