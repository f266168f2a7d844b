use super::MenuItem;
use crate::operations;

/// 视图（页面）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    MainMenu,
    Payment,
    Pool,
    Token,
    Authorization,
    Merchant,
    Webhook,
    ShadowId,
    Settings,
}

impl View {
    /// 全部视图
    pub const ALL: [Self; 9] = [
        Self::MainMenu,
        Self::Payment,
        Self::Pool,
        Self::Token,
        Self::Authorization,
        Self::Merchant,
        Self::Webhook,
        Self::ShadowId,
        Self::Settings,
    ];

    /// 视图标题
    pub fn title(self) -> &'static str {
        match self {
            Self::MainMenu => "🔒 ShadowPay CLI",
            Self::Payment => "💸 ZK Payments",
            Self::Pool => "🏊 Privacy Pool",
            Self::Token => "🪙 Token Management",
            Self::Authorization => "🤖 Bot Authorization",
            Self::Merchant => "💰 Merchant Tools",
            Self::Webhook => "🔔 Webhooks",
            Self::ShadowId => "👤 ShadowID",
            Self::Settings => "⚙️  Settings",
        }
    }

    /// 视图说明（部分视图没有）
    pub fn description(self) -> Option<&'static str> {
        match self {
            Self::Pool => Some(
                "Privacy pools mix your funds with other users\nfor maximum anonymity on-chain.",
            ),
            Self::Authorization => Some(
                "Allow bots and services to spend from your\nescrow with custom limits and expiration.",
            ),
            Self::ShadowId => Some(
                "Anonymous identity system using Merkle trees\nfor privacy-preserving authentication.",
            ),
            _ => None,
        }
    }

    /// 视图的菜单项（静态有序列表）
    pub fn items(self) -> &'static [MenuItem] {
        operations::menu(self)
    }

    /// 进入该视图是否需要已配置的 API 客户端
    pub fn requires_client(self) -> bool {
        !matches!(self, Self::MainMenu | Self::Settings)
    }
}
