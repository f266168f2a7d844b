//! 代币管理操作

use shadowpay_client::{
    AddTokenRequest, AddTokenResponse, ListTokensResponse, RemoveTokenResponse,
    UpdateTokenRequest, UpdateTokenResponse,
};

use super::parse::{field, optional, parse_decimals};
use super::{report, status_word, BACK};
use crate::command::Command;
use crate::model::{FormSpec, MenuAction, MenuItem, SharedClient};

pub static ITEMS: &[MenuItem] = &[
    MenuItem {
        icon: "📋",
        label: "List Supported Tokens",
        action: MenuAction::Run(list),
    },
    MenuItem {
        icon: "➕",
        label: "Add New Token",
        action: MenuAction::Form(FormSpec {
            title: "➕ Add Token",
            fields: &["Mint Address", "Symbol", "Decimals"],
            submit: add,
        }),
    },
    MenuItem {
        icon: "✏️ ",
        label: "Update Token",
        action: MenuAction::Form(FormSpec {
            title: "✏️ Update Token",
            fields: &[
                "Mint Address",
                "New Symbol (optional)",
                "Enabled (true/false)",
            ],
            submit: update,
        }),
    },
    MenuItem {
        icon: "🗑️ ",
        label: "Remove Token",
        action: MenuAction::Form(FormSpec {
            title: "🗑️ Remove Token",
            fields: &["Mint Address"],
            submit: remove,
        }),
    },
    BACK,
];

fn list(client: SharedClient) -> Command {
    Command::new("Loading supported tokens", async move {
        let resp = client
            .list_tokens()
            .await
            .map_err(|e| report("list tokens", e))?;
        Ok(format_list(&resp))
    })
}

fn add(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = AddTokenRequest {
        mint: field(&values, 0).to_string(),
        symbol: field(&values, 1).to_string(),
        decimals: parse_decimals(field(&values, 2))?,
        enabled: true,
    };

    Ok(Command::new("Adding token", async move {
        let resp = client
            .add_token(&req)
            .await
            .map_err(|e| report("add token", e))?;
        Ok(format_add(&resp))
    }))
}

fn update(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let mint = field(&values, 0).to_string();
    let req = update_request(field(&values, 1), field(&values, 2));

    Ok(Command::new("Updating token", async move {
        let resp = client
            .update_token(&mint, &req)
            .await
            .map_err(|e| report("update token", e))?;
        Ok(format_update(&resp))
    }))
}

fn remove(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let mint = field(&values, 0).to_string();

    Ok(Command::new("Removing token", async move {
        let resp = client
            .remove_token(&mint)
            .await
            .map_err(|e| report("remove token", e))?;
        Ok(format_remove(&resp))
    }))
}

/// 空的符号与启用状态都表示不修改；启用状态仅 `true` 视为真
fn update_request(symbol: &str, enabled: &str) -> UpdateTokenRequest {
    UpdateTokenRequest {
        enabled: optional(enabled).map(|v| v == "true"),
        symbol: optional(symbol),
        decimals: None,
    }
}

fn format_list(resp: &ListTokensResponse) -> String {
    if resp.tokens.is_empty() {
        return "Supported Tokens:\nNo tokens configured".to_string();
    }

    let mut out = String::from("Supported Tokens:");
    for t in &resp.tokens {
        let status = if t.enabled { "✓ Enabled" } else { "❌ Disabled" };
        out.push_str(&format!(
            "\n• {} ({status}) {}\n  Mint: {}\n  Decimals: {}",
            t.symbol, t.mint, t.mint, t.decimals
        ));
    }
    out
}

fn format_add(resp: &AddTokenResponse) -> String {
    format!("Add Token: {}\n{}", status_word(resp.success), resp.message)
}

fn format_update(resp: &UpdateTokenResponse) -> String {
    format!("Update Token: {}\n{}", status_word(resp.success), resp.message)
}

fn format_remove(resp: &RemoveTokenResponse) -> String {
    format!("Remove Token: {}\n{}", status_word(resp.success), resp.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadowpay_client::Token;

    #[test]
    fn update_request_blank_fields_untouched() {
        let req = update_request("", "");
        assert!(req.symbol.is_none());
        assert!(req.enabled.is_none());
    }

    #[test]
    fn update_request_enabled_parsing() {
        assert_eq!(update_request("", "true").enabled, Some(true));
        assert_eq!(update_request("", "yes").enabled, Some(false));
        assert_eq!(
            update_request("USDC", "false").symbol.as_deref(),
            Some("USDC")
        );
    }

    #[test]
    fn list_text() {
        let resp = ListTokensResponse {
            tokens: vec![
                Token {
                    mint: "So111".into(),
                    symbol: "SOL".into(),
                    decimals: 9,
                    enabled: true,
                },
                Token {
                    mint: "EPjF".into(),
                    symbol: "USDC".into(),
                    decimals: 6,
                    enabled: false,
                },
            ],
        };
        assert_eq!(
            format_list(&resp),
            "Supported Tokens:\n• SOL (✓ Enabled) So111\n  Mint: So111\n  Decimals: 9\n• USDC (❌ Disabled) EPjF\n  Mint: EPjF\n  Decimals: 6"
        );
    }

    #[test]
    fn empty_list_text() {
        assert_eq!(
            format_list(&ListTokensResponse::default()),
            "Supported Tokens:\nNo tokens configured"
        );
    }

    #[test]
    fn add_reports_failure() {
        let resp = AddTokenResponse {
            success: false,
            message: "already exists".into(),
        };
        assert_eq!(format_add(&resp), "Add Token: Failed\nalready exists");
    }
}
