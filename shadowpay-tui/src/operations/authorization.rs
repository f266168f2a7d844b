//! 机器人支出授权操作

use chrono::Utc;
use shadowpay_client::{
    AuthorizeSpendingRequest, AuthorizeSpendingResponse, ListAuthorizationsResponse,
    RevokeAuthorizationRequest, RevokeAuthorizationResponse,
};

use super::parse::{field, format_timestamp, parse_valid_until, sol};
use super::{report, status_word, BACK};
use crate::command::Command;
use crate::model::{FormSpec, MenuAction, MenuItem, SharedClient};

pub static ITEMS: &[MenuItem] = &[
    MenuItem {
        icon: "✅",
        label: "Authorize Bot Spending",
        action: MenuAction::Form(FormSpec {
            title: "✅ Authorize Bot Spending",
            fields: &[
                "User Wallet",
                "Authorized Service",
                "Max Per Tx (SOL)",
                "Max Daily (SOL)",
                "Valid Until (days from now)",
                "User Signature (base58)",
            ],
            submit: authorize,
        }),
    },
    MenuItem {
        icon: "📋",
        label: "List Authorizations",
        action: MenuAction::Form(FormSpec {
            title: "📋 List Authorizations",
            fields: &["Wallet Address"],
            submit: list,
        }),
    },
    MenuItem {
        icon: "🚫",
        label: "Revoke Authorization",
        action: MenuAction::Form(FormSpec {
            title: "🚫 Revoke Authorization",
            fields: &[
                "User Wallet",
                "Authorized Service",
                "User Signature (base58)",
            ],
            submit: revoke,
        }),
    },
    BACK,
];

fn authorize(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = AuthorizeSpendingRequest {
        user_wallet: field(&values, 0).to_string(),
        authorized_service: field(&values, 1).to_string(),
        // 上限以 SOL 字符串原样提交，由服务端换算
        max_amount_per_tx: field(&values, 2).to_string(),
        max_daily_spend: field(&values, 3).to_string(),
        valid_until: parse_valid_until(field(&values, 4), Utc::now())?,
        user_signature: field(&values, 5).to_string(),
    };

    Ok(Command::new("Authorizing bot spending", async move {
        let resp = client
            .authorize_spending(&req)
            .await
            .map_err(|e| report("authorize spending", e))?;
        Ok(format_authorize(&resp))
    }))
}

fn list(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let wallet = field(&values, 0).to_string();

    Ok(Command::new("Loading authorizations", async move {
        let resp = client
            .list_authorizations(&wallet)
            .await
            .map_err(|e| report("list authorizations", e))?;
        Ok(format_list(&wallet, &resp))
    }))
}

fn revoke(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = RevokeAuthorizationRequest {
        user_wallet: field(&values, 0).to_string(),
        authorized_service: field(&values, 1).to_string(),
        user_signature: field(&values, 2).to_string(),
    };

    Ok(Command::new("Revoking authorization", async move {
        let resp = client
            .revoke_authorization(&req)
            .await
            .map_err(|e| report("revoke authorization", e))?;
        Ok(format_revoke(&resp))
    }))
}

fn format_authorize(resp: &AuthorizeSpendingResponse) -> String {
    format!(
        "Authorize Spending: {}\nAuthorization ID: {}\n{}",
        status_word(resp.success),
        resp.authorization_id,
        resp.message
    )
}

fn format_list(wallet: &str, resp: &ListAuthorizationsResponse) -> String {
    let mut out = format!("Authorizations for {wallet}:");
    if resp.authorizations.is_empty() {
        out.push_str("\nNo authorizations found");
        return out;
    }

    for (i, auth) in resp.authorizations.iter().enumerate() {
        let status = if auth.revoked {
            "Revoked ❌"
        } else {
            "Active ✓"
        };
        out.push_str(&format!(
            "\n\n[{}] {status}\nService: {}\nMax Per Tx: {:.4} SOL\nMax Daily: {:.4} SOL\nSpent Today: {:.4} SOL\nValid Until: {}\nCreated: {}\nLast Reset: {}",
            i + 1,
            auth.authorized_service,
            sol(auth.max_amount_per_tx),
            sol(auth.max_daily_spend),
            sol(auth.spent_today),
            format_timestamp(auth.valid_until),
            format_timestamp(auth.created_at),
            auth.last_reset_date,
        ));
    }
    out
}

fn format_revoke(resp: &RevokeAuthorizationResponse) -> String {
    format!(
        "Revoke Authorization: {}\nAuthorization ID: {}\n{}",
        status_word(resp.success),
        resp.authorization_id,
        resp.message
    )
}
