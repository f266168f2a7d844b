//! 商户工具操作

use shadowpay_client::{
    AnalyticsRequest, AnalyticsResponse, DecryptRequest, DecryptResponse, EarningsResponse,
    MerchantWithdrawRequest, MerchantWithdrawResponse,
};

use super::parse::{field, optional, parse_sol_to_lamports, sol};
use super::{report, status_word, BACK};
use crate::command::Command;
use crate::model::{FormSpec, MenuAction, MenuItem, SharedClient};

/// 分析结果最多展示的资源数
const TOP_RESOURCES_SHOWN: usize = 5;

pub static ITEMS: &[MenuItem] = &[
    MenuItem {
        icon: "💵",
        label: "View Earnings",
        action: MenuAction::Run(earnings),
    },
    MenuItem {
        icon: "📊",
        label: "Get Analytics",
        action: MenuAction::Form(FormSpec {
            title: "📊 Get Analytics",
            fields: &[
                "Start Date (YYYY-MM-DD, optional)",
                "End Date (YYYY-MM-DD, optional)",
            ],
            submit: analytics,
        }),
    },
    MenuItem {
        icon: "📤",
        label: "Withdraw Earnings",
        action: MenuAction::Form(FormSpec {
            title: "📤 Withdraw Earnings",
            fields: &["Amount (SOL)", "Destination Wallet"],
            submit: withdraw,
        }),
    },
    MenuItem {
        icon: "🔓",
        label: "Decrypt Amount",
        action: MenuAction::Form(FormSpec {
            title: "🔓 Decrypt Amount",
            fields: &["Encrypted Ciphertext (hex)", "Private Key (hex)"],
            submit: decrypt,
        }),
    },
    BACK,
];

fn earnings(client: SharedClient) -> Command {
    Command::new("Loading merchant earnings", async move {
        let resp = client
            .merchant_earnings()
            .await
            .map_err(|e| report("merchant earnings", e))?;
        Ok(format_earnings(&resp))
    })
}

fn analytics(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = AnalyticsRequest {
        start_date: optional(field(&values, 0)),
        end_date: optional(field(&values, 1)),
        interval: None,
    };

    Ok(Command::new("Loading analytics", async move {
        let resp = client
            .merchant_analytics(&req)
            .await
            .map_err(|e| report("merchant analytics", e))?;
        Ok(format_analytics(&resp))
    }))
}

fn withdraw(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = MerchantWithdrawRequest {
        amount: parse_sol_to_lamports(field(&values, 0))?,
        destination: field(&values, 1).to_string(),
        token_mint: None,
    };

    Ok(Command::new("Withdrawing earnings", async move {
        let resp = client
            .merchant_withdraw(&req)
            .await
            .map_err(|e| report("merchant withdraw", e))?;
        Ok(format_withdraw(req.amount, &resp))
    }))
}

fn decrypt(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = DecryptRequest {
        ciphertext: field(&values, 0).to_string(),
        private_key: field(&values, 1).to_string(),
    };

    Ok(Command::new("Decrypting amount", async move {
        let resp = client
            .decrypt_amount(&req)
            .await
            .map_err(|e| report("decrypt amount", e))?;
        Ok(format_decrypt(&resp))
    }))
}

fn format_earnings(resp: &EarningsResponse) -> String {
    let mut out = format!(
        "Merchant Earnings:\nTotal: {:.4} SOL (${})\nWithdrawable: {:.4} SOL\nPending: {:.4} SOL\n\nToken Breakdown:",
        sol(resp.total_earnings),
        resp.total_usd_value,
        sol(resp.withdrawable_sol),
        sol(resp.pending_settlement),
    );
    for t in &resp.token_breakdown {
        out.push_str(&format!("\n  • {}: {:.4} SOL", t.symbol, sol(t.amount)));
    }
    out
}

fn format_analytics(resp: &AnalyticsResponse) -> String {
    let mut out = format!(
        "Analytics:\nTotal Payments: {}\nTotal Volume: {:.4} SOL\nAvg Payment: {:.4} SOL\nUnique Customers: {}\nSuccess Rate: {:.1}%\nPending: {}\n\nTop Resources:",
        resp.total_payments,
        sol(resp.total_volume),
        sol(resp.average_payment),
        resp.unique_customers,
        resp.success_rate,
        resp.pending_payments,
    );
    for (i, r) in resp.top_resources.iter().take(TOP_RESOURCES_SHOWN).enumerate() {
        out.push_str(&format!(
            "\n  {}. {}: {} payments, {:.4} SOL",
            i + 1,
            r.resource,
            r.payment_count,
            sol(r.total_amount)
        ));
    }
    out
}

/// `requested` 为提交的金额（lamports）
fn format_withdraw(requested: i64, resp: &MerchantWithdrawResponse) -> String {
    format!(
        "Withdraw Earnings: {}\nWithdrawal ID: {}\nAmount: {:.4} SOL\nFee: {:.4} SOL\nNet: {:.4} SOL\n{}",
        status_word(resp.success),
        resp.withdrawal_id,
        sol(requested),
        sol(resp.fee),
        sol(resp.net_amount),
        resp.message
    )
}

fn format_decrypt(resp: &DecryptResponse) -> String {
    format!(
        "Decrypted Amount: {:.4} SOL ({} lamports)",
        sol(resp.amount),
        resp.amount
    )
}
