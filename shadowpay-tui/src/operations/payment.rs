//! ZK 支付操作

use shadowpay_client::{
    AuthorizePaymentRequest, AuthorizePaymentResponse, PaymentDepositRequest,
    PaymentDepositResponse, PaymentWithdrawRequest, PaymentWithdrawResponse,
    PreparePaymentRequest, PreparePaymentResponse, VerifyAccessRequest, VerifyAccessResponse,
};

use super::parse::{field, parse_sol_to_lamports, truncate_display};
use super::{report, BACK};
use crate::command::Command;
use crate::model::{FormSpec, MenuAction, MenuItem, SharedClient};

/// Settle 需要 x402 payload，控制台不支持
pub const SETTLE_NOTICE: &str = "Settle is complex - requires x402 payload. Use API directly.";

pub static ITEMS: &[MenuItem] = &[
    MenuItem {
        icon: "📥",
        label: "Deposit Funds",
        action: MenuAction::Form(FormSpec {
            title: "💸 Deposit to Payment Account",
            fields: &["Wallet Address", "Amount (SOL)"],
            submit: deposit,
        }),
    },
    MenuItem {
        icon: "📤",
        label: "Withdraw Funds",
        action: MenuAction::Form(FormSpec {
            title: "📤 Withdraw from Payment Account",
            fields: &["Wallet Address", "Amount (SOL)"],
            submit: withdraw,
        }),
    },
    MenuItem {
        icon: "🔐",
        label: "Prepare Payment",
        action: MenuAction::Form(FormSpec {
            title: "🔐 Prepare ZK Payment",
            fields: &["Receiver Commitment", "Amount (SOL)"],
            submit: prepare,
        }),
    },
    MenuItem {
        icon: "✅",
        label: "Authorize Payment",
        action: MenuAction::Form(FormSpec {
            title: "✅ Authorize Payment",
            fields: &["Commitment", "Nullifier", "Amount (SOL)", "Merchant Wallet"],
            submit: authorize,
        }),
    },
    MenuItem {
        icon: "🔍",
        label: "Verify Access",
        action: MenuAction::Form(FormSpec {
            title: "🔍 Verify Access Token",
            fields: &["Access Token"],
            submit: verify_access,
        }),
    },
    MenuItem {
        icon: "⚡",
        label: "Settle Payment",
        action: MenuAction::Notice(SETTLE_NOTICE),
    },
    BACK,
];

fn deposit(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = PaymentDepositRequest {
        wallet_address: field(&values, 0).to_string(),
        amount: parse_sol_to_lamports(field(&values, 1))?,
    };

    Ok(Command::new("Creating deposit transaction", async move {
        let resp = client
            .payment_deposit(&req)
            .await
            .map_err(|e| report("payment deposit", e))?;
        Ok(format_deposit(&resp))
    }))
}

fn withdraw(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = PaymentWithdrawRequest {
        wallet_address: field(&values, 0).to_string(),
        amount: parse_sol_to_lamports(field(&values, 1))?,
    };

    Ok(Command::new("Creating withdraw transaction", async move {
        let resp = client
            .payment_withdraw(&req)
            .await
            .map_err(|e| report("payment withdraw", e))?;
        Ok(format_withdraw(&resp))
    }))
}

fn prepare(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = PreparePaymentRequest {
        receiver_commitment: field(&values, 0).to_string(),
        amount: parse_sol_to_lamports(field(&values, 1))?,
        token_mint: None,
    };

    Ok(Command::new("Preparing payment", async move {
        let resp = client
            .prepare_payment(&req)
            .await
            .map_err(|e| report("prepare payment", e))?;
        Ok(format_prepare(&resp))
    }))
}

fn authorize(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = AuthorizePaymentRequest {
        commitment: field(&values, 0).to_string(),
        nullifier: field(&values, 1).to_string(),
        amount: parse_sol_to_lamports(field(&values, 2))?,
        merchant: field(&values, 3).to_string(),
    };

    Ok(Command::new("Authorizing payment", async move {
        let resp = client
            .authorize_payment(&req)
            .await
            .map_err(|e| report("authorize payment", e))?;
        Ok(format_authorize(&resp))
    }))
}

fn verify_access(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = VerifyAccessRequest {
        token: field(&values, 0).to_string(),
    };

    Ok(Command::new("Verifying access token", async move {
        let resp = client
            .verify_access(&req)
            .await
            .map_err(|e| report("verify access", e))?;
        Ok(format_verify_access(&resp))
    }))
}

fn format_deposit(resp: &PaymentDepositResponse) -> String {
    format!(
        "Deposit transaction created!\nBlockhash: {}\nSign and send the transaction to complete.",
        resp.recent_blockhash
    )
}

fn format_withdraw(resp: &PaymentWithdrawResponse) -> String {
    format!(
        "Withdraw transaction created!\nBlockhash: {}\n{}",
        resp.recent_blockhash, resp.message
    )
}

fn format_prepare(resp: &PreparePaymentResponse) -> String {
    format!(
        "Payment prepared!\nPayment Hash: {}\nCommitment: {}\n{}",
        resp.payment_hash,
        truncate_display(&resp.commitment, 20),
        resp.message
    )
}

fn format_authorize(resp: &AuthorizePaymentResponse) -> String {
    format!(
        "Payment authorized!\nAccess Token: {}\nExpires in: {} seconds\n{}",
        truncate_display(&resp.access_token, 20),
        resp.expires_in,
        resp.message
    )
}

fn format_verify_access(resp: &VerifyAccessResponse) -> String {
    let status = if resp.valid { "Valid ✓" } else { "Invalid" };
    format!(
        "Access verification: {status}\nMerchant: {}\nAmount: {}\nExpires: {}\n{}",
        resp.merchant, resp.amount, resp.expires_at, resp.message
    )
}
