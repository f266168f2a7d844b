//! 隐私池操作

use shadowpay_client::{
    DepositAddressResponse, PoolBalanceResponse, PoolDepositRequest, PoolDepositResponse,
    PoolWithdrawRequest, PoolWithdrawResponse,
};

use super::parse::{field, parse_sol_to_lamports, sol};
use super::{report, BACK};
use crate::command::Command;
use crate::model::{FormSpec, MenuAction, MenuItem, SharedClient};

pub static ITEMS: &[MenuItem] = &[
    MenuItem {
        icon: "💰",
        label: "Check Balance",
        action: MenuAction::Form(FormSpec {
            title: "💰 Check Pool Balance",
            fields: &["Wallet Address"],
            submit: balance,
        }),
    },
    MenuItem {
        icon: "📥",
        label: "Deposit to Pool",
        action: MenuAction::Form(FormSpec {
            title: "💰 Deposit to Pool",
            fields: &["Wallet Address", "Amount (SOL)"],
            submit: deposit,
        }),
    },
    MenuItem {
        icon: "📤",
        label: "Withdraw from Pool",
        action: MenuAction::Form(FormSpec {
            title: "📤 Withdraw from Pool",
            fields: &["Wallet Address", "Amount (SOL)"],
            submit: withdraw,
        }),
    },
    MenuItem {
        icon: "📍",
        label: "Get Deposit Address",
        action: MenuAction::Run(deposit_address),
    },
    BACK,
];

fn balance(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let wallet = field(&values, 0).to_string();

    Ok(Command::new("Checking pool balance", async move {
        let resp = client
            .pool_balance(&wallet)
            .await
            .map_err(|e| report("pool balance", e))?;
        Ok(format_balance(&resp))
    }))
}

fn deposit(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = PoolDepositRequest {
        wallet_address: field(&values, 0).to_string(),
        amount: parse_sol_to_lamports(field(&values, 1))?,
    };

    Ok(Command::new("Creating pool deposit", async move {
        let resp = client
            .pool_deposit(&req)
            .await
            .map_err(|e| report("pool deposit", e))?;
        Ok(format_deposit(&resp))
    }))
}

fn withdraw(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = PoolWithdrawRequest {
        wallet_address: field(&values, 0).to_string(),
        amount: parse_sol_to_lamports(field(&values, 1))?,
    };

    Ok(Command::new("Creating pool withdrawal", async move {
        let resp = client
            .pool_withdraw(&req)
            .await
            .map_err(|e| report("pool withdraw", e))?;
        Ok(format_withdraw(&resp))
    }))
}

fn deposit_address(client: SharedClient) -> Command {
    Command::new("Fetching deposit address", async move {
        let resp = client
            .pool_deposit_address()
            .await
            .map_err(|e| report("pool deposit address", e))?;
        Ok(format_deposit_address(&resp))
    })
}

fn format_balance(resp: &PoolBalanceResponse) -> String {
    format!(
        "Pool Balance: {:.4} SOL ({} lamports)\nMin Deposit: {:.4} SOL",
        sol(resp.balance),
        resp.balance,
        sol(resp.min_deposit)
    )
}

fn format_deposit(resp: &PoolDepositResponse) -> String {
    format!("Pool deposit transaction created!\n{}", resp.message)
}

fn format_withdraw(resp: &PoolWithdrawResponse) -> String {
    format!(
        "Pool withdrawal created!\nNet Amount: {:.4} SOL\nFee: {:.4} SOL\n{}",
        sol(resp.net_amount),
        sol(resp.fee),
        resp.message
    )
}

fn format_deposit_address(resp: &DepositAddressResponse) -> String {
    format!(
        "Pool Deposit Address:\n{}\nNetwork: {}",
        resp.deposit_address, resp.network
    )
}
