//! Privacy pool types (`/shadowpay/api/pool/*`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolBalanceResponse {
    pub wallet_address: String,
    /// Balance in lamports.
    pub balance: i64,
    /// Minimum deposit in lamports.
    pub min_deposit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoolDepositRequest {
    pub wallet_address: String,
    /// Amount in lamports; the service rejects anything under 0.01 SOL.
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolDepositResponse {
    /// Unsigned serialized transaction.
    pub transaction: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoolWithdrawRequest {
    pub wallet_address: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolWithdrawResponse {
    pub transaction: String,
    /// Amount after the pool fee.
    pub net_amount: i64,
    pub fee: i64,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepositAddressResponse {
    pub deposit_address: String,
    pub network: String,
}
