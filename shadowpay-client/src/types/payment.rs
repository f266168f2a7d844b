//! ZK payment account types (`/shadowpay/v1/payment/*`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct PaymentDepositRequest {
    pub wallet_address: String,
    /// Amount in lamports.
    pub amount: i64,
}

/// Unsigned deposit transaction for the wallet to sign.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaymentDepositResponse {
    pub unsigned_tx_base64: String,
    pub recent_blockhash: String,
    pub last_valid_block_height: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentWithdrawRequest {
    pub wallet_address: String,
    /// Amount in lamports.
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaymentWithdrawResponse {
    pub unsigned_tx_base64: String,
    pub recent_blockhash: String,
    pub last_valid_block_height: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreparePaymentRequest {
    /// Base58 or hex encoded receiver commitment.
    pub receiver_commitment: String,
    pub amount: i64,
    /// Optional SPL token mint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_mint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PreparePaymentResponse {
    pub payment_hash: String,
    /// Unsigned transaction.
    pub transaction: String,
    pub commitment: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorizePaymentRequest {
    pub commitment: String,
    pub nullifier: String,
    pub amount: i64,
    /// Merchant wallet address.
    pub merchant: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorizePaymentResponse {
    pub success: bool,
    /// JWT access token.
    pub access_token: String,
    /// Seconds until expiration.
    pub expires_in: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyAccessRequest {
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifyAccessResponse {
    pub valid: bool,
    pub commitment: String,
    pub merchant: String,
    pub amount: i64,
    pub expires_at: String,
    pub message: String,
}
