//! Bot spending authorization types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AuthorizeSpendingRequest {
    pub user_wallet: String,
    pub authorized_service: String,
    /// Per-transaction cap in SOL, passed through as typed by the user.
    pub max_amount_per_tx: String,
    /// Daily cap in SOL, passed through as typed by the user.
    pub max_daily_spend: String,
    /// Unix timestamp.
    pub valid_until: i64,
    /// Base58 encoded signature.
    pub user_signature: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorizeSpendingResponse {
    pub success: bool,
    pub message: String,
    pub authorization_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevokeAuthorizationRequest {
    pub user_wallet: String,
    pub authorized_service: String,
    pub user_signature: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RevokeAuthorizationResponse {
    pub success: bool,
    pub message: String,
    pub authorization_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Authorization {
    pub id: i64,
    pub user_wallet: String,
    pub authorized_service: String,
    /// Lamports.
    pub max_amount_per_tx: i64,
    /// Lamports.
    pub max_daily_spend: i64,
    /// Lamports.
    pub spent_today: i64,
    pub last_reset_date: String,
    /// Unix timestamp.
    pub valid_until: i64,
    pub revoked: bool,
    /// Unix timestamp.
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListAuthorizationsResponse {
    pub authorizations: Vec<Authorization>,
}
