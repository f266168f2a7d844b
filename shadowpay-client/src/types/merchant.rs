//! Merchant earnings and analytics types (`/shadowpay/api/merchant/*`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenEarnings {
    pub token_mint: String,
    pub symbol: String,
    pub amount: i64,
    pub usd_value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EarningsResponse {
    /// Lamports.
    pub total_earnings: i64,
    pub total_usd_value: String,
    pub token_breakdown: Vec<TokenEarnings>,
    pub withdrawable_sol: i64,
    pub pending_settlement: i64,
}

/// Date range filter; both bounds are optional ISO 8601 dates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// "hour", "day", "week" or "month".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaymentStats {
    pub timestamp: String,
    pub payment_count: i64,
    pub total_amount: i64,
    pub unique_users: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResourceStat {
    pub resource: String,
    pub payment_count: i64,
    pub total_amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsResponse {
    pub total_payments: i64,
    pub total_volume: i64,
    pub average_payment: i64,
    pub unique_customers: i64,
    pub time_series: Vec<PaymentStats>,
    pub top_resources: Vec<ResourceStat>,
    pub success_rate: f64,
    pub pending_payments: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MerchantWithdrawRequest {
    pub amount: i64,
    /// Destination wallet address.
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_mint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MerchantWithdrawResponse {
    pub success: bool,
    /// Unsigned transaction for signing.
    pub transaction: String,
    pub withdrawal_id: String,
    pub amount: i64,
    pub fee: i64,
    pub net_amount: i64,
    pub message: String,
}
