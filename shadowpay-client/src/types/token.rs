//! Supported token registry types (`/shadowpay/api/tokens/*`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Token {
    pub mint: String,
    pub symbol: String,
    pub decimals: u8,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListTokensResponse {
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTokenRequest {
    pub mint: String,
    pub symbol: String,
    pub decimals: u8,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddTokenResponse {
    pub success: bool,
    pub message: String,
}

/// Partial update; `None` fields are left untouched by the service.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTokenResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RemoveTokenResponse {
    pub success: bool,
    pub message: String,
}
