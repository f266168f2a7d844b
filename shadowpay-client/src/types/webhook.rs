//! Webhook registration and delivery log types (`/shadowpay/api/webhooks/*`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct RegisterWebhookRequest {
    /// HTTPS endpoint receiving notifications.
    pub url: String,
    /// e.g. `payment.received`, `payment.settled`, `payment.failed`.
    pub events: Vec<String>,
    /// Optional HMAC secret for signature verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterWebhookResponse {
    pub success: bool,
    pub webhook_id: String,
    pub url: String,
    pub events: Vec<String>,
    pub created_at: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookConfigResponse {
    pub webhook_id: String,
    pub url: String,
    pub events: Vec<String>,
    pub active: bool,
    /// Masked by the service.
    pub secret: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TestWebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestWebhookResponse {
    pub success: bool,
    pub status_code: i64,
    #[serde(rename = "response_time_ms")]
    pub response_time: i64,
    pub message: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookLogEntry {
    pub id: String,
    pub webhook_id: String,
    pub event: String,
    pub status_code: i64,
    #[serde(rename = "response_time_ms")]
    pub response_time: i64,
    pub success: bool,
    pub attempt: i64,
    pub timestamp: String,
    pub error: String,
    pub payload_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookLogsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookLogsResponse {
    pub logs: Vec<WebhookLogEntry>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookStatsResponse {
    pub webhook_id: String,
    pub total_deliveries: i64,
    pub successful_deliveries: i64,
    pub failed_deliveries: i64,
    pub success_rate: f64,
    #[serde(rename = "average_response_time_ms")]
    pub average_response_time: i64,
    pub last_delivery: String,
    pub last_success: String,
    pub last_failure: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeactivateWebhookRequest {
    pub webhook_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeactivateWebhookResponse {
    pub success: bool,
    pub webhook_id: String,
    pub message: String,
}
