//! Request and response types, one module per API domain.
//!
//! Field names mirror the service's snake_case JSON. Response structs use
//! `#[serde(default)]` so that fields the service omits decode to their zero
//! values instead of failing the whole call.

mod authorization;
mod merchant;
mod payment;
mod pool;
mod privacy;
mod shadowid;
mod token;
mod webhook;

pub use authorization::{
    Authorization, AuthorizeSpendingRequest, AuthorizeSpendingResponse,
    ListAuthorizationsResponse, RevokeAuthorizationRequest, RevokeAuthorizationResponse,
};
pub use merchant::{
    AnalyticsRequest, AnalyticsResponse, EarningsResponse, MerchantWithdrawRequest,
    MerchantWithdrawResponse, PaymentStats, ResourceStat, TokenEarnings,
};
pub use payment::{
    AuthorizePaymentRequest, AuthorizePaymentResponse, PaymentDepositRequest,
    PaymentDepositResponse, PaymentWithdrawRequest, PaymentWithdrawResponse,
    PreparePaymentRequest, PreparePaymentResponse, VerifyAccessRequest, VerifyAccessResponse,
};
pub use pool::{
    DepositAddressResponse, PoolBalanceResponse, PoolDepositRequest, PoolDepositResponse,
    PoolWithdrawRequest, PoolWithdrawResponse,
};
pub use privacy::{DecryptRequest, DecryptResponse};
pub use shadowid::{
    AutoRegisterRequest, AutoRegisterResponse, MerkleProofRequest, MerkleProofResponse,
    RegisterCommitmentRequest, RegisterCommitmentResponse, RegistrationStatusResponse,
    TreeRootResponse,
};
pub use token::{
    AddTokenRequest, AddTokenResponse, ListTokensResponse, RemoveTokenResponse, Token,
    UpdateTokenRequest, UpdateTokenResponse,
};
pub use webhook::{
    DeactivateWebhookRequest, DeactivateWebhookResponse, RegisterWebhookRequest,
    RegisterWebhookResponse, TestWebhookRequest, TestWebhookResponse, WebhookConfigResponse,
    WebhookLogEntry, WebhookLogsRequest, WebhookLogsResponse, WebhookStatsResponse,
};

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: f64 = 1e9;

/// Converts a lamport amount to SOL for display.
#[allow(clippy::cast_precision_loss)]
pub fn lamports_to_sol(lamports: i64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lamports_to_sol_scales_by_1e9() {
        assert!((lamports_to_sol(1_500_000_000) - 1.5).abs() < f64::EPSILON);
        assert!((lamports_to_sol(0)).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_response_fields_default() {
        let resp: PoolBalanceResponse =
            serde_json::from_str(r#"{"wallet_address":"abc"}"#).unwrap();
        assert_eq!(resp.wallet_address, "abc");
        assert_eq!(resp.balance, 0);
        assert_eq!(resp.min_deposit, 0);
    }

    #[test]
    fn optional_request_fields_are_omitted() {
        let req = UpdateTokenRequest {
            enabled: Some(false),
            symbol: None,
            decimals: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"enabled":false}"#);
    }
}
