use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    AddTokenRequest, AddTokenResponse, AnalyticsRequest, AnalyticsResponse,
    AuthorizePaymentRequest, AuthorizePaymentResponse, AuthorizeSpendingRequest,
    AuthorizeSpendingResponse, AutoRegisterRequest, AutoRegisterResponse,
    DeactivateWebhookRequest, DeactivateWebhookResponse, DecryptRequest, DecryptResponse,
    DepositAddressResponse, EarningsResponse, ListAuthorizationsResponse, ListTokensResponse,
    MerchantWithdrawRequest, MerchantWithdrawResponse, MerkleProofRequest, MerkleProofResponse,
    PaymentDepositRequest, PaymentDepositResponse, PaymentWithdrawRequest,
    PaymentWithdrawResponse, PoolBalanceResponse, PoolDepositRequest, PoolDepositResponse,
    PoolWithdrawRequest, PoolWithdrawResponse, PreparePaymentRequest, PreparePaymentResponse,
    RegisterCommitmentRequest, RegisterCommitmentResponse, RegisterWebhookRequest,
    RegisterWebhookResponse, RegistrationStatusResponse, RemoveTokenResponse,
    RevokeAuthorizationRequest, RevokeAuthorizationResponse, TestWebhookRequest,
    TestWebhookResponse, TreeRootResponse, UpdateTokenRequest, UpdateTokenResponse,
    VerifyAccessRequest, VerifyAccessResponse, WebhookConfigResponse, WebhookLogsRequest,
    WebhookLogsResponse, WebhookStatsResponse,
};

/// The ShadowPay remote API.
///
/// [`ShadowPayClient`](crate::ShadowPayClient) is the HTTP implementation;
/// the console holds it behind `Arc<dyn ShadowPayApi>` so tests can swap in a
/// fake.
#[async_trait]
pub trait ShadowPayApi: Send + Sync {
    // ============ ZK payments ============

    /// Builds an unsigned deposit transaction into the payment account.
    async fn payment_deposit(&self, req: &PaymentDepositRequest)
    -> Result<PaymentDepositResponse>;

    async fn payment_withdraw(
        &self,
        req: &PaymentWithdrawRequest,
    ) -> Result<PaymentWithdrawResponse>;

    async fn prepare_payment(&self, req: &PreparePaymentRequest)
    -> Result<PreparePaymentResponse>;

    /// Exchanges a commitment and nullifier for an access token.
    async fn authorize_payment(
        &self,
        req: &AuthorizePaymentRequest,
    ) -> Result<AuthorizePaymentResponse>;

    async fn verify_access(&self, req: &VerifyAccessRequest) -> Result<VerifyAccessResponse>;

    // ============ Privacy pool ============

    async fn pool_balance(&self, wallet: &str) -> Result<PoolBalanceResponse>;

    async fn pool_deposit(&self, req: &PoolDepositRequest) -> Result<PoolDepositResponse>;

    async fn pool_withdraw(&self, req: &PoolWithdrawRequest) -> Result<PoolWithdrawResponse>;

    async fn pool_deposit_address(&self) -> Result<DepositAddressResponse>;

    // ============ Tokens ============

    async fn list_tokens(&self) -> Result<ListTokensResponse>;

    async fn add_token(&self, req: &AddTokenRequest) -> Result<AddTokenResponse>;

    async fn update_token(
        &self,
        mint: &str,
        req: &UpdateTokenRequest,
    ) -> Result<UpdateTokenResponse>;

    async fn remove_token(&self, mint: &str) -> Result<RemoveTokenResponse>;

    // ============ Bot authorization ============

    async fn authorize_spending(
        &self,
        req: &AuthorizeSpendingRequest,
    ) -> Result<AuthorizeSpendingResponse>;

    async fn list_authorizations(&self, wallet: &str) -> Result<ListAuthorizationsResponse>;

    async fn revoke_authorization(
        &self,
        req: &RevokeAuthorizationRequest,
    ) -> Result<RevokeAuthorizationResponse>;

    // ============ Merchant ============

    async fn merchant_earnings(&self) -> Result<EarningsResponse>;

    async fn merchant_analytics(&self, req: &AnalyticsRequest) -> Result<AnalyticsResponse>;

    async fn merchant_withdraw(
        &self,
        req: &MerchantWithdrawRequest,
    ) -> Result<MerchantWithdrawResponse>;

    /// Decrypts an encrypted payment amount.
    async fn decrypt_amount(&self, req: &DecryptRequest) -> Result<DecryptResponse>;

    // ============ Webhooks ============

    async fn register_webhook(
        &self,
        req: &RegisterWebhookRequest,
    ) -> Result<RegisterWebhookResponse>;

    async fn webhook_config(&self) -> Result<WebhookConfigResponse>;

    /// Sends a test event to the registered endpoint.
    async fn test_webhook(&self, req: &TestWebhookRequest) -> Result<TestWebhookResponse>;

    async fn webhook_logs(&self, req: &WebhookLogsRequest) -> Result<WebhookLogsResponse>;

    async fn webhook_stats(&self) -> Result<WebhookStatsResponse>;

    async fn deactivate_webhook(
        &self,
        req: &DeactivateWebhookRequest,
    ) -> Result<DeactivateWebhookResponse>;

    // ============ ShadowID ============

    /// Derives and registers a commitment from a wallet signature.
    async fn auto_register(&self, req: &AutoRegisterRequest) -> Result<AutoRegisterResponse>;

    async fn register_commitment(
        &self,
        req: &RegisterCommitmentRequest,
    ) -> Result<RegisterCommitmentResponse>;

    async fn merkle_proof(&self, req: &MerkleProofRequest) -> Result<MerkleProofResponse>;

    async fn tree_root(&self) -> Result<TreeRootResponse>;

    async fn registration_status(&self, commitment: &str) -> Result<RegistrationStatusResponse>;
}
