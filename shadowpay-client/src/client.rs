//! HTTP implementation of [`ShadowPayApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::ShadowPayApi;
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

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://shadow.radr.fun";

const CLIENT_USER_AGENT: &str = concat!("shadowpay-rust-client/", env!("CARGO_PKG_VERSION"));

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// ShadowPay HTTP client.
pub struct ShadowPayClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Builder for [`ShadowPayClient`].
#[derive(Debug, Clone)]
pub struct ShadowPayClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for ShadowPayClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ShadowPayClientBuilder {
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the key sent as `X-API-Key`. Blank keys are ignored.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.trim().is_empty() {
            None
        } else {
            Some(key)
        };
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ShadowPayClient> {
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ClientError::InvalidConfig {
                detail: format!("base URL must start with http:// or https://: {base_url}"),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                detail: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(ShadowPayClient {
            client,
            base_url,
            api_key: self.api_key,
        })
    }
}

impl ShadowPayClient {
    pub fn builder() -> ShadowPayClientBuilder {
        ShadowPayClientBuilder::default()
    }

    /// Client against the production endpoint with default timeouts.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT);

        if let Some(key) = &self.api_key {
            builder = builder.header("X-API-Key", key);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ClientError::SerializationError {
                detail: e.to_string(),
            })?;
            builder = builder.body(bytes);
        }

        let text = HttpUtils::execute_request(builder, method.as_str(), path).await?;
        HttpUtils::parse_json(&text)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// GET with a JSON body; a few endpoints take their filters this way.
    async fn get_with_body<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::GET, path, Some(body)).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }
}

/// Percent-encodes a user-supplied path segment.
fn segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

#[async_trait]
impl ShadowPayApi for ShadowPayClient {
    async fn payment_deposit(
        &self,
        req: &PaymentDepositRequest,
    ) -> Result<PaymentDepositResponse> {
        self.post("/shadowpay/v1/payment/deposit", req).await
    }

    async fn payment_withdraw(
        &self,
        req: &PaymentWithdrawRequest,
    ) -> Result<PaymentWithdrawResponse> {
        self.post("/shadowpay/v1/payment/withdraw", req).await
    }

    async fn prepare_payment(
        &self,
        req: &PreparePaymentRequest,
    ) -> Result<PreparePaymentResponse> {
        self.post("/shadowpay/v1/payment/prepare", req).await
    }

    async fn authorize_payment(
        &self,
        req: &AuthorizePaymentRequest,
    ) -> Result<AuthorizePaymentResponse> {
        self.post("/shadowpay/v1/payment/authorize", req).await
    }

    async fn verify_access(&self, req: &VerifyAccessRequest) -> Result<VerifyAccessResponse> {
        self.get_with_body("/shadowpay/v1/payment/verify-access", req)
            .await
    }

    async fn pool_balance(&self, wallet: &str) -> Result<PoolBalanceResponse> {
        self.get(&format!("/shadowpay/api/pool/balance/{}", segment(wallet)))
            .await
    }

    async fn pool_deposit(&self, req: &PoolDepositRequest) -> Result<PoolDepositResponse> {
        self.post("/shadowpay/api/pool/deposit", req).await
    }

    async fn pool_withdraw(&self, req: &PoolWithdrawRequest) -> Result<PoolWithdrawResponse> {
        self.post("/shadowpay/api/pool/withdraw", req).await
    }

    async fn pool_deposit_address(&self) -> Result<DepositAddressResponse> {
        self.get("/shadowpay/api/pool/deposit-address").await
    }

    async fn list_tokens(&self) -> Result<ListTokensResponse> {
        self.get("/shadowpay/api/tokens/supported").await
    }

    async fn add_token(&self, req: &AddTokenRequest) -> Result<AddTokenResponse> {
        self.post("/shadowpay/api/tokens/add", req).await
    }

    async fn update_token(
        &self,
        mint: &str,
        req: &UpdateTokenRequest,
    ) -> Result<UpdateTokenResponse> {
        let path = format!("/shadowpay/api/tokens/update/{}", segment(mint));
        self.request(Method::PATCH, &path, Some(req)).await
    }

    async fn remove_token(&self, mint: &str) -> Result<RemoveTokenResponse> {
        let path = format!("/shadowpay/api/tokens/remove/{}", segment(mint));
        self.request::<_, ()>(Method::DELETE, &path, None).await
    }

    async fn authorize_spending(
        &self,
        req: &AuthorizeSpendingRequest,
    ) -> Result<AuthorizeSpendingResponse> {
        self.post("/shadowpay/api/authorize-spending", req).await
    }

    async fn list_authorizations(&self, wallet: &str) -> Result<ListAuthorizationsResponse> {
        self.get(&format!(
            "/shadowpay/api/my-authorizations/{}",
            segment(wallet)
        ))
        .await
    }

    async fn revoke_authorization(
        &self,
        req: &RevokeAuthorizationRequest,
    ) -> Result<RevokeAuthorizationResponse> {
        self.post("/shadowpay/api/revoke-authorization", req).await
    }

    async fn merchant_earnings(&self) -> Result<EarningsResponse> {
        self.get("/shadowpay/api/merchant/earnings").await
    }

    async fn merchant_analytics(&self, req: &AnalyticsRequest) -> Result<AnalyticsResponse> {
        self.get_with_body("/shadowpay/api/merchant/analytics", req)
            .await
    }

    async fn merchant_withdraw(
        &self,
        req: &MerchantWithdrawRequest,
    ) -> Result<MerchantWithdrawResponse> {
        self.post("/shadowpay/api/merchant/withdraw", req).await
    }

    async fn decrypt_amount(&self, req: &DecryptRequest) -> Result<DecryptResponse> {
        self.post("/shadowpay/api/privacy/decrypt", req).await
    }

    async fn register_webhook(
        &self,
        req: &RegisterWebhookRequest,
    ) -> Result<RegisterWebhookResponse> {
        self.post("/shadowpay/api/webhooks/register", req).await
    }

    async fn webhook_config(&self) -> Result<WebhookConfigResponse> {
        self.get("/shadowpay/api/webhooks/config").await
    }

    async fn test_webhook(&self, req: &TestWebhookRequest) -> Result<TestWebhookResponse> {
        self.post("/shadowpay/api/webhooks/test", req).await
    }

    async fn webhook_logs(&self, req: &WebhookLogsRequest) -> Result<WebhookLogsResponse> {
        self.get_with_body("/shadowpay/api/webhooks/logs", req).await
    }

    async fn webhook_stats(&self) -> Result<WebhookStatsResponse> {
        self.get("/shadowpay/api/webhooks/stats").await
    }

    async fn deactivate_webhook(
        &self,
        req: &DeactivateWebhookRequest,
    ) -> Result<DeactivateWebhookResponse> {
        self.post("/shadowpay/api/webhooks/deactivate", req).await
    }

    async fn auto_register(&self, req: &AutoRegisterRequest) -> Result<AutoRegisterResponse> {
        self.post("/shadowpay/api/shadowid/auto-register", req)
            .await
    }

    async fn register_commitment(
        &self,
        req: &RegisterCommitmentRequest,
    ) -> Result<RegisterCommitmentResponse> {
        self.post("/shadowpay/api/shadowid/register", req).await
    }

    async fn merkle_proof(&self, req: &MerkleProofRequest) -> Result<MerkleProofResponse> {
        self.post("/shadowpay/api/shadowid/proof", req).await
    }

    async fn tree_root(&self) -> Result<TreeRootResponse> {
        self.get("/shadowpay/api/shadowid/root").await
    }

    async fn registration_status(&self, commitment: &str) -> Result<RegistrationStatusResponse> {
        self.get(&format!(
            "/shadowpay/shadowid/v1/id/status/{}",
            segment(commitment)
        ))
        .await
    }
}
