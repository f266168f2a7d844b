#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shadowpay_client::*;

use shadowpay_tui::command::{Command, MessageBus, Scheduler};
use shadowpay_tui::message::{AppMessage, Key};
use shadowpay_tui::model::{App, Session, SharedClient};
use shadowpay_tui::update::update;

/// 内存中的 API：记录调用，按配置返回默认响应或统一的失败
#[derive(Default)]
pub struct FakeApi {
    /// 设置后所有调用都以 400 失败，消息为该文本
    pub fail_with: Option<String>,
    /// `pool_balance` 返回的余额（lamports）
    pub balance: i64,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_balance(balance: i64) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T: Default>(&self, call: String) -> Result<T> {
        self.respond_with(call, T::default())
    }

    fn respond_with<T>(&self, call: String, value: T) -> Result<T> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(message) => Err(ClientError::Api {
                status: 400,
                message: message.clone(),
                error: None,
            }),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl ShadowPayApi for FakeApi {
    async fn payment_deposit(&self, req: &PaymentDepositRequest) -> Result<PaymentDepositResponse> {
        self.respond(format!("payment_deposit {} {}", req.wallet_address, req.amount))
    }

    async fn payment_withdraw(
        &self,
        req: &PaymentWithdrawRequest,
    ) -> Result<PaymentWithdrawResponse> {
        self.respond(format!("payment_withdraw {} {}", req.wallet_address, req.amount))
    }

    async fn prepare_payment(&self, _req: &PreparePaymentRequest) -> Result<PreparePaymentResponse> {
        self.respond("prepare_payment".into())
    }

    async fn authorize_payment(
        &self,
        _req: &AuthorizePaymentRequest,
    ) -> Result<AuthorizePaymentResponse> {
        self.respond("authorize_payment".into())
    }

    async fn verify_access(&self, _req: &VerifyAccessRequest) -> Result<VerifyAccessResponse> {
        self.respond("verify_access".into())
    }

    async fn pool_balance(&self, wallet: &str) -> Result<PoolBalanceResponse> {
        let value = PoolBalanceResponse {
            wallet_address: wallet.to_string(),
            balance: self.balance,
            ..Default::default()
        };
        self.respond_with(format!("pool_balance {wallet}"), value)
    }

    async fn pool_deposit(&self, req: &PoolDepositRequest) -> Result<PoolDepositResponse> {
        self.respond(format!("pool_deposit {} {}", req.wallet_address, req.amount))
    }

    async fn pool_withdraw(&self, req: &PoolWithdrawRequest) -> Result<PoolWithdrawResponse> {
        self.respond(format!("pool_withdraw {} {}", req.wallet_address, req.amount))
    }

    async fn pool_deposit_address(&self) -> Result<DepositAddressResponse> {
        self.respond("pool_deposit_address".into())
    }

    async fn list_tokens(&self) -> Result<ListTokensResponse> {
        self.respond("list_tokens".into())
    }

    async fn add_token(&self, req: &AddTokenRequest) -> Result<AddTokenResponse> {
        self.respond(format!("add_token {}", req.mint))
    }

    async fn update_token(&self, mint: &str, _req: &UpdateTokenRequest) -> Result<UpdateTokenResponse> {
        self.respond(format!("update_token {mint}"))
    }

    async fn remove_token(&self, mint: &str) -> Result<RemoveTokenResponse> {
        self.respond(format!("remove_token {mint}"))
    }

    async fn authorize_spending(
        &self,
        req: &AuthorizeSpendingRequest,
    ) -> Result<AuthorizeSpendingResponse> {
        self.respond(format!("authorize_spending {}", req.authorized_service))
    }

    async fn list_authorizations(&self, wallet: &str) -> Result<ListAuthorizationsResponse> {
        self.respond(format!("list_authorizations {wallet}"))
    }

    async fn revoke_authorization(
        &self,
        req: &RevokeAuthorizationRequest,
    ) -> Result<RevokeAuthorizationResponse> {
        self.respond(format!("revoke_authorization {}", req.authorized_service))
    }

    async fn merchant_earnings(&self) -> Result<EarningsResponse> {
        self.respond("merchant_earnings".into())
    }

    async fn merchant_analytics(&self, _req: &AnalyticsRequest) -> Result<AnalyticsResponse> {
        self.respond("merchant_analytics".into())
    }

    async fn merchant_withdraw(
        &self,
        req: &MerchantWithdrawRequest,
    ) -> Result<MerchantWithdrawResponse> {
        self.respond(format!("merchant_withdraw {}", req.amount))
    }

    async fn decrypt_amount(&self, _req: &DecryptRequest) -> Result<DecryptResponse> {
        self.respond("decrypt_amount".into())
    }

    async fn register_webhook(&self, req: &RegisterWebhookRequest) -> Result<RegisterWebhookResponse> {
        self.respond(format!("register_webhook {}", req.events.join(",")))
    }

    async fn webhook_config(&self) -> Result<WebhookConfigResponse> {
        self.respond("webhook_config".into())
    }

    async fn test_webhook(&self, _req: &TestWebhookRequest) -> Result<TestWebhookResponse> {
        self.respond("test_webhook".into())
    }

    async fn webhook_logs(&self, req: &WebhookLogsRequest) -> Result<WebhookLogsResponse> {
        self.respond(format!("webhook_logs {:?}", req.limit))
    }

    async fn webhook_stats(&self) -> Result<WebhookStatsResponse> {
        self.respond("webhook_stats".into())
    }

    async fn deactivate_webhook(
        &self,
        req: &DeactivateWebhookRequest,
    ) -> Result<DeactivateWebhookResponse> {
        self.respond(format!("deactivate_webhook {}", req.webhook_id))
    }

    async fn auto_register(&self, _req: &AutoRegisterRequest) -> Result<AutoRegisterResponse> {
        self.respond("auto_register".into())
    }

    async fn register_commitment(
        &self,
        req: &RegisterCommitmentRequest,
    ) -> Result<RegisterCommitmentResponse> {
        self.respond(format!("register_commitment {}", req.commitment))
    }

    async fn merkle_proof(&self, req: &MerkleProofRequest) -> Result<MerkleProofResponse> {
        self.respond(format!("merkle_proof {}", req.commitment))
    }

    async fn tree_root(&self) -> Result<TreeRootResponse> {
        self.respond("tree_root".into())
    }

    async fn registration_status(&self, commitment: &str) -> Result<RegistrationStatusResponse> {
        self.respond(format!("registration_status {commitment}"))
    }
}

/// 已连接到 `api` 的应用
pub fn connected_app(api: Arc<FakeApi>) -> App {
    let client: SharedClient = api;
    App::new(Session::connected(
        client,
        "sk_test_abcdefghijkl".to_string(),
        "http://fake.local",
    ))
}

pub fn disconnected_app() -> App {
    App::new(Session::disconnected("http://fake.local"))
}

/// 依次投递按键，返回最后一个产生的命令
pub fn press(app: &mut App, keys: &[Key]) -> Option<Command> {
    let mut last = None;
    for key in keys {
        if let Some(cmd) = update(app, AppMessage::KeyInput(*key)) {
            last = Some(cmd);
        }
    }
    last
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        update(app, AppMessage::KeyInput(Key::Char(c)));
    }
}

/// 通过调度器执行命令，把产生的消息全部送回 `update`
pub async fn run_command(app: &mut App, cmd: Command) -> Vec<AppMessage> {
    let mut bus = MessageBus::new();
    let scheduler = Scheduler::new(bus.sender());
    scheduler.schedule(cmd).await.unwrap();

    let mut delivered = Vec::new();
    while let Some(msg) = bus.try_recv() {
        delivered.push(msg.clone());
        update(app, msg);
    }
    delivered
}
