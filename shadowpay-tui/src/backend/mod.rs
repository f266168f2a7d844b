//! src/backend/mod.rs
//! Backend 层：配置与远端会话
//!
//! Backend 层与 UI 解耦，只负责在启动时：
//! 1. 通过 `ConfigService` 加载配置（文件 + 环境变量）
//! 2. 依据配置构造 `Session`
//!
//! ```text
//! AppConfig ──▶ build_session() ──┬── 有 API Key ──▶ Session::connected(ShadowPayClient)
//!                                 └── 无 API Key ──▶ Session::disconnected
//! ```
//!
//! 真正的 API 调用由 `shadowpay-client` 完成，
//! 在 operations/ 构造的 `Command` 中异步执行。

mod config_service;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use shadowpay_client::{mask_secret, ShadowPayClient};

pub use config_service::{
    default_config_path, AppConfig, ConfigError, ConfigService, LocalConfigService,
};

use crate::model::{Session, SharedClient};

/// 依据配置构造会话；未配置 API Key 时返回未连接的会话
pub fn build_session(config: &AppConfig) -> Result<Session> {
    let Some(key) = config.api_key() else {
        log::info!("no API key configured, starting disconnected");
        return Ok(Session::disconnected(config.base_url.clone()));
    };

    let client = ShadowPayClient::builder()
        .base_url(config.base_url.clone())
        .api_key(key)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("failed to create ShadowPay client")?;

    log::info!(
        "connected to {} with key {}",
        client.base_url(),
        mask_secret(key)
    );

    let base_url = client.base_url().to_string();
    let client: SharedClient = Arc::new(client);
    Ok(Session::connected(client, key.to_string(), base_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_means_disconnected() {
        let session = build_session(&AppConfig::default()).unwrap();
        assert!(!session.is_connected());
        assert_eq!(session.base_url, shadowpay_client::DEFAULT_BASE_URL);
    }

    #[test]
    fn key_means_connected() {
        let config = AppConfig {
            api_key: Some("sk_test_abcdefghijkl".into()),
            base_url: "http://127.0.0.1:9/".into(),
            ..AppConfig::default()
        };
        let session = build_session(&config).unwrap();
        assert!(session.is_connected());
        assert_eq!(session.base_url, "http://127.0.0.1:9");
        assert_eq!(session.masked_key().as_deref(), Some("sk_t...ijkl"));
    }

    #[test]
    fn bad_base_url_is_an_error() {
        let config = AppConfig {
            api_key: Some("sk_test".into()),
            base_url: "ftp://example.com".into(),
            ..AppConfig::default()
        };
        assert!(build_session(&config).is_err());
    }
}
