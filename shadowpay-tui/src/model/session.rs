use std::path::PathBuf;

use shadowpay_client::mask_secret_display;

use super::SharedClient;

/// 与远端 API 的会话
#[derive(Clone, Default)]
pub struct Session {
    /// 仅在配置了 API Key 时存在
    pub client: Option<SharedClient>,
    pub api_key: Option<String>,
    pub base_url: String,
    /// 配置文件路径（用于设置页提示）
    pub config_path: Option<PathBuf>,
}

impl Session {
    /// 已连接的会话
    pub fn connected(client: SharedClient, api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Some(client),
            api_key: Some(api_key),
            base_url: base_url.into(),
            config_path: None,
        }
    }

    /// 未配置 API Key 的会话
    pub fn disconnected(base_url: impl Into<String>) -> Self {
        Self {
            client: None,
            api_key: None,
            base_url: base_url.into(),
            config_path: None,
        }
    }

    #[must_use]
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// 设置页展示用的密钥：超过 12 个字符时只保留首尾各 4 个
    pub fn masked_key(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_secret_display)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("connected", &self.is_connected())
            .field("api_key", &self.masked_key())
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_key_is_masked() {
        let mut session = Session::disconnected("https://shadow.radr.fun");
        session.api_key = Some("sk_live_abcdefghijkl".to_string());
        assert_eq!(session.masked_key().as_deref(), Some("sk_l...ijkl"));
    }

    #[test]
    fn short_key_shown_as_is() {
        let mut session = Session::disconnected("https://shadow.radr.fun");
        session.api_key = Some("abc123".to_string());
        assert_eq!(session.masked_key().as_deref(), Some("abc123"));
    }

    #[test]
    fn disconnected_has_no_key() {
        let session = Session::disconnected("https://shadow.radr.fun");
        assert!(!session.is_connected());
        assert!(session.masked_key().is_none());
    }
}
