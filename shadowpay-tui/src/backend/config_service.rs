//! 配置服务
//!
//! 配置来源（后者覆盖前者）：
//!     1. 内置默认值
//!     2. `<config_dir>/shadowpay/config.json`（可选）
//!     3. 环境变量 `SHADOWPAY_API_KEY` / `SHADOWPAY_BASE_URL` / `SHADOWPAY_LOG`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shadowpay_client::DEFAULT_BASE_URL;
use thiserror::Error;

pub const ENV_API_KEY: &str = "SHADOWPAY_API_KEY";
pub const ENV_BASE_URL: &str = "SHADOWPAY_BASE_URL";
pub const ENV_LOG: &str = "SHADOWPAY_LOG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 去除空白后非空的 API Key
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// 用环境变量覆盖字段，`lookup` 便于测试时注入
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            self.log_filter = filter;
        }
    }
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 本地配置服务：JSON 文件 + 环境变量
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 使用平台配置目录下的默认路径
    pub fn new() -> Self {
        Self {
            path: default_config_path(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn load_file(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(AppConfig::default());
        };
        if !path.exists() {
            log::debug!("config file {} not found, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = self.load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }
}

/// `<config_dir>/shadowpay/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shadowpay").join("config.json"))
}
