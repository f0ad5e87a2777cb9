use crate::error::{ConfigError, ConfigResult};
use crate::retry::{StopPolicy, WaitPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// 重试配置
///
/// 可以从 TOML 加载，缺省字段取默认值：
///
/// ```toml
/// seed = 42
///
/// [stop]
/// kind = "stop_after_attempt"
/// max_attempt_number = 3
///
/// [wait]
/// kind = "random_sleep"
/// min_ms = 10
/// max_ms = 50
/// ```
///
/// 判定函数无法序列化，需要通过 [`RetryBuilder`](crate::RetryBuilder) 设置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    pub stop: StopPolicy,
    pub wait: WaitPolicy,
    /// 随机等待的种子，不设置时使用系统熵源
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RetryConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置停止策略
    pub fn with_stop(mut self, stop: StopPolicy) -> Self {
        self.stop = stop;
        self
    }

    /// 设置等待策略
    pub fn with_wait(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    /// 设置随机种子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 校验数值范围
    pub fn validate(&self) -> ConfigResult<()> {
        self.wait.validate()
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: RetryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载并校验
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;

        info!(
            path = %path.display(),
            stop = config.stop.name(),
            wait = config.wait.name(),
            "Loaded retry config"
        );

        Ok(config)
    }
}
