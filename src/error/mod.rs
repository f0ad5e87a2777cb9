//! Flare Retry 错误处理模块
//!
//! 区分三类错误：
//! - 配置错误（构建引擎或加载配置文件时产生）
//! - 被接受的操作失败（原样返回原始错误）
//! - 重试耗尽（携带调用次数和最后一次调用记录）

pub mod code;
pub mod exhausted;
pub mod retry;

pub use code::ErrorCode;
pub use exhausted::RetryExhaustedError;
pub use retry::RetryError;

use std::path::PathBuf;
use thiserror::Error;

/// 配置错误
///
/// 所有数值范围在构建阶段校验，策略函数本身不会失败。
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 随机等待的下界大于上界
    #[error("invalid random wait range: min_ms ({min_ms}) > max_ms ({max_ms})")]
    InvalidRandomRange { min_ms: u64, max_ms: u64 },

    /// 配置文件读取失败
    #[error("failed to read retry config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("failed to parse retry config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// 获取错误代码
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::InvalidRandomRange { .. } | ConfigError::Parse(_) => {
                ErrorCode::InvalidConfiguration
            }
            ConfigError::Read { .. } => ErrorCode::ConfigurationUnreadable,
        }
    }
}

/// 配置相关操作的结果类型
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
