//! 错误代码定义
//!
//! 为本 crate 返回的每一种错误提供稳定的分类标识

use serde::{Deserialize, Serialize};
use std::fmt;

/// 错误代码枚举
///
/// 错误代码按类别分组：
/// - 1000-1999: 配置相关错误
/// - 2000-2999: 执行相关错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum ErrorCode {
    // ============================================================
    // 配置相关错误 (1000-1999)
    // ============================================================
    InvalidConfiguration = 1000,
    ConfigurationUnreadable = 1001,

    // ============================================================
    // 执行相关错误 (2000-2999)
    // ============================================================
    /// 操作失败且拒绝策略接受了该失败
    OperationFailed = 2000,
    /// 停止策略在得到可接受结果之前终止了重试
    RetryExhausted = 2001,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ErrorCode {
    /// 获取错误代码的数字值
    #[inline]
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// 从数字值创建错误代码
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            1000 => Some(ErrorCode::InvalidConfiguration),
            1001 => Some(ErrorCode::ConfigurationUnreadable),
            2000 => Some(ErrorCode::OperationFailed),
            2001 => Some(ErrorCode::RetryExhausted),
            _ => None,
        }
    }

    /// 获取错误代码的英文标识符
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorCode::ConfigurationUnreadable => "CONFIGURATION_UNREADABLE",
            ErrorCode::OperationFailed => "OPERATION_FAILED",
            ErrorCode::RetryExhausted => "RETRY_EXHAUSTED",
        }
    }

    /// 是否为配置阶段产生的错误
    pub fn is_configuration(&self) -> bool {
        matches!(self.as_u32(), 1000..=1999)
    }
}
