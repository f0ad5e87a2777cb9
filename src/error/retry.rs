//! 引擎返回的错误类型

use super::code::ErrorCode;
use super::exhausted::RetryExhaustedError;
use std::error::Error;
use std::fmt;

/// `RetryEngine::call` 的错误
///
/// 两种终止失败互不混淆：
/// - `Failed`：某次调用失败，但拒绝策略接受了它，原样返回原始错误
/// - `Exhausted`：停止策略终止了重试
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryError<T, E> {
    /// 被接受的失败（原始错误）
    Failed(E),

    /// 重试耗尽
    Exhausted(RetryExhaustedError<T, E>),
}

impl<T, E> RetryError<T, E> {
    /// 获取错误代码
    pub fn code(&self) -> ErrorCode {
        match self {
            RetryError::Failed(_) => ErrorCode::OperationFailed,
            RetryError::Exhausted(_) => ErrorCode::RetryExhausted,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, RetryError::Exhausted(_))
    }

    /// 重试耗尽时的总调用次数
    pub fn attempts(&self) -> Option<u32> {
        match self {
            RetryError::Failed(_) => None,
            RetryError::Exhausted(exhausted) => Some(exhausted.failed_attempts()),
        }
    }

    pub fn as_exhausted(&self) -> Option<&RetryExhaustedError<T, E>> {
        match self {
            RetryError::Exhausted(exhausted) => Some(exhausted),
            RetryError::Failed(_) => None,
        }
    }

    /// 取出底层失败原因
    ///
    /// 重试耗尽且最后一次是被拒绝的成功值时返回 `None`。
    pub fn into_failure(self) -> Option<E> {
        match self {
            RetryError::Failed(error) => Some(error),
            RetryError::Exhausted(exhausted) => exhausted.into_last_attempt().into_result().err(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug + fmt::Display> fmt::Display for RetryError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Failed(error) => write!(f, "{error}"),
            RetryError::Exhausted(exhausted) => write!(f, "{exhausted}"),
        }
    }
}

impl<T, E> Error for RetryError<T, E>
where
    T: fmt::Debug + 'static,
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RetryError::Failed(error) => error.source(),
            RetryError::Exhausted(exhausted) => Some(exhausted),
        }
    }
}

impl<T, E> From<RetryExhaustedError<T, E>> for RetryError<T, E> {
    fn from(error: RetryExhaustedError<T, E>) -> Self {
        RetryError::Exhausted(error)
    }
}
