//! 重试耗尽错误

use crate::attempt::Attempt;
use std::error::Error;
use std::fmt;

/// 停止策略在得到可接受结果之前终止重试时返回的错误
///
/// 保存总调用次数和最后一次调用的记录。最后一次记录可能是被拒绝的成功值，
/// 也可能是失败原因，调用方可以通过 [`last_attempt`](Self::last_attempt) 检查。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryExhaustedError<T, E> {
    failed_attempts: u32,
    last_attempt: Attempt<T, E>,
}

impl<T, E> RetryExhaustedError<T, E> {
    pub fn new(failed_attempts: u32, last_attempt: Attempt<T, E>) -> Self {
        Self {
            failed_attempts,
            last_attempt,
        }
    }

    /// 总调用次数
    #[inline]
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// 最后一次调用的记录
    pub fn last_attempt(&self) -> &Attempt<T, E> {
        &self.last_attempt
    }

    pub fn into_last_attempt(self) -> Attempt<T, E> {
        self.last_attempt
    }

    pub fn into_parts(self) -> (u32, Attempt<T, E>) {
        (self.failed_attempts, self.last_attempt)
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for RetryExhaustedError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed attempts: {}, Last attempt: {}",
            self.failed_attempts, self.last_attempt
        )
    }
}

impl<T, E> Error for RetryExhaustedError<T, E>
where
    T: fmt::Debug,
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.last_attempt.error().map(|e| e as &(dyn Error + 'static))
    }
}
