//! 单次调用结果
//!
//! `Attempt` 记录被包装操作一次调用的结果（成功值或失败原因）及其序号。
//! 引擎每次调用创建一个 `Attempt`，交给拒绝策略检查；重试耗尽时最后一个
//! `Attempt` 会保存在 [`RetryExhaustedError`](crate::RetryExhaustedError) 中。

use std::fmt;

/// 一次调用的不可变记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt<T, E> {
    outcome: Result<T, E>,
    attempt_number: u32,
}

impl<T, E> Attempt<T, E> {
    /// 根据操作返回值创建记录，`attempt_number` 从 1 开始
    pub fn new(outcome: Result<T, E>, attempt_number: u32) -> Self {
        Self {
            outcome,
            attempt_number,
        }
    }

    /// 创建成功记录
    pub fn success(value: T, attempt_number: u32) -> Self {
        Self::new(Ok(value), attempt_number)
    }

    /// 创建失败记录
    pub fn failure(error: E, attempt_number: u32) -> Self {
        Self::new(Err(error), attempt_number)
    }

    /// 第几次调用
    #[inline]
    pub fn attempt_number(&self) -> u32 {
        self.attempt_number
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// 原始结果的引用
    pub fn outcome(&self) -> &Result<T, E> {
        &self.outcome
    }

    /// 成功值（失败时为 `None`）
    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    /// 失败原因（成功时为 `None`）
    pub fn error(&self) -> Option<&E> {
        self.outcome.as_ref().err()
    }

    /// 借用方式取出结果：成功返回值，失败返回原始错误
    pub fn get(&self) -> Result<&T, &E> {
        self.outcome.as_ref()
    }

    /// 消费记录并还原操作的原始返回值
    pub fn into_result(self) -> Result<T, E> {
        self.outcome
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for Attempt<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(f, "Attempt #{}: Ok({value:?})", self.attempt_number),
            Err(error) => write!(f, "Attempt #{}: Err({error:?})", self.attempt_number),
        }
    }
}
