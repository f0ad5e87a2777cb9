use crate::attempt::Attempt;
use std::fmt;
use std::sync::Arc;

/// 失败原因判定函数
pub type FailurePredicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;
/// 成功值判定函数
pub type ResultPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// 拒绝策略
///
/// 判断一次调用的结果是否“不可接受、需要重试”。失败的调用交给
/// `retry_on_failure` 判定，成功的调用交给 `retry_on_result` 判定。
///
/// # 注意
///
/// 未设置的判定函数永远不拒绝。如果两个都没有设置，**失败也会被接受**：
/// 第一次调用失败时引擎直接把原始错误返回给调用方，不会重试。
/// 需要“出错即重试”的语义时必须显式设置 `retry_on_failure`，例如
/// `RejectionPolicy::new().retry_on_failure(|_| true)`。
pub struct RejectionPolicy<T, E> {
    on_failure: Option<FailurePredicate<E>>,
    on_result: Option<ResultPredicate<T>>,
}

impl<T, E> RejectionPolicy<T, E> {
    /// 创建不拒绝任何结果的策略
    pub fn new() -> Self {
        Self {
            on_failure: None,
            on_result: None,
        }
    }

    /// 设置失败判定：返回 true 表示该失败需要重试
    #[must_use]
    pub fn retry_on_failure<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.on_failure = Some(Arc::new(predicate));
        self
    }

    /// 设置成功值判定：返回 true 表示该结果需要重试
    #[must_use]
    pub fn retry_on_result<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.on_result = Some(Arc::new(predicate));
        self
    }

    pub fn has_failure_predicate(&self) -> bool {
        self.on_failure.is_some()
    }

    pub fn has_result_predicate(&self) -> bool {
        self.on_result.is_some()
    }

    /// 该次调用结果是否应被拒绝（即需要重试）
    pub fn should_reject(&self, attempt: &Attempt<T, E>) -> bool {
        match attempt.get() {
            Err(error) => self.on_failure.as_ref().is_some_and(|p| p(error)),
            Ok(value) => self.on_result.as_ref().is_some_and(|p| p(value)),
        }
    }
}

impl<T, E> Default for RejectionPolicy<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for RejectionPolicy<T, E> {
    fn clone(&self) -> Self {
        Self {
            on_failure: self.on_failure.clone(),
            on_result: self.on_result.clone(),
        }
    }
}

impl<T, E> fmt::Debug for RejectionPolicy<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RejectionPolicy")
            .field("retry_on_failure", &self.on_failure.is_some())
            .field("retry_on_result", &self.on_result.is_some())
            .finish()
    }
}
