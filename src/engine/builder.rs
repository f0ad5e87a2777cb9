//! 重试引擎构建器
//!
//! 提供链式 API 组装策略，并在 `build` 时校验参数

use super::{RandomSource, RetryEngine};
use crate::clock::{Clock, Sleeper, SystemClock, ThreadSleeper};
use crate::config::RetryConfig;
use crate::error::ConfigResult;
use crate::retry::{RejectionPolicy, StopPolicy, WaitPolicy};
use std::fmt;
use std::sync::Arc;

/// 重试引擎构建器
pub struct RetryBuilder<T, E> {
    stop: StopPolicy,
    wait: WaitPolicy,
    rejection: RejectionPolicy<T, E>,
    clock: Option<Arc<dyn Clock>>,
    sleeper: Option<Arc<dyn Sleeper>>,
    random: RandomSource,
}

impl<T, E> RetryBuilder<T, E> {
    /// 默认：永不停止、不等待、不拒绝任何结果
    pub fn new() -> Self {
        Self {
            stop: StopPolicy::default(),
            wait: WaitPolicy::default(),
            rejection: RejectionPolicy::default(),
            clock: None,
            sleeper: None,
            random: RandomSource::default(),
        }
    }

    /// 设置停止策略
    #[must_use]
    pub fn stop(mut self, stop: StopPolicy) -> Self {
        self.stop = stop;
        self
    }

    /// 设置等待策略
    #[must_use]
    pub fn wait(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    /// 替换整个拒绝策略
    #[must_use]
    pub fn rejection(mut self, rejection: RejectionPolicy<T, E>) -> Self {
        self.rejection = rejection;
        self
    }

    /// 失败判定：返回 true 表示该失败需要重试
    ///
    /// 不设置时失败会被直接接受并返回给调用方，见 [`RejectionPolicy`]。
    #[must_use]
    pub fn retry_on_failure<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.rejection = self.rejection.retry_on_failure(predicate);
        self
    }

    /// 成功值判定：返回 true 表示该结果需要重试
    #[must_use]
    pub fn retry_on_result<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rejection = self.rejection.retry_on_result(predicate);
        self
    }

    /// 注入时钟
    #[must_use]
    pub fn clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// 注入休眠实现
    #[must_use]
    pub fn sleeper<S>(mut self, sleeper: S) -> Self
    where
        S: Sleeper + 'static,
    {
        self.sleeper = Some(Arc::new(sleeper));
        self
    }

    /// 使用固定种子的随机源
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.random = RandomSource::Seeded(seed);
        self
    }

    #[must_use]
    pub fn random_source(mut self, random: RandomSource) -> Self {
        self.random = random;
        self
    }

    /// 应用配置文件中的停止、等待策略和随机种子
    #[must_use]
    pub fn config(mut self, config: &RetryConfig) -> Self {
        self.stop = config.stop;
        self.wait = config.wait;
        if let Some(seed) = config.seed {
            self.random = RandomSource::Seeded(seed);
        }
        self
    }

    /// 校验参数并构建引擎
    pub fn build(self) -> ConfigResult<RetryEngine<T, E>> {
        self.wait.validate()?;

        Ok(RetryEngine {
            stop: self.stop,
            wait: self.wait,
            rejection: self.rejection,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            sleeper: self.sleeper.unwrap_or_else(|| Arc::new(ThreadSleeper)),
            random: self.random,
        })
    }
}

impl<T, E> Default for RetryBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for RetryBuilder<T, E> {
    fn clone(&self) -> Self {
        Self {
            stop: self.stop,
            wait: self.wait,
            rejection: self.rejection.clone(),
            clock: self.clock.clone(),
            sleeper: self.sleeper.clone(),
            random: self.random,
        }
    }
}

impl<T, E> fmt::Debug for RetryBuilder<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryBuilder")
            .field("stop", &self.stop)
            .field("wait", &self.wait)
            .field("rejection", &self.rejection)
            .field("random", &self.random)
            .finish_non_exhaustive()
    }
}
