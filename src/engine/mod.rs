//! 重试引擎
//!
//! 驱动单个逻辑操作的顺序调用：
//! 调用操作 → 记录为 `Attempt` → 拒绝策略判定 → 接受则返回；
//! 否则询问停止策略 → 停止则返回 `RetryError::Exhausted`；
//! 否则按等待策略休眠后进行下一次调用。

pub mod builder;

pub use builder::RetryBuilder;

use crate::attempt::Attempt;
use crate::clock::{Clock, Sleeper};
use crate::error::{RetryError, RetryExhaustedError};
use crate::retry::{RejectionPolicy, StopPolicy, WaitPolicy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// 随机等待策略使用的随机源
///
/// 每次 `call` 开始时创建新的生成器，引擎本身不持有可变状态。
/// 使用 `Seeded` 时每次 `call` 得到相同的等待序列。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    /// 系统熵源
    #[default]
    Entropy,
    /// 固定种子
    Seeded(u64),
}

impl RandomSource {
    fn rng(&self) -> StdRng {
        match *self {
            RandomSource::Entropy => StdRng::from_entropy(),
            RandomSource::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// 重试引擎
///
/// 构建后配置不可变。同一个引擎可以被多个线程同时使用，
/// 每个线程的 `call` 是一个互不影响的重试循环。
pub struct RetryEngine<T, E> {
    stop: StopPolicy,
    wait: WaitPolicy,
    rejection: RejectionPolicy<T, E>,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
    random: RandomSource,
}

impl<T, E> RetryEngine<T, E> {
    /// 创建构建器
    pub fn builder() -> RetryBuilder<T, E> {
        RetryBuilder::new()
    }

    pub fn stop_policy(&self) -> StopPolicy {
        self.stop
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        self.wait
    }

    pub fn rejection_policy(&self) -> &RejectionPolicy<T, E> {
        &self.rejection
    }

    pub fn random_source(&self) -> RandomSource {
        self.random
    }

    /// 通过重试循环执行操作
    ///
    /// # 返回
    /// * `Ok(value)` - 某次调用成功且结果被接受
    /// * `Err(RetryError::Failed(e))` - 某次调用失败，但拒绝策略接受了该失败
    /// * `Err(RetryError::Exhausted(..))` - 停止策略在得到可接受结果前终止了重试
    ///
    /// 循环次数只受停止策略约束：`StopPolicy::Never` 配合总是拒绝的策略会一直重试。
    /// 调用序号是 `u32`，达到 `u32::MAX` 后不再递增，之后的调用都记为 `u32::MAX`。
    pub fn call<F>(&self, mut operation: F) -> Result<T, RetryError<T, E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        let start_ms = self.clock.now_ms();
        let mut rng = self.random.rng();
        let mut attempt_number: u32 = 1;

        loop {
            let attempt = Attempt::new(operation(), attempt_number);

            if !self.rejection.should_reject(&attempt) {
                debug!(
                    attempt = attempt_number,
                    failed = attempt.is_failure(),
                    "Attempt accepted"
                );
                return attempt.into_result().map_err(RetryError::Failed);
            }

            let elapsed_ms = self.clock.now_ms().saturating_sub(start_ms);

            if self.stop.should_stop(attempt_number, elapsed_ms) {
                warn!(
                    attempts = attempt_number,
                    elapsed_ms = elapsed_ms,
                    stop = self.stop.name(),
                    "Retry attempts exhausted"
                );
                return Err(RetryError::Exhausted(RetryExhaustedError::new(
                    attempt_number,
                    attempt,
                )));
            }

            let delay_ms = self.wait.wait_ms(attempt_number, elapsed_ms, &mut rng);
            debug!(
                attempt = attempt_number,
                failed = attempt.is_failure(),
                elapsed_ms = elapsed_ms,
                delay_ms = delay_ms,
                "Attempt rejected, retrying..."
            );

            if delay_ms > 0 {
                self.sleeper.sleep(Duration::from_millis(delay_ms));
            }

            attempt_number = attempt_number.saturating_add(1);
        }
    }
}

impl<T, E> Clone for RetryEngine<T, E> {
    fn clone(&self) -> Self {
        Self {
            stop: self.stop,
            wait: self.wait,
            rejection: self.rejection.clone(),
            clock: Arc::clone(&self.clock),
            sleeper: Arc::clone(&self.sleeper),
            random: self.random,
        }
    }
}

impl<T, E> fmt::Debug for RetryEngine<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryEngine")
            .field("stop", &self.stop)
            .field("wait", &self.wait)
            .field("rejection", &self.rejection)
            .field("random", &self.random)
            .field("clock", &"<clock>")
            .field("sleeper", &"<sleeper>")
            .finish()
    }
}
