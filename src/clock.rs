//! 时钟与休眠
//!
//! 引擎只通过这两个 trait 感知时间：`Clock` 用于计算累计耗时，
//! `Sleeper` 用于两次调用之间的阻塞等待。测试中可以替换为模拟实现。

use std::fmt;
use std::time::{Duration, Instant};

/// 毫秒级单调时钟
pub trait Clock: Send + Sync {
    /// 当前时间戳（毫秒），只用于计算差值
    fn now_ms(&self) -> u64;
}

/// 阻塞休眠
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// 基于 `Instant` 的系统时钟
#[derive(Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SystemClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClock").finish_non_exhaustive()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// 使用 `std::thread::sleep` 阻塞当前线程
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
