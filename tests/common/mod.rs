//! 测试辅助：模拟时钟与休眠
//!
//! `SimulatedSleeper` 不真正阻塞，而是把等待时间累加到 `ManualClock` 上，
//! 这样基于耗时的停止策略可以在不依赖真实时间的情况下验证。

#![allow(dead_code)]

use flare_retry::{Clock, Sleeper};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// 安装测试日志（可通过 RUST_LOG 调整级别）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flare_retry=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// 手动推进的时钟
#[derive(Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

/// 记录每次休眠并推进模拟时钟
#[derive(Clone, Default)]
pub struct SimulatedSleeper {
    clock: ManualClock,
    sleeps: Arc<Mutex<Vec<u64>>>,
}

impl SimulatedSleeper {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 已记录的休眠时长（毫秒）
    pub fn sleeps(&self) -> Vec<u64> {
        self.sleeps.lock().expect("sleeps lock poisoned").clone()
    }
}

impl Sleeper for SimulatedSleeper {
    fn sleep(&self, duration: Duration) {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.sleeps.lock().expect("sleeps lock poisoned").push(ms);
        self.clock.advance(ms);
    }
}

/// 创建一对共享时间线的模拟时钟与休眠
pub fn simulated_time() -> (ManualClock, SimulatedSleeper) {
    let clock = ManualClock::new();
    let sleeper = SimulatedSleeper::new(clock.clone());
    (clock, sleeper)
}
