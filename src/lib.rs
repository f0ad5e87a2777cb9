//! Flare Retry
//!
//! 同步重试执行引擎：包装任意可能失败的操作，按照停止、等待、拒绝三类策略
//! 反复调用，直到结果被接受或停止策略终止重试。
//!
//! ```rust
//! use flare_retry::{RetryEngine, RetryError, StopPolicy, WaitPolicy};
//!
//! # fn main() -> Result<(), flare_retry::ConfigError> {
//! let engine = RetryEngine::builder()
//!     .stop(StopPolicy::after_attempt(3))
//!     .wait(WaitPolicy::no_wait())
//!     .retry_on_failure(|_: &&str| true)
//!     .build()?;
//!
//! let result: Result<u32, _> = engine.call(|| Err("unavailable"));
//! match result {
//!     Err(RetryError::Exhausted(e)) => assert_eq!(e.failed_attempts(), 3),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod attempt;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod retry;

// Re-exports
pub use adapter::{retry, retry_with};
pub use attempt::Attempt;
pub use clock::{Clock, Sleeper, SystemClock, ThreadSleeper};
pub use config::RetryConfig;
pub use engine::{RandomSource, RetryBuilder, RetryEngine};
pub use error::{ConfigError, ConfigResult, ErrorCode, RetryError, RetryExhaustedError};
pub use retry::{RejectionPolicy, StopPolicy, WaitPolicy};
