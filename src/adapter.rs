//! 包装器
//!
//! 把普通操作包装成闭包，每次调用闭包都会通过重试引擎执行一轮完整的重试循环。
//!
//! # 示例
//! ```rust
//! use flare_retry::{RetryEngine, StopPolicy, retry};
//!
//! # fn main() -> Result<(), flare_retry::ConfigError> {
//! let mut calls = 0;
//! let mut fetch = retry(
//!     RetryEngine::builder()
//!         .stop(StopPolicy::after_attempt(3))
//!         .retry_on_failure(|_: &String| true),
//!     move || {
//!         calls += 1;
//!         if calls < 2 { Err("not yet".to_string()) } else { Ok(calls) }
//!     },
//! )?;
//!
//! assert_eq!(fetch().ok(), Some(2));
//! # Ok(())
//! # }
//! ```

use crate::engine::RetryBuilder;
use crate::error::{ConfigResult, RetryError};

/// 包装无参操作
///
/// 引擎在包装时构建一次（参数在此时校验），之后每次调用都是独立的重试循环。
pub fn retry<T, E, F>(
    builder: RetryBuilder<T, E>,
    mut operation: F,
) -> ConfigResult<impl FnMut() -> Result<T, RetryError<T, E>>>
where
    F: FnMut() -> Result<T, E>,
{
    let engine = builder.build()?;
    Ok(move || engine.call(&mut operation))
}

/// 包装单参数操作
///
/// 每次尝试都会克隆一次参数。多个参数可以打包成元组传入。
pub fn retry_with<A, T, E, F>(
    builder: RetryBuilder<T, E>,
    mut operation: F,
) -> ConfigResult<impl FnMut(A) -> Result<T, RetryError<T, E>>>
where
    A: Clone,
    F: FnMut(A) -> Result<T, E>,
{
    let engine = builder.build()?;
    Ok(move |arg: A| engine.call(|| operation(arg.clone())))
}
