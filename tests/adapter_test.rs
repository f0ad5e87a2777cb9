//! 包装器测试

mod common;

use common::{init_tracing, simulated_time};
use flare_retry::{ConfigError, RetryEngine, RetryError, StopPolicy, WaitPolicy, retry, retry_with};

/// 测试：每次调用包装后的闭包都执行一轮独立的重试循环
#[test]
fn test_retry_runs_fresh_loop_per_call() {
    init_tracing();
    let (clock, sleeper) = simulated_time();
    let builder = RetryEngine::builder()
        .stop(StopPolicy::after_attempt(3))
        .wait(WaitPolicy::fixed(10))
        .retry_on_failure(|_: &String| true)
        .clock(clock)
        .sleeper(sleeper.clone());

    let mut invocations = 0u32;
    let mut flaky = retry(builder, move || {
        invocations += 1;
        // 奇数次失败，偶数次成功
        if invocations % 2 == 1 {
            Err(format!("invocation {invocations} failed"))
        } else {
            Ok(invocations)
        }
    })
    .expect("Failed to wrap operation");

    assert_eq!(flaky().ok(), Some(2));
    assert_eq!(flaky().ok(), Some(4));
    assert_eq!(sleeper.sleeps(), vec![10, 10]);
}

/// 测试：包装后的闭包返回耗尽错误
#[test]
fn test_retry_surfaces_exhaustion() {
    init_tracing();
    let (clock, sleeper) = simulated_time();
    let builder = RetryEngine::<u8, &str>::builder()
        .stop(StopPolicy::after_attempt(2))
        .retry_on_failure(|_| true)
        .clock(clock)
        .sleeper(sleeper);

    let mut always_down = retry(builder, || Err("down")).expect("Failed to wrap operation");

    for _ in 0..2 {
        match always_down() {
            Err(RetryError::Exhausted(e)) => {
                assert_eq!(e.failed_attempts(), 2);
                assert_eq!(e.last_attempt().error(), Some(&"down"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

/// 测试：参数在每次尝试时转发给操作
#[test]
fn test_retry_with_forwards_argument() {
    init_tracing();
    let (clock, sleeper) = simulated_time();
    let builder = RetryEngine::builder()
        .stop(StopPolicy::after_attempt(5))
        .retry_on_failure(|_: &String| true)
        .clock(clock)
        .sleeper(sleeper);

    let mut seen = Vec::new();
    let mut calls = 0u32;
    {
        let mut double = retry_with(builder, |n: u32| {
            seen.push(n);
            calls += 1;
            if calls < 3 {
                Err("not ready".to_string())
            } else {
                Ok(n * 2)
            }
        })
        .expect("Failed to wrap operation");

        assert_eq!(double(21).ok(), Some(42));
    }

    assert_eq!(seen, vec![21, 21, 21]);
}

/// 测试：参数非法时包装失败
#[test]
fn test_retry_rejects_invalid_config() {
    let builder = RetryEngine::<(), ()>::builder().wait(WaitPolicy::Random {
        min_ms: 9,
        max_ms: 3,
    });

    let wrapped = retry(builder, || Ok(()));
    assert!(matches!(
        wrapped,
        Err(ConfigError::InvalidRandomRange {
            min_ms: 9,
            max_ms: 3
        })
    ));
}
