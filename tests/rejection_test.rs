//! 拒绝策略测试
//!
//! 失败只交给失败判定，成功值只交给成功值判定，未设置的判定永远不拒绝。

mod common;

use common::{init_tracing, simulated_time};
use flare_retry::{Attempt, RejectionPolicy, RetryEngine, RetryError, StopPolicy, WaitPolicy};
use std::cell::Cell;

/// 测试：只设置成功值判定时，失败不会被拒绝
#[test]
fn test_result_predicate_ignores_failures() {
    let policy = RejectionPolicy::<u32, &str>::new().retry_on_result(|_| true);
    assert!(policy.has_result_predicate());
    assert!(!policy.has_failure_predicate());
    assert!(!policy.should_reject(&Attempt::failure("boom", 1)));
    assert!(policy.should_reject(&Attempt::success(7, 1)));
}

/// 测试：只设置失败判定时，成功值不会被拒绝
#[test]
fn test_failure_predicate_ignores_successes() {
    let policy = RejectionPolicy::<u32, &str>::new().retry_on_failure(|_| true);
    assert!(policy.has_failure_predicate());
    assert!(!policy.has_result_predicate());
    assert!(!policy.should_reject(&Attempt::success(7, 1)));
    assert!(policy.should_reject(&Attempt::failure("boom", 1)));
}

/// 测试：未设置任何判定时什么都不拒绝
#[test]
fn test_empty_policy_rejects_nothing() {
    let policy = RejectionPolicy::<u32, &str>::default();
    assert!(!policy.has_failure_predicate());
    assert!(!policy.has_result_predicate());
    assert!(!policy.should_reject(&Attempt::success(0, 1)));
    assert!(!policy.should_reject(&Attempt::failure("boom", 1)));
}

/// 测试：引擎只有成功值判定时，失败在第一次调用后原样返回
#[test]
fn test_engine_with_result_predicate_accepts_failure() {
    init_tracing();
    let (clock, sleeper) = simulated_time();
    let engine = RetryEngine::<u32, &str>::builder()
        .stop(StopPolicy::never())
        .wait(WaitPolicy::fixed(10))
        .rejection(RejectionPolicy::new().retry_on_result(|_| true))
        .clock(clock)
        .sleeper(sleeper.clone())
        .build()
        .expect("Failed to build engine");

    assert!(engine.rejection_policy().has_result_predicate());
    assert!(!engine.rejection_policy().has_failure_predicate());

    let calls = Cell::new(0u32);
    let result = engine.call(|| {
        calls.set(calls.get() + 1);
        Err("boom")
    });

    assert_eq!(calls.get(), 1);
    assert!(sleeper.sleeps().is_empty());
    assert!(matches!(result, Err(RetryError::Failed("boom"))));
}

/// 测试：引擎只有失败判定时，成功值直接被接受
#[test]
fn test_engine_with_failure_predicate_accepts_success() {
    init_tracing();
    let (clock, sleeper) = simulated_time();
    let engine = RetryEngine::<u32, &str>::builder()
        .stop(StopPolicy::never())
        .rejection(RejectionPolicy::new().retry_on_failure(|_| true))
        .clock(clock)
        .sleeper(sleeper)
        .build()
        .expect("Failed to build engine");

    let calls = Cell::new(0u32);
    let result = engine.call(|| {
        calls.set(calls.get() + 1);
        Ok(0)
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(result.ok(), Some(0));
}

/// 测试：同时设置两种判定时，失败与被拒绝的成功值交替出现都会重试
#[test]
fn test_both_predicates_on_mixed_outcomes() {
    init_tracing();
    let (clock, sleeper) = simulated_time();
    let engine = RetryEngine::<u32, String>::builder()
        .stop(StopPolicy::after_attempt(10))
        .wait(WaitPolicy::incrementing(5, 5))
        .rejection(
            RejectionPolicy::new()
                .retry_on_failure(|e: &String| e.starts_with("retryable"))
                .retry_on_result(|value: &u32| *value < 100),
        )
        .clock(clock)
        .sleeper(sleeper.clone())
        .build()
        .expect("Failed to build engine");

    let outcomes: Vec<Result<u32, String>> = vec![
        Err("retryable: timeout".to_string()),
        Ok(3),
        Err("retryable: reset".to_string()),
        Ok(42),
        Ok(250),
    ];
    let mut remaining = outcomes.into_iter();
    let result = engine.call(|| {
        remaining
            .next()
            .expect("operation called more often than scripted")
    });

    assert_eq!(result.ok(), Some(250));
    assert_eq!(sleeper.sleeps(), vec![5, 10, 15, 20]);

    // 不满足失败判定的错误被直接接受
    let mut outcomes = vec![Ok(1), Err("fatal: disk full".to_string())].into_iter();
    let result = engine.call(|| {
        outcomes
            .next()
            .expect("operation called more often than scripted")
    });
    assert_eq!(sleeper.sleeps(), vec![5, 10, 15, 20, 5]);
    match result {
        Err(RetryError::Failed(e)) => assert_eq!(e, "fatal: disk full"),
        other => panic!("expected the fatal failure, got {other:?}"),
    }
}

/// 测试：拒绝策略可以克隆并在多个引擎间共享
#[test]
fn test_rejection_policy_shared_between_engines() {
    let policy = RejectionPolicy::<u32, &str>::new()
        .retry_on_failure(|e| *e == "busy")
        .retry_on_result(|value| *value == 0);

    for max in [2u32, 4] {
        let (clock, sleeper) = simulated_time();
        let engine = RetryEngine::builder()
            .stop(StopPolicy::after_attempt(max))
            .rejection(policy.clone())
            .clock(clock)
            .sleeper(sleeper)
            .build()
            .expect("Failed to build engine");

        let err = engine.call(|| Err("busy")).expect_err("should exhaust");
        assert_eq!(err.attempts(), Some(max));
    }

    assert_eq!(
        format!("{policy:?}"),
        "RejectionPolicy { retry_on_failure: true, retry_on_result: true }"
    );
}
