use crate::error::{ConfigError, ConfigResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 默认固定等待（毫秒）
pub const DEFAULT_WAIT_FIXED_MS: u64 = 1000;
/// 默认随机等待下界（毫秒）
pub const DEFAULT_WAIT_RANDOM_MIN_MS: u64 = 0;
/// 默认随机等待上界（毫秒）
pub const DEFAULT_WAIT_RANDOM_MAX_MS: u64 = 1000;
/// 默认递增等待起始值（毫秒）
pub const DEFAULT_WAIT_INCREMENTING_START_MS: i64 = 0;
/// 默认递增步长（毫秒）
pub const DEFAULT_WAIT_INCREMENTING_INCREMENT_MS: i64 = 100;
/// 默认指数等待乘数
pub const DEFAULT_WAIT_EXPONENTIAL_MULTIPLIER: u64 = 1;
/// 默认指数等待上限（毫秒）
pub const DEFAULT_WAIT_EXPONENTIAL_MAX_MS: u64 = u64::MAX;

/// 等待策略
///
/// 在停止策略决定继续重试之后，计算下一次调用前需要休眠的毫秒数。
/// 结果总是非负的。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WaitPolicy {
    /// 不等待
    #[default]
    #[serde(rename = "no_sleep")]
    NoWait,

    /// 固定等待
    #[serde(rename = "fixed_sleep")]
    Fixed {
        #[serde(default = "default_fixed_ms")]
        fixed_ms: u64,
    },

    /// `[min_ms, max_ms]` 闭区间内均匀随机
    #[serde(rename = "random_sleep")]
    Random {
        #[serde(default = "default_random_min_ms")]
        min_ms: u64,
        #[serde(default = "default_random_max_ms")]
        max_ms: u64,
    },

    /// `start_ms + increment_ms * (n - 1)`，下限为 0
    #[serde(rename = "incrementing_sleep")]
    Incrementing {
        #[serde(default = "default_incrementing_start_ms")]
        start_ms: i64,
        #[serde(default = "default_incrementing_increment_ms")]
        increment_ms: i64,
    },

    /// `min(multiplier * 2^n, max_ms)`，溢出时饱和
    #[serde(rename = "exponential_sleep")]
    Exponential {
        #[serde(default = "default_exponential_multiplier")]
        multiplier: u64,
        #[serde(default = "default_exponential_max_ms")]
        max_ms: u64,
    },
}

fn default_fixed_ms() -> u64 {
    DEFAULT_WAIT_FIXED_MS
}

fn default_random_min_ms() -> u64 {
    DEFAULT_WAIT_RANDOM_MIN_MS
}

fn default_random_max_ms() -> u64 {
    DEFAULT_WAIT_RANDOM_MAX_MS
}

fn default_incrementing_start_ms() -> i64 {
    DEFAULT_WAIT_INCREMENTING_START_MS
}

fn default_incrementing_increment_ms() -> i64 {
    DEFAULT_WAIT_INCREMENTING_INCREMENT_MS
}

fn default_exponential_multiplier() -> u64 {
    DEFAULT_WAIT_EXPONENTIAL_MULTIPLIER
}

fn default_exponential_max_ms() -> u64 {
    DEFAULT_WAIT_EXPONENTIAL_MAX_MS
}

impl WaitPolicy {
    pub fn no_wait() -> Self {
        WaitPolicy::NoWait
    }

    pub fn fixed(fixed_ms: u64) -> Self {
        WaitPolicy::Fixed { fixed_ms }
    }

    /// 创建随机等待策略，`min_ms > max_ms` 时返回配置错误
    pub fn random(min_ms: u64, max_ms: u64) -> ConfigResult<Self> {
        let policy = WaitPolicy::Random { min_ms, max_ms };
        policy.validate()?;
        Ok(policy)
    }

    pub fn incrementing(start_ms: i64, increment_ms: i64) -> Self {
        WaitPolicy::Incrementing {
            start_ms,
            increment_ms,
        }
    }

    pub fn exponential(multiplier: u64, max_ms: u64) -> Self {
        WaitPolicy::Exponential { multiplier, max_ms }
    }

    /// 校验参数范围
    pub fn validate(&self) -> ConfigResult<()> {
        match *self {
            WaitPolicy::Random { min_ms, max_ms } if min_ms > max_ms => {
                Err(ConfigError::InvalidRandomRange { min_ms, max_ms })
            }
            _ => Ok(()),
        }
    }

    /// 计算下一次调用前的等待毫秒数
    ///
    /// # 参数
    /// * `previous_attempt_number` - 刚完成的调用序号（从 1 开始）
    /// * `elapsed_ms` - 自首次调用开始以来的毫秒数
    /// * `rng` - 随机源，仅 `Random` 使用
    ///
    /// # Panics
    /// `Random` 的区间未通过 [`validate`](Self::validate)（`min_ms > max_ms`）时 panic。
    pub fn wait_ms<R>(&self, previous_attempt_number: u32, _elapsed_ms: u64, rng: &mut R) -> u64
    where
        R: Rng + ?Sized,
    {
        match *self {
            WaitPolicy::NoWait => 0,
            WaitPolicy::Fixed { fixed_ms } => fixed_ms,
            WaitPolicy::Random { min_ms, max_ms } => {
                debug_assert!(min_ms <= max_ms, "random wait range must be validated");
                rng.gen_range(min_ms..=max_ms)
            }
            WaitPolicy::Incrementing {
                start_ms,
                increment_ms,
            } => incrementing_ms(start_ms, increment_ms, previous_attempt_number),
            WaitPolicy::Exponential { multiplier, max_ms } => {
                exponential_ms(multiplier, max_ms, previous_attempt_number)
            }
        }
    }

    /// 配置文件中使用的名称
    pub fn name(&self) -> &'static str {
        match self {
            WaitPolicy::NoWait => "no_sleep",
            WaitPolicy::Fixed { .. } => "fixed_sleep",
            WaitPolicy::Random { .. } => "random_sleep",
            WaitPolicy::Incrementing { .. } => "incrementing_sleep",
            WaitPolicy::Exponential { .. } => "exponential_sleep",
        }
    }
}

fn incrementing_ms(start_ms: i64, increment_ms: i64, previous_attempt_number: u32) -> u64 {
    let steps = i64::from(previous_attempt_number) - 1;
    let result = start_ms.saturating_add(increment_ms.saturating_mul(steps));
    u64::try_from(result).unwrap_or(0)
}

fn exponential_ms(multiplier: u64, max_ms: u64, previous_attempt_number: u32) -> u64 {
    let exp = 1u64.checked_shl(previous_attempt_number).unwrap_or(u64::MAX);
    multiplier.saturating_mul(exp).min(max_ms)
}
