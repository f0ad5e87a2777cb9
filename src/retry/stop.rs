use serde::{Deserialize, Serialize};

/// 默认最大调用次数
pub const DEFAULT_STOP_MAX_ATTEMPT_NUMBER: u32 = 5;
/// 默认最大累计耗时（毫秒）
pub const DEFAULT_STOP_MAX_DELAY_MS: u64 = 100;

/// 停止策略
///
/// 根据已完成的调用次数和自首次调用以来的耗时决定是否放弃重试。
/// 不支持组合多个条件，需要时由调用方自行选择其中一种。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StopPolicy {
    /// 永不停止
    #[default]
    #[serde(rename = "never_stop")]
    Never,

    /// 调用次数达到上限后停止
    #[serde(rename = "stop_after_attempt")]
    AfterAttempt {
        #[serde(default = "default_max_attempt_number")]
        max_attempt_number: u32,
    },

    /// 累计耗时达到上限后停止
    #[serde(rename = "stop_after_delay")]
    AfterDelay {
        #[serde(default = "default_max_delay_ms")]
        max_delay_ms: u64,
    },
}

fn default_max_attempt_number() -> u32 {
    DEFAULT_STOP_MAX_ATTEMPT_NUMBER
}

fn default_max_delay_ms() -> u64 {
    DEFAULT_STOP_MAX_DELAY_MS
}

impl StopPolicy {
    pub fn never() -> Self {
        StopPolicy::Never
    }

    pub fn after_attempt(max_attempt_number: u32) -> Self {
        StopPolicy::AfterAttempt { max_attempt_number }
    }

    pub fn after_delay(max_delay_ms: u64) -> Self {
        StopPolicy::AfterDelay { max_delay_ms }
    }

    /// 是否应当停止
    ///
    /// # 参数
    /// * `previous_attempt_number` - 刚完成的调用序号（从 1 开始）
    /// * `elapsed_ms` - 自首次调用开始以来的毫秒数
    pub fn should_stop(&self, previous_attempt_number: u32, elapsed_ms: u64) -> bool {
        match *self {
            StopPolicy::Never => false,
            StopPolicy::AfterAttempt { max_attempt_number } => {
                previous_attempt_number >= max_attempt_number
            }
            StopPolicy::AfterDelay { max_delay_ms } => elapsed_ms >= max_delay_ms,
        }
    }

    /// 配置文件中使用的名称
    pub fn name(&self) -> &'static str {
        match self {
            StopPolicy::Never => "never_stop",
            StopPolicy::AfterAttempt { .. } => "stop_after_attempt",
            StopPolicy::AfterDelay { .. } => "stop_after_delay",
        }
    }
}
