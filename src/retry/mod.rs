//! 重试策略模块
//!
//! 三个互相独立的策略维度：
//! - [`StopPolicy`]：何时放弃
//! - [`WaitPolicy`]：两次调用之间等待多久
//! - [`RejectionPolicy`]：哪些结果需要重试

pub mod rejection;
pub mod stop;
pub mod wait;

pub use rejection::{FailurePredicate, RejectionPolicy, ResultPredicate};
pub use stop::StopPolicy;
pub use wait::WaitPolicy;
