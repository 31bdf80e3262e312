//! # 数据模型模块
//!
//! 定义日志记录、容差阈值和判定结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: record, thresholds, verdict

pub mod record;
pub mod thresholds;
pub mod verdict;

pub use record::{EigenvalueRecord, ForceRecord};
pub use thresholds::{GapPolicy, Thresholds};
pub use verdict::{CheckKind, CheckOutcome, CheckStatus, Measurement, Verdict};
