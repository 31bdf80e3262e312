//! # 解析器模块
//!
//! 把求解器的标准输出切分为行，并按 `LogLayout` 约定提取力记录和本征值记录。
//! 只识别检查需要的标记和固定偏移，不解析日志的完整结构。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: log, layout, forces, band_gap

pub mod band_gap;
pub mod forces;
pub mod layout;
pub mod log;

pub use layout::LogLayout;
pub use log::LogLines;
