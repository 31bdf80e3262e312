//! # 求解器启动模块
//!
//! 组装命令、准备工作目录、同步运行求解器并捕获输出。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `utils/progress.rs` 显示等待提示
//! - 子模块: command, process, pseudo

pub mod command;
pub mod process;
pub mod pseudo;

pub use command::CommandSpec;
pub use process::run_captured;
pub use pseudo::{ensure_pseudo_link, LinkStatus, DEFAULT_PSEUDO_FILE};
