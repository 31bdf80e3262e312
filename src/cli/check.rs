//! # check 子命令 CLI 定义
//!
//! 对已保存的求解器标准输出运行同样的检查，不启动任何进程。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use super::verify::VerifyOptions;
use clap::Args;
use std::path::PathBuf;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Captured solver standard output
    pub log_file: PathBuf,

    #[command(flatten)]
    pub verify: VerifyOptions,
}
